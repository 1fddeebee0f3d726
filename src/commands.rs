//! Command-line operations on stored cloud configurations.

use anyhow::Result;

use crate::database::setup_database;
use crate::server::open_database;
use crate::services::{CloudConfiguration, ConfigStore, NewCloudConfiguration, SqlConfigStore};

/// Open the database at `database` and bring its schema up to date.
pub async fn open_store(database: &str) -> Result<SqlConfigStore> {
    let db = open_database(database).await?;
    setup_database(&db).await?;
    Ok(SqlConfigStore::new(db))
}

pub async fn create_configuration(
    database: &str,
    fields: NewCloudConfiguration,
) -> Result<CloudConfiguration> {
    let store = open_store(database).await?;
    let record = store.create(fields).await?;
    Ok(record)
}

/// One line per stored configuration, oldest first.
pub async fn list_configurations(database: &str) -> Result<Vec<String>> {
    let store = open_store(database).await?;
    let lines = store
        .list()
        .await?
        .iter()
        .map(|record| format_configuration(&store, record))
        .collect();
    Ok(lines)
}

pub fn format_configuration(store: &dyn ConfigStore, record: &CloudConfiguration) -> String {
    format!(
        "{:>4}  {:<30}  clouds={} speed={} created={}",
        record.id,
        store.render(record),
        record.cloud_count,
        record.animation_speed,
        record.created_at.to_rfc3339()
    )
}
