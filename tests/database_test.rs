//! Database functionality tests
//!
//! Tests for migrations, the cloud configuration entity and its save hooks

use anyhow::Result;
use chrono::{Duration, Utc};
use cloudscape::database::entities::cloud_configurations::{
    self, DEFAULT_ANIMATION_SPEED, DEFAULT_CLOUD_COUNT, DEFAULT_DAWN_COLOR, DEFAULT_SUNRISE_COLOR,
    DEFAULT_SUNSET_COLOR,
};
use cloudscape::database::setup_database;
use cloudscape::server::handlers::cloud_data::DEFAULT_CLOUD_DATA;
use cloudscape::server::{migrate_database, MigrateDirection};
use cloudscape::services::{ConfigStore, NewCloudConfiguration, SqlConfigStore};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Set};
use tempfile::NamedTempFile;

/// Create a test database connection with migrations
async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let configurations = cloud_configurations::Entity::find().all(&db).await?;
    assert_eq!(configurations.len(), 0);

    // Running the migrator twice is a no-op
    setup_database(&db).await?;

    Ok(())
}

#[tokio::test]
async fn test_column_defaults_match_entity_defaults() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    db.execute_unprepared(
        "INSERT INTO cloud_configurations (name, created_at) \
         VALUES ('Raw row', '2026-01-01T00:00:00+00:00')",
    )
    .await?;

    let rows = cloud_configurations::Entity::find().all(&db).await?;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.cloud_count, DEFAULT_CLOUD_COUNT);
    assert_eq!(row.dawn_color, DEFAULT_DAWN_COLOR);
    assert_eq!(row.sunrise_color, DEFAULT_SUNRISE_COLOR);
    assert_eq!(row.sunset_color, DEFAULT_SUNSET_COLOR);
    assert_eq!(row.animation_speed, DEFAULT_ANIMATION_SPEED);

    // The published cloud data uses the same defaults without reading the table
    assert_eq!(DEFAULT_CLOUD_DATA.cloud_count, row.cloud_count);
    assert_eq!(DEFAULT_CLOUD_DATA.colors.dawn, row.dawn_color);
    assert_eq!(DEFAULT_CLOUD_DATA.colors.sunrise, row.sunrise_color);
    assert_eq!(DEFAULT_CLOUD_DATA.colors.sunset, row.sunset_color);
    assert_eq!(DEFAULT_CLOUD_DATA.animation_speed, row.animation_speed);

    Ok(())
}

#[tokio::test]
async fn test_insert_stamps_created_at() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let before = Utc::now() - Duration::seconds(1);
    let stale = Utc::now() - Duration::days(30);
    let record = cloud_configurations::ActiveModel {
        name: Set("Direct insert".to_string()),
        cloud_count: Set(10),
        dawn_color: Set("#ffffff".to_string()),
        sunrise_color: Set("#ffa500".to_string()),
        sunset_color: Set("#ffc0cb".to_string()),
        animation_speed: Set(0.5),
        // Overwritten by the store
        created_at: Set(stale),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    assert!(record.created_at >= before);
    assert_ne!(record.created_at, stale);

    Ok(())
}

#[tokio::test]
async fn test_update_cannot_rewrite_created_at() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let store = SqlConfigStore::new(db.clone());

    let created = store
        .create(NewCloudConfiguration::named("Sunrise only"))
        .await?;

    let mut active: cloud_configurations::ActiveModel = created.clone().into();
    active.name = Set("Renamed".to_string());
    active.created_at = Set(Utc::now() + Duration::days(365));
    let updated = active.update(&db).await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.created_at, created.created_at);

    let reloaded = cloud_configurations::Entity::find_by_id(created.id)
        .one(&db)
        .await?
        .expect("Configuration should exist");
    assert_eq!(reloaded.created_at, created.created_at);

    Ok(())
}

#[tokio::test]
async fn test_configuration_crud_operations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let store = SqlConfigStore::new(db.clone());

    let created = store.create(NewCloudConfiguration::default()).await?;
    assert_eq!(created.cloud_count, 20);
    assert_eq!(created.dawn_color, "#ffffff");
    assert_eq!(created.sunrise_color, "#ffa500");
    assert_eq!(created.sunset_color, "#ffc0cb");
    assert_eq!(created.animation_speed, 0.5);

    let found = store.get(created.id).await?.expect("Configuration should exist");
    assert_eq!(found, created);

    assert!(store.delete(created.id).await?);
    assert!(store.get(created.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_migrate_database_directions() -> Result<()> {
    let temp_file = NamedTempFile::new()?;
    let path = temp_file.path().display().to_string();

    migrate_database(&path, MigrateDirection::Up).await?;
    {
        let db = Database::connect(format!("sqlite:{}", path)).await?;
        let store = SqlConfigStore::new(db);
        store.create(NewCloudConfiguration::named("Before fresh")).await?;
        assert_eq!(store.list().await?.len(), 1);
    }

    migrate_database(&path, MigrateDirection::Fresh).await?;

    let db = Database::connect(format!("sqlite:{}", path)).await?;
    let configurations = cloud_configurations::Entity::find().all(&db).await?;
    assert!(configurations.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_fresh_recreates_dropped_schema() -> Result<()> {
    let temp_file = NamedTempFile::new()?;
    let path = temp_file.path().display().to_string();

    migrate_database(&path, MigrateDirection::Up).await?;
    migrate_database(&path, MigrateDirection::Down).await?;
    {
        let db = Database::connect(format!("sqlite:{}", path)).await?;
        assert!(cloud_configurations::Entity::find().all(&db).await.is_err());
    }

    migrate_database(&path, MigrateDirection::Fresh).await?;

    let db = Database::connect(format!("sqlite:{}", path)).await?;
    let store = SqlConfigStore::new(db);
    let record = store.create(NewCloudConfiguration::named("After fresh")).await?;
    assert_eq!(store.list().await?, vec![record]);

    Ok(())
}
