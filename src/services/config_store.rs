use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::database::entities::cloud_configurations::{
    self, COLOR_MAX_CHARS, DEFAULT_ANIMATION_SPEED, DEFAULT_CLOUD_COUNT, DEFAULT_DAWN_COLOR,
    DEFAULT_SUNRISE_COLOR, DEFAULT_SUNSET_COLOR, NAME_MAX_CHARS,
};
use crate::errors::{CloudError, CloudResult};

pub type CloudConfiguration = cloud_configurations::Model;

/// Fields supplied when creating a configuration. Anything left unset takes the
/// column default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCloudConfiguration {
    pub name: Option<String>,
    pub cloud_count: Option<i32>,
    pub dawn_color: Option<String>,
    pub sunrise_color: Option<String>,
    pub sunset_color: Option<String>,
    pub animation_speed: Option<f64>,
}

impl NewCloudConfiguration {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Partial update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudConfigurationChanges {
    pub name: Option<String>,
    pub cloud_count: Option<i32>,
    pub dawn_color: Option<String>,
    pub sunrise_color: Option<String>,
    pub sunset_color: Option<String>,
    pub animation_speed: Option<f64>,
}

#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn create(&self, fields: NewCloudConfiguration) -> CloudResult<CloudConfiguration>;

    async fn get(&self, id: i32) -> CloudResult<Option<CloudConfiguration>>;

    async fn list(&self) -> CloudResult<Vec<CloudConfiguration>>;

    async fn update(
        &self,
        id: i32,
        changes: CloudConfigurationChanges,
    ) -> CloudResult<CloudConfiguration>;

    /// Returns whether a row was actually removed.
    async fn delete(&self, id: i32) -> CloudResult<bool>;

    /// Human-readable identifier of a record.
    fn render(&self, record: &CloudConfiguration) -> String {
        record.to_string()
    }
}

fn validate_length(field: &str, value: &str, max_chars: usize) -> CloudResult<()> {
    if value.chars().count() > max_chars {
        return Err(CloudError::Validation(format!(
            "{} is too long (max {} characters)",
            field, max_chars
        )));
    }
    Ok(())
}

fn validate_name(name: &str) -> CloudResult<()> {
    validate_length("name", name, NAME_MAX_CHARS)
}

fn validate_color(field: &str, color: &str) -> CloudResult<()> {
    validate_length(field, color, COLOR_MAX_CHARS)
}

/// [`ConfigStore`] backed by a sea-orm connection.
#[derive(Clone)]
pub struct SqlConfigStore {
    db: DatabaseConnection,
}

impl SqlConfigStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConfigStore for SqlConfigStore {
    async fn create(&self, fields: NewCloudConfiguration) -> CloudResult<CloudConfiguration> {
        let name = fields.name.unwrap_or_default();
        let dawn_color = fields
            .dawn_color
            .unwrap_or_else(|| DEFAULT_DAWN_COLOR.to_string());
        let sunrise_color = fields
            .sunrise_color
            .unwrap_or_else(|| DEFAULT_SUNRISE_COLOR.to_string());
        let sunset_color = fields
            .sunset_color
            .unwrap_or_else(|| DEFAULT_SUNSET_COLOR.to_string());

        validate_name(&name)?;
        validate_color("dawn_color", &dawn_color)?;
        validate_color("sunrise_color", &sunrise_color)?;
        validate_color("sunset_color", &sunset_color)?;

        // created_at is stamped by the entity's save hook
        let record = cloud_configurations::ActiveModel {
            name: Set(name),
            cloud_count: Set(fields.cloud_count.unwrap_or(DEFAULT_CLOUD_COUNT)),
            dawn_color: Set(dawn_color),
            sunrise_color: Set(sunrise_color),
            sunset_color: Set(sunset_color),
            animation_speed: Set(fields.animation_speed.unwrap_or(DEFAULT_ANIMATION_SPEED)),
            ..Default::default()
        };

        let record = record.insert(&self.db).await?;
        info!("Created cloud configuration {} ({})", record.id, record);

        Ok(record)
    }

    async fn get(&self, id: i32) -> CloudResult<Option<CloudConfiguration>> {
        let record = cloud_configurations::Entity::find_by_id(id)
            .one(&self.db)
            .await?;
        Ok(record)
    }

    async fn list(&self) -> CloudResult<Vec<CloudConfiguration>> {
        let records = cloud_configurations::Entity::find()
            .order_by_asc(cloud_configurations::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Listed {} cloud configurations", records.len());
        Ok(records)
    }

    async fn update(
        &self,
        id: i32,
        changes: CloudConfigurationChanges,
    ) -> CloudResult<CloudConfiguration> {
        let record = self.get(id).await?.ok_or(CloudError::NotFound(id))?;
        let mut record: cloud_configurations::ActiveModel = record.into();

        if let Some(name) = changes.name {
            validate_name(&name)?;
            record.name = Set(name);
        }
        if let Some(cloud_count) = changes.cloud_count {
            record.cloud_count = Set(cloud_count);
        }
        if let Some(dawn_color) = changes.dawn_color {
            validate_color("dawn_color", &dawn_color)?;
            record.dawn_color = Set(dawn_color);
        }
        if let Some(sunrise_color) = changes.sunrise_color {
            validate_color("sunrise_color", &sunrise_color)?;
            record.sunrise_color = Set(sunrise_color);
        }
        if let Some(sunset_color) = changes.sunset_color {
            validate_color("sunset_color", &sunset_color)?;
            record.sunset_color = Set(sunset_color);
        }
        if let Some(animation_speed) = changes.animation_speed {
            record.animation_speed = Set(animation_speed);
        }

        let record = record.update(&self.db).await?;
        info!("Updated cloud configuration {}", record.id);

        Ok(record)
    }

    async fn delete(&self, id: i32) -> CloudResult<bool> {
        let result = cloud_configurations::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
