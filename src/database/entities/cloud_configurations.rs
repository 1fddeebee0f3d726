use std::fmt;

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

pub const NAME_MAX_CHARS: usize = 100;
pub const COLOR_MAX_CHARS: usize = 7;

pub const DEFAULT_CLOUD_COUNT: i32 = 20;
pub const DEFAULT_DAWN_COLOR: &str = "#ffffff";
pub const DEFAULT_SUNRISE_COLOR: &str = "#ffa500";
pub const DEFAULT_SUNSET_COLOR: &str = "#ffc0cb";
pub const DEFAULT_ANIMATION_SPEED: f64 = 0.5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cloud_configurations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub cloud_count: i32,
    pub dawn_color: String,
    pub sunrise_color: String,
    pub sunset_color: String,
    #[sea_orm(column_type = "Double")]
    pub animation_speed: f64,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// `created_at` is stamped here on insert and never written again afterwards.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            self.created_at = Set(Utc::now());
        } else if self.created_at.is_set() {
            self.created_at = ActiveValue::NotSet;
        }
        Ok(self)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
