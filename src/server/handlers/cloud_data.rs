use axum::response::Json;
use serde::Serialize;

use crate::database::entities::cloud_configurations::{
    DEFAULT_ANIMATION_SPEED, DEFAULT_CLOUD_COUNT, DEFAULT_DAWN_COLOR, DEFAULT_SUNRISE_COLOR,
    DEFAULT_SUNSET_COLOR,
};

/// Default animation parameters handed to the browser. These are constants and
/// are not read from the configuration store.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CloudData {
    pub cloud_count: i32,
    pub colors: CloudColors,
    pub animation_speed: f64,
    pub scroll_sensitivity: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CloudColors {
    pub dawn: &'static str,
    pub sunrise: &'static str,
    pub sunset: &'static str,
}

pub const DEFAULT_CLOUD_DATA: CloudData = CloudData {
    cloud_count: DEFAULT_CLOUD_COUNT,
    colors: CloudColors {
        dawn: DEFAULT_DAWN_COLOR,
        sunrise: DEFAULT_SUNRISE_COLOR,
        sunset: DEFAULT_SUNSET_COLOR,
    },
    animation_speed: DEFAULT_ANIMATION_SPEED,
    scroll_sensitivity: 1.0,
};

pub async fn get_cloud_data() -> Json<CloudData> {
    Json(DEFAULT_CLOUD_DATA)
}
