pub mod cloud_configurations;

pub use cloud_configurations::*;
