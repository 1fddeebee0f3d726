pub mod config_store;

pub use config_store::{
    CloudConfiguration, CloudConfigurationChanges, ConfigStore, NewCloudConfiguration,
    SqlConfigStore,
};
