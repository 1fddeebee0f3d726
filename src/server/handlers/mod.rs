pub mod cloud_data;
pub mod health;
pub mod index;
