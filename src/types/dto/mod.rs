// API request and response models
pub mod admin;
pub mod common;
pub mod items;
