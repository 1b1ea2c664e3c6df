// API request/response models (poem-openapi Objects)
pub mod clock_in;
pub mod common;
pub mod items;
