// Errors layer - Error type definitions
pub mod api;
pub mod internal;

pub use api::ItemsError;
pub use internal::InternalError;
