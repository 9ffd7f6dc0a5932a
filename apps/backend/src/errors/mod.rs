//! Error handling for the problems backend.

pub mod error_code;
pub mod store;

pub use error_code::ErrorCode;
pub use store::StoreError;
