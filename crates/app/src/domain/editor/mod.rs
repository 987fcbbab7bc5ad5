//! Order Line-Item Editing

pub mod errors;
pub mod service;

pub use errors::EditorServiceError;
pub use service::*;
