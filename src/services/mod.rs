pub mod catalog;
pub mod dashboard;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
