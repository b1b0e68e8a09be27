pub mod catalog;
pub mod dashboard;
