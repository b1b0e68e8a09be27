//! Parsing of user-supplied input (URL query strings and HTML forms).

pub mod auth;
pub mod catalog;
