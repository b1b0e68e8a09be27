//! Core library exports for the catalog dashboard.
//!
//! The `data` feature provides the catalog itself: domain types, the seeded
//! store, the query codec and engine, and the client controls state machine.
//! The `server` feature adds the Actix-web application on top.

#[cfg(feature = "data")]
pub mod controls;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
