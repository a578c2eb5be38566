//! A movie catalog served over HTTP, stored in a JSON file, guarded by
//! Basic auth with regular and administrator users.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod model;
pub mod routes;

pub use error::{Error, Result};
