// src/lib.rs
// Pattern radar: an in-memory catalog of architecture patterns classified
// by ring and quadrant, served over HTTP

pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod web;

pub use error::{PatternError, Result};
pub use model::{Pattern, Tag};
pub use store::PatternStore;
