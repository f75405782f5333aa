//! Configuration, error, and data-model types shared across the crate.

pub mod config;
pub mod error;
pub mod models;
