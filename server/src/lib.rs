// SPDX-License-Identifier: MIT OR Apache-2.0

//! tengen Server - HTTP front end for the shared game
//!
//! This crate provides:
//! - JSON API routes for state, moves, resets and advisor moves
//! - Static file serving for the browser client
//! - TOML configuration loading
//! - A health check endpoint

#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod health;
pub mod routes;

pub use config::{load_config, ConfigSource, ServerConfig};
pub use health::HealthManager;
pub use routes::routes;
