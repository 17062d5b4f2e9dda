//! Core library components.
//!
//! Configuration resolution, remote secret access, and loading secret text
//! into an environment.

pub mod access;
pub mod client;
pub mod config;
pub mod env;
pub mod resource;
