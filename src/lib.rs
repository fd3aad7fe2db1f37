//! glTF Sample Assets Fetcher Library
//!
//! This library provides the core functionality for the `gltfetch` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;

#[cfg(test)]
mod testutil;
