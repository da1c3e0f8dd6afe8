//! Core library components.
//!
//! This module contains the transformation and versioning engine: key maps,
//! secret transformation, tree fetching, fingerprinting and destination
//! merging, plus the store abstraction they run against.

pub mod config;
pub mod constants;
pub mod domain;
pub mod files;
pub mod keymap;
pub mod merge;
pub mod resource;
pub mod store;
pub mod transform;
pub mod tree;
pub mod types;
pub mod walk;
