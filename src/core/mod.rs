//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Concatenation result model
//! - Delimiter-block rendering
//! - Path normalization utilities
//! - Best-effort text reading

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
