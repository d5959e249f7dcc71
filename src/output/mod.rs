//! Output module - Result delivery
//!
//! Provides:
//! - sink: file / clipboard / stdout selection and delivery
//! - clipboard: system clipboard integration

pub mod clipboard;
pub mod sink;
