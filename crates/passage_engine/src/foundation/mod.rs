//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the library:
//! - Math types and operations
//! - Time management
//! - Logging utilities

pub mod logging;
pub mod math;
pub mod time;
