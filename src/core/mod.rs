//! Core library modules for tube-dl
//!
//! This module contains the internal implementation details of the tube-dl library.

pub mod batch;
pub mod error;
pub mod format;
pub mod url;
pub mod video;
