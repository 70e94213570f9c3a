//! Command-line interface modules for tube-dl
//!
//! Everything that talks to the terminal lives here; the library side
//! stays free of prompts and progress bars.

pub mod progress;
pub mod prompt;
pub mod session;
