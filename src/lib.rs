//! # tube-dl
//!
//! Library crate backing the tube-dl interactive YouTube downloader.
//!
//! The heavy lifting — manifest extraction, stream selection, byte
//! transfer — is delegated to the `rusty_ytdl` extraction library. What
//! lives here is the thin layer around it: URL normalization, metadata
//! display formatting, batch-list handling, and a single seam
//! ([`RemoteVideo`]) through which the binary talks to the extractor.
//!
//! ## Example
//!
//! ```no_run
//! use tube_dl::{normalize_url, RemoteVideo};
//!
//! # async fn example() -> tube_dl::Result<()> {
//! let url = normalize_url("youtube.com/watch?v=dQw4w9WgXcQ")?;
//! let video = RemoteVideo::load(&url).await?;
//! println!("{}", video.title());
//! video.download_to(std::path::Path::new("."), |_, _, _| {}).await?;
//! # Ok(())
//! # }
//! ```

mod core;

pub use crate::core::batch::{parse_batch_count, partition_urls, read_url_file};
pub use crate::core::error::{Error, Result};
pub use crate::core::format::{format_duration, format_publish_date, format_views};
pub use crate::core::url::normalize_url;
pub use crate::core::video::{output_filename, RemoteVideo};
