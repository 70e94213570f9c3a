//! CLI-specific progress handling for tube-dl
//!
//! Provides the stateful progress reporter fed by the download chunk loop.

use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar for CLI display with enhanced information
pub fn create_progress_bar(total_size: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {bytes_per_sec} ETA: {eta}")
            .expect("Failed to create progress style")
            .progress_chars("#>-")
    );
    pb
}

/// Stateful progress reporter for sequential downloads.
///
/// The bar is created lazily on the first chunk, sized to the stream's
/// total byte length. When the remaining byte count reaches zero the bar
/// is finished and all internal state resets, so one reporter can serve
/// every download of a batch in turn.
#[derive(Default)]
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    downloaded: u64,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback invoked synchronously after each downloaded chunk with
    /// (chunk length, bytes remaining, total byte length).
    pub fn on_chunk(&mut self, chunk_len: u64, bytes_remaining: u64, total_size: u64) {
        let bar = self
            .bar
            .get_or_insert_with(|| create_progress_bar(total_size));

        self.downloaded += chunk_len;
        bar.set_position(self.downloaded);

        if bytes_remaining == 0 {
            bar.finish_with_message("✅ Download completed!");
            self.bar = None;
            self.downloaded = 0;
        }
    }
}
