//! Remote video handle for tube-dl
//!
//! Wraps the extraction library behind one seam: resolve a URL into an
//! opaque handle, expose the metadata the confirmation screen shows, and
//! stream the highest-resolution variant to disk chunk by chunk.

use std::path::{Path, PathBuf};

use log::debug;
use rusty_ytdl::stream::Stream;
use rusty_ytdl::{Video, VideoDetails, VideoOptions, VideoQuality, VideoSearchOptions};
use tokio::io::AsyncWriteExt;

use crate::core::error::Result;

/// A remote video resolved from a validated URL.
///
/// Stream selection is fixed policy: the highest-resolution variant that
/// carries both video and audio, chosen at construction time.
pub struct RemoteVideo {
    url: String,
    video: Video,
    details: VideoDetails,
}

impl RemoteVideo {
    /// Resolves a normalized URL into a video handle, fetching its metadata.
    pub async fn load(url: &str) -> Result<Self> {
        let options = VideoOptions {
            quality: VideoQuality::Highest,
            filter: VideoSearchOptions::VideoAudio,
            ..Default::default()
        };

        let video = Video::new_with_options(url, options)?;
        let info = video.get_basic_info().await?;
        debug!("resolved '{}' ({})", info.video_details.title, url);

        Ok(Self {
            url: url.to_string(),
            video,
            details: info.video_details,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    /// Video length in seconds
    pub fn length_seconds(&self) -> u64 {
        self.details.length_seconds.parse().unwrap_or(0)
    }

    /// Total view count
    pub fn views(&self) -> u64 {
        self.details.view_count.parse().unwrap_or(0)
    }

    /// Publish date as reported by the extractor (ISO-8601 date or timestamp)
    pub fn publish_date(&self) -> &str {
        &self.details.publish_date
    }

    /// Downloads the selected stream into `dir`, named `{title}.mp4`.
    ///
    /// `on_chunk` is invoked synchronously after each chunk is written with
    /// (chunk length, bytes remaining, total byte length). Returns the path
    /// of the written file.
    pub async fn download_to(
        &self,
        dir: &Path,
        mut on_chunk: impl FnMut(u64, u64, u64),
    ) -> Result<PathBuf> {
        let stream = self.video.stream().await?;
        let total_size = stream.content_length() as u64;

        tokio::fs::create_dir_all(dir).await?;
        // Filename is derived from the title verbatim; titles containing
        // path separators surface as an I/O error.
        let dest = dir.join(output_filename(self.title()));
        let mut file = tokio::fs::File::create(&dest).await?;

        let mut downloaded = 0u64;
        while let Some(chunk) = stream.chunk().await? {
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
            let remaining = total_size.saturating_sub(downloaded);
            on_chunk(chunk.len() as u64, remaining, total_size);
        }

        file.flush().await?;
        debug!("wrote {} bytes to {}", downloaded, dest.display());
        Ok(dest)
    }
}

/// Generates the output filename for a video title (fixed mp4 container)
pub fn output_filename(title: &str) -> String {
    format!("{title}.mp4")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("Some Video"), "Some Video.mp4");
        assert_eq!(output_filename(""), ".mp4");
        // Titles are taken verbatim, separators and all
        assert_eq!(output_filename("a/b"), "a/b.mp4");
    }
}
