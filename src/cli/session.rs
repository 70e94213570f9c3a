//! Interactive session for tube-dl
//!
//! Owns the input source and the progress reporter, and drives the menu
//! loop, the single-video flow and the batch flow. All state lives in the
//! session value; there are no process-wide mutable singletons.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use tube_dl::{
    format_duration, format_publish_date, format_views, normalize_url, parse_batch_count,
    partition_urls, read_url_file, RemoteVideo, Result,
};

use crate::cli::progress::ProgressReporter;
use crate::cli::prompt::{confirm, prompt_line, MAX_INPUT_ATTEMPTS};

const BANNER: &str = r"
 _         _                   _ _
| |_ _   _| |__   ___       __| | |
| __| | | | '_ \ / _ \_____/ _` | |
| |_| |_| | |_) |  __/____| (_| | |
 \__|\__,_|_.__/ \___|     \__,_|_|
";

/// Outcome of presenting one loaded video to the user
enum Decision {
    /// Confirmed and written to disk
    Downloaded(PathBuf),
    /// User answered "n" to the metadata confirmation
    Declined,
    /// Input exhausted (EOF or too many invalid answers)
    Aborted,
}

/// One interactive run: current input source plus the reusable progress
/// reporter. Everything a flow needs is passed through here explicitly.
pub struct Session<R: BufRead> {
    input: R,
    reporter: ProgressReporter,
}

impl<R: BufRead> Session<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            reporter: ProgressReporter::new(),
        }
    }

    /// Menu REPL: dispatches until the user exits or input runs out
    pub async fn run_menu(&mut self) -> Result<()> {
        loop {
            clear_screen();
            println!("{BANNER}");
            println!("tube-dl v{} :: Download YouTube Videos\n", env!("TUBE_DL_VERSION"));
            println!("1. Download Single Video      2. Download Multiple Videos     3. Exit");

            let Some(choice) = prompt_line(&mut self.input, "Enter your choice: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.single_video_flow().await?,
                "2" => self.batch_flow().await?,
                "3" => return Ok(()),
                _ => println!("❌ Invalid choice. Please try again."),
            }
        }
    }

    /// Single-video flow: URL entry, metadata confirmation, download.
    ///
    /// A download-step error propagates out; everything before the
    /// confirmed download only ever re-prompts.
    async fn single_video_flow(&mut self) -> Result<()> {
        loop {
            let Some(video) = self.prompt_for_video().await? else {
                return Ok(());
            };

            match self.confirm_and_download(&video).await? {
                Decision::Downloaded(path) => {
                    println!("📁 Saved to: {}", path.display());
                    return Ok(());
                }
                // "n" means re-enter the URL from scratch
                Decision::Declined => continue,
                Decision::Aborted => return Ok(()),
            }
        }
    }

    /// Prompts for a URL until one validates and resolves, within the
    /// bounded attempt budget. `None` means give up and return to the menu.
    async fn prompt_for_video(&mut self) -> Result<Option<RemoteVideo>> {
        for _ in 0..MAX_INPUT_ATTEMPTS {
            let Some(raw) = prompt_line(&mut self.input, "Enter YouTube Video URL: ")? else {
                return Ok(None);
            };

            let url = match normalize_url(&raw) {
                Ok(url) => url,
                Err(err) => {
                    println!("❌ {err}. Please try again.");
                    continue;
                }
            };

            match RemoteVideo::load(&url).await {
                Ok(video) => return Ok(Some(video)),
                Err(err) => {
                    warn!("failed to load {url}: {err}");
                    println!("❌ Error loading video: {err}");
                }
            }
        }

        println!("❌ Too many failed attempts, returning to menu.");
        Ok(None)
    }

    /// Shows the metadata summary, asks for confirmation, then downloads
    /// the highest-resolution stream into the user-supplied directory.
    async fn confirm_and_download(&mut self, video: &RemoteVideo) -> Result<Decision> {
        println!("\n:: {} ::\n", video.title());

        let views = format_views(video.views());
        let length = format_duration(video.length_seconds());
        let published = format_publish_date(video.publish_date())
            .unwrap_or_else(|_| video.publish_date().to_string());
        println!("Views: {views}      Length: {length}      Published on {published}");

        match confirm(&mut self.input, "Is this correct? (y/n) ")? {
            Some(true) => {}
            Some(false) => return Ok(Decision::Declined),
            None => return Ok(Decision::Aborted),
        }

        let Some(dir) = prompt_line(&mut self.input, "Enter download path: ")? else {
            return Ok(Decision::Aborted);
        };

        let reporter = &mut self.reporter;
        let dest = video
            .download_to(Path::new(&dir), |chunk, remaining, total| {
                reporter.on_chunk(chunk, remaining, total)
            })
            .await?;

        Ok(Decision::Downloaded(dest))
    }

    /// Batch flow: collect URLs, then run the confirmation/download step
    /// per URL, isolating every per-URL failure.
    async fn batch_flow(&mut self) -> Result<()> {
        let Some(raw_urls) = self.collect_batch_urls()? else {
            return Ok(());
        };

        let (accepted, rejected) = partition_urls(&raw_urls);
        for bad in &rejected {
            println!("⚠️  Skipping invalid URL: {bad}");
        }
        if accepted.is_empty() {
            println!("Nothing to download.");
            return Ok(());
        }

        for url in accepted {
            let video = match RemoteVideo::load(&url).await {
                Ok(video) => video,
                Err(err) => {
                    warn!("failed to load {url}: {err}");
                    println!("❌ Error with video {url}: {err}");
                    continue;
                }
            };

            match self.confirm_and_download(&video).await {
                Ok(Decision::Downloaded(path)) => println!("📁 Saved to: {}", path.display()),
                Ok(Decision::Declined) => println!("⚠️  Skipping {}", video.title()),
                Ok(Decision::Aborted) => return Ok(()),
                // Unlike the single flow, a failed download moves on to
                // the next URL instead of ending the run
                Err(err) => println!("❌ Error with video {url}: {err}"),
            }
        }

        Ok(())
    }

    /// Collects raw batch entries from a file or interactive entry.
    ///
    /// `None` means the batch was cancelled: EOF, or an invalid count,
    /// which aborts outright with no retry.
    fn collect_batch_urls(&mut self) -> Result<Option<Vec<String>>> {
        let from_file = match confirm(
            &mut self.input,
            "Are the YouTube video links in a text file? (y/n) ",
        )? {
            Some(answer) => answer,
            None => return Ok(None),
        };

        if from_file {
            let Some(path) = prompt_line(&mut self.input, "Enter path to text file: ")? else {
                return Ok(None);
            };
            match read_url_file(Path::new(&path)) {
                Ok(lines) => Ok(Some(lines)),
                Err(err) => {
                    debug!("could not read {path}: {err}");
                    println!("❌ Invalid filepath. Please provide a valid filepath.");
                    Ok(Some(Vec::new()))
                }
            }
        } else {
            let Some(raw_count) = prompt_line(&mut self.input, "How many videos? ")? else {
                return Ok(None);
            };
            let count = match parse_batch_count(&raw_count) {
                Ok(count) => count,
                Err(err) => {
                    println!("❌ {err}. Batch cancelled.");
                    return Ok(None);
                }
            };

            let mut urls = Vec::with_capacity(count);
            for _ in 0..count {
                let Some(url) = prompt_line(&mut self.input, "Enter YouTube Video Link: ")? else {
                    break;
                };
                urls.push(url);
            }
            Ok(Some(urls))
        }
    }
}

/// Clears the terminal between menu redraws; failures are ignored
fn clear_screen() {
    let result = if cfg!(windows) {
        std::process::Command::new("cmd").args(["/C", "cls"]).status()
    } else {
        std::process::Command::new("clear").status()
    };

    if let Err(err) = result {
        debug!("could not clear terminal: {err}");
    }
}
