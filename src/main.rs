//! # tube-dl CLI
//!
//! Interactive terminal front end for the tube-dl library.
//! Presents a numeric menu (single download, batch download, exit) and
//! walks the user through URL entry, metadata confirmation and download.

use log::error;

mod cli;

use cli::session::Session;

#[tokio::main]
async fn main() {
    // Initialize logging to stderr; stdout belongs to the interactive UI
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run().await {
        error!("❌ Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> tube_dl::Result<()> {
    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock());
    session.run_menu().await
}
