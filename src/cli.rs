use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "uplaylist",
    about = "Minimal JSON playlist server: `uplaylist 8080 /mnt/movies /movies` and it works",
    long_about = None,
    version = env!("GIT_VERSION"),
    arg_required_else_help = true,
)]
pub struct Args {
    /// HTTP port to listen on
    pub port: u16,

    /// Directory to scan recursively for .mp4 files
    pub root: PathBuf,

    /// Public URL prefix that replaces the scan root in emitted playlist URLs
    /// (the path your reverse proxy serves the files under, e.g. /movies)
    pub prefix: String,
}
