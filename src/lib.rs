//! Minimal JSON playlist server: scan a directory tree for MP4 files and serve
//! a JW Player-compatible playlist over HTTP.

pub mod cli;
pub mod config;
pub mod http;
pub mod media;
