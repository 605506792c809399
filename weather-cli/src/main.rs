//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive querying and configuration
//! - Human-friendly output formatting

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

mod cli;
mod logging;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before logging so RUST_LOG may come from .env.
    let dotenv = dotenvy::dotenv();

    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);

    if let Some(problem) = dotenv_problem(&dotenv) {
        warn!("ignoring .env file: {problem}");
    }

    cmd.run().await
}

/// A `.env` load failure worth reporting. A missing file is not one.
fn dotenv_problem(result: &Result<PathBuf, dotenvy::Error>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(e.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_env_file_is_silent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = dotenvy::from_path(dir.path().join(".env")).map(|()| dir.path().to_path_buf());

        assert_eq!(dotenv_problem(&result), None);
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        fs::write(&path, "KEY=\"unterminated\n").expect("write");

        let result = dotenvy::from_path(&path).map(|()| path.clone());

        assert!(dotenv_problem(&result).is_some());
    }

    #[test]
    fn loaded_env_file_is_silent() {
        assert_eq!(dotenv_problem(&Ok(PathBuf::from(".env"))), None);
    }
}
