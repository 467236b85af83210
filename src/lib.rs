//! Spotify Artist Lookup CLI Library
//!
//! This library provides functionality for looking up a single artist on Spotify
//! and querying their top tracks, genres and the markets their most popular track
//! is available in. It includes modules for API communication, configuration
//! management, the interactive session and various small utilities.
//!
//! # Modules
//!
//! - `config` - Configuration management and environment variables
//! - `errors` - Error kinds returned by the library
//! - `session` - Interactive command loop for one resolved artist
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use artistcli::{config, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> artistcli::Res<()> {
//!     config::load_env();
//!     let client = SpotifyClient::new();
//!     let token = client.get_token(&config::credentials()?).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the binary using a boxed
/// dynamic error trait object. Library operations return
/// [`errors::Result`] instead, which converts into this alias with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching access token...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1 right after printing. Only meant
/// for fatal errors where the session cannot continue.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
