//! Configuration management for the artist lookup CLI.
//!
//! The only configuration this application has are the Spotify application
//! credentials. They are read from the process environment, which may be
//! populated from a `.env` file beforehand (see [`load_env`]).
//!
//! # Environment Variables
//!
//! - `CLIENT_ID` - Client id of the registered Spotify application
//! - `CLIENT_SECRET` - Client secret of the registered Spotify application

use std::{env, path::PathBuf};

use crate::{
    errors::{Error, Result},
    types::Credentials,
};

pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory under
/// `artistcli/.env` first, then in the current working directory. Variables
/// already present in the environment are never overwritten, and a missing
/// file is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/artistcli/.env`
/// - macOS: `~/Library/Application Support/artistcli/.env`
/// - Windows: `%LOCALAPPDATA%/artistcli/.env`
pub fn load_env() {
    let path = env_path();
    match dotenv::from_path(&path) {
        Ok(()) => log::debug!("loaded environment from {}", path.display()),
        Err(e) => log::debug!("no environment file at {}: {}", path.display(), e),
    }

    if let Ok(local) = dotenv::dotenv() {
        log::debug!("loaded environment from {}", local.display());
    }
}

/// Reads the Spotify application credentials from the process environment.
///
/// # Errors
///
/// Returns [`Error::MissingCredential`] naming the first variable that is unset
/// or empty.
pub fn credentials() -> Result<Credentials> {
    credentials_from(|key| env::var(key).ok())
}

/// Builds credentials from an arbitrary variable lookup.
///
/// Empty values are treated the same as missing ones.
pub fn credentials_from<F>(lookup: F) -> Result<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &'static str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .ok_or(Error::MissingCredential(key))
    };

    Ok(Credentials::new(read(CLIENT_ID_VAR)?, read(CLIENT_SECRET_VAR)?))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("artistcli/.env");
    path
}
