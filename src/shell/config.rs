//! Configuration from environment variables, with defaults matching the
//! service's fixed historical surface.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Runtime settings derived from environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    /// TCP port to listen on.
    pub port: u16,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var("PORT").ok(), env::var("UPLOAD_DIR").ok())
    }

    fn resolve(port: Option<String>, upload_dir: Option<String>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let upload_dir = upload_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));
        Ok(Self { port, upload_dir })
    }
}
