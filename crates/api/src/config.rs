//! Process configuration.
//!
//! Everything has a working default, so the service starts with no
//! environment at all. Overrides:
//! - `INVOICEGEN_ADDR`: listen address (default `0.0.0.0:5000`)
//! - `INVOICEGEN_SIGNATURE_PATH`: signature PNG (default `assets/vidwat_sign.png`)

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

use invoicegen_render::Letterhead;

pub const DEFAULT_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_SIGNATURE_PATH: &str = "assets/vidwat_sign.png";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Optional signature image; a missing file just leaves the signature out.
    pub signature_path: PathBuf,
    pub letterhead: Letterhead,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            signature_path: PathBuf::from(DEFAULT_SIGNATURE_PATH),
            letterhead: Letterhead::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        match lookup("INVOICEGEN_ADDR") {
            Some(addr) => {
                config.bind_addr = addr
                    .trim()
                    .parse()
                    .with_context(|| format!("INVOICEGEN_ADDR is not a socket address: {addr:?}"))?;
            }
            None => tracing::debug!("INVOICEGEN_ADDR not set; using {DEFAULT_ADDR}"),
        }

        if let Some(path) = lookup("INVOICEGEN_SIGNATURE_PATH").filter(|p| !p.trim().is_empty()) {
            config.signature_path = PathBuf::from(path);
        }

        Ok(config)
    }
}
