//! Service config loader (strict parsing).
//!
//! Resolution order:
//! - `TALLY_CONFIG` names the file; it must exist and parse.
//! - Otherwise `tally.yaml` in the working directory, if present.
//! - Otherwise built-in defaults.
//!
//! `PORT` overrides the port of `server.listen` in every case.

pub mod schema;

use std::fs;
use std::path::Path;

use tally_core::error::{Result, TallyError};

pub use schema::{ServerSection, ServiceSection, TallyConfig};

pub const CONFIG_ENV: &str = "TALLY_CONFIG";
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_CONFIG_PATH: &str = "tally.yaml";

/// Load config from the environment (see module docs).
pub fn load() -> Result<TallyConfig> {
    let mut cfg = match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        Err(_) => TallyConfig::default(),
    };

    if let Ok(port) = std::env::var(PORT_ENV) {
        apply_port_override(&mut cfg, &port)?;
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<TallyConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TallyError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TallyConfig> {
    let cfg: TallyConfig = serde_yaml::from_str(s)
        .map_err(|e| TallyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Replace the port of `server.listen`, keeping its host.
pub fn apply_port_override(cfg: &mut TallyConfig, port: &str) -> Result<()> {
    let port: u16 = port
        .trim()
        .parse()
        .map_err(|e| TallyError::BadRequest(format!("{PORT_ENV} must be a port number: {e}")))?;
    let mut addr = cfg.server.listen_addr()?;
    addr.set_port(port);
    cfg.server.listen = addr.to_string();
    Ok(())
}
