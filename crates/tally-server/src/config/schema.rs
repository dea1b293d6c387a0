use std::net::SocketAddr;

use serde::Deserialize;
use tally_core::error::{Result, TallyError};
use tally_core::resource::DEFAULT_MAX_NAME_LEN;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TallyConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub service: ServiceSection,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            service: ServiceSection::default(),
        }
    }
}

impl TallyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.service.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
            max_name_len: default_max_name_len(),
            log_level: default_log_level(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1024..=1_048_576).contains(&self.max_body_bytes) {
            return Err(TallyError::BadRequest(
                "server.max_body_bytes must be between 1024 and 1048576".into(),
            ));
        }
        if !(1..=255).contains(&self.max_name_len) {
            return Err(TallyError::BadRequest(
                "server.max_name_len must be between 1 and 255".into(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(TallyError::BadRequest("server.log_level must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TallyError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}
fn default_max_name_len() -> usize {
    DEFAULT_MAX_NAME_LEN
}
fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

impl ServiceSection {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TallyError::BadRequest("service.name must not be empty".into()));
        }
        Ok(())
    }
}

fn default_service_name() -> String {
    "Tally REST API Service".into()
}
