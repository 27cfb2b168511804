//! Runtime configuration read from the environment (and `.env`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 6000;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const LOG_FILE_NAME: &str = "logs.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl StorageBackend {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "memory" | "mem" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    pub storage: StorageBackend,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Directory for rolling log files; stdout only when `None`.
    pub log_dir: Option<PathBuf>,
    pub seed_sample_data: bool,
    /// Problems found while reading the environment, logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from(DEFAULT_DATA_DIR);
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_file: data_dir.join(LOG_FILE_NAME),
            data_dir,
            storage: StorageBackend::File,
            log_level: "info".into(),
            log_dir: None,
            seed_sample_data: false,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = AppConfig::default();

        if let Some(raw) = get("PORT") {
            match raw.parse::<u16>() {
                Ok(port) => cfg.port = port,
                Err(_) => cfg
                    .warnings
                    .push(format!("Ignoring invalid PORT '{raw}', using {DEFAULT_PORT}")),
            }
        }

        if let Some(raw) = get("LOGDESK_BIND_ADDR") {
            match raw.parse::<IpAddr>() {
                Ok(addr) => cfg.bind_addr = addr,
                Err(_) => cfg
                    .warnings
                    .push(format!("Ignoring invalid LOGDESK_BIND_ADDR '{raw}'")),
            }
        }

        if let Some(dir) = get("LOGDESK_DATA_DIR") {
            cfg.data_dir = PathBuf::from(dir);
        }
        cfg.log_file = match get("LOGDESK_LOG_FILE") {
            Some(file) => PathBuf::from(file),
            None => cfg.data_dir.join(LOG_FILE_NAME),
        };

        if let Some(raw) = get("LOGDESK_STORAGE") {
            match StorageBackend::from_code(&raw) {
                Some(backend) => cfg.storage = backend,
                None => cfg
                    .warnings
                    .push(format!("Unknown LOGDESK_STORAGE '{raw}', using file storage")),
            }
        }

        if let Some(level) = get("LOGDESK_LOG_LEVEL") {
            cfg.log_level = level;
        }
        cfg.log_dir = get("LOGDESK_LOG_DIR").map(PathBuf::from);

        cfg.seed_sample_data = get("LOGDESK_SEED_SAMPLE_DATA")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        cfg
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
