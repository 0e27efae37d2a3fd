use std::path::PathBuf;

use learnflow_core::presentation::Variant;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8001";
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 900;

/// Resolved runtime configuration for the planner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub variant: Variant,
    pub download_dir: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
}

/// Raw, unvalidated settings as collected from flags and environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub variant: Option<String>,
    pub download_dir: Option<PathBuf>,
    pub window_width: Option<u32>,
    pub window_height: Option<u32>,
}

impl AppConfig {
    /// Validate overrides and fill in defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unparsable or non-HTTP base URL, an
    /// unknown variant, or a download directory that does not exist.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let api_base_url =
            parse_base_url(overrides.api_base_url.as_deref().unwrap_or(DEFAULT_API_URL))?;
        let variant = match overrides.variant.as_deref() {
            Some(raw) => raw.parse()?,
            None => Variant::default(),
        };
        let download_dir = match overrides.download_dir {
            Some(dir) if dir.is_dir() => dir,
            Some(dir) => return Err(ConfigError::MissingDownloadDir(dir)),
            None => default_download_dir(),
        };

        Ok(Self {
            api_base_url,
            variant,
            download_dir,
            window_width: overrides.window_width.unwrap_or(DEFAULT_WINDOW_WIDTH),
            window_height: overrides.window_height.unwrap_or(DEFAULT_WINDOW_HEIGHT),
        })
    }

    /// Short `host:port` label used in user-facing messages.
    #[must_use]
    pub fn backend_label(&self) -> String {
        let host = self.api_base_url.host_str().unwrap_or("localhost");
        match self.api_base_url.port_or_known_default() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        raw: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .filter(|dir| dir.is_dir())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
