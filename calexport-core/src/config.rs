//! Export configuration.
//!
//! Everything environment-specific (the host serving `.ics` files, the
//! timezone used for floating times) lives here and is handed to the
//! builders explicitly.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use ::config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::datetime::DateTimeFormatter;
use crate::error::{CalExportError, CalExportResult};

static DEFAULT_WEBCAL_HOST: &str = "charlee.ai";

/// Prefix for environment overrides, e.g. `CALEXPORT_WEBCAL_HOST`.
static ENV_PREFIX: &str = "CALEXPORT";

fn default_webcal_host() -> String {
    DEFAULT_WEBCAL_HOST.to_string()
}

/// Configuration at ~/.config/calexport/config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Host serving `/blogs/events/{title}/?ical=1`
    #[serde(default = "default_webcal_host")]
    pub webcal_host: String,

    /// IANA timezone for date-only and floating times.
    /// Falls back to the system timezone, then UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            webcal_host: default_webcal_host(),
            timezone: None,
        }
    }
}

impl ExportConfig {
    pub fn config_path() -> CalExportResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalExportError::Config("Could not determine config directory".into()))?
            .join("calexport");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path. A missing file is not an error.
    pub fn load() -> CalExportResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (optional) with `CALEXPORT_*` environment overrides.
    pub fn load_from(path: &Path) -> CalExportResult<Self> {
        Self::load_layered(path, None)
    }

    /// `env` replaces the process environment when given.
    fn load_layered(path: &Path, env: Option<Map<String, String>>) -> CalExportResult<Self> {
        let config: ExportConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .map_err(|e| CalExportError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalExportError::Config(e.to_string()))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), host = %config.webcal_host, "loaded config");

        Ok(config)
    }

    fn validate(&self) -> CalExportResult<()> {
        let host = self.webcal_host.trim();
        if host.is_empty() || host.contains("://") || host.contains('/') {
            return Err(CalExportError::Config(format!(
                "webcal_host must be a bare host name, got '{}'",
                self.webcal_host
            )));
        }

        if let Some(ref tz) = self.timezone {
            Tz::from_str(tz)
                .map_err(|_| CalExportError::Config(format!("Unknown timezone '{}'", tz)))?;
        }

        Ok(())
    }

    /// Timezone for floating times: configured, else system, else UTC.
    pub fn local_timezone(&self) -> CalExportResult<Tz> {
        if let Some(ref name) = self.timezone {
            return Tz::from_str(name)
                .map_err(|_| CalExportError::Config(format!("Unknown timezone '{}'", name)));
        }

        match iana_time_zone::get_timezone() {
            Ok(name) => match Tz::from_str(&name) {
                Ok(tz) => Ok(tz),
                Err(_) => {
                    tracing::warn!(timezone = %name, "system timezone not recognized, using UTC");
                    Ok(Tz::UTC)
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not determine system timezone, using UTC");
                Ok(Tz::UTC)
            }
        }
    }

    pub fn formatter(&self) -> CalExportResult<DateTimeFormatter> {
        Ok(DateTimeFormatter::new(self.local_timezone()?))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalExportResult<()> {
        let contents = format!(
            "\
# calexport configuration

# Host serving hosted .ics files for webcal:// links:
# webcal_host = \"{}\"

# Timezone for dates and times given without an offset
# (defaults to the system timezone):
# timezone = \"America/Chicago\"
",
            DEFAULT_WEBCAL_HOST
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalExportError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalExportError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
