//! Structured configuration read from the environment.

use std::path::PathBuf;

use super::{env_keys, loader};

/// Default virtual environment directory name under the app directory.
pub const DEFAULT_VENV_DIR: &str = "venv";

/// Launch-time configuration.
///
/// Environment values are a middle layer: CLI flags override them via
/// `with_cli_overrides`, and anything still unset falls back to defaults
/// at resolution time.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct LaunchConfig {
    /// Base URL exported to the server as `PUBLIC_HOST`. `None` means
    /// auto-detect the LAN address.
    pub public_host: Option<String>,
    /// Port used when the public host is auto-detected.
    pub port: Option<u16>,
    /// Interpreter override; skips venv/system resolution entirely.
    pub python: Option<PathBuf>,
    /// Virtual environment directory name under the app directory.
    pub venv_dir: Option<String>,
    /// Skip the exit pause.
    pub no_pause: bool,
}

impl LaunchConfig {
    pub fn from_env() -> Self {
        let port = match loader::env_optional(env_keys::DROPDECK_PORT, &[]) {
            Some(s) => match s.parse::<u16>() {
                Ok(p) => Some(p),
                Err(_) => {
                    tracing::warn!("Invalid {}: {}, ignoring", env_keys::DROPDECK_PORT, s);
                    None
                }
            },
            None => None,
        };
        Self {
            public_host: loader::env_optional(
                env_keys::DROPDECK_PUBLIC_HOST,
                env_keys::PUBLIC_HOST_ALIASES,
            ),
            port,
            python: loader::env_optional(env_keys::DROPDECK_PYTHON, &[]).map(PathBuf::from),
            venv_dir: loader::env_optional(env_keys::DROPDECK_VENV_DIR, &[]),
            no_pause: loader::env_bool(env_keys::DROPDECK_NO_PAUSE, &[], false),
        }
    }

    /// Apply CLI flags on top of environment values. Flags win where given;
    /// `no_pause` is sticky from either source.
    pub fn with_cli_overrides(
        mut self,
        public_host: Option<String>,
        port: Option<u16>,
        python: Option<String>,
        venv_dir: Option<String>,
        no_pause: bool,
    ) -> Self {
        if public_host.is_some() {
            self.public_host = public_host;
        }
        if port.is_some() {
            self.port = port;
        }
        if let Some(p) = python {
            self.python = Some(PathBuf::from(p));
        }
        if venv_dir.is_some() {
            self.venv_dir = venv_dir;
        }
        self.no_pause = self.no_pause || no_pause;
        self
    }

    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or(crate::host::DEFAULT_PORT)
    }

    pub fn effective_venv_dir(&self) -> &str {
        self.venv_dir.as_deref().unwrap_or(DEFAULT_VENV_DIR)
    }
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        use env_keys::observability as keys;
        Self {
            quiet: loader::env_bool(keys::DROPDECK_QUIET, &[], false),
            log_level: loader::env_or(keys::DROPDECK_LOG_LEVEL, &[], || "dropdeck=info".to_string()),
            log_json: loader::env_bool(keys::DROPDECK_LOG_JSON, &[], false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // DROPDECK_* keys are process-global, so all from_env assertions live in
    // one test to avoid races between parallel test threads.
    #[test]
    fn test_launch_config_from_env() {
        env::remove_var("PUBLIC_HOST");
        env::set_var("DROPDECK_PUBLIC_HOST", "http://10.0.0.7:5000");
        env::set_var("DROPDECK_PORT", "8080");
        env::set_var("DROPDECK_VENV_DIR", ".venv");
        env::set_var("DROPDECK_NO_PAUSE", "1");

        let cfg = LaunchConfig::from_env();
        assert_eq!(cfg.public_host.as_deref(), Some("http://10.0.0.7:5000"));
        assert_eq!(cfg.port, Some(8080));
        assert_eq!(cfg.effective_venv_dir(), ".venv");
        assert!(cfg.no_pause);

        // Malformed port is ignored, not fatal.
        env::set_var("DROPDECK_PORT", "not-a-port");
        let cfg = LaunchConfig::from_env();
        assert_eq!(cfg.port, None);
        assert_eq!(cfg.effective_port(), crate::host::DEFAULT_PORT);

        env::remove_var("DROPDECK_PUBLIC_HOST");
        env::remove_var("DROPDECK_PORT");
        env::remove_var("DROPDECK_VENV_DIR");
        env::remove_var("DROPDECK_NO_PAUSE");

        let cfg = LaunchConfig::from_env();
        assert_eq!(cfg.public_host, None);
        assert_eq!(cfg.effective_venv_dir(), DEFAULT_VENV_DIR);
        assert!(!cfg.no_pause);
    }

    #[test]
    fn test_cli_overrides_win_over_env_values() {
        let cfg = LaunchConfig {
            public_host: Some("http://from-env:5000".into()),
            port: Some(5000),
            python: None,
            venv_dir: None,
            no_pause: false,
        };
        let cfg = cfg.with_cli_overrides(
            Some("http://from-cli:5000".into()),
            Some(9000),
            Some("/usr/bin/python3".into()),
            Some("env".into()),
            true,
        );
        assert_eq!(cfg.public_host.as_deref(), Some("http://from-cli:5000"));
        assert_eq!(cfg.port, Some(9000));
        assert_eq!(cfg.python.as_deref(), Some(std::path::Path::new("/usr/bin/python3")));
        assert_eq!(cfg.effective_venv_dir(), "env");
        assert!(cfg.no_pause);
    }

    #[test]
    fn test_cli_overrides_keep_env_values_when_absent() {
        let cfg = LaunchConfig {
            public_host: Some("http://from-env:5000".into()),
            port: None,
            python: None,
            venv_dir: None,
            no_pause: true,
        };
        let cfg = cfg.with_cli_overrides(None, None, None, None, false);
        assert_eq!(cfg.public_host.as_deref(), Some("http://from-env:5000"));
        assert!(cfg.no_pause, "no_pause from env must survive CLI default");
    }
}
