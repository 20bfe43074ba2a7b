//! Configuration types for tyd.
//!
//! [`Config::load`] reads `~/.config/tyd/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//! Every recognized parameter is an explicit field here; nothing is
//! inferred from the environment at call time.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[backend]
kind = "ordered"

[lookup]
window     = 100
timeout_ms = 1000

[server]
listen     = "127.0.0.1:4664"
vocab_path = ""
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/tyd/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Which backend adapter serves lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Rank/range scan over the sorted term collection.
    Ordered,
    /// FST prefix-automaton scan.
    Prefix,
}

/// `[backend]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_kind")]
    pub kind: BackendKind,
}

fn default_backend_kind() -> BackendKind { BackendKind::Ordered }

impl Default for BackendConfig {
    fn default() -> Self {
        Self { kind: default_backend_kind() }
    }
}

/// `[lookup]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_window() -> usize { 100 }
fn default_timeout_ms() -> u64 { 1000 }

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Path to the newline-separated vocabulary file. Empty means "must be
    /// given on the command line".
    #[serde(default)]
    pub vocab_path: String,
}

fn default_listen() -> String { "127.0.0.1:4664".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            vocab_path: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/tyd/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Reject unusable parameter values at startup rather than at call
    /// time.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.lookup.window == 0 {
            anyhow::bail!("lookup.window must be at least 1");
        }
        if self.lookup.timeout_ms == 0 {
            anyhow::bail!("lookup.timeout_ms must be at least 1");
        }
        self.server
            .listen
            .parse::<std::net::SocketAddr>()
            .map_err(|e| anyhow::anyhow!("server.listen is not a socket address: {e}"))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("tyd")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
