//! Correction configuration management.
//!
//! This module provides configuration loading from YAML files and the global
//! verbose flag.

mod defaults;


// Re-export public types
pub use defaults::CorrectionConfig;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["tonelift.yml", "tonelift.yaml"];

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct ConfigHandle {
    pub config: FileConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ConfigHandle {
    fn with_config(config: FileConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub correction: CorrectionConfig,
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Candidates are tried in order; the first file that parses wins. Unreadable
/// or malformed candidates are recorded as warnings and skipped.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<FileConfig>(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No config found; using built-in defaults.".to_string());
    ConfigHandle::with_config(FileConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("TONELIFT_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("tonelift").join(name));
        }
    }

    candidates
}

static CONFIG_HANDLE: OnceLock<ConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global configuration (loaded once per process).
pub fn config_handle() -> &'static ConfigHandle {
    CONFIG_HANDLE.get_or_init(|| load_config(None))
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[tonelift] Loaded config from {}", source.display());
        } else {
            eprintln!("[tonelift] Using built-in defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[tonelift] Config warning: {}", warning);
        }
    });
}
