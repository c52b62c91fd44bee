//! IDE configuration loaded from `parrot.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

pub(crate) const CONFIG_FILES: &[&str] = &["parrot.toml", ".parrot.toml"];

const DEFAULT_SCRATCH_NAME: &str = "Scratch";
const DEFAULT_SLYNK_SOCKET: &str = "127.0.0.1:4005";
const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 1000;
const DEFAULT_SYMBOL_INFO_DELAY_MS: u64 = 1500;

/// IDE configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeConfig {
    /// Config file path (if found).
    pub config_path: Option<PathBuf>,
    /// Editor behaviour.
    pub editor: EditorSettings,
    /// Debounce delays.
    pub timing: TimingSettings,
    /// Lisp backend locations.
    pub backend: BackendSettings,
}

/// Editor behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Buffer name reported for forms compiled from an unsaved buffer.
    pub scratch_name: String,
}

/// Debounce delays for background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSettings {
    /// Idle time after an edit before the buffer is saved.
    pub autosave_delay: Duration,
    /// Hover time before symbol documentation is requested.
    pub symbol_info_delay: Duration,
}

/// Where the Lisp backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    /// Path to the SBCL executable.
    pub path_to_sbcl: Option<PathBuf>,
    /// Path to the SBCL core image.
    pub path_to_core: Option<PathBuf>,
    /// Address of the Slynk server.
    pub slynk_socket: String,
}

impl Default for IdeConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            editor: EditorSettings {
                scratch_name: DEFAULT_SCRATCH_NAME.to_string(),
            },
            timing: TimingSettings {
                autosave_delay: Duration::from_millis(DEFAULT_AUTOSAVE_DELAY_MS),
                symbol_info_delay: Duration::from_millis(DEFAULT_SYMBOL_INFO_DELAY_MS),
            },
            backend: BackendSettings {
                path_to_sbcl: None,
                path_to_core: None,
                slynk_socket: DEFAULT_SLYNK_SOCKET.to_string(),
            },
        }
    }
}

impl IdeConfig {
    /// Load configuration from a project root.
    ///
    /// A missing file gives the defaults; an unreadable or invalid one logs a
    /// warning and gives the defaults.
    pub fn load(root: &Path) -> Self {
        let Some(path) = find_config_file(root) else {
            return IdeConfig::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            warn!("Failed to read parrot config at {}", path.display());
            return IdeConfig::base(Some(path));
        };
        IdeConfig::from_contents(root, Some(path), &contents)
    }

    /// Parse configuration text. Relative backend paths resolve against `root`.
    pub fn from_contents(root: &Path, config_path: Option<PathBuf>, contents: &str) -> Self {
        let mut config = IdeConfig::base(config_path);
        let parsed: ConfigFile = match toml::from_str(contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                if let Some(path) = &config.config_path {
                    warn!("Failed to parse parrot config at {}: {err}", path.display());
                } else {
                    warn!("Failed to parse parrot config: {err}");
                }
                return config;
            }
        };

        if let Some(name) = parsed.editor.scratch_name {
            if name.trim().is_empty() {
                warn!("Ignoring empty editor.scratch_name");
            } else {
                config.editor.scratch_name = name;
            }
        }
        if let Some(ms) = parsed.timing.autosave_delay_ms {
            config.timing.autosave_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parsed.timing.symbol_info_delay_ms {
            config.timing.symbol_info_delay = Duration::from_millis(ms);
        }
        config.backend.path_to_sbcl = parsed.backend.path_to_sbcl.map(|p| resolve_path(root, &p));
        config.backend.path_to_core = parsed.backend.path_to_core.map(|p| resolve_path(root, &p));
        if let Some(socket) = parsed.backend.slynk_socket {
            config.backend.slynk_socket = socket;
        }
        config
    }

    fn base(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            ..IdeConfig::default()
        }
    }
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    editor: EditorSection,
    timing: TimingSection,
    backend: BackendSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EditorSection {
    scratch_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TimingSection {
    autosave_delay_ms: Option<u64>,
    symbol_info_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BackendSection {
    path_to_sbcl: Option<String>,
    path_to_core: Option<String>,
    slynk_socket: Option<String>,
}
