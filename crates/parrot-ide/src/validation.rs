//! Backend configuration diagnostics.
//!
//! The backend reports each setting as a [`Validation`]. The JSON shape is
//! externally tagged: `"ValueMissing"`, `{"ValueInvalid": "..."}` or
//! `{"Ok": ...}`.

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::BackendSettings;

/// Outcome of checking a single setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validation<T> {
    /// The setting was not provided.
    #[serde(rename = "ValueMissing")]
    Missing,
    /// The setting was provided but is unusable.
    #[serde(rename = "ValueInvalid")]
    Invalid(String),
    /// The setting is usable.
    Ok(T),
}

impl<T> Validation<T> {
    /// Returns `true` for [`Validation::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Ok(_))
    }

    /// Returns the validated value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Validation::Ok(value) => Some(value),
            Validation::Missing | Validation::Invalid(_) => None,
        }
    }
}

/// Per-setting results of a backend config check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDiagnostics {
    /// Every setting validated.
    pub ok: bool,
    /// SBCL executable.
    pub path_to_sbcl: Validation<String>,
    /// SBCL core image.
    pub path_to_core: Validation<String>,
    /// Slynk server address.
    pub slynk_socket: Validation<String>,
}

impl ConfigDiagnostics {
    /// Decodes diagnostics reported by the backend.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Checks backend settings locally.
pub fn diagnose(settings: &BackendSettings) -> ConfigDiagnostics {
    let path_to_sbcl = check_path(settings.path_to_sbcl.as_deref());
    let path_to_core = check_path(settings.path_to_core.as_deref());
    let slynk_socket = check_socket(&settings.slynk_socket);
    ConfigDiagnostics {
        ok: path_to_sbcl.is_ok() && path_to_core.is_ok() && slynk_socket.is_ok(),
        path_to_sbcl,
        path_to_core,
        slynk_socket,
    }
}

fn check_path(path: Option<&Path>) -> Validation<String> {
    match path {
        None => Validation::Missing,
        Some(path) if path.exists() => Validation::Ok(path.display().to_string()),
        Some(path) => Validation::Invalid(format!("{} does not exist", path.display())),
    }
}

fn check_socket(socket: &str) -> Validation<String> {
    let socket = socket.trim();
    if socket.is_empty() {
        return Validation::Missing;
    }
    match socket.parse::<SocketAddr>() {
        Ok(addr) => Validation::Ok(addr.to_string()),
        Err(err) => Validation::Invalid(format!("{socket}: {err}")),
    }
}
