//! Configuration module for the bridge class generator.
//!
//! This module provides a layered configuration system that supports:
//! - Default values matching the reflection runtime's fixed names
//! - TOML configuration file (`bridgegen.toml` in the working directory)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `BRIDGEGEN_`:
//! - `BRIDGEGEN_OUT_DIR=generated` sets `out_dir`
//! - `BRIDGEGEN_SCRIPT_OBJECT=LuaObject` sets `script_object`

use crate::error::BridgeError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "bridgegen.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Directory the generated artifacts are written into
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Extension used both to resolve base-class headers and to name the
    /// generated declaration file
    #[serde(default = "default_header_extension")]
    pub header_extension: String,

    /// Extension of the generated implementation file
    #[serde(default = "default_impl_extension")]
    pub impl_extension: String,

    /// Bridging-capability type: second public base of the bridge class,
    /// type of the private result member, and receiver of the dynamic
    /// dispatch calls
    #[serde(default = "default_script_object")]
    pub script_object: String,

    /// Sentinel base name marking script accessibility; dropped from
    /// inheritance lists and never recursed into
    #[serde(default = "default_access_marker")]
    pub access_marker: String,

    /// Registration-table include emitted into the implementation
    #[serde(default = "default_registry_include")]
    pub registry_include: String,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,
}

// Default value functions
fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_header_extension() -> String {
    "h".to_string()
}
fn default_impl_extension() -> String {
    "C".to_string()
}
fn default_script_object() -> String {
    "ScriptObject".to_string()
}
fn default_access_marker() -> String {
    "ScriptAccess".to_string()
}
fn default_registry_include() -> String {
    "ReflectionRegistry.h".to_string()
}
fn default_false() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            header_extension: default_header_extension(),
            impl_extension: default_impl_extension(),
            script_object: default_script_object(),
            access_marker: default_access_marker(),
            registry_include: default_registry_include(),
            debug: false,
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, BridgeError> {
        Self::figment(Path::new(CONFIG_FILE))
            .extract()
            .map_err(|e| BridgeError::Config {
                reason: e.to_string(),
            })
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self, BridgeError> {
        if !path.exists() {
            return Err(BridgeError::Config {
                reason: format!("configuration file not found: {}", path.display()),
            });
        }
        Self::figment(path)
            .extract()
            .map_err(|e| BridgeError::Config {
                reason: e.to_string(),
            })
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("BRIDGEGEN_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reflection_runtime() {
        let settings = Settings::default();
        assert_eq!(settings.script_object, "ScriptObject");
        assert_eq!(settings.access_marker, "ScriptAccess");
        assert_eq!(settings.registry_include, "ReflectionRegistry.h");
        assert_eq!(settings.header_extension, "h");
        assert_eq!(settings.impl_extension, "C");
        assert_eq!(settings.out_dir, PathBuf::from("."));
        assert!(!settings.debug);
    }

    #[test]
    fn test_load_from_missing_file_is_config_error() {
        let err = Settings::load_from(Path::new("/nonexistent/bridgegen.toml")).unwrap_err();
        assert_eq!(err.status_code(), "CONFIG_ERROR");
    }
}
