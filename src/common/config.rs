// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use serde::de::DeserializeOwned;
#[allow(deprecated)]
use std::env::home_dir;
use std::fs::read_to_string;
use std::path::Path;

/// Configuration parameters read from TOML.
#[derive(Debug)]
pub struct CubConfig {
    debug_enabled: bool,
    toml: String,
}

impl CubConfig {
    /// Creates a configuration builder.
    pub fn builder() -> CubConfigBuilder {
        CubConfigBuilder {
            cub_config: None,
            debug_enabled: false,
            error: None,
        }
    }

    /// Returns `true` if debug is enabled.
    pub fn debug(&self) -> bool {
        self.debug_enabled
    }

    /// Returns configuration parameters.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::String(format!("toml: {e}")))
    }
}

/// Builds a [`CubConfig`] from a string or a file.
pub struct CubConfigBuilder {
    cub_config: Option<CubConfig>,
    debug_enabled: bool,
    error: Option<Error>,
}

impl CubConfigBuilder {
    /// Returns the configuration, or the first error encountered while building it.
    pub fn build(self) -> Result<CubConfig, Error> {
        if let Some(error) = self.error {
            Err(error)
        } else if let Some(cub_config) = self.cub_config {
            Ok(cub_config)
        } else {
            Err(Error::String("config not set".to_string()))
        }
    }

    /// Enables or disables debug output.
    pub fn debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        if let Some(cub_config) = self.cub_config.as_mut() {
            cub_config.debug_enabled = debug_enabled;
        }
        self
    }

    /// Empty configuration, so every section falls back to its defaults.
    pub fn empty(self) -> Self {
        self.toml_string(String::default())
    }

    /// Reads `file_name` from the home directory, or else from the working directory.
    pub fn toml_file(self, file_name: &str) -> Self {
        #[allow(deprecated)]
        let home_path = home_dir().and_then(|pathbuf| {
            pathbuf
                .to_str()
                .map(|path| format!("{path}/{file_name}"))
        });
        if let Some(toml) = home_path.and_then(|path| read_to_string(path).ok()) {
            self.toml_string(toml)
        } else {
            self.toml_path(Path::new(&format!("./{file_name}")))
        }
    }

    /// Reads exactly the file at `path`.
    pub fn toml_path(self, path: &Path) -> Self {
        match read_to_string(path) {
            Ok(toml) => self.toml_string(toml),
            Err(e) => Self {
                cub_config: None,
                debug_enabled: self.debug_enabled,
                error: Some(Error::Io(format!("{}: cannot read ({e})", path.display()))),
            },
        }
    }

    /// Uses the given TOML text.
    pub fn toml_str(self, toml: &str) -> Self {
        self.toml_string(toml.to_string())
    }

    /// Uses the given TOML text.
    pub fn toml_string(self, toml: String) -> Self {
        Self {
            cub_config: Some(CubConfig {
                debug_enabled: self.debug_enabled,
                toml,
            }),
            debug_enabled: self.debug_enabled,
            error: None,
        }
    }
}
