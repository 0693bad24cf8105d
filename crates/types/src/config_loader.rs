// Copyright (c) 2023 - 2025 Restate Software, Inc., Restate GmbH.
// All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::debug;

use crate::config::StorageOptions;

#[derive(thiserror::Error, Debug)]
pub enum ConfigLoadError {
    #[error("configuration loading error: {0}")]
    Figment(Box<figment::Error>),
}

// Because thiserror doesn't support auto-boxing or auto implements From with boxing.
impl From<figment::Error> for ConfigLoadError {
    fn from(value: figment::Error) -> Self {
        Self::Figment(Box::new(value))
    }
}

/// Loads [`StorageOptions`] from defaults, an optional TOML file and `METASERVER_` prefixed
/// environment variables, in increasing order of precedence.
#[derive(Debug, Default, derive_builder::Builder)]
#[builder(default)]
pub struct ConfigLoader {
    #[builder(setter(strip_option))]
    path: Option<PathBuf>,
    load_env: bool,
    #[builder(setter(strip_option))]
    custom_default: Option<StorageOptions>,
}

impl ConfigLoader {
    pub fn load_once(&self) -> Result<StorageOptions, ConfigLoadError> {
        let defaults = self.custom_default.clone().unwrap_or_default();

        let mut figment = Figment::from(Serialized::defaults(defaults));
        // Load configuration file
        if let Some(path) = &self.path {
            debug!("Loading storage configuration from {}", path.display());
            figment = figment.merge(Toml::file_exact(path.as_path()));
        }

        // Merge with environment variables
        if self.load_env {
            figment = Self::merge_with_env(figment);
        }

        let options: StorageOptions = figment.extract()?;
        debug!(
            max_value_size = options.max_value_size(),
            "Loaded storage configuration"
        );

        Ok(options)
    }

    fn merge_with_env(figment: Figment) -> Figment {
        figment.merge(
            Env::prefixed("METASERVER_")
                .split("__")
                .map(|k| k.as_str().replace('_', "-").into()),
        )
    }
}
