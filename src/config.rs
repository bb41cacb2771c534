// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View configuration, loadable from JSON.
//!
//! ```json
//! {
//!   "layout": { "node_spacing": 20, "level_spacing": 180, "direction": "lr", "fit_width": 960 },
//!   "svg": { "width": 960, "collapsed_fill": "#3e8ed0", "animate": true, "duration_ms": 250 },
//!   "unicode": { "max_label_width": 32 }
//! }
//! ```
//!
//! Every section and field is optional.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::LayoutOptions;
use crate::render::{SvgOptions, UnicodeOptions};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub layout: LayoutOptions,
    pub svg: SvgOptions,
    pub unicode: UnicodeOptions,
}

impl ViewConfig {
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_json_str(&src)?;
        tracing::debug!(path = %path.display(), "loaded view config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("layout.node_spacing", self.layout.node_spacing)?;
        positive("layout.level_spacing", self.layout.level_spacing)?;
        if let Some(width) = self.layout.fit_width {
            positive("layout.fit_width", width)?;
        }
        positive("svg.width", self.svg.width)?;
        positive("svg.node_radius", self.svg.node_radius)?;
        let m = &self.svg.margin;
        for (field, value) in [
            ("svg.margin.top", m.top),
            ("svg.margin.right", m.right),
            ("svg.margin.bottom", m.bottom),
            ("svg.margin.left", m.left),
            ("svg.label_offset", self.svg.label_offset),
            ("svg.link_width", self.svg.link_width),
        ] {
            non_negative(field, value)?;
        }
        if !(0.0..=1.0).contains(&self.svg.link_opacity) {
            return Err(ConfigError::Invalid {
                field: "svg.link_opacity",
                reason: "must be between 0 and 1",
            });
        }
        if self.unicode.max_label_width == 0 {
            return Err(ConfigError::Invalid {
                field: "unicode.max_label_width",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be a finite number greater than 0" })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be a finite number of at least 0" })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read config {}: {source}", path.display()),
            Self::Json(err) => write!(f, "malformed config: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid config: {field} {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
