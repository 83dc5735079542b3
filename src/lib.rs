// Unfold Engine - Data-Oriented Programming (DOP) Architecture
//
// Turns a compact panel grammar into a time-parameterized unfolding animation.
// - *_data.rs modules hold plain data
// - *_operations.rs modules hold pure functions over that data
//
// Build once at scene setup (grammar -> schedule -> rest geometry), then sample
// any number of times per frame without mutation.

// Constants module
pub mod constants;

// Core modules
pub mod error;
pub mod geometry;
pub mod grammar;
pub mod schedule;
pub mod strip;

// Composition root
pub mod engine;

// Output for external renderers
pub mod renderer;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use engine::{AnimationData, FrameSample, StripId};
pub use error::{
    DegenerateGeometryError, GrammarError, GrammarErrorKind, UnfoldError, UnfoldResult,
};
pub use geometry::{Edge, QuadGeometry};
pub use grammar::FaceSide;
pub use renderer::PanelVertex;
pub use strip::{Panel, PanelSample, PanelState, StripData, StripDescriptor};

/// Global timing configuration shared by every strip of an engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnfoldConfig {
    /// Hinge rotation speed in radians per second
    pub angular_speed: f32,

    /// Seconds between a branch point's chain time and the branch's first panel
    pub branch_delay: f32,

    /// Deepest allowed `{` nesting
    pub max_branch_depth: usize,
}

impl UnfoldConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> UnfoldResult<()> {
        if !self.angular_speed.is_finite() || self.angular_speed <= 0.0 {
            return Err(UnfoldError::InvalidConfig {
                field: "angular_speed".to_string(),
                value: self.angular_speed.to_string(),
                reason: "must be finite and greater than 0".to_string(),
            });
        }

        if !self.branch_delay.is_finite() || self.branch_delay < 0.0 {
            return Err(UnfoldError::InvalidConfig {
                field: "branch_delay".to_string(),
                value: self.branch_delay.to_string(),
                reason: "must be finite and not negative".to_string(),
            });
        }

        if self.max_branch_depth == 0 {
            return Err(UnfoldError::InvalidConfig {
                field: "max_branch_depth".to_string(),
                value: "0".to_string(),
                reason: "must allow at least one level of branching".to_string(),
            });
        }

        if self.max_branch_depth > constants::MAX_BRANCH_DEPTH_LIMIT {
            return Err(UnfoldError::InvalidConfig {
                field: "max_branch_depth".to_string(),
                value: self.max_branch_depth.to_string(),
                reason: format!("must not exceed {}", constants::MAX_BRANCH_DEPTH_LIMIT),
            });
        }

        log::info!(
            "[UnfoldConfig] Validated: angular_speed={} rad/s, branch_delay={}s, max_branch_depth={}",
            self.angular_speed,
            self.branch_delay,
            self.max_branch_depth
        );
        Ok(())
    }

    /// Parse and validate a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: UnfoldConfig = toml::from_str(source).context("UnfoldConfig: malformed TOML")?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for UnfoldConfig {
    fn default() -> Self {
        Self {
            angular_speed: constants::DEFAULT_ANGULAR_SPEED,
            branch_delay: constants::DEFAULT_BRANCH_DELAY,
            max_branch_depth: constants::DEFAULT_MAX_BRANCH_DEPTH,
        }
    }
}

/// Load an `UnfoldConfig` from a TOML file
pub fn load_config_file(path: impl AsRef<Path>) -> anyhow::Result<UnfoldConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    UnfoldConfig::from_toml_str(&source)
        .with_context(|| format!("Invalid config file {}", path.display()))
}
