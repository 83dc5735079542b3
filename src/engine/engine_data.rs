//! Animation engine data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in engine_operations.rs

use crate::strip::{PanelSample, StripData};
use crate::UnfoldConfig;
use rustc_hash::FxHashMap;

/// Handle to a strip owned by an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StripId(pub usize);

/// Composition root: every built strip plus the config they were built with
#[derive(Debug, Clone)]
pub struct AnimationData {
    pub config: UnfoldConfig,

    /// Strips in insertion order, indexed by `StripId`
    pub strips: Vec<StripData>,

    /// Label -> strip lookup
    pub labels: FxHashMap<String, StripId>,
}

/// One panel sample tagged with the strip it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    pub strip: StripId,
    pub panel: PanelSample,
}
