//! Animation engine operations - Pure DOP functions
//!
//! Strips are built one at a time and never touched again. Frame sampling
//! only reads them, so the parallel variant needs no locks.

use super::engine_data::{AnimationData, FrameSample, StripId};
use crate::error::{UnfoldError, UnfoldResult};
use crate::strip::{build_strip, sample_strip, strip_end_time, StripData, StripDescriptor};
use crate::UnfoldConfig;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Create an empty engine after validating the config
pub fn create_animation(config: UnfoldConfig) -> UnfoldResult<AnimationData> {
    config.validate()?;

    Ok(AnimationData {
        config,
        strips: Vec::new(),
        labels: FxHashMap::default(),
    })
}

// ============================================================================
// STRIP MANAGEMENT
// ============================================================================

/// Build a strip and take ownership of it
///
/// A failed build leaves the engine exactly as it was.
pub fn add_strip(data: &mut AnimationData, descriptor: &StripDescriptor) -> UnfoldResult<StripId> {
    if data.labels.contains_key(&descriptor.label) {
        return Err(UnfoldError::DuplicateStrip {
            label: descriptor.label.clone(),
        });
    }

    let strip = match build_strip(descriptor, &data.config) {
        Ok(strip) => strip,
        Err(e) => {
            log::error!("[add_strip] {}", e);
            return Err(e);
        }
    };

    let id = StripId(data.strips.len());
    data.labels.insert(strip.label.clone(), id);
    data.strips.push(strip);

    Ok(id)
}

/// Build several strips; each result is independent of the others
pub fn add_strips(
    data: &mut AnimationData,
    descriptors: &[StripDescriptor],
) -> Vec<UnfoldResult<StripId>> {
    let results: Vec<_> = descriptors.iter().map(|d| add_strip(data, d)).collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    log::info!(
        "[add_strips] Built {}/{} strips ({} panels total)",
        results.len() - failed,
        results.len(),
        panel_count(data)
    );

    results
}

pub fn strip(data: &AnimationData, id: StripId) -> Option<&StripData> {
    data.strips.get(id.0)
}

pub fn strip_by_label<'a>(data: &'a AnimationData, label: &str) -> Option<&'a StripData> {
    data.labels.get(label).and_then(|id| strip(data, *id))
}

pub fn panel_count(data: &AnimationData) -> usize {
    data.strips.iter().map(|s| s.panels.len()).sum()
}

// ============================================================================
// FRAME SAMPLING
// ============================================================================

fn tag_strip(id: StripId, strip: &StripData, time: f32) -> impl Iterator<Item = FrameSample> {
    sample_strip(strip, time)
        .into_iter()
        .map(move |panel| FrameSample { strip: id, panel })
}

/// Sample every panel of every strip at `time`
pub fn sample_frame(data: &AnimationData, time: f32) -> Vec<FrameSample> {
    data.strips
        .iter()
        .enumerate()
        .flat_map(|(i, strip)| tag_strip(StripId(i), strip, time))
        .collect()
}

/// Same result as `sample_frame`, with strips sampled on the rayon pool
pub fn sample_frame_parallel(data: &AnimationData, time: f32) -> Vec<FrameSample> {
    data.strips
        .par_iter()
        .enumerate()
        .flat_map_iter(|(i, strip)| tag_strip(StripId(i), strip, time))
        .collect()
}

/// Time at which every strip has settled
pub fn animation_end_time(data: &AnimationData) -> f32 {
    data.strips
        .iter()
        .map(strip_end_time)
        .fold(f32::NEG_INFINITY, f32::max)
}

pub fn is_animation_settled(data: &AnimationData, time: f32) -> bool {
    time >= animation_end_time(data)
}
