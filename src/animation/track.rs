use crate::{
    animation::ease::Ease,
    animation::value::{StyleMap, lerp_styles},
    foundation::core::{Progress, TargetId},
    foundation::error::{ScrollineError, ScrollineResult},
};

/// Timeline state at one progress point.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Position within the region, in `[0, 1]`.
    pub progress: f64,
    /// Property values at this point.
    pub values: StyleMap,
    /// Ease applied while interpolating *toward* this keyframe.
    #[serde(default)]
    pub ease: Ease,
}

impl Keyframe {
    pub fn new(progress: f64, values: StyleMap, ease: Ease) -> Self {
        Self {
            progress,
            values,
            ease,
        }
    }
}

/// Independently keyframed visual channel targeting one element.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Track {
    pub target: TargetId,
    pub keys: Vec<Keyframe>, // sorted by progress, ties allowed
}

impl Track {
    pub fn new(target: TargetId, keys: Vec<Keyframe>) -> Self {
        Self { target, keys }
    }

    pub fn validate(&self) -> ScrollineResult<()> {
        if self.keys.is_empty() {
            return Err(ScrollineError::validation(
                "Track must have at least one keyframe",
            ));
        }
        for key in &self.keys {
            if !key.progress.is_finite() || !(0.0..=1.0).contains(&key.progress) {
                return Err(ScrollineError::validation(format!(
                    "keyframe progress {} is outside [0, 1]",
                    key.progress
                )));
            }
        }
        if !self
            .keys
            .windows(2)
            .all(|w| w[0].progress <= w[1].progress)
        {
            return Err(ScrollineError::keyframe_order(
                "Track keyframes must be sorted by progress",
            ));
        }
        Ok(())
    }

    /// Evaluate this track at `progress`.
    ///
    /// Pure: the same progress always yields the same map, which is what
    /// makes scrubbing reversible. Assumes the track has been validated;
    /// outside the first/last keyframe the boundary values apply unchanged.
    pub fn sample(&self, progress: Progress) -> StyleMap {
        let p = progress.value();
        let idx = self.keys.partition_point(|k| k.progress <= p);

        if idx == 0 {
            return self.keys[0].values.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].values.clone();
        }

        // With ties, `a` is the last keyframe at or below `p`, so a later
        // coincident keyframe takes over instantaneously.
        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.progress - a.progress;
        if denom <= 0.0 {
            return a.values.clone();
        }

        let t = (p - a.progress) / denom;
        let te = b.ease.apply(t);
        lerp_styles(&a.values, &b.values, te)
    }
}
