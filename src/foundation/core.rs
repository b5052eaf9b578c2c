use crate::foundation::error::{ScrollineError, ScrollineResult};

pub use kurbo::{Point, Rect, Vec2};

/// Normalized position within a scroll-bound region, always in `[0, 1]`.
///
/// Construction clamps, so a `Progress` can never carry an out-of-range or
/// non-finite value.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize)]
pub struct Progress(f64);

impl Progress {
    pub const ZERO: Progress = Progress(0.0);
    pub const ONE: Progress = Progress(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn at_start(self) -> bool {
        self.0 == 0.0
    }

    pub fn at_end(self) -> bool {
        self.0 == 1.0
    }
}

/// Identifier of a visual element controlled by a track.
///
/// This is a weak reference: the core never owns the element, and a target
/// that has disappeared from the view is skipped at application time.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Visible viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ScrollineResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ScrollineError::validation("Viewport width must be > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ScrollineError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// Document-space geometry of a reference element, supplied by the view
/// layer at bind time and re-supplied on every resize.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementLayout {
    pub rect: Rect,
}

impl ElementLayout {
    pub fn from_xywh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(left, top, left + width, top + height),
        }
    }

    pub fn top(self) -> f64 {
        self.rect.y0
    }

    pub fn height(self) -> f64 {
        self.rect.height()
    }

    /// Document-space y of a fractional point on the element (0 = top edge,
    /// 1 = bottom edge).
    pub fn edge(self, frac: f64) -> f64 {
        self.rect.y0 + frac * self.rect.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_and_absorbs_nan() {
        assert_eq!(Progress::new(-0.5).value(), 0.0);
        assert_eq!(Progress::new(1.5).value(), 1.0);
        assert_eq!(Progress::new(f64::NAN).value(), 0.0);
        assert_eq!(Progress::new(0.25).value(), 0.25);
    }

    #[test]
    fn progress_boundary_queries() {
        assert!(Progress::ZERO.at_start());
        assert!(Progress::ONE.at_end());
        assert!(!Progress::new(0.5).at_start());
        assert!(!Progress::new(0.5).at_end());
    }

    #[test]
    fn viewport_rejects_degenerate_dimensions() {
        assert!(Viewport::new(0.0, 800.0).is_err());
        assert!(Viewport::new(1280.0, f64::INFINITY).is_err());
        assert!(Viewport::new(1280.0, 800.0).is_ok());
    }

    #[test]
    fn element_edge_is_fractional() {
        let layout = ElementLayout::from_xywh(0.0, 100.0, 300.0, 400.0);
        assert_eq!(layout.edge(0.0), 100.0);
        assert_eq!(layout.edge(0.5), 300.0);
        assert_eq!(layout.edge(1.0), 500.0);
    }
}
