use crate::foundation::core::{ElementLayout, Progress, Viewport};

/// Trigger point anchoring one boundary of a scroll region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Anchor {
    /// The scroll offset at which a fractional point on the reference
    /// element meets a fractional point on the viewport (0 = top edge,
    /// 1 = bottom edge). "Top of element reaches top of viewport" is
    /// `{ element_frac: 0.0, viewport_frac: 0.0 }`.
    Meet { element_frac: f64, viewport_frac: f64 },
    /// Absolute document scroll offset in pixels.
    Offset(f64),
}

impl Anchor {
    /// "top top": element top meets viewport top.
    pub const TOP_TOP: Anchor = Anchor::Meet {
        element_frac: 0.0,
        viewport_frac: 0.0,
    };
    /// "top center": element top meets viewport center.
    pub const TOP_CENTER: Anchor = Anchor::Meet {
        element_frac: 0.0,
        viewport_frac: 0.5,
    };
    /// "bottom center": element bottom meets viewport center.
    pub const BOTTOM_CENTER: Anchor = Anchor::Meet {
        element_frac: 1.0,
        viewport_frac: 0.5,
    };

    fn resolve(self, layout: ElementLayout, viewport: Viewport) -> f64 {
        match self {
            Self::Meet {
                element_frac,
                viewport_frac,
            } => layout.edge(element_frac) - viewport_frac * viewport.height,
            Self::Offset(px) => px,
        }
    }
}

/// End boundary of a region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum RegionEnd {
    At(Anchor),
    /// Fixed pixel span past the resolved start.
    Ahead(f64),
}

/// Declarative scroll-bound interval a timeline is scrubbed against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionSpec {
    pub start: Anchor,
    pub end: RegionEnd,
    /// Freeze the reference element out of normal flow while the region is
    /// active.
    pub pinned: bool,
}

impl RegionSpec {
    pub fn new(start: Anchor, end: RegionEnd) -> Self {
        Self {
            start,
            end,
            pinned: false,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Resolve trigger boundaries against current layout. Recomputed on
    /// every bind; progress is derived from the result, never stored.
    pub fn resolve(self, layout: ElementLayout, viewport: Viewport) -> ResolvedRegion {
        let start = self.start.resolve(layout, viewport);
        let end = match self.end {
            RegionEnd::At(anchor) => anchor.resolve(layout, viewport),
            RegionEnd::Ahead(px) => start + px,
        };
        let degenerate = !(start.is_finite() && end.is_finite()) || end <= start;
        ResolvedRegion {
            start,
            end,
            element_top: layout.top(),
            pinned: self.pinned,
            degenerate,
        }
    }
}

/// Region boundaries after layout resolution.
///
/// A degenerate region (collapsed or inverted boundaries) never activates:
/// its progress is 0 for every offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRegion {
    pub start: f64,
    pub end: f64,
    pub element_top: f64,
    pub pinned: bool,
    degenerate: bool,
}

impl ResolvedRegion {
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Map a scroll offset to progress. Total and continuous: offsets
    /// outside the region clamp to the boundary.
    pub fn progress(&self, offset: f64) -> Progress {
        if self.degenerate {
            return Progress::ZERO;
        }
        Progress::new((offset - self.start) / (self.end - self.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::ElementLayout;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 800.0).unwrap()
    }

    #[test]
    fn meet_anchor_resolution() {
        // Element at document y 2000, height 600, viewport 800 tall.
        let layout = ElementLayout::from_xywh(0.0, 2000.0, 1280.0, 600.0);
        let spec = RegionSpec::new(Anchor::TOP_CENTER, RegionEnd::At(Anchor::BOTTOM_CENTER));
        let region = spec.resolve(layout, viewport());
        assert_eq!(region.start, 2000.0 - 400.0);
        assert_eq!(region.end, 2600.0 - 400.0);
        assert!(!region.is_degenerate());
    }

    #[test]
    fn ahead_end_is_relative_to_start() {
        let layout = ElementLayout::from_xywh(0.0, 1000.0, 1280.0, 800.0);
        let spec = RegionSpec::new(Anchor::TOP_TOP, RegionEnd::Ahead(2400.0));
        let region = spec.resolve(layout, viewport());
        assert_eq!(region.start, 1000.0);
        assert_eq!(region.end, 3400.0);
    }

    #[test]
    fn progress_clamps_at_boundaries() {
        let layout = ElementLayout::from_xywh(0.0, 1000.0, 1280.0, 800.0);
        let region =
            RegionSpec::new(Anchor::TOP_TOP, RegionEnd::Ahead(400.0)).resolve(layout, viewport());
        assert_eq!(region.progress(500.0).value(), 0.0);
        assert_eq!(region.progress(1200.0).value(), 0.5);
        assert_eq!(region.progress(9999.0).value(), 1.0);
    }

    #[test]
    fn inverted_region_is_degenerate_and_clamps_to_zero() {
        let layout = ElementLayout::from_xywh(0.0, 1000.0, 1280.0, 800.0);
        let region = RegionSpec::new(Anchor::Offset(2000.0), RegionEnd::At(Anchor::Offset(1500.0)))
            .resolve(layout, viewport());
        assert!(region.is_degenerate());
        for offset in [0.0, 1500.0, 1750.0, 2000.0, 5000.0] {
            assert_eq!(region.progress(offset).value(), 0.0);
        }
    }

    #[test]
    fn zero_span_region_is_degenerate() {
        let layout = ElementLayout::from_xywh(0.0, 1000.0, 1280.0, 800.0);
        let region = RegionSpec::new(Anchor::TOP_TOP, RegionEnd::Ahead(0.0)).resolve(layout, viewport());
        assert!(region.is_degenerate());
        // Progress never leaves {0, 1}; here it is always 0.
        for offset in [900.0, 1000.0, 1100.0] {
            let p = region.progress(offset).value();
            assert!(p == 0.0 || p == 1.0);
        }
    }

    #[test]
    fn resize_remaps_the_same_offset() {
        let spec = RegionSpec::new(Anchor::TOP_TOP, RegionEnd::Ahead(1000.0));
        let before = spec.resolve(
            ElementLayout::from_xywh(0.0, 1000.0, 1280.0, 800.0),
            viewport(),
        );
        let after = spec.resolve(
            ElementLayout::from_xywh(0.0, 1400.0, 1280.0, 800.0),
            viewport(),
        );
        // Same offset, different progress; both mappings stay total.
        assert_eq!(before.progress(1500.0).value(), 0.5);
        assert_eq!(after.progress(1500.0).value(), 0.1);
    }
}
