use crate::{
    animation::track::Track,
    animation::value::StyleMap,
    foundation::core::{ElementLayout, Progress, TargetId, Viewport},
    foundation::error::ScrollineResult,
    surface::StyleSurface,
    timeline::region::{RegionSpec, ResolvedRegion},
};

/// Where a timeline sits relative to its region for a given offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// Progress clamps at 0; the region has not started.
    Before,
    /// Progress is strictly between 0 and 1.
    Active,
    /// Progress clamps at 1; the region is behind us.
    After,
}

/// Placement of the reference element for a given offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum PinPlacement {
    /// Normal document flow.
    Flow,
    /// Frozen at a fixed viewport y while the region is active.
    Fixed { viewport_y: f64 },
    /// Back in flow, displaced by the scrubbed span after the region ends.
    Parked { offset_y: f64 },
}

/// Full output state for one scroll offset: progress, placement of the
/// reference element, and the style map of every registered track.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TimelineUpdate {
    pub progress: Progress,
    pub phase: Phase,
    pub placement: PinPlacement,
    pub styles: Vec<(TargetId, StyleMap)>,
}

/// Serializable timeline description: reference element, region, tracks.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimelineSpec {
    pub reference: TargetId,
    pub region: RegionSpec,
    pub tracks: Vec<Track>,
}

impl TimelineSpec {
    /// Validate every track and build an unbound timeline.
    pub fn build(self) -> ScrollineResult<ScrollTimeline> {
        let mut timeline = ScrollTimeline::new(self.reference, self.region);
        for track in self.tracks {
            timeline.register(track)?;
        }
        Ok(timeline)
    }
}

/// Maps a scroll offset to a deterministic animation state across
/// independently keyframed tracks, optionally pinning the reference element
/// while the region is active.
///
/// Lifecycle: construct on mount, [`bind`](Self::bind) on mount and on every
/// resize, [`unbind`](Self::unbind) on unmount. Instances share no state and
/// may be torn down in any order.
pub struct ScrollTimeline {
    reference: TargetId,
    spec: RegionSpec,
    tracks: Vec<Track>,
    region: Option<ResolvedRegion>,
    warned_degenerate: bool,
}

impl ScrollTimeline {
    pub fn new(reference: TargetId, spec: RegionSpec) -> Self {
        Self {
            reference,
            spec,
            tracks: Vec::new(),
            region: None,
            warned_degenerate: false,
        }
    }

    /// The element whose placement this timeline controls when pinned.
    pub fn reference(&self) -> &TargetId {
        &self.reference
    }

    /// Add a track. Keyframes must be sorted by progress; on failure the
    /// track is dropped and no target is ever touched by it.
    pub fn register(&mut self, track: Track) -> ScrollineResult<()> {
        track.validate()?;
        self.tracks.push(track);
        Ok(())
    }

    /// Attach to current layout, recomputing trigger boundaries. Idempotent;
    /// call again with fresh geometry on resize. A region whose boundaries
    /// collapse or invert after layout is reported once and clamps to
    /// progress 0 for its lifetime.
    #[tracing::instrument(skip(self, layout, viewport))]
    pub fn bind(&mut self, layout: ElementLayout, viewport: Viewport) {
        let region = self.spec.resolve(layout, viewport);
        if region.is_degenerate() && !self.warned_degenerate {
            tracing::warn!(
                start = region.start,
                end = region.end,
                "degenerate scroll region, timeline clamps to progress 0"
            );
            self.warned_degenerate = true;
        }
        tracing::debug!(
            start = region.start,
            end = region.end,
            pinned = region.pinned,
            "bound scroll timeline"
        );
        self.region = Some(region);
    }

    pub fn is_bound(&self) -> bool {
        self.region.is_some()
    }

    /// Evaluate the full state for `offset`.
    ///
    /// Pure in the offset: no accumulated state, so scrubbing backward
    /// exactly undoes scrubbing forward. Returns `None` when unbound, which
    /// is what makes late-arriving events after teardown harmless.
    pub fn on_scroll(&self, offset: f64) -> Option<TimelineUpdate> {
        let region = self.region.as_ref()?;
        let progress = region.progress(offset);

        let phase = if progress.at_start() {
            Phase::Before
        } else if progress.at_end() {
            Phase::After
        } else {
            Phase::Active
        };

        let placement = if !region.pinned {
            PinPlacement::Flow
        } else {
            match phase {
                Phase::Before => PinPlacement::Flow,
                // Fixed at the viewport position the element occupied when
                // the region became active.
                Phase::Active => PinPlacement::Fixed {
                    viewport_y: region.element_top - region.start,
                },
                Phase::After => PinPlacement::Parked {
                    offset_y: region.span(),
                },
            }
        };

        let styles = self
            .tracks
            .iter()
            .map(|t| (t.target.clone(), t.sample(progress)))
            .collect();

        Some(TimelineUpdate {
            progress,
            phase,
            placement,
            styles,
        })
    }

    /// Evaluate at `offset` and push the result into `surface`. Targets the
    /// surface no longer knows are skipped silently.
    pub fn apply_to(&self, offset: f64, surface: &mut dyn StyleSurface) {
        let Some(update) = self.on_scroll(offset) else {
            return;
        };
        surface.set_placement(&self.reference, update.placement);
        for (target, styles) in &update.styles {
            surface.apply_styles(target, styles);
        }
    }

    /// Release scroll observation and restore normal flow. Dropping the
    /// region comes first so that an in-flight event observed after this
    /// call mutates nothing.
    pub fn unbind(&mut self) {
        self.region = None;
        tracing::debug!(reference = %self.reference.0, "unbound scroll timeline");
    }

    /// Unbind and restore the reference element's flow placement on the
    /// given surface.
    pub fn unbind_from(&mut self, surface: &mut dyn StyleSurface) {
        self.unbind();
        surface.set_placement(&self.reference, PinPlacement::Flow);
    }
}
