//! Owns a set of timelines and fans browser-style events out to them.
//!
//! Each timeline keeps its own registration here; removing one tears down
//! exactly that instance (unbind first, then drop) without touching the
//! rest. The stage is gated: until the unlock signal arrives nothing is
//! dispatched, mirroring content that is hidden behind an entry gate.

use crate::{
    foundation::core::{ElementLayout, TargetId, Viewport},
    surface::StyleSurface,
    timeline::timeline::ScrollTimeline,
};

/// Handle to a timeline registered on a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimelineId(u64);

#[derive(Default)]
pub struct Stage {
    timelines: Vec<(TimelineId, ScrollTimeline)>,
    next_id: u64,
    unlocked: bool,
}

impl Stage {
    /// A new stage starts locked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the "content is now visible" signal; timelines start
    /// receiving events.
    pub fn unlock(&mut self) {
        if !self.unlocked {
            tracing::debug!("stage unlocked");
        }
        self.unlocked = true;
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn add(&mut self, timeline: ScrollTimeline) -> TimelineId {
        let id = TimelineId(self.next_id);
        self.next_id += 1;
        self.timelines.push((id, timeline));
        id
    }

    pub fn timeline_mut(&mut self, id: TimelineId) -> Option<&mut ScrollTimeline> {
        self.timelines
            .iter_mut()
            .find(|(tid, _)| *tid == id)
            .map(|(_, tl)| tl)
    }

    /// Unbind and drop one timeline. The listener registration goes away
    /// before anything else, so an event already in flight cannot reach it.
    pub fn remove(&mut self, id: TimelineId, surface: &mut dyn StyleSurface) {
        if let Some(pos) = self.timelines.iter().position(|(tid, _)| *tid == id) {
            self.timelines[pos].1.unbind_from(surface);
            self.timelines.remove(pos);
        }
    }

    /// Deliver a scroll offset to every bound timeline.
    pub fn dispatch_scroll(&self, offset: f64, surface: &mut dyn StyleSurface) {
        if !self.unlocked {
            return;
        }
        for (_, timeline) in &self.timelines {
            timeline.apply_to(offset, surface);
        }
    }

    /// Re-derive region geometry for every timeline whose layout the view
    /// layer can still supply. Timelines without fresh layout keep their
    /// previous binding.
    pub fn dispatch_resize(
        &mut self,
        viewport: Viewport,
        mut layout_for: impl FnMut(&TargetId) -> Option<ElementLayout>,
    ) {
        for (_, timeline) in &mut self.timelines {
            if let Some(layout) = layout_for(timeline.reference()) {
                timeline.bind(layout, viewport);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}
