//! Scrolline drives scroll-synchronized animation timelines.
//!
//! A [`ScrollTimeline`] maps a scroll offset within a bounded region to a
//! deterministic animation state across independently keyframed tracks,
//! optionally pinning its reference element while the region is active.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build [`Track`]s (keyframe tables over `[0, 1]`
//!    progress) and a [`RegionSpec`] (scroll-anchored boundaries).
//! 2. **Bind**: resolve the region against current layout; re-bind on
//!    resize.
//! 3. **Scrub**: [`ScrollTimeline::on_scroll`] turns an offset into the
//!    full style state for that progress — a pure function, so scrubbing
//!    backward exactly undoes scrubbing forward.
//! 4. **Apply**: push the state into a [`StyleSurface`]; targets that have
//!    disappeared are skipped silently.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation is pure and stable for a
//!   given offset; no hidden direction flags or accumulated tween state.
//! - **No rendering**: the crate computes style values, it never paints.
//! - **Independent ownership**: every timeline owns its own registration
//!   and is disposable on its own; there is no global trigger registry.

#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod gate;
pub mod marquee;
pub mod stage;
pub mod surface;
pub mod timeline;
pub mod trail;

pub use animation::ease::Ease;
pub use animation::ops::{fade_in_up, progress_fill, slide_apart, stagger};
pub use animation::track::{Keyframe, Track};
pub use animation::value::{Lerp, StyleMap, StyleProperty, StyleValue, lerp_styles};
pub use foundation::core::{ElementLayout, Point, Progress, Rect, TargetId, Vec2, Viewport};
pub use foundation::error::{ScrollineError, ScrollineResult};
pub use gate::Gate;
pub use marquee::{Marquee, MarqueeDirection};
pub use stage::{Stage, TimelineId};
pub use surface::{ElementState, MemorySurface, StyleSurface};
pub use timeline::region::{Anchor, RegionEnd, RegionSpec, ResolvedRegion};
pub use timeline::timeline::{Phase, PinPlacement, ScrollTimeline, TimelineSpec, TimelineUpdate};
pub use trail::{TrailField, TrailSprite};
