//! Boundary between timeline evaluation and whatever actually renders.
//!
//! The core computes style states; a [`StyleSurface`] owns the addressable
//! elements and absorbs the results. Elements can disappear at any time
//! (rapid mount/unmount), so applying to a missing target must not raise.

use std::collections::BTreeMap;

use crate::{
    animation::value::StyleMap,
    foundation::core::TargetId,
    timeline::timeline::PinPlacement,
};

/// Mutable visual target surface. Implementations must silently skip
/// targets they no longer know about.
pub trait StyleSurface {
    fn apply_styles(&mut self, target: &TargetId, styles: &StyleMap);
    fn set_placement(&mut self, target: &TargetId, placement: PinPlacement);
}

/// Recorded state of one surface element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementState {
    pub styles: StyleMap,
    pub placement: PinPlacement,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            styles: StyleMap::new(),
            placement: PinPlacement::Flow,
        }
    }
}

/// In-memory surface: a plain map from target id to recorded state. Used by
/// tests and headless evaluation; a real view layer provides its own
/// implementation.
#[derive(Debug, Default)]
pub struct MemorySurface {
    elements: BTreeMap<TargetId, ElementState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `target` addressable.
    pub fn insert(&mut self, target: TargetId) {
        self.elements.entry(target).or_default();
    }

    /// Drop `target`; later applications to it are skipped.
    pub fn remove(&mut self, target: &TargetId) {
        self.elements.remove(target);
    }

    pub fn get(&self, target: &TargetId) -> Option<&ElementState> {
        self.elements.get(target)
    }
}

impl StyleSurface for MemorySurface {
    fn apply_styles(&mut self, target: &TargetId, styles: &StyleMap) {
        let Some(el) = self.elements.get_mut(target) else {
            return;
        };
        for (prop, value) in styles {
            el.styles.insert(prop.clone(), value.clone());
        }
    }

    fn set_placement(&mut self, target: &TargetId, placement: PinPlacement) {
        let Some(el) = self.elements.get_mut(target) else {
            return;
        };
        el.placement = placement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::value::{StyleProperty, StyleValue};

    #[test]
    fn applies_to_known_targets() {
        let mut surface = MemorySurface::new();
        let id = TargetId::new("headline");
        surface.insert(id.clone());

        let mut styles = StyleMap::new();
        styles.insert(StyleProperty::Opacity, StyleValue::number(0.4));
        surface.apply_styles(&id, &styles);
        surface.set_placement(&id, PinPlacement::Fixed { viewport_y: 12.0 });

        let el = surface.get(&id).unwrap();
        assert_eq!(el.styles[&StyleProperty::Opacity], StyleValue::number(0.4));
        assert_eq!(el.placement, PinPlacement::Fixed { viewport_y: 12.0 });
    }

    #[test]
    fn missing_target_is_skipped_silently() {
        let mut surface = MemorySurface::new();
        let gone = TargetId::new("gone");
        let mut styles = StyleMap::new();
        styles.insert(StyleProperty::Opacity, StyleValue::number(1.0));
        // Neither call panics or creates the element.
        surface.apply_styles(&gone, &styles);
        surface.set_placement(&gone, PinPlacement::Flow);
        assert!(surface.get(&gone).is_none());
    }

    #[test]
    fn later_styles_overwrite_earlier_ones() {
        let mut surface = MemorySurface::new();
        let id = TargetId::new("bar");
        surface.insert(id.clone());

        let mut first = StyleMap::new();
        first.insert(StyleProperty::Scale, StyleValue::number(0.2));
        surface.apply_styles(&id, &first);

        let mut second = StyleMap::new();
        second.insert(StyleProperty::Scale, StyleValue::number(0.8));
        surface.apply_styles(&id, &second);

        assert_eq!(
            surface.get(&id).unwrap().styles[&StyleProperty::Scale],
            StyleValue::number(0.8)
        );
    }
}
