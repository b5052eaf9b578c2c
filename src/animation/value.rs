use std::collections::BTreeMap;

/// Style attribute a track can drive on its target.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum StyleProperty {
    TranslateX,
    TranslateY,
    Opacity,
    Scale,
    Rotation,
    StrokeDashOffset,
    Custom(String),
}

/// Value of a style attribute at one point on a timeline.
///
/// Numbers interpolate; text is discrete and switches to the target value
/// only when eased time reaches 1.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    pub fn number(v: f64) -> Self {
        Self::Number(v)
    }

    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

/// Property state for one target, ordered for deterministic iteration.
pub type StyleMap = BTreeMap<StyleProperty, StyleValue>;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for StyleValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (StyleValue::Number(x), StyleValue::Number(y)) => {
                StyleValue::Number(<f64 as Lerp>::lerp(x, y, t))
            }
            // Discrete values hold the start until the segment completes.
            _ => {
                if t < 1.0 {
                    a.clone()
                } else {
                    b.clone()
                }
            }
        }
    }
}

/// Interpolate two property maps at eased time `t`.
///
/// Properties present on only one side are treated as constant: the side
/// that defines them wins for the whole segment.
pub fn lerp_styles(a: &StyleMap, b: &StyleMap, t: f64) -> StyleMap {
    let mut out = StyleMap::new();
    for (prop, va) in a {
        match b.get(prop) {
            Some(vb) => {
                out.insert(prop.clone(), StyleValue::lerp(va, vb, t));
            }
            None => {
                out.insert(prop.clone(), va.clone());
            }
        }
    }
    for (prop, vb) in b {
        if !a.contains_key(prop) {
            out.insert(prop.clone(), vb.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_interpolate() {
        let v = StyleValue::lerp(&StyleValue::number(0.0), &StyleValue::number(10.0), 0.3);
        assert_eq!(v, StyleValue::number(3.0));
    }

    #[test]
    fn text_is_discrete() {
        let a = StyleValue::text("grab");
        let b = StyleValue::text("grabbing");
        assert_eq!(StyleValue::lerp(&a, &b, 0.99), a);
        assert_eq!(StyleValue::lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn one_sided_properties_are_constant() {
        let mut a = StyleMap::new();
        a.insert(StyleProperty::Opacity, StyleValue::number(0.0));
        a.insert(StyleProperty::TranslateY, StyleValue::number(30.0));
        let mut b = StyleMap::new();
        b.insert(StyleProperty::Opacity, StyleValue::number(1.0));
        b.insert(StyleProperty::Rotation, StyleValue::number(180.0));

        let out = lerp_styles(&a, &b, 0.5);
        assert_eq!(out[&StyleProperty::Opacity], StyleValue::number(0.5));
        assert_eq!(out[&StyleProperty::TranslateY], StyleValue::number(30.0));
        assert_eq!(out[&StyleProperty::Rotation], StyleValue::number(180.0));
    }
}
