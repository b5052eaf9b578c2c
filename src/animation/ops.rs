//! Track construction helpers for the recurring section recipes: staggered
//! line reveals, split hero layouts, and region-spanning progress fills.

use crate::{
    animation::ease::Ease,
    animation::track::{Keyframe, Track},
    animation::value::{StyleMap, StyleProperty, StyleValue},
    foundation::core::TargetId,
    foundation::error::{ScrollineError, ScrollineResult},
};

fn styles(entries: &[(StyleProperty, f64)]) -> StyleMap {
    entries
        .iter()
        .map(|(p, v)| (p.clone(), StyleValue::number(*v)))
        .collect()
}

/// Entrance that fades a target in while it rises `rise` pixels, active over
/// the `[start, end]` progress window and clamped outside it.
pub fn fade_in_up(
    target: TargetId,
    start: f64,
    end: f64,
    rise: f64,
    ease: Ease,
) -> ScrollineResult<Track> {
    if !(start.is_finite() && end.is_finite() && (0.0..=1.0).contains(&start) && end <= 1.0) {
        return Err(ScrollineError::validation(
            "fade_in_up window must lie within [0, 1]",
        ));
    }
    if end < start {
        return Err(ScrollineError::validation(
            "fade_in_up window end must be >= start",
        ));
    }
    let track = Track::new(
        target,
        vec![
            Keyframe::new(
                start,
                styles(&[
                    (StyleProperty::Opacity, 0.0),
                    (StyleProperty::TranslateY, rise),
                ]),
                Ease::Linear,
            ),
            Keyframe::new(
                end,
                styles(&[
                    (StyleProperty::Opacity, 1.0),
                    (StyleProperty::TranslateY, 0.0),
                ]),
                ease,
            ),
        ],
    );
    track.validate()?;
    Ok(track)
}

/// Staggered entrances: target `i` animates over a window starting `step`
/// after its predecessor, each window `duration` long. Windows are
/// normalized so the last one ends at progress 1.
pub fn stagger(
    targets: &[TargetId],
    step: f64,
    duration: f64,
    rise: f64,
    ease: Ease,
) -> ScrollineResult<Vec<Track>> {
    if targets.is_empty() {
        return Ok(Vec::new());
    }
    if !(step.is_finite() && step >= 0.0) {
        return Err(ScrollineError::validation("stagger step must be >= 0"));
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(ScrollineError::validation("stagger duration must be > 0"));
    }

    let total = step * (targets.len() - 1) as f64 + duration;
    targets
        .iter()
        .enumerate()
        .map(|(i, target)| {
            let start = (i as f64 * step) / total;
            let end = (i as f64 * step + duration) / total;
            fade_in_up(target.clone(), start, end.min(1.0), rise, ease)
        })
        .collect()
}

/// Split reveal: `intro` slides left by half of `travel` while `panel`
/// enters from `travel` pixels right and fades in, both linearly scrubbed
/// across the whole region.
pub fn slide_apart(intro: TargetId, panel: TargetId, travel: f64) -> Vec<Track> {
    vec![
        Track::new(
            intro,
            vec![
                Keyframe::new(0.0, styles(&[(StyleProperty::TranslateX, 0.0)]), Ease::Linear),
                Keyframe::new(
                    1.0,
                    styles(&[(StyleProperty::TranslateX, -travel * 0.5)]),
                    Ease::Linear,
                ),
            ],
        ),
        Track::new(
            panel,
            vec![
                Keyframe::new(
                    0.0,
                    styles(&[
                        (StyleProperty::TranslateX, travel),
                        (StyleProperty::Opacity, 0.0),
                    ]),
                    Ease::Linear,
                ),
                Keyframe::new(
                    1.0,
                    styles(&[
                        (StyleProperty::TranslateX, 0.0),
                        (StyleProperty::Opacity, 1.0),
                    ]),
                    Ease::Linear,
                ),
            ],
        ),
    ]
}

/// Fill that scales a bar from 0 to 1 linearly with region progress.
pub fn progress_fill(target: TargetId) -> Track {
    Track::new(
        target,
        vec![
            Keyframe::new(0.0, styles(&[(StyleProperty::Scale, 0.0)]), Ease::Linear),
            Keyframe::new(1.0, styles(&[(StyleProperty::Scale, 1.0)]), Ease::Linear),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Progress;

    fn ids(n: usize) -> Vec<TargetId> {
        (0..n).map(|i| TargetId::new(format!("line-{i}"))).collect()
    }

    #[test]
    fn stagger_windows_cover_the_region() {
        let tracks = stagger(&ids(4), 0.3, 0.4, 30.0, Ease::OutQuad).unwrap();
        assert_eq!(tracks.len(), 4);
        assert_eq!(tracks[0].keys[0].progress, 0.0);
        let last = &tracks[3];
        assert!((last.keys[1].progress - 1.0).abs() < 1e-12);
        // Each later line starts strictly after the previous one.
        for w in tracks.windows(2) {
            assert!(w[0].keys[0].progress < w[1].keys[0].progress);
        }
    }

    #[test]
    fn stagger_of_one_spans_everything() {
        let tracks = stagger(&ids(1), 0.3, 0.4, 30.0, Ease::Linear).unwrap();
        assert_eq!(tracks[0].keys[0].progress, 0.0);
        assert_eq!(tracks[0].keys[1].progress, 1.0);
    }

    #[test]
    fn stagger_rejects_bad_pacing() {
        assert!(stagger(&ids(3), -0.1, 0.4, 30.0, Ease::Linear).is_err());
        assert!(stagger(&ids(3), 0.3, 0.0, 30.0, Ease::Linear).is_err());
        assert!(stagger(&[], 0.3, 0.4, 30.0, Ease::Linear).unwrap().is_empty());
    }

    #[test]
    fn fade_in_up_rejects_inverted_window() {
        let r = fade_in_up(TargetId::new("x"), 0.6, 0.2, 30.0, Ease::Linear);
        assert!(r.is_err());
    }

    #[test]
    fn slide_apart_endpoints_match_split_layout() {
        let tracks = slide_apart(TargetId::new("intro"), TargetId::new("panel"), 800.0);
        let intro_end = tracks[0].sample(Progress::ONE);
        assert_eq!(
            intro_end[&StyleProperty::TranslateX],
            StyleValue::number(-400.0)
        );
        let panel_start = tracks[1].sample(Progress::ZERO);
        assert_eq!(
            panel_start[&StyleProperty::TranslateX],
            StyleValue::number(800.0)
        );
        assert_eq!(panel_start[&StyleProperty::Opacity], StyleValue::number(0.0));
    }
}
