//! Endlessly looping gallery rows. Position is a pure function of
//! accumulated play time wrapped modulo the row span, so pausing on hover
//! and resuming never causes a jump.

use crate::foundation::error::{ScrollineError, ScrollineResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MarqueeDirection {
    Leftward,
    Rightward,
}

pub struct Marquee {
    span: f64,     // width of one unduplicated card run, px
    velocity: f64, // px per second
    direction: MarqueeDirection,
    played: f64, // accumulated unpaused seconds
    paused: bool,
}

impl Marquee {
    pub fn new(span: f64, velocity: f64, direction: MarqueeDirection) -> ScrollineResult<Self> {
        if !(span.is_finite() && span > 0.0) {
            return Err(ScrollineError::validation("Marquee span must be > 0"));
        }
        if !(velocity.is_finite() && velocity > 0.0) {
            return Err(ScrollineError::validation("Marquee velocity must be > 0"));
        }
        Ok(Self {
            span,
            velocity,
            direction,
            played: 0.0,
            paused: false,
        })
    }

    /// Row constructor with alternating drift: even rows travel leftward,
    /// odd rows rightward.
    pub fn for_row(row: usize, span: f64, velocity: f64) -> ScrollineResult<Self> {
        let direction = if row % 2 == 0 {
            MarqueeDirection::Leftward
        } else {
            MarqueeDirection::Rightward
        };
        Self::new(span, velocity, direction)
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance play time by `dt` seconds; ignored while paused.
    pub fn advance(&mut self, dt: f64) {
        if self.paused || !(dt.is_finite()) || dt <= 0.0 {
            return;
        }
        self.played += dt;
    }

    /// Current horizontal translation of the row in pixels, always within
    /// `(-span, 0]`.
    pub fn offset(&self) -> f64 {
        let travelled = (self.played * self.velocity) % self.span;
        match self.direction {
            MarqueeDirection::Leftward => -travelled,
            MarqueeDirection::Rightward => {
                if travelled == 0.0 {
                    0.0
                } else {
                    travelled - self.span
                }
            }
        }
    }
}
