//! Entry gate: a four-digit code standing between the visitor and the
//! animated content. Everything downstream consumes only the boolean
//! outcome; the comparison itself is deliberately unremarkable.

use crate::foundation::error::{ScrollineError, ScrollineResult};

pub struct Gate {
    code: [u8; 4],
    open: bool,
}

impl Gate {
    /// Build a gate from a four-digit code string such as `"0412"`.
    pub fn new(code: &str) -> ScrollineResult<Self> {
        let digits: Vec<u8> = code
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| d as u8))
            .collect();
        if digits.len() != 4 || code.chars().count() != 4 {
            return Err(ScrollineError::validation(
                "Gate code must be exactly four digits",
            ));
        }
        let mut out = [0u8; 4];
        out.copy_from_slice(&digits);
        Ok(Self {
            code: out,
            open: false,
        })
    }

    /// Compare an attempt against the code. A correct attempt opens the
    /// gate permanently; wrong or malformed attempts leave it shut.
    pub fn try_open(&mut self, attempt: &str) -> bool {
        let digits: Vec<u8> = attempt
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| d as u8))
            .collect();
        if digits.len() == 4 && attempt.chars().count() == 4 && digits == self.code {
            self.open = true;
        }
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
