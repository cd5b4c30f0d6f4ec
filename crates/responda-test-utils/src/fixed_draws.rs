// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic uniform source for selector tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use responda_engine::UniformSource;

/// Replays a fixed sequence of draws, repeating the last value once the
/// sequence is exhausted.
///
/// `FixedDraws::new(&[0.0])` forces the exploit branch on every
/// selection; `FixedDraws::new(&[0.99, 0.0])` forces one explore draw
/// landing on the top-ranked candidate.
pub struct FixedDraws {
    values: Vec<f64>,
    next: AtomicUsize,
}

impl FixedDraws {
    /// A source replaying `values` in order.
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "FixedDraws needs at least one value");
        Self {
            values: values.to_vec(),
            next: AtomicUsize::new(0),
        }
    }

    /// A source that always returns `value`.
    pub fn always(value: f64) -> Self {
        Self::new(&[value])
    }
}

impl UniformSource for FixedDraws {
    fn draw(&self) -> f64 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        *self
            .values
            .get(i)
            .or_else(|| self.values.last())
            .expect("at least one draw value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_sequence_then_repeats_last() {
        let draws = FixedDraws::new(&[0.1, 0.9]);
        assert_eq!(draws.draw(), 0.1);
        assert_eq!(draws.draw(), 0.9);
        assert_eq!(draws.draw(), 0.9);
    }

    #[test]
    fn always_repeats_single_value() {
        let draws = FixedDraws::always(0.5);
        assert_eq!(draws.draw(), 0.5);
        assert_eq!(draws.draw(), 0.5);
    }
}
