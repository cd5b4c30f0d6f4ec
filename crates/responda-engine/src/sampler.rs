// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable randomness for the template selector.
//!
//! The selector never calls a global RNG directly; it draws from this
//! trait so tests can force the exploit or explore branch.

/// A source of uniform draws in `[0, 1)`.
pub trait UniformSource: Send + Sync {
    /// Draw the next uniform value in `[0, 1)`.
    fn draw(&self) -> f64;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl UniformSource for ThreadRngSource {
    fn draw(&self) -> f64 {
        rand::random::<f64>()
    }
}
