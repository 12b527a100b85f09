//! Error types for controller setup and batch stepping.
//!
//! Resolving a move never fails. Every collision outcome (no hit, slope too
//! steep, wrong-facing normal) is expressed through the returned displacement
//! and contact state. Errors only arise while configuring controllers.

use thiserror::Error;

/// Errors raised when validating a [`ControllerConfig`](crate::ControllerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Skin width must be finite and strictly positive
    #[error("skin width must be a finite positive number, got {0}")]
    InvalidSkinWidth(f32),

    /// A slope limit was outside 0..=90 degrees
    #[error("{name} must be within 0..=90 degrees, got {value}")]
    AngleOutOfRange {
        /// Which setting was rejected
        name: &'static str,
        /// The rejected value
        value: f32,
    },

    /// Slope comparison tolerance must be finite and non-negative
    #[error("slope epsilon must be finite and non-negative, got {0}")]
    InvalidSlopeEpsilon(f32),

    /// A configuration file could not be parsed
    #[error("failed to parse controller config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by batch stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// Every body needs exactly one displacement
    #[error("{bodies} bodies but {displacements} displacements")]
    LengthMismatch {
        /// Number of bodies passed
        bodies: usize,
        /// Number of displacements passed
        displacements: usize,
    },
}
