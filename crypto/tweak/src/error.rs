// Copyright (c) 2024 The Botho Foundation

//! Error types for pay-to-contract tweak operations.

use thiserror::Error;

/// Errors that can occur when tweaking keys.
///
/// Every failure here is a deterministic function of the inputs, so retrying
/// with the same inputs always fails the same way. A caller that hits
/// [`DegenerateTweak`](TweakError::DegenerateTweak) must re-derive the
/// contract digest upstream; this crate does not attempt any remediation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TweakError {
    /// An input public key is not a valid point on the curve.
    #[error("invalid point: not on the curve")]
    InvalidPoint,

    /// The tweak would produce the group identity: the point at infinity on
    /// the public path, the zero scalar on the private path. Both paths
    /// degenerate for the same digest, so callers see one failure, not two.
    #[error("degenerate tweak: result is the group identity")]
    DegenerateTweak,
}

/// Result type for tweak operations.
pub type Result<T> = core::result::Result<T, TweakError>;
