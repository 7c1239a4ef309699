// Copyright (c) 2024 The Botho Foundation

//! Curve arithmetic capability trait.
//!
//! The tweak operations need very little from the underlying curve:
//! generator multiplication, point addition, an identity test, and scalar
//! arithmetic modulo the group order. Keeping that surface behind a trait
//! lets the tweak logic be exercised against a small reference group in
//! tests, independent of the production secp256k1 backend.

use core::fmt::Debug;

/// The curve operations required by the tweak primitives.
///
/// Implementations are immutable once constructed and shareable across
/// threads without synchronization; every method is a pure function of its
/// inputs.
pub trait CurveOps {
    /// An integer modulo the group order N.
    type Scalar: Clone + PartialEq + Debug;
    /// A group element, including the identity.
    type Point: Clone + PartialEq + Debug;

    /// Compute `scalar * G` for the fixed generator G.
    fn scalar_base_mul(&self, scalar: &Self::Scalar) -> Self::Point;

    /// Add two group elements.
    fn point_add(&self, a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// Whether `point` is the group identity (the point at infinity).
    fn is_identity(&self, point: &Self::Point) -> bool;

    /// Whether `point` satisfies the curve equation.
    ///
    /// Backends whose point types are on-curve by construction may answer
    /// `true` unconditionally; the check exists so that malformed points
    /// from more permissive representations are rejected before use.
    fn is_on_curve(&self, point: &Self::Point) -> bool;

    /// Compute `(a + b) mod N`.
    fn scalar_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Whether `scalar` is zero.
    fn scalar_is_zero(&self, scalar: &Self::Scalar) -> bool;

    /// Interpret 32 bytes as a big-endian unsigned integer and reduce it
    /// modulo the group order N.
    fn reduce_digest(&self, bytes: &[u8; 32]) -> Self::Scalar;
}
