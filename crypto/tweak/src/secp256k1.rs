// Copyright (c) 2024 The Botho Foundation

//! secp256k1 backend for the tweak primitives, built on the `k256` crate.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, ProjectivePoint, Scalar, U256};
use subtle::ConstantTimeEq;

use crate::curve::CurveOps;
use crate::error::{Result, TweakError};

/// The secp256k1 group order N.
pub const GROUP_ORDER: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// The prime P of the field over which secp256k1 is defined.
pub const FIELD_MODULUS: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Size of a compressed SEC1 public key encoding in bytes.
pub const COMPRESSED_POINT_BYTES: usize = 33;

/// Immutable secp256k1 curve context.
///
/// Carries the curve constants and implements [`CurveOps`] on top of `k256`
/// arithmetic. The context holds no mutable state: construct it once and
/// share it freely across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Context {
    order: U256,
    field_modulus: U256,
}

impl Secp256k1Context {
    /// Create the context. The constants are fixed at compile time, so this
    /// is free and infallible.
    pub const fn new() -> Self {
        Self { order: GROUP_ORDER, field_modulus: FIELD_MODULUS }
    }

    /// The group order N.
    pub const fn order(&self) -> U256 {
        self.order
    }

    /// The field prime P.
    pub const fn field_modulus(&self) -> U256 {
        self.field_modulus
    }

    /// Decode a SEC1-encoded public key (compressed or uncompressed).
    ///
    /// Rejects malformed encodings, encodings whose coordinates do not
    /// satisfy the curve equation, and the identity encoding with
    /// [`TweakError::InvalidPoint`] - none of them is usable as a public
    /// key.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<ProjectivePoint> {
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| TweakError::InvalidPoint)?;
        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or(TweakError::InvalidPoint)?;
        let point = ProjectivePoint::from(affine);
        if point == ProjectivePoint::IDENTITY {
            return Err(TweakError::InvalidPoint);
        }
        Ok(point)
    }

    /// Encode a point as a compressed SEC1 public key.
    ///
    /// The identity has no public-key encoding and is rejected with
    /// [`TweakError::InvalidPoint`]; points returned by the tweak
    /// operations are never the identity.
    pub fn encode_point(&self, point: &ProjectivePoint) -> Result<[u8; COMPRESSED_POINT_BYTES]> {
        if *point == ProjectivePoint::IDENTITY {
            return Err(TweakError::InvalidPoint);
        }
        let encoded = point.to_affine().to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_POINT_BYTES];
        out.copy_from_slice(encoded.as_bytes());
        Ok(out)
    }
}

impl Default for Secp256k1Context {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveOps for Secp256k1Context {
    type Scalar = Scalar;
    type Point = ProjectivePoint;

    fn scalar_base_mul(&self, scalar: &Scalar) -> ProjectivePoint {
        ProjectivePoint::GENERATOR * scalar
    }

    fn point_add(&self, a: &ProjectivePoint, b: &ProjectivePoint) -> ProjectivePoint {
        a + b
    }

    fn is_identity(&self, point: &ProjectivePoint) -> bool {
        *point == ProjectivePoint::IDENTITY
    }

    fn is_on_curve(&self, _point: &ProjectivePoint) -> bool {
        // ProjectivePoint values are on the curve by construction; off-curve
        // encodings never get past decode_point.
        true
    }

    fn scalar_add(&self, a: &Scalar, b: &Scalar) -> Scalar {
        a + b
    }

    fn scalar_is_zero(&self, scalar: &Scalar) -> bool {
        bool::from(scalar.ct_eq(&Scalar::ZERO))
    }

    fn reduce_digest(&self, bytes: &[u8; 32]) -> Scalar {
        // Interpret big-endian and reduce modulo the group order.
        <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(bytes))
    }
}
