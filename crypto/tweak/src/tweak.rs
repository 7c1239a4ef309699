// Copyright (c) 2024 The Botho Foundation

//! The two pay-to-contract tweak operations.
//!
//! Both operations are single-shot pure functions: no state, no I/O, no
//! retries. They may be called in either order, from any number of threads,
//! and are consistent with each other whenever they are given the same
//! digest and matching halves of one keypair.

use crate::contract::ContractDigest;
use crate::curve::CurveOps;
use crate::error::{Result, TweakError};

/// Tweak a public key with a contract commitment.
///
/// Computes `Q = P + c*G`, where `c` is the digest reduced modulo the group
/// order. Payments locked to `Q` commit funds to knowledge of both the
/// original secret and the contract data.
///
/// # Errors
///
/// - [`TweakError::InvalidPoint`] if `public_key` is not on the curve.
/// - [`TweakError::DegenerateTweak`] if `c*G == -P`, which would make `Q`
///   the point at infinity and the output unspendable. The condition is
///   deterministic for a given `(P, digest)` pair: the caller must re-derive
///   the digest upstream rather than retry.
pub fn tweak_public_key<C: CurveOps>(
    curve: &C,
    public_key: &C::Point,
    contract: &ContractDigest,
) -> Result<C::Point> {
    if !curve.is_on_curve(public_key) {
        return Err(TweakError::InvalidPoint);
    }

    // C = c*G, then Q = P + C.
    let commitment = curve.scalar_base_mul(&contract.to_scalar(curve));
    let tweaked = curve.point_add(public_key, &commitment);

    if curve.is_identity(&tweaked) {
        return Err(TweakError::DegenerateTweak);
    }
    Ok(tweaked)
}

/// Tweak a secret key with a contract commitment.
///
/// Computes `w = (x + c) mod N`. For matching inputs the result signs for
/// the key produced by [`tweak_public_key`]: `w*G == Q`.
///
/// # Errors
///
/// [`TweakError::DegenerateTweak`] if `w == 0` - caused by exactly the same
/// digest that drives the public path to the point at infinity, so callers
/// should treat the two as one logical failure.
pub fn tweak_secret_key<C: CurveOps>(
    curve: &C,
    secret: &C::Scalar,
    contract: &ContractDigest,
) -> Result<C::Scalar> {
    let tweaked = curve.scalar_add(secret, &contract.to_scalar(curve));

    if curve.scalar_is_zero(&tweaked) {
        return Err(TweakError::DegenerateTweak);
    }
    Ok(tweaked)
}
