// Copyright (c) 2024 The Botho Foundation

//! Concrete secp256k1 key material for pay-to-contract tweaking.

use k256::{NonZeroScalar, ProjectivePoint, Scalar};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::contract::ContractDigest;
use crate::error::Result;
use crate::secp256k1::Secp256k1Context;
use crate::tweak::{tweak_public_key, tweak_secret_key};

/// A secp256k1 keypair `(x, P)` with `P = x*G`.
///
/// The pair can only be built from a nonzero secret, so the invariant holds
/// by construction. The secret itself always comes from the caller's key
/// store: this crate has no key generation policy of its own.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    secret: Scalar,
    #[zeroize(skip)]
    public: ProjectivePoint,
}

impl KeyPair {
    /// Build the pair from an existing secret, deriving `P = x*G`.
    pub fn from_secret(secret: NonZeroScalar) -> Self {
        let secret = *secret.as_ref();
        let public = ProjectivePoint::GENERATOR * secret;
        Self { secret, public }
    }

    /// Build the pair from the 32 big-endian bytes of the secret.
    ///
    /// Returns `None` unless the bytes encode an integer in `[1, N)`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let secret = Option::<NonZeroScalar>::from(NonZeroScalar::from_repr((*bytes).into()))?;
        Some(Self::from_secret(secret))
    }

    /// The secret scalar x.
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// The public point P = x*G.
    pub fn public_key(&self) -> &ProjectivePoint {
        &self.public
    }

    /// Tweak both halves of the pair with `contract`.
    ///
    /// Runs the private and public tweak paths and returns the combined
    /// result. Fails with
    /// [`DegenerateTweak`](crate::TweakError::DegenerateTweak) iff either
    /// path would produce the group identity; both paths degenerate for the
    /// same digests, so one error covers the pair.
    pub fn tweak(
        &self,
        curve: &Secp256k1Context,
        contract: &ContractDigest,
    ) -> Result<TweakedKeyPair> {
        let secret = tweak_secret_key(curve, &self.secret, contract)?;
        let public = tweak_public_key(curve, &self.public, contract)?;
        debug_assert_eq!(ProjectivePoint::GENERATOR * secret, public);
        Ok(TweakedKeyPair { secret, public })
    }
}

impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// The tweaked pair `(w, Q)` derived from a [`KeyPair`] and a contract.
///
/// A derived value with no lifecycle of its own: it is valid only in
/// association with the `(keypair, digest)` that produced it, and should be
/// recomputed on demand rather than persisted. The public half feeds the
/// caller's output-locking logic, the secret half the caller's signer.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TweakedKeyPair {
    secret: Scalar,
    #[zeroize(skip)]
    public: ProjectivePoint,
}

impl TweakedKeyPair {
    /// The tweaked secret w = (x + c) mod N.
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// The tweaked secret as 32 big-endian bytes.
    pub fn secret_be_bytes(&self) -> [u8; 32] {
        self.secret.to_bytes().into()
    }

    /// The tweaked public key Q = P + c*G.
    pub fn public_key(&self) -> &ProjectivePoint {
        &self.public
    }
}

impl core::fmt::Debug for TweakedKeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TweakedKeyPair")
            .field("public", &self.public)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
