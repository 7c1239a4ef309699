// Copyright (c) 2024 The Botho Foundation

#![deny(unsafe_code)]

//! Pay-to-contract key tweaking for Botho.
//!
//! A pay-to-contract key binds a secp256k1 public key to an arbitrary
//! 32-byte commitment (typically the Merkle root of a tree of alternative
//! spending conditions) such that:
//!
//! - the tweaked public key is indistinguishable from any other public key,
//!   and
//! - the holder of the original private key can derive a private key for
//!   the tweaked public key, proving knowledge of both the original secret
//!   and the committed data.
//!
//! This is the construction that preceded Taproot outputs. Given a keypair
//! `(x, P)` with `P = x*G` and a contract digest `d` reduced to the scalar
//! `c = int(d) mod N`:
//!
//! ```text
//! Q = P + c*G          (tweaked public key)
//! w = (x + c) mod N    (tweaked private key)
//! ```
//!
//! and the two stay consistent: `w*G == Q`.
//!
//! The crate does not sign, does not verify signatures, and does not build
//! commitment trees. It consumes a fixed-size digest and produces tweaked
//! key material; everything before and after that moment belongs to the
//! caller.
//!
//! # Example
//!
//! ```rust
//! use bth_crypto_tweak::{ContractDigest, CurveOps, KeyPair, Secp256k1Context};
//!
//! let curve = Secp256k1Context::new();
//!
//! // The internal keypair; the secret comes from the caller's key store.
//! let keypair = KeyPair::from_be_bytes(&[0x11; 32]).expect("valid secret");
//!
//! // Commit to contract data (a Merkle root of spending scripts in practice).
//! let contract = ContractDigest::new([0x7a; 32]);
//!
//! let tweaked = keypair.tweak(&curve, &contract).expect("non-degenerate tweak");
//!
//! // The tweaked secret signs for the tweaked public key.
//! assert_eq!(
//!     &curve.scalar_base_mul(tweaked.secret()),
//!     tweaked.public_key(),
//! );
//! ```

mod contract;
mod curve;
mod error;
mod keys;
mod secp256k1;
mod tweak;

pub use contract::{ContractDigest, CONTRACT_DIGEST_BYTES};
pub use curve::CurveOps;
pub use error::{Result, TweakError};
pub use keys::{KeyPair, TweakedKeyPair};
pub use secp256k1::{
    Secp256k1Context, COMPRESSED_POINT_BYTES, FIELD_MODULUS, GROUP_ORDER,
};
pub use tweak::{tweak_public_key, tweak_secret_key};

/// Re-export of the `k256` crate the public API is expressed in.
pub use k256;

#[cfg(test)]
mod tests {
    use super::*;
    use k256::{NonZeroScalar, ProjectivePoint};

    #[test]
    fn test_full_workflow() {
        let curve = Secp256k1Context::new();
        let keypair = KeyPair::from_be_bytes(&[0x55; 32]).unwrap();
        let contract = ContractDigest::new(*b"merkle root of spending scripts!");

        // Lock funds to the tweaked public key...
        let output_key = tweak_public_key(&curve, keypair.public_key(), &contract).unwrap();

        // ...and later derive the scalar that signs for it.
        let spend_key = tweak_secret_key(&curve, keypair.secret(), &contract).unwrap();

        assert_eq!(curve.scalar_base_mul(&spend_key), output_key);

        // The combined helper agrees with the two independent calls.
        let tweaked = keypair.tweak(&curve, &contract).unwrap();
        assert_eq!(tweaked.public_key(), &output_key);
        assert_eq!(tweaked.secret(), &spend_key);
    }

    #[test]
    fn test_degenerate_digest_rejected_on_both_paths() {
        let curve = Secp256k1Context::new();
        let contract = ContractDigest::new([0x07; 32]);

        // Pick x = -c so that x + c == 0 and P + c*G is the identity.
        let c = contract.to_scalar(&curve);
        let secret = Option::<NonZeroScalar>::from(NonZeroScalar::new(-c)).unwrap();
        let keypair = KeyPair::from_secret(secret);

        assert_eq!(
            tweak_public_key(&curve, keypair.public_key(), &contract),
            Err(TweakError::DegenerateTweak)
        );
        assert_eq!(
            tweak_secret_key(&curve, keypair.secret(), &contract),
            Err(TweakError::DegenerateTweak)
        );
        assert_eq!(
            keypair.tweak(&curve, &contract).unwrap_err(),
            TweakError::DegenerateTweak
        );
    }

    #[test]
    fn test_zero_digest_returns_key_unchanged() {
        let curve = Secp256k1Context::new();
        let keypair = KeyPair::from_be_bytes(&[0x21; 32]).unwrap();
        let contract = ContractDigest::new([0u8; 32]);

        let tweaked = keypair.tweak(&curve, &contract).unwrap();
        assert_eq!(tweaked.public_key(), keypair.public_key());
        assert_eq!(tweaked.secret(), keypair.secret());
    }

    #[test]
    fn test_generator_mul_matches_projective_arithmetic() {
        let curve = Secp256k1Context::new();
        let keypair = KeyPair::from_be_bytes(&[0x09; 32]).unwrap();
        assert_eq!(
            curve.scalar_base_mul(keypair.secret()),
            ProjectivePoint::GENERATOR * *keypair.secret()
        );
    }
}
