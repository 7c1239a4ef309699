// Copyright (c) 2024 The Botho Foundation

//! Contract digests and their encoding as curve scalars.

use core::array::TryFromSliceError;

use crate::curve::CurveOps;

/// Size of a contract digest in bytes.
pub const CONTRACT_DIGEST_BYTES: usize = 32;

/// An opaque 32-byte commitment digest.
///
/// In a Taproot-style deployment this is the Merkle root of a tree of
/// alternative spending conditions, but the crate treats it as raw bytes:
/// any 32-byte value is a valid contract, and how the digest is produced is
/// entirely the caller's business.
///
/// Note that the all-zero digest is ordinary input. It reduces to the zero
/// scalar, so tweaking with it returns the original key unchanged. Callers
/// that need "no commitment" to be distinguishable from a commitment to the
/// zero digest must encode that distinction upstream.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractDigest([u8; CONTRACT_DIGEST_BYTES]);

impl ContractDigest {
    /// Wrap a 32-byte digest.
    pub const fn new(bytes: [u8; CONTRACT_DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; CONTRACT_DIGEST_BYTES] {
        &self.0
    }

    /// Interpret the digest as a big-endian unsigned integer and reduce it
    /// modulo the curve's group order.
    ///
    /// Reduction is mandatory, not defensive: a 32-byte value may exceed N,
    /// and skipping the reduction would make the public and private tweak
    /// paths disagree for such digests. A digest whose integer value equals
    /// N reduces to the zero scalar and therefore behaves exactly like the
    /// all-zero digest.
    pub fn to_scalar<C: CurveOps>(&self, curve: &C) -> C::Scalar {
        curve.reduce_digest(&self.0)
    }
}

impl core::fmt::Debug for ContractDigest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ContractDigest({:02x?}...)", &self.0[..8])
    }
}

impl From<[u8; CONTRACT_DIGEST_BYTES]> for ContractDigest {
    fn from(bytes: [u8; CONTRACT_DIGEST_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ContractDigest {
    type Error = TryFromSliceError;

    fn try_from(bytes: &[u8]) -> core::result::Result<Self, Self::Error> {
        <[u8; CONTRACT_DIGEST_BYTES]>::try_from(bytes).map(Self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ContractDigest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ContractDigest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
        Self::try_from(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::mock::MockCurve;

    #[test]
    fn zero_digest_reduces_to_zero_scalar() {
        let curve = MockCurve::new();
        let digest = ContractDigest::new([0u8; 32]);
        assert_eq!(digest.to_scalar(&curve), 0);
    }

    #[test]
    fn slice_conversion_checks_length() {
        assert!(ContractDigest::try_from([1u8; 32].as_slice()).is_ok());
        assert!(ContractDigest::try_from([1u8; 31].as_slice()).is_err());
        assert!(ContractDigest::try_from([1u8; 33].as_slice()).is_err());
    }

    #[test]
    fn debug_shows_prefix_only() {
        let digest = ContractDigest::new([0xab; 32]);
        let repr = format!("{digest:?}");
        assert!(repr.starts_with("ContractDigest("));
        assert!(repr.ends_with("...)"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let digest = ContractDigest::new([0x5c; 32]);
        let json = serde_json::to_string(&digest).unwrap();
        let back: ContractDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, back);

        // Wrong length fails to deserialize rather than truncating.
        let err: std::result::Result<ContractDigest, _> = serde_json::from_str("[1,2,3]");
        assert!(err.is_err());
    }
}
