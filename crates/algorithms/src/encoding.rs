//! Byte encodings shared by the point types
//!
//! Coordinates are big-endian `MODBYTES`-byte integers that must be below
//! the modulus. Points carry a leading tag byte except on the twist, whose
//! encoding is the four coordinates `Xa | Xb | Ya | Yb`.

use core::fmt;

use milagro_params::arch::MODBYTES;
use milagro_params::sizes::UNCOMPRESSED_POINT_SIZE;

use crate::error::{validate, Error, Result};
use crate::field::{FieldConfig, Fp};

/// An encoded curve point, at most [`UNCOMPRESSED_POINT_SIZE`] bytes
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PointBytes {
    buf: [u8; UNCOMPRESSED_POINT_SIZE],
    len: usize,
}

impl PointBytes {
    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= UNCOMPRESSED_POINT_SIZE);
        let mut buf = [0u8; UNCOMPRESSED_POINT_SIZE];
        buf[..bytes.len()].copy_from_slice(bytes);
        PointBytes {
            buf,
            len: bytes.len(),
        }
    }

    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the encoding is empty, which never happens for a valid point
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Leading tag byte
    pub fn tag(&self) -> u8 {
        self.buf[0]
    }
}

impl AsRef<[u8]> for PointBytes {
    fn as_ref(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Debug for PointBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_ref() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Split off the tag byte of a non-empty encoding
pub(crate) fn split_tag<'a>(bytes: &'a [u8], context: &'static str) -> Result<(u8, &'a [u8])> {
    validate::min_length(context, bytes.len(), 1)?;
    Ok((bytes[0], &bytes[1..]))
}

/// Decode one canonical coordinate
pub(crate) fn coordinate<F: FieldConfig>(bytes: &[u8], context: &'static str) -> Result<Fp<F>> {
    validate::length(context, bytes.len(), MODBYTES)?;
    Fp::from_slice(bytes).map_err(|_| Error::Encoding {
        context,
        reason: "coordinate not below the modulus",
    })
}

/// Lowercase hex of a byte string, as used by the test vectors
#[cfg(feature = "alloc")]
pub fn to_hex(bytes: &[u8]) -> alloc::string::String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes
#[cfg(feature = "alloc")]
pub fn from_hex(s: &str) -> Result<alloc::vec::Vec<u8>> {
    hex::decode(s).map_err(|_| Error::Encoding {
        context: "hex string",
        reason: "invalid hex digit or odd length",
    })
}

#[cfg(feature = "alloc")]
mod serialize {
    use alloc::vec::Vec;

    use milagro_api::{Result as CoreResult, Serialize};
    use milagro_params::sizes::{FP12_SIZE, TWIST_POINT_SIZE};

    use crate::ec::{
        EdwardsCurve, EdwardsPoint, MontgomeryCurve, MontgomeryPoint, PairingCurve, TwistPoint,
        WeierstrassCurve, WeierstrassPoint,
    };
    use crate::error::{to_core_result, validate, Error};
    use crate::field::{FieldConfig, Fp12};

    impl<C: WeierstrassCurve> Serialize for WeierstrassPoint<C> {
        fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
            to_core_result(WeierstrassPoint::from_bytes(bytes), "weierstrass point")
        }

        fn to_bytes(&self) -> Vec<u8> {
            WeierstrassPoint::to_bytes(self, false).as_ref().to_vec()
        }
    }

    impl<C: EdwardsCurve> Serialize for EdwardsPoint<C> {
        fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
            to_core_result(EdwardsPoint::from_bytes(bytes), "edwards point")
        }

        fn to_bytes(&self) -> Vec<u8> {
            EdwardsPoint::to_bytes(self, false).as_ref().to_vec()
        }
    }

    impl<C: MontgomeryCurve> Serialize for MontgomeryPoint<C> {
        fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
            to_core_result(MontgomeryPoint::from_bytes(bytes), "montgomery point")
        }

        fn to_bytes(&self) -> Vec<u8> {
            MontgomeryPoint::to_bytes(self).as_ref().to_vec()
        }
    }

    impl<C: PairingCurve> Serialize for TwistPoint<C> {
        fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
            to_core_result(TwistPoint::from_slice(bytes), "twist point")
        }

        fn to_bytes(&self) -> Vec<u8> {
            let b: [u8; TWIST_POINT_SIZE] = TwistPoint::to_bytes(self);
            b.to_vec()
        }
    }

    impl<F: FieldConfig> Serialize for Fp12<F> {
        fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
            let decoded = (|| {
                validate::length("fp12 element", bytes.len(), FP12_SIZE)?;
                let mut arr = [0u8; FP12_SIZE];
                arr.copy_from_slice(bytes);
                Option::from(Fp12::from_bytes(&arr)).ok_or(Error::Encoding {
                    context: "fp12 element",
                    reason: "coefficient not below the modulus",
                })
            })();
            to_core_result(decoded, "fp12 element")
        }

        fn to_bytes(&self) -> Vec<u8> {
            Fp12::to_bytes(self).to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Bn254Fp;

    #[test]
    fn test_point_bytes_slice() {
        let p = PointBytes::from_slice(&[0x02, 0xaa, 0xbb]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.tag(), 0x02);
        assert_eq!(p.as_ref(), &[0x02, 0xaa, 0xbb]);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_split_tag_rejects_empty() {
        assert!(matches!(
            split_tag(&[], "test"),
            Err(Error::Length { expected: 1, actual: 0, .. })
        ));
    }

    #[test]
    fn test_coordinate_rejects_modulus() {
        let p = <Bn254Fp as FieldConfig>::MODULUS.to_bytes();
        assert!(matches!(
            coordinate::<Bn254Fp>(&p, "test"),
            Err(Error::Encoding { .. })
        ));
        let mut below = p;
        below[MODBYTES - 1] -= 1;
        assert!(coordinate::<Bn254Fp>(&below, "test").is_ok());
        assert!(coordinate::<Bn254Fp>(&p[1..], "test").is_err());
    }
}
