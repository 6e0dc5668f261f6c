//! Wire encoding of curve points and private key material.
//!
//! Public keys travel as uncompressed points in the form specified in section 4.3.6 of
//! ANSI X9.62: a `0x04` tag followed by the big-endian X and Y coordinates, each zero padded to
//! the curve's coordinate length. This layout is fixed by the peers we interoperate with and
//! does not depend on the backend that produced the key.

use crate::algorithm::Curve;
use crate::error::CryptoError;
use crate::util::check;
use zeroize::{Zeroize, Zeroizing};

/// Tag byte of an uncompressed point.
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Affine public point with both coordinates as fixed width big-endian integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicPoint {
    x: Vec<u8>,
    y: Vec<u8>,
}

impl PublicPoint {
    /// Build a point from big-endian coordinates of arbitrary (but not excessive) length.
    pub fn new(x: &[u8], y: &[u8], coordinate_len: usize) -> Result<Self, CryptoError> {
        Ok(Self {
            x: pad_be(x, coordinate_len).ok_or(CryptoError::InvalidKeyFormat)?,
            y: pad_be(y, coordinate_len).ok_or(CryptoError::InvalidKeyFormat)?,
        })
    }

    pub fn x(&self) -> &[u8] {
        &self.x
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }

    pub fn coordinate_len(&self) -> usize {
        self.x.len()
    }

    /// The uncompressed wire encoding (`0x04 || X || Y`).
    pub fn encode(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(1 + self.x.len() + self.y.len());
        v.push(UNCOMPRESSED_POINT_TAG);
        v.extend_from_slice(&self.x);
        v.extend_from_slice(&self.y);
        v
    }
}

/// Private key material as supplied for reproducible test vectors.
///
/// `public` is the wire encoding of the corresponding public point and `private` the
/// big-endian private scalar. Passing this to a derivation replaces the ephemeral scalar of
/// the key pair and thereby gives up its secrecy guarantee. Never use it outside of tests.
#[derive(Clone)]
pub struct ForcedPrivateKey {
    pub public: Vec<u8>,
    pub private: Vec<u8>,
}

impl ForcedPrivateKey {
    pub fn new(public: &[u8], private: &[u8]) -> Self {
        Self {
            public: public.to_vec(),
            private: private.to_vec(),
        }
    }
}

impl std::fmt::Debug for ForcedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ForcedPrivateKey(public: {:?}, private: ...)", self.public)
    }
}

impl Drop for ForcedPrivateKey {
    fn drop(&mut self) {
        self.private.zeroize()
    }
}

/// Decoded form of a [ForcedPrivateKey].
pub struct PrivateComponents {
    pub point: PublicPoint,
    scalar: Zeroizing<Vec<u8>>,
}

impl PrivateComponents {
    /// The private scalar, big-endian and padded to the coordinate length.
    pub fn scalar(&self) -> &[u8] {
        &self.scalar
    }
}

impl std::fmt::Debug for PrivateComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateComponents({:?}, ...)", self.point)
    }
}

/// Encode a point given as big-endian coordinates into `0x04 || X || Y`.
///
/// The output always has `1 + 2 * coordinate_len` bytes. Coordinates wider than
/// `coordinate_len` (ignoring leading zeros) are rejected.
pub fn encode_public_point(x: &[u8], y: &[u8], coordinate_len: usize) -> Result<Vec<u8>, CryptoError> {
    Ok(PublicPoint::new(x, y, coordinate_len)?.encode())
}

/// Decode the wire encoding of a point on `curve`.
pub fn decode_public_point(curve: Curve, bytes: &[u8]) -> Result<PublicPoint, CryptoError> {
    let (x, y) = split_point(curve, bytes).ok_or(CryptoError::InvalidKeyFormat)?;
    Ok(PublicPoint {
        x: x.to_vec(),
        y: y.to_vec(),
    })
}

/// Decode the embedded public point and the private scalar of a forced private key.
pub fn decode_private_key(curve: Curve, key: &ForcedPrivateKey) -> Result<PrivateComponents, CryptoError> {
    let point = decode_public_point(curve, &key.public)?;
    let scalar = pad_be(&key.private, curve.coordinate_len()).ok_or(CryptoError::InvalidKeyFormat)?;
    Ok(PrivateComponents {
        point,
        scalar: Zeroizing::new(scalar),
    })
}

fn split_point(curve: Curve, bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let len = curve.coordinate_len();
    check(bytes.len() == curve.public_key_len())?;
    check(bytes[0] == UNCOMPRESSED_POINT_TAG)?;
    Some((&bytes[1..1 + len], &bytes[1 + len..]))
}

/// Left pad a big-endian unsigned integer with zeros to exactly `len` bytes.
///
/// Returns `None` if the value does not fit.
pub fn pad_be(x: &[u8], len: usize) -> Option<Vec<u8>> {
    let skip = x.iter().take_while(|b| **b == 0).count();
    let x = &x[skip..];
    check(x.len() <= len)?;
    let mut v = vec![0; len - x.len()];
    v.extend_from_slice(x);
    Some(v)
}
