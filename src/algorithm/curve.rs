use crate::error::CryptoError;
use std::convert::TryFrom;
use std::str::FromStr;

/// A named curve usable for ephemeral key agreement.
///
/// Each curve maps to the bit length of the derived secret and to the fixed per-coordinate
/// byte length used by the wire encoding. There is no default: unknown names are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    P256,
    P384,
    P521,
}

pub const CURVES: [Curve; 3] = [Curve::P256, Curve::P384, Curve::P521];

impl Curve {
    pub const fn name(self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }

    /// Bit length of the shared secret.
    pub const fn secret_bits(self) -> usize {
        match self {
            Self::P256 => 256,
            Self::P384 => 384,
            Self::P521 => 521,
        }
    }

    /// Shared secret length in bytes (bit length rounded up).
    pub const fn secret_len(self) -> usize {
        (self.secret_bits() + 7) / 8
    }

    /// Byte length of a single big-endian coordinate (and of a private scalar).
    pub const fn coordinate_len(self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }

    /// Length of the uncompressed wire encoding: tag byte plus both coordinates.
    pub const fn public_key_len(self) -> usize {
        1 + 2 * self.coordinate_len()
    }

    /// The curve whose wire public keys have exactly `len` bytes (if any).
    pub fn from_public_key_len(len: usize) -> Option<Self> {
        CURVES.iter().copied().find(|c| c.public_key_len() == len)
    }
}

impl AsRef<str> for Curve {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl std::fmt::Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CURVES
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| CryptoError::UnsupportedCurve(s.into()))
    }
}

impl TryFrom<&str> for Curve {
    type Error = CryptoError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_01() {
        assert_eq!(Ok(Curve::P256), "P-256".parse::<Curve>());
        assert_eq!(Ok(Curve::P384), "P-384".parse::<Curve>());
        assert_eq!(Ok(Curve::P521), "P-521".parse::<Curve>());
    }

    #[test]
    fn test_parse_02() {
        assert_eq!(
            Err(CryptoError::UnsupportedCurve("P-999".into())),
            Curve::try_from("P-999")
        );
        // no case folding or aliases
        assert!("p-256".parse::<Curve>().is_err());
        assert!("secp256r1".parse::<Curve>().is_err());
    }

    #[test]
    fn test_lengths_01() {
        assert_eq!(Curve::P256.public_key_len(), 65);
        assert_eq!(Curve::P384.public_key_len(), 97);
        assert_eq!(Curve::P521.public_key_len(), 133);
        assert_eq!(Curve::P521.secret_len(), 66);
        for c in CURVES {
            assert_eq!(c.secret_len(), c.coordinate_len());
        }
    }

    #[test]
    fn test_from_public_key_len_01() {
        assert_eq!(Curve::from_public_key_len(97), Some(Curve::P384));
        assert_eq!(Curve::from_public_key_len(64), None);
    }

    #[test]
    fn test_display_01() {
        for c in CURVES {
            assert_eq!(c, c.to_string().parse::<Curve>().unwrap());
        }
    }
}
