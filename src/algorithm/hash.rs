use crate::error::CryptoError;
use std::convert::TryFrom;
use std::str::FromStr;

/// Hash functions available for HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha512,
}

pub const HASH_ALGORITHMS: [HashAlgorithm; 3] = [
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha512,
];

impl HashAlgorithm {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }

    /// Digest (and thereby HMAC tag) length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
}

impl AsRef<str> for HashAlgorithm {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HASH_ALGORITHMS
            .iter()
            .copied()
            .find(|h| h.name() == s)
            .ok_or_else(|| CryptoError::UnsupportedHash(s.into()))
    }
}

impl TryFrom<&str> for HashAlgorithm {
    type Error = CryptoError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
