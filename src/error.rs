use std::error::Error;

/// Errors reported by key agreement and HMAC operations.
///
/// Every failure is surfaced to the immediate caller. The only failure that gets absorbed is
/// the accelerated provider failing to initialise (see [crate::backend::select_backend]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The curve name is not one of `P-256`, `P-384` or `P-521` (or a key belongs to another
    /// curve than the key pair it is used with).
    UnsupportedCurve(String),
    /// The hash name is not one of `SHA1`, `SHA256` or `SHA512`.
    UnsupportedHash(String),
    /// Malformed key bytes: wrong length or wrong point tag.
    InvalidKeyFormat,
    /// Neither the accelerated nor the standard provider could be constructed.
    BackendUnavailable,
    /// The provider rejected a well-formed request (point not on curve, scalar out of range).
    BackendOperationFailed(String),
}

impl Error for CryptoError {}

impl std::fmt::Display for CryptoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedCurve(x) => write!(f, "Unsupported curve: {}", x),
            Self::UnsupportedHash(x) => write!(f, "Unsupported hash algorithm: {}", x),
            Self::InvalidKeyFormat => write!(f, "Invalid key format"),
            Self::BackendUnavailable => write!(f, "No crypto backend available"),
            Self::BackendOperationFailed(x) => write!(f, "Backend operation failed: {}", x),
        }
    }
}

impl From<p256::elliptic_curve::Error> for CryptoError {
    fn from(_: p256::elliptic_curve::Error) -> Self {
        Self::BackendOperationFailed("invalid curve point or scalar".into())
    }
}

impl From<hmac::digest::InvalidLength> for CryptoError {
    fn from(_: hmac::digest::InvalidLength) -> Self {
        Self::BackendOperationFailed("invalid hmac key length".into())
    }
}

#[cfg(feature = "openssl")]
impl From<openssl::error::ErrorStack> for CryptoError {
    fn from(e: openssl::error::ErrorStack) -> Self {
        Self::BackendOperationFailed(e.to_string())
    }
}
