//! Cryptographic providers.
//!
//! A [Backend] performs the actual curve arithmetic and keyed hashing. There are two of them:
//! an accelerated one backed by OpenSSL (compiled in with the `openssl` feature) and a standard
//! one built on the pure Rust RustCrypto crates. Both exchange key material in the same
//! representation ([PublicPoint], [PrivateComponents]) so the wire format never depends on the
//! provider in use.

#[cfg(feature = "openssl")]
mod accelerated;
mod provider;
mod standard;

#[cfg(feature = "openssl")]
pub use self::accelerated::OpensslBackend;
pub use self::provider::*;
pub use self::standard::StandardBackend;

use crate::algorithm::{Curve, HashAlgorithm};
use crate::error::CryptoError;
use crate::point::{PrivateComponents, PublicPoint};
use crate::util::secret::Secret;
use std::sync::Arc;

/// The provider interface both backends implement.
///
/// Random numbers are drawn by each backend from its own secure source.
pub trait Backend: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Generate a fresh ephemeral key on `curve`.
    fn generate_key(&self, curve: Curve) -> Result<Box<dyn EcdhKey>, CryptoError>;

    /// Import a private scalar together with its public point.
    ///
    /// Fails if the scalar is out of range or does not belong to the point.
    fn import_private_key(
        &self,
        curve: Curve,
        key: &PrivateComponents,
    ) -> Result<Box<dyn EcdhKey>, CryptoError>;

    /// Bind `secret` to the hash function `hash` for HMAC signing.
    fn hmac_key(&self, hash: HashAlgorithm, secret: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError>;
}

/// A private key as held by a backend.
pub trait EcdhKey: Send + Sync {
    fn public_point(&self) -> Result<PublicPoint, CryptoError>;

    /// Multiply `peer` with the private scalar and return the X coordinate of the result,
    /// big-endian and padded to the coordinate length.
    ///
    /// The key is not consumed: calling this repeatedly with the same input gives the same
    /// output.
    fn diffie_hellman(&self, peer: &PublicPoint) -> Result<Secret, CryptoError>;
}

/// A secret bound to a hash function.
pub trait HmacKey: Send + Sync {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// Try to construct the accelerated provider.
///
/// Returns `None` if it is unavailable for whatever reason. This is an expected outcome and
/// callers are supposed to continue with the [StandardBackend] instead.
pub fn select_backend() -> Option<Arc<dyn Backend>> {
    #[cfg(feature = "openssl")]
    {
        match OpensslBackend::new() {
            Ok(b) => return Some(Arc::new(b)),
            Err(e) => log::info!(
                "OpenSSL could not be initialised ({}), will fall back on standard provider",
                e
            ),
        }
    }
    #[cfg(not(feature = "openssl"))]
    log::info!("OpenSSL support not compiled in, will fall back on standard provider");
    None
}
