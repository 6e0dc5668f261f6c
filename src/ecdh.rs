//! Ephemeral ECDH key agreement.
//!
//! ```no_run
//! let alice = secio_crypto::generate_ephemeral_key_pair("P-256")?;
//! let bob = secio_crypto::generate_ephemeral_key_pair("P-256")?;
//! let k1 = alice.derive_shared_secret(bob.public_key(), None)?;
//! let k2 = bob.derive_shared_secret(alice.public_key(), None)?;
//! assert_eq!(k1, k2);
//! # Ok::<(), secio_crypto::CryptoError>(())
//! ```

use crate::algorithm::Curve;
use crate::backend::{Backend, EcdhKey, Provider};
use crate::error::CryptoError;
use crate::point::*;
use crate::util::secret::Secret;
use std::sync::Arc;

/// An ephemeral key pair together with the provider that created it.
///
/// Only the public half is accessible (in wire encoding). The private scalar stays inside the
/// backend and is released when the key pair is dropped.
pub struct EphemeralKeyPair {
    curve: Curve,
    public_key: Vec<u8>,
    key: Box<dyn EcdhKey>,
    backend: Arc<dyn Backend>,
}

impl EphemeralKeyPair {
    pub fn generate(provider: &Provider, curve: Curve) -> Result<Self, CryptoError> {
        let backend = provider.backend()?;
        let key = backend.generate_key(curve)?;
        let public_key = key.public_point()?.encode();
        log::debug!("Generated ephemeral {} key pair ({})", curve, backend.name());
        Ok(Self {
            curve,
            public_key,
            key,
            backend,
        })
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// The public key as `0x04 || X || Y`.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Name of the provider holding the private key.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Derive the shared secret with a peer.
    ///
    /// `their_public_key` is the peer's public key in wire encoding. The result is the X
    /// coordinate of the shared point, big-endian and exactly `curve.secret_len()` bytes long.
    ///
    /// `forced_private_key` exists for reproducible test vectors only: when given, it is used
    /// instead of this key pair's own private scalar, which means the result is no longer an
    /// ephemeral secret. Pass `None` in production.
    ///
    /// The key pair is not consumed; repeated calls are independent of each other.
    pub fn derive_shared_secret(
        &self,
        their_public_key: &[u8],
        forced_private_key: Option<&ForcedPrivateKey>,
    ) -> Result<Secret, CryptoError> {
        let peer = self.decode_public(their_public_key)?;
        let secret = match forced_private_key {
            None => self.key.diffie_hellman(&peer)?,
            Some(forced) => {
                // reports keys of other curves the same way as for the peer
                self.decode_public(&forced.public)?;
                let private = decode_private_key(self.curve, forced)?;
                let key = self.backend.import_private_key(self.curve, &private)?;
                key.diffie_hellman(&peer)?
            }
        };
        if secret.len() != self.curve.secret_len() {
            return Err(CryptoError::BackendOperationFailed(format!(
                "shared secret has {} bytes, expected {}",
                secret.len(),
                self.curve.secret_len()
            )));
        }
        Ok(secret)
    }

    fn decode_public(&self, bytes: &[u8]) -> Result<PublicPoint, CryptoError> {
        decode_public_point(self.curve, bytes).map_err(|e| {
            match Curve::from_public_key_len(bytes.len()) {
                // A well-formed key, just not for our curve.
                Some(other) if bytes[0] == UNCOMPRESSED_POINT_TAG => CryptoError::UnsupportedCurve(
                    format!("{} public key used with {} key pair", other, self.curve),
                ),
                _ => e,
            }
        })
    }
}

impl std::fmt::Debug for EphemeralKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EphemeralKeyPair({}, {}, ", self.curve, self.backend.name())?;
        for i in &self.public_key {
            write!(f, "{:02x}", i)?;
        }
        write!(f, ")")
    }
}

/// Generate an ephemeral key pair on the named curve using the global [Provider].
pub fn generate_ephemeral_key_pair(curve: &str) -> Result<EphemeralKeyPair, CryptoError> {
    EphemeralKeyPair::generate(Provider::global(), curve.parse()?)
}
