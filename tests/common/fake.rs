use secio_crypto::backend::*;
use secio_crypto::point::{PrivateComponents, PublicPoint};
use secio_crypto::{CryptoError, Curve, HashAlgorithm, Secret};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Delegates to the standard provider and counts calls, optionally refusing to work.
#[derive(Debug)]
pub struct BackendForTesting {
    inner: StandardBackend,
    broken: bool,
    pub calls: Arc<AtomicUsize>,
}

impl BackendForTesting {
    pub fn new() -> Self {
        Self {
            inner: StandardBackend::new().unwrap(),
            broken: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn new_broken() -> Self {
        Self {
            broken: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), CryptoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            Err(CryptoError::BackendOperationFailed("broken for testing".into()))
        } else {
            Ok(())
        }
    }
}

impl Backend for BackendForTesting {
    fn name(&self) -> &'static str {
        "testing"
    }

    fn generate_key(&self, curve: Curve) -> Result<Box<dyn EcdhKey>, CryptoError> {
        self.enter()?;
        self.inner.generate_key(curve)
    }

    fn import_private_key(
        &self,
        curve: Curve,
        key: &PrivateComponents,
    ) -> Result<Box<dyn EcdhKey>, CryptoError> {
        self.enter()?;
        self.inner.import_private_key(curve, key)
    }

    fn hmac_key(&self, hash: HashAlgorithm, secret: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        self.enter()?;
        self.inner.hmac_key(hash, secret)
    }
}

/// Produces a shared secret of the wrong length.
pub struct TruncatingKey(pub Box<dyn EcdhKey>);

impl EcdhKey for TruncatingKey {
    fn public_point(&self) -> Result<PublicPoint, CryptoError> {
        self.0.public_point()
    }

    fn diffie_hellman(&self, peer: &PublicPoint) -> Result<Secret, CryptoError> {
        let s = self.0.diffie_hellman(peer)?;
        Ok(Secret::new(&s.as_ref()[1..]))
    }
}

#[derive(Debug)]
pub struct TruncatingBackend(pub StandardBackend);

impl Backend for TruncatingBackend {
    fn name(&self) -> &'static str {
        "truncating"
    }

    fn generate_key(&self, curve: Curve) -> Result<Box<dyn EcdhKey>, CryptoError> {
        Ok(Box::new(TruncatingKey(self.0.generate_key(curve)?)))
    }

    fn import_private_key(
        &self,
        curve: Curve,
        key: &PrivateComponents,
    ) -> Result<Box<dyn EcdhKey>, CryptoError> {
        Ok(Box::new(TruncatingKey(self.0.import_private_key(curve, key)?)))
    }

    fn hmac_key(&self, hash: HashAlgorithm, secret: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        self.0.hmac_key(hash, secret)
    }
}
