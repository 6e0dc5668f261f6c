use crate::algorithm::HashAlgorithm;
use crate::backend::{HmacKey, Provider};
use crate::error::CryptoError;

/// A secret bound to a hash function, producing HMAC tags.
///
/// Every [HmacContext::digest] call is independent: nothing carries over between calls.
pub struct HmacContext {
    algorithm: HashAlgorithm,
    key: Box<dyn HmacKey>,
}

impl HmacContext {
    pub fn new(provider: &Provider, algorithm: HashAlgorithm, secret: &[u8]) -> Result<Self, CryptoError> {
        let key = provider.backend()?.hmac_key(algorithm, secret)?;
        Ok(Self { algorithm, key })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Tag length in bytes.
    pub fn length(&self) -> usize {
        self.algorithm.output_len()
    }

    pub fn digest(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let tag = self.key.sign(data)?;
        if tag.len() != self.length() {
            return Err(CryptoError::BackendOperationFailed(format!(
                "{} tag has {} bytes",
                self.algorithm,
                tag.len()
            )));
        }
        Ok(tag)
    }
}

impl std::fmt::Debug for HmacContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HmacContext({})", self.algorithm)
    }
}

/// Create an HMAC context for the named hash (`SHA1`, `SHA256` or `SHA512`) using the global
/// [Provider].
pub fn create(hash: &str, secret: &[u8]) -> Result<HmacContext, CryptoError> {
    HmacContext::new(Provider::global(), hash.parse()?, secret)
}
