use super::*;
use crate::point::decode_public_point;
use hmac::{Hmac, Mac};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand_core::{OsRng, RngCore};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

/// Pure Rust provider built on the RustCrypto curve and MAC crates.
#[derive(Debug)]
pub struct StandardBackend;

impl StandardBackend {
    /// Fails only if the operating system's random source is unusable.
    pub fn new() -> Result<Self, rand_core::Error> {
        let mut probe = [0u8; 1];
        OsRng.try_fill_bytes(&mut probe)?;
        Ok(Self)
    }
}

impl Backend for StandardBackend {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn generate_key(&self, curve: Curve) -> Result<Box<dyn EcdhKey>, CryptoError> {
        Ok(Box::new(match curve {
            Curve::P256 => StandardKey::P256(nistp256::generate()),
            Curve::P384 => StandardKey::P384(nistp384::generate()),
            Curve::P521 => StandardKey::P521(nistp521::generate()),
        }))
    }

    fn import_private_key(
        &self,
        curve: Curve,
        key: &PrivateComponents,
    ) -> Result<Box<dyn EcdhKey>, CryptoError> {
        Ok(Box::new(match curve {
            Curve::P256 => StandardKey::P256(nistp256::import(key)?),
            Curve::P384 => StandardKey::P384(nistp384::import(key)?),
            Curve::P521 => StandardKey::P521(nistp521::import(key)?),
        }))
    }

    fn hmac_key(&self, hash: HashAlgorithm, secret: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        Ok(Box::new(match hash {
            HashAlgorithm::Sha1 => StandardHmac::Sha1(Hmac::new_from_slice(secret)?),
            HashAlgorithm::Sha256 => StandardHmac::Sha256(Hmac::new_from_slice(secret)?),
            HashAlgorithm::Sha512 => StandardHmac::Sha512(Hmac::new_from_slice(secret)?),
        }))
    }
}

enum StandardKey {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
}

impl EcdhKey for StandardKey {
    fn public_point(&self) -> Result<PublicPoint, CryptoError> {
        match self {
            Self::P256(k) => nistp256::public_point(k),
            Self::P384(k) => nistp384::public_point(k),
            Self::P521(k) => nistp521::public_point(k),
        }
    }

    fn diffie_hellman(&self, peer: &PublicPoint) -> Result<Secret, CryptoError> {
        match self {
            Self::P256(k) => nistp256::diffie_hellman(k, peer),
            Self::P384(k) => nistp384::diffie_hellman(k, peer),
            Self::P521(k) => nistp521::diffie_hellman(k, peer),
        }
    }
}

/// The curve crates share their API but not their types, so the glue is stamped out per curve.
macro_rules! curve_glue {
    ($module:ident, $krate:ident, $curve:expr) => {
        mod $module {
            use super::*;

            pub fn generate() -> $krate::SecretKey {
                $krate::SecretKey::random(&mut OsRng)
            }

            pub fn public_point(k: &$krate::SecretKey) -> Result<PublicPoint, CryptoError> {
                let p = k.public_key().to_encoded_point(false);
                decode_public_point($curve, p.as_bytes())
            }

            pub fn import(key: &PrivateComponents) -> Result<$krate::SecretKey, CryptoError> {
                let k = $krate::SecretKey::from_slice(key.scalar())?;
                if public_point(&k)? != key.point {
                    return Err(CryptoError::BackendOperationFailed(
                        "private scalar does not match public point".into(),
                    ));
                }
                Ok(k)
            }

            pub fn diffie_hellman(
                k: &$krate::SecretKey,
                peer: &PublicPoint,
            ) -> Result<Secret, CryptoError> {
                // rejects the identity and points not on the curve
                let p = $krate::PublicKey::from_sec1_bytes(&peer.encode())?;
                let s = $krate::ecdh::diffie_hellman(k.to_nonzero_scalar(), p.as_affine());
                Ok(Secret::new(&s.raw_secret_bytes()[..]))
            }
        }
    };
}

curve_glue!(nistp256, p256, Curve::P256);
curve_glue!(nistp384, p384, Curve::P384);
curve_glue!(nistp521, p521, Curve::P521);

enum StandardHmac {
    Sha1(Hmac<Sha1>),
    Sha256(Hmac<Sha256>),
    Sha512(Hmac<Sha512>),
}

impl HmacKey for StandardHmac {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        // Each call works on a copy of the keyed state.
        Ok(match self {
            Self::Sha1(m) => m.clone().chain_update(data).finalize().into_bytes().to_vec(),
            Self::Sha256(m) => m.clone().chain_update(data).finalize().into_bytes().to_vec(),
            Self::Sha512(m) => m.clone().chain_update(data).finalize().into_bytes().to_vec(),
        })
    }
}
