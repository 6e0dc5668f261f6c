use super::*;
use crate::algorithm::CURVES;
use crate::point::pad_be;
use openssl::bn::{BigNum, BigNumContext};
use openssl::derive::Deriver;
use openssl::ec::{EcGroup, EcKey, EcKeyRef};
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{PKey, Private, Public};
use openssl::sign::Signer;

/// Accelerated provider delegating to the system's OpenSSL library.
#[derive(Debug)]
pub struct OpensslBackend;

impl OpensslBackend {
    /// Initialises the library and checks that all supported curves are available.
    pub fn new() -> Result<Self, ErrorStack> {
        openssl::init();
        for curve in CURVES {
            group(curve)?;
        }
        Ok(Self)
    }
}

impl Backend for OpensslBackend {
    fn name(&self) -> &'static str {
        "openssl"
    }

    fn generate_key(&self, curve: Curve) -> Result<Box<dyn EcdhKey>, CryptoError> {
        let group = group(curve)?;
        let key = EcKey::generate(&group)?;
        let key = PKey::from_ec_key(key)?;
        Ok(Box::new(OpensslKey { curve, key }))
    }

    fn import_private_key(
        &self,
        curve: Curve,
        key: &PrivateComponents,
    ) -> Result<Box<dyn EcdhKey>, CryptoError> {
        let group = group(curve)?;
        let public = public_key(&group, &key.point)?;
        let d = BigNum::from_slice(key.scalar())?;
        let key = EcKey::from_private_components(&group, &d, public.public_key())?;
        // fails unless the public point is d * G
        key.check_key()?;
        let key = PKey::from_ec_key(key)?;
        Ok(Box::new(OpensslKey { curve, key }))
    }

    fn hmac_key(&self, hash: HashAlgorithm, secret: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        // An empty key is refused by OpenSSL. HMAC pads keys with zeros to the block size, so
        // a single zero byte yields the same tags.
        let key = if secret.is_empty() {
            PKey::hmac(&[0u8])?
        } else {
            PKey::hmac(secret)?
        };
        Ok(Box::new(OpensslHmac { hash, key }))
    }
}

struct OpensslKey {
    curve: Curve,
    key: PKey<Private>,
}

impl EcdhKey for OpensslKey {
    fn public_point(&self) -> Result<PublicPoint, CryptoError> {
        let ec = self.key.ec_key()?;
        public_point(self.curve, &ec)
    }

    fn diffie_hellman(&self, peer: &PublicPoint) -> Result<Secret, CryptoError> {
        let peer = public_key(&group(self.curve)?, peer)?;
        let peer = PKey::from_ec_key(peer)?;
        let mut deriver = Deriver::new(&self.key)?;
        deriver.set_peer(&peer)?;
        let x = deriver.derive_to_vec()?;
        let x = pad_be(&x, self.curve.coordinate_len()).ok_or_else(|| {
            CryptoError::BackendOperationFailed("shared secret exceeds field size".into())
        })?;
        Ok(Secret::from(x))
    }
}

struct OpensslHmac {
    hash: HashAlgorithm,
    key: PKey<Private>,
}

impl HmacKey for OpensslHmac {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let digest = match self.hash {
            HashAlgorithm::Sha1 => MessageDigest::sha1(),
            HashAlgorithm::Sha256 => MessageDigest::sha256(),
            HashAlgorithm::Sha512 => MessageDigest::sha512(),
        };
        let mut signer = Signer::new(digest, &self.key)?;
        signer.update(data)?;
        Ok(signer.sign_to_vec()?)
    }
}

fn group(curve: Curve) -> Result<EcGroup, ErrorStack> {
    EcGroup::from_curve_name(match curve {
        Curve::P256 => Nid::X9_62_PRIME256V1,
        Curve::P384 => Nid::SECP384R1,
        Curve::P521 => Nid::SECP521R1,
    })
}

/// Import a public point, rejecting points not on the curve.
fn public_key(group: &EcGroup, p: &PublicPoint) -> Result<EcKey<Public>, ErrorStack> {
    let x = BigNum::from_slice(p.x())?;
    let y = BigNum::from_slice(p.y())?;
    let key = EcKey::from_public_key_affine_coordinates(group, &x, &y)?;
    key.check_key()?;
    Ok(key)
}

fn public_point(curve: Curve, key: &EcKeyRef<Private>) -> Result<PublicPoint, CryptoError> {
    let group = group(curve)?;
    let mut ctx = BigNumContext::new()?;
    let mut x = BigNum::new()?;
    let mut y = BigNum::new()?;
    key.public_key()
        .affine_coordinates_gfp(&group, &mut x, &mut y, &mut ctx)?;
    PublicPoint::new(&x.to_vec(), &y.to_vec(), curve.coordinate_len())
}
