//! Ephemeral ECDH key agreement and HMAC for secure channel handshakes.
//!
//! Key pairs are generated on one of the NIST curves `P-256`, `P-384` or `P-521` and their
//! public halves exchanged as uncompressed points (`0x04 || X || Y`). HMAC supports `SHA1`,
//! `SHA256` and `SHA512`. The work is done by OpenSSL when the `openssl` feature is enabled and
//! the library can be initialised, and by the RustCrypto crates otherwise.

pub mod algorithm;
pub mod backend;
pub mod ecdh;
pub mod error;
pub mod mac;
pub mod point;
pub mod util;

pub use self::algorithm::{Curve, HashAlgorithm};
pub use self::backend::{select_backend, Backend, BackendPreference, Provider, ProviderConfig};
pub use self::ecdh::{generate_ephemeral_key_pair, EphemeralKeyPair};
pub use self::error::CryptoError;
pub use self::mac::{create as create_hmac, HmacContext};
pub use self::point::{decode_private_key, decode_public_point, encode_public_point};
pub use self::point::{ForcedPrivateKey, PublicPoint};
pub use self::util::secret::Secret;
