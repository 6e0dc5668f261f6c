use clap::{Arg, Command};
use secio_crypto::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = Command::new("handshake")
        .about("Runs an ephemeral key agreement between two local peers")
        .arg(
            Arg::new("curve")
                .long("curve")
                .env("SECIO_CURVE")
                .takes_value(true)
                .default_value("P-256"),
        )
        .arg(
            Arg::new("hash")
                .long("hash")
                .env("SECIO_HASH")
                .takes_value(true)
                .default_value("SHA256"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .env("SECIO_BACKEND")
                .takes_value(true)
                .default_value("auto"),
        )
        .get_matches();

    let curve: Curve = matches.value_of("curve").unwrap_or("P-256").parse()?;
    let hash: HashAlgorithm = matches.value_of("hash").unwrap_or("SHA256").parse()?;
    let config = ProviderConfig {
        backend: matches.value_of("backend").unwrap_or("auto").parse()?,
    };
    let provider = Provider::new(config);

    let alice = EphemeralKeyPair::generate(&provider, curve)?;
    let bob = EphemeralKeyPair::generate(&provider, curve)?;
    log::info!("alice: {:?}", alice);
    log::info!("bob: {:?}", bob);

    // Each side only ever sees the other's wire public key.
    let k1 = alice.derive_shared_secret(bob.public_key(), None)?;
    let k2 = bob.derive_shared_secret(alice.public_key(), None)?;

    let msg = b"hello from alice";
    let tag = HmacContext::new(&provider, hash, k1.as_ref())?.digest(msg)?;
    let check = HmacContext::new(&provider, hash, k2.as_ref())?.digest(msg)?;

    println!("provider:      {}", alice.backend_name());
    println!("public key:    {} bytes", alice.public_key().len());
    println!("shared secret: {} bytes", k1.len());
    println!("{} tag:   {} bytes, verified: {}", hash, tag.len(), tag == check);
    Ok(())
}
