use crate::errors::MultiboxError;
use sodiumoxide::crypto::box_::{PublicKey, SecretKey};
use sodiumoxide::crypto::scalarmult::curve25519::{
    scalarmult, GroupElement, Scalar,
};
use sodiumoxide::crypto::secretbox;

pub use sodiumoxide::crypto::box_::gen_keypair;

/// Initialise libsodium. Call this once before sealing or opening
/// anything.
pub fn init() -> Result<(), MultiboxError> {
    sodiumoxide::init().map_err(|()| MultiboxError::InitFailed)
}

/// Raw curve25519 Diffie-Hellman, used directly as a secretbox key.
///
/// Returns `None` when libsodium rejects the point (the result would be
/// all zeros).
pub fn shared_key(sk: &SecretKey, pk: &PublicKey) -> Option<secretbox::Key> {
    let n = Scalar(sk.0);
    let p = GroupElement(pk.0);
    let q = scalarmult(&n, &p).ok()?;
    Some(secretbox::Key(q.0))
}
