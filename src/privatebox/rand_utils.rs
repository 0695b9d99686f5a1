pub use sodiumoxide::randombytes::randombytes;

use sodiumoxide::crypto::box_;
use sodiumoxide::crypto::secretbox;

/// Fresh random values of sodium key and nonce types. Every nonce, body
/// key and one-time key of an envelope comes from here, and all of it
/// from libsodium's CSPRNG.
///
/// Call `privatebox::init()` first.
pub trait GoodRand {
    fn rand() -> Self;
}

fn rand_array<A: AsMut<[u8]> + Default>() -> A {
    let mut a = A::default();
    sodiumoxide::randombytes::randombytes_into(a.as_mut());
    a
}

impl GoodRand for secretbox::Nonce {
    fn rand() -> secretbox::Nonce {
        secretbox::gen_nonce()
    }
}

impl GoodRand for secretbox::Key {
    fn rand() -> secretbox::Key {
        secretbox::gen_key()
    }
}

/// A one-time curve25519 key pair.
impl GoodRand for (box_::PublicKey, box_::SecretKey) {
    fn rand() -> (box_::PublicKey, box_::SecretKey) {
        box_::gen_keypair()
    }
}

/// Random bytes, not necessarily a key anybody holds the secret for.
impl GoodRand for box_::PublicKey {
    fn rand() -> box_::PublicKey {
        box_::PublicKey(rand_array())
    }
}

impl GoodRand for box_::SecretKey {
    fn rand() -> box_::SecretKey {
        box_::SecretKey(rand_array())
    }
}
