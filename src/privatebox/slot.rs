use crate::format::{KEYBYTES, SLOTBYTES, SLOT_PLAINTEXT_BYTES};
use sodiumoxide::crypto::secretbox::{self, Key, Nonce};
use sodiumoxide::utils::memzero;

/// What every slot of an envelope carries: how many slots there are and
/// the key of the body.
pub struct SlotKey {
    /// Total number of recipients of the envelope. The body starts right
    /// after this many slots.
    pub recipient_count: u8,
    pub body_key: Key,
}

impl SlotKey {
    pub fn new(recipient_count: u8, body_key: Key) -> SlotKey {
        SlotKey {
            recipient_count,
            body_key,
        }
    }

    pub fn to_bytes(&self) -> [u8; SLOT_PLAINTEXT_BYTES] {
        let mut bytes = [0u8; SLOT_PLAINTEXT_BYTES];
        bytes[0] = self.recipient_count;
        bytes[1..].copy_from_slice(&self.body_key.0);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<SlotKey> {
        if bytes.len() != SLOT_PLAINTEXT_BYTES {
            return None;
        }
        let body_key = Key::from_slice(&bytes[1..1 + KEYBYTES])?;
        Some(SlotKey::new(bytes[0], body_key))
    }

    /// Seal the slot for one recipient; `shared` is the Diffie-Hellman
    /// secret of the ephemeral key and the recipient's key.
    pub fn seal(&self, nonce: &Nonce, shared: &Key) -> Vec<u8> {
        let mut plain = self.to_bytes();
        let slot = secretbox::seal(&plain, nonce, shared);
        memzero(&mut plain);
        slot
    }

    /// Trial-open one slot. Any failure just means the slot is not ours.
    pub fn open(slot: &[u8], nonce: &Nonce, shared: &Key) -> Option<SlotKey> {
        if slot.len() != SLOTBYTES {
            return None;
        }
        let mut plain = secretbox::open(slot, nonce, shared).ok()?;
        let key = SlotKey::from_bytes(&plain);
        memzero(&mut plain);
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand_utils::GoodRand;

    #[test]
    fn layout() {
        sodiumoxide::init().unwrap();
        let key = SlotKey::new(5, GoodRand::rand());
        let bytes = key.to_bytes();
        assert_eq!(bytes[0], 5);
        assert_eq!(&bytes[1..], &key.body_key.0[..]);

        let back = SlotKey::from_bytes(&bytes).unwrap();
        assert_eq!(back.recipient_count, 5);
        assert_eq!(back.body_key.0, key.body_key.0);

        assert!(SlotKey::from_bytes(&bytes[1..]).is_none());
        assert!(SlotKey::from_bytes(&[0; SLOT_PLAINTEXT_BYTES + 1]).is_none());
    }

    #[test]
    fn slot_opens_only_with_its_key() {
        sodiumoxide::init().unwrap();
        let nonce: Nonce = GoodRand::rand();
        let shared: Key = GoodRand::rand();
        let other: Key = GoodRand::rand();
        let key = SlotKey::new(2, GoodRand::rand());

        let slot = key.seal(&nonce, &shared);
        assert_eq!(slot.len(), SLOTBYTES);

        let opened = SlotKey::open(&slot, &nonce, &shared).unwrap();
        assert_eq!(opened.recipient_count, 2);
        assert_eq!(opened.body_key.0, key.body_key.0);

        assert!(SlotKey::open(&slot, &nonce, &other).is_none());
        assert!(SlotKey::open(&slot[1..], &nonce, &shared).is_none());

        let mut flipped = slot.clone();
        flipped[SLOTBYTES - 1] ^= 1;
        assert!(SlotKey::open(&flipped, &nonce, &shared).is_none());
    }
}
