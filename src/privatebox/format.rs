//! Layout of a sealed envelope:
//!
//! ```text
//! nonce (24) | ephemeral public key (32) | slot_1 (49) .. slot_R (49) | body (m + 16)
//! ```
//!
//! Every slot is a secretbox of `recipient_count (1) | body_key (32)`. The
//! number of slots is not written anywhere in cleartext.

use sodiumoxide::crypto::box_;
use sodiumoxide::crypto::secretbox;

pub const NONCEBYTES: usize = secretbox::NONCEBYTES;
pub const PUBLICKEYBYTES: usize = box_::PUBLICKEYBYTES;
pub const KEYBYTES: usize = secretbox::KEYBYTES;
pub const MACBYTES: usize = secretbox::MACBYTES;

/// `recipient_count (1) | body_key (32)`
pub const SLOT_PLAINTEXT_BYTES: usize = 1 + KEYBYTES;
pub const SLOTBYTES: usize = SLOT_PLAINTEXT_BYTES + MACBYTES;
pub const HEADERBYTES: usize = NONCEBYTES + PUBLICKEYBYTES;

/// Length of an envelope for `recipients` recipients and a plaintext of
/// `plaintext_len` bytes.
pub fn sealed_len(recipients: usize, plaintext_len: usize) -> usize {
    HEADERBYTES + SLOTBYTES * recipients + plaintext_len + MACBYTES
}

pub fn slot_offset(index: usize) -> usize {
    HEADERBYTES + SLOTBYTES * index
}

/// The body starts right after the last slot.
pub fn body_offset(recipient_count: usize) -> usize {
    slot_offset(recipient_count)
}

/// Cleartext part of an envelope.
pub struct Header {
    pub nonce: secretbox::Nonce,
    pub ephemeral: box_::PublicKey,
}

impl Header {
    /// Returns `None` if the envelope is too short to hold the header and
    /// at least one slot.
    pub fn parse(envelope: &[u8]) -> Option<Header> {
        if envelope.len() < HEADERBYTES + SLOTBYTES {
            return None;
        }
        let nonce = secretbox::Nonce::from_slice(&envelope[..NONCEBYTES])?;
        let ephemeral =
            box_::PublicKey::from_slice(&envelope[NONCEBYTES..HEADERBYTES])?;
        Some(Header { nonce, ephemeral })
    }
}

/// Slot number `index`, as long as it ends before the last `MACBYTES`
/// bytes of the envelope (the smallest possible body).
pub fn slot(envelope: &[u8], index: usize) -> Option<&[u8]> {
    let start = slot_offset(index);
    if start + SLOTBYTES + MACBYTES > envelope.len() {
        return None;
    }
    Some(&envelope[start..start + SLOTBYTES])
}
