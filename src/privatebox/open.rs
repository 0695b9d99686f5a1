use crate::format::{self, Header};
use crate::keys::shared_key;
use crate::params::MaxRecipients;
use crate::slot::SlotKey;
use sodiumoxide::crypto::box_::SecretKey;
use sodiumoxide::crypto::secretbox;
use tracing::{debug, trace};

/// Attempt to decrypt an envelope made by `multibox` with your secret key.
///
/// If you were one of the recipients, the plaintext is returned. Otherwise
/// (and also if the envelope is truncated, corrupted or not an envelope at
/// all) the result is `None`; the cases are deliberately not told apart.
pub fn multibox_open(
    ciphertext: &[u8],
    sk: &SecretKey,
    max: MaxRecipients,
) -> Option<Vec<u8>> {
    let key = multibox_open_key(ciphertext, sk, max)?;
    let msg = multibox_open_body(ciphertext, &key);
    debug!(opened = msg.is_some(), "opened envelope");
    msg
}

/// Find the slot meant for `sk` and return what it carries.
///
/// At most `max + 1` slots are tried, and never any slot that would
/// overlap the smallest possible body.
pub fn multibox_open_key(
    ciphertext: &[u8],
    sk: &SecretKey,
    max: MaxRecipients,
) -> Option<SlotKey> {
    let header = Header::parse(ciphertext)?;
    trace!(ephemeral = %hex::encode(header.ephemeral.0), "looking for a slot");
    let my_key = shared_key(sk, &header.ephemeral)?;
    for i in 0..=max.get() {
        let slot = format::slot(ciphertext, i)?;
        if let Some(key) = SlotKey::open(slot, &header.nonce, &my_key) {
            trace!(slot = i, "slot opened");
            return Some(key);
        }
    }
    debug!(tried = max.get() + 1, "no slot for this key");
    None
}

/// Decrypt the body with a key recovered by `multibox_open_key`.
pub fn multibox_open_body(ciphertext: &[u8], key: &SlotKey) -> Option<Vec<u8>> {
    let header = Header::parse(ciphertext)?;
    let start = format::body_offset(key.recipient_count as usize);
    let body = ciphertext.get(start..)?;
    secretbox::open(body, &header.nonce, &key.body_key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::gen_keypair;
    use crate::seal::multibox;
    use tracing_subscriber::fmt;

    /// Opening with every log level enabled, hit or miss.
    #[test]
    fn open_with_trace_logging() {
        sodiumoxide::init().unwrap();
        let subscriber = fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let (pk, sk) = gen_keypair();
            let (_, other) = gen_keypair();
            let max = MaxRecipients::default();
            let ctxt = multibox(b"logged", &[pk], max).unwrap();
            assert_eq!(multibox_open(&ctxt, &sk, max).unwrap(), b"logged");
            assert!(multibox_open(&ctxt, &other, max).is_none());
        });
    }
}
