use crate::errors::MultiboxError;
use crate::format::sealed_len;
use crate::keys::shared_key;
use crate::params::MaxRecipients;
use crate::rand_utils::GoodRand;
use crate::slot::SlotKey;
use sodiumoxide::crypto::box_::{PublicKey, SecretKey};
use sodiumoxide::crypto::secretbox::{self, Key, Nonce};
use tracing::debug;

/// Encrypt `msg` for every key in `recipients`.
///
/// The result can be opened with `multibox_open` by the holder of any of
/// the matching secret keys, given the same `max`. It does not reveal the
/// recipients' keys or how many of them there are.
///
/// Fails if there are no recipients or more than `max` of them.
pub fn multibox(
    msg: &[u8],
    recipients: &[PublicKey],
    max: MaxRecipients,
) -> Result<Vec<u8>, MultiboxError> {
    max.check_recipients(recipients.len())?;

    // One nonce is shared by all slots and the body. Each of them is
    // sealed under a different key.
    let nonce: Nonce = GoodRand::rand();
    let body_key: Key = GoodRand::rand();
    let slot_key = SlotKey::new(recipients.len() as u8, body_key);
    let (onetime_pk, onetime_sk): (PublicKey, SecretKey) = GoodRand::rand();

    let mut res = Vec::with_capacity(sealed_len(recipients.len(), msg.len()));
    res.extend_from_slice(&nonce.0);
    res.extend_from_slice(&onetime_pk.0);
    for (index, pk) in recipients.iter().enumerate() {
        let shared = shared_key(&onetime_sk, pk)
            .ok_or(MultiboxError::BadRecipientKey { index })?;
        res.extend_from_slice(&slot_key.seal(&nonce, &shared));
    }
    drop(onetime_sk);
    res.extend_from_slice(&secretbox::seal(msg, &nonce, &slot_key.body_key));

    debug!(
        recipients = recipients.len(),
        max = max.get(),
        len = res.len(),
        "sealed envelope"
    );
    Ok(res)
}

/// `multibox` for a UTF-8 message.
pub fn multibox_str(
    msg: &str,
    recipients: &[PublicKey],
    max: MaxRecipients,
) -> Result<Vec<u8>, MultiboxError> {
    multibox(msg.as_bytes(), recipients, max)
}
