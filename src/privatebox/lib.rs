//! Anonymous multi-recipient envelopes.
//!
//! `multibox` encrypts a message once for up to `max` curve25519 public
//! keys. Anyone holding one of the matching secret keys can open it with
//! `multibox_open`; nobody else learns who the recipients are or how many
//! of them there are.

extern crate sodiumoxide;
extern crate tracing;

pub mod errors;
pub mod format;
pub mod keys;
pub mod open;
pub mod params;
pub mod rand_utils;
pub mod seal;
pub mod slot;

pub use crate::errors::MultiboxError;
pub use crate::keys::{gen_keypair, init};
pub use crate::open::{multibox_open, multibox_open_body, multibox_open_key};
pub use crate::params::{MaxRecipients, DEFAULT_MAX_RECIPIENTS};
pub use crate::seal::{multibox, multibox_str};
pub use crate::slot::SlotKey;
pub use sodiumoxide::crypto::box_::{PublicKey, SecretKey};

pub use crate::open::multibox_open as decrypt;
pub use crate::seal::multibox as encrypt;
