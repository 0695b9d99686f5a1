use std::error::Error;
use std::fmt;

/// Caller-contract violations. Failing to open an envelope is not an
/// error: `multibox_open` returns `None` for every kind of non-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiboxError {
    /// `max` has to be in the range `[1, 255]`.
    MaxRecipientsOutOfRange { max: usize },
    /// An envelope needs at least one recipient.
    NoRecipients,
    /// More recipients were given than `max` allows.
    TooManyRecipients { max: usize, found: usize },
    /// Diffie-Hellman with the recipient key at `index` failed (the key is
    /// a low-order point).
    BadRecipientKey { index: usize },
    /// libsodium could not be initialised.
    InitFailed,
}

impl fmt::Display for MultiboxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            MultiboxError::MaxRecipientsOutOfRange { max } => write!(
                f,
                "max recipients must be between 1 and 255, got {}",
                max
            ),
            MultiboxError::NoRecipients => {
                write!(f, "an envelope needs at least one recipient")
            }
            MultiboxError::TooManyRecipients { max, found } => write!(
                f,
                "max recipients is {}, found {}",
                max, found
            ),
            MultiboxError::BadRecipientKey { index } => write!(
                f,
                "recipient public key at index {} is not usable for \
                 key agreement",
                index
            ),
            MultiboxError::InitFailed => {
                write!(f, "libsodium could not be initialised")
            }
        }
    }
}

impl Error for MultiboxError {}
