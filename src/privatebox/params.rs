use crate::errors::MultiboxError;
use std::convert::TryFrom;

pub const DEFAULT_MAX_RECIPIENTS: u8 = 7;

/// Upper bound on the number of recipients of an envelope.
///
/// The sealer and the opener have to agree on this value out-of-band: it
/// bounds the number of slots `multibox_open` will try, and the envelope
/// itself never says how many slots it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxRecipients(u8);

impl MaxRecipients {
    /// Fails unless `1 <= max <= 255`.
    pub fn new(max: usize) -> Result<MaxRecipients, MultiboxError> {
        if max < 1 || max > u8::max_value() as usize {
            return Err(MultiboxError::MaxRecipientsOutOfRange { max });
        }
        Ok(MaxRecipients(max as u8))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Check that an envelope for `count` recipients can be sealed.
    pub fn check_recipients(self, count: usize) -> Result<(), MultiboxError> {
        if count == 0 {
            return Err(MultiboxError::NoRecipients);
        }
        if count > self.get() {
            return Err(MultiboxError::TooManyRecipients {
                max: self.get(),
                found: count,
            });
        }
        Ok(())
    }
}

impl Default for MaxRecipients {
    fn default() -> MaxRecipients {
        MaxRecipients(DEFAULT_MAX_RECIPIENTS)
    }
}

impl TryFrom<usize> for MaxRecipients {
    type Error = MultiboxError;

    fn try_from(max: usize) -> Result<MaxRecipients, MultiboxError> {
        MaxRecipients::new(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(
            MaxRecipients::new(0),
            Err(MultiboxError::MaxRecipientsOutOfRange { max: 0 })
        );
        assert_eq!(
            MaxRecipients::new(256),
            Err(MultiboxError::MaxRecipientsOutOfRange { max: 256 })
        );
        assert_eq!(MaxRecipients::new(1).unwrap().get(), 1);
        assert_eq!(MaxRecipients::new(255).unwrap().get(), 255);
        assert_eq!(MaxRecipients::try_from(12).unwrap().get(), 12);
        assert_eq!(MaxRecipients::default().get(), 7);
    }

    #[test]
    fn recipient_count() {
        let max = MaxRecipients::new(3).unwrap();
        assert_eq!(
            max.check_recipients(0),
            Err(MultiboxError::NoRecipients)
        );
        assert!(max.check_recipients(1).is_ok());
        assert!(max.check_recipients(3).is_ok());
        assert_eq!(
            max.check_recipients(4),
            Err(MultiboxError::TooManyRecipients { max: 3, found: 4 })
        );
    }
}
