//! Card identifier buffer
//!
//! EM-18 class readers send the tag number as 12 ASCII characters with no
//! terminator. The firmware stores them verbatim; nothing here validates
//! the content.

/// Number of bytes in one reader frame
pub const CARD_ID_LEN: usize = 12;

/// Raw identifier of the most recently received tag
///
/// Replaced as a whole once a receive cycle has all of its bytes; never
/// holds part of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardId {
    bytes: [u8; CARD_ID_LEN],
}

impl CardId {
    /// An all-zero identifier (nothing received yet)
    pub const fn empty() -> Self {
        Self {
            bytes: [0; CARD_ID_LEN],
        }
    }

    /// A complete frame, in arrival order
    pub const fn from_bytes(bytes: [u8; CARD_ID_LEN]) -> Self {
        Self { bytes }
    }

    /// The raw bytes in arrival order
    pub fn as_bytes(&self) -> &[u8; CARD_ID_LEN] {
        &self.bytes
    }

    /// The identifier as text, if every byte is printable ASCII
    ///
    /// Only used for logging; the display gets the raw bytes either way.
    pub fn as_ascii(&self) -> Option<&str> {
        if self.bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            core::str::from_utf8(&self.bytes).ok()
        } else {
            None
        }
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CardId {
    fn format(&self, f: defmt::Formatter) {
        match self.as_ascii() {
            Some(text) => defmt::write!(f, "{=str}", text),
            None => defmt::write!(f, "{=[u8]:x}", &self.bytes[..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let card = CardId::empty();
        assert_eq!(card.as_bytes(), &[0u8; CARD_ID_LEN]);
        assert_eq!(card, CardId::default());
        // NUL is not printable
        assert_eq!(card.as_ascii(), None);
    }

    #[test]
    fn test_from_bytes_keeps_order() {
        let card = CardId::from_bytes(*b"123456789ABC");
        assert_eq!(card.as_bytes()[0], b'1');
        assert_eq!(card.as_bytes()[11], b'C');
    }

    #[test]
    fn test_ascii_view() {
        let card = CardId::from_bytes(*b"0415AB8C92F3");
        assert_eq!(card.as_ascii(), Some("0415AB8C92F3"));

        let mut raw = *card.as_bytes();
        raw[4] = 0x02;
        assert_eq!(CardId::from_bytes(raw).as_ascii(), None);
    }
}
