//! The canonical token alphabet: every grid position is exactly one of a
//! black filler square, an entry square, or a clue square.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// Non-entry filler square.
    Black,
    /// An entry square. `None` is the unsolved marker, `Some(d)` a concrete digit.
    Entry(Option<u8>),
    /// A clue square. Either component may be zero ("no run starts here in
    /// that direction"); at least one should be non-zero in any meaningful clue.
    Clue { across: u8, down: u8 },
}

impl Token {
    pub fn is_entry(self) -> bool {
        matches!(self, Token::Entry(_))
    }

    pub fn is_black(self) -> bool {
        matches!(self, Token::Black)
    }

    pub fn is_clue(self) -> bool {
        matches!(self, Token::Clue { .. })
    }

    /// Unsolved-entry marker.
    pub const fn unknown() -> Token {
        Token::Entry(None)
    }

    /// Decode the canonical single-integer alphabet: `0` is Black, `1` is an
    /// unsolved Entry, any other value in `2..=255` is a solved Entry
    /// holding that digit. Clues are not representable as a single integer
    /// and must be constructed as `Token::Clue` directly.
    ///
    /// The literal `1` is reserved for the unsolved marker: a digit value of
    /// exactly `1` can only be reached by round-tripping a typed
    /// `Entry(Some(1))` value, never by decoding the integer `1` from the
    /// wire format. See `DESIGN.md` for the rationale.
    pub fn from_canonical_int(v: u32) -> Option<Token> {
        match v {
            0 => Some(Token::Black),
            1 => Some(Token::Entry(None)),
            2..=255 => Some(Token::Entry(Some(v as u8))),
            _ => None,
        }
    }

    /// Encode back to the canonical single-integer alphabet, if representable.
    /// Returns `None` for clues (which need the `(across, down)` pair form).
    pub fn to_canonical_int(self) -> Option<u32> {
        match self {
            Token::Black => Some(0),
            Token::Entry(None) => Some(1),
            Token::Entry(Some(d)) => Some(d as u32),
            Token::Clue { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_int_roundtrip_for_black_and_unknown() {
        assert_eq!(Token::from_canonical_int(0), Some(Token::Black));
        assert_eq!(Token::from_canonical_int(1), Some(Token::Entry(None)));
        assert_eq!(Token::Black.to_canonical_int(), Some(0));
        assert_eq!(Token::Entry(None).to_canonical_int(), Some(1));
    }

    #[test]
    fn literal_one_never_decodes_to_a_solved_digit() {
        // Decoding the wire format never produces Entry(Some(1)); see DESIGN.md.
        assert_ne!(Token::from_canonical_int(1), Some(Token::Entry(Some(1))));
    }

    #[test]
    fn known_digit_above_one_roundtrips() {
        for d in 2u32..=9 {
            assert_eq!(Token::from_canonical_int(d), Some(Token::Entry(Some(d as u8))));
            assert_eq!(Token::Entry(Some(d as u8)).to_canonical_int(), Some(d));
        }
    }

    #[test]
    fn clue_has_no_canonical_int() {
        assert_eq!(
            Token::Clue { across: 1, down: 0 }.to_canonical_int(),
            None
        );
    }
}
