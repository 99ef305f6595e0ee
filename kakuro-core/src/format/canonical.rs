//! The canonical board input format: a flat sequence where each cell is
//! either a plain integer (Black/Entry) or an `(across, down)` pair (Clue).

use crate::error::CoreError;
use crate::token::Token;

/// One cell in the canonical wire alphabet, before it's been typed into a
/// `Token`: `0`, `1`, a known digit, or `(a, d)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalCell {
    Int(u32),
    Pair(u8, u8),
}

/// Decode a sequence of canonical cells into `Token`s.
pub fn decode(cells: &[CanonicalCell]) -> Result<Vec<Token>, CoreError> {
    cells
        .iter()
        .enumerate()
        .map(|(_idx, cell)| match cell {
            CanonicalCell::Int(v) => Token::from_canonical_int(*v).ok_or_else(|| CoreError::InvalidToken {
                token: v.to_string(),
            }),
            CanonicalCell::Pair(across, down) => Ok(Token::Clue {
                across: *across,
                down: *down,
            }),
        })
        .collect()
}

/// Encode `Token`s back into the canonical wire alphabet.
pub fn encode(tokens: &[Token]) -> Vec<CanonicalCell> {
    tokens
        .iter()
        .map(|tok| match tok {
            Token::Clue { across, down } => CanonicalCell::Pair(*across, *down),
            other => CanonicalCell::Int(other.to_canonical_int().expect("non-clue tokens always encode")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_tokens() {
        let cells = vec![
            CanonicalCell::Int(0),
            CanonicalCell::Pair(0, 7),
            CanonicalCell::Int(1),
        ];
        let tokens = decode(&cells).unwrap();
        assert_eq!(encode(&tokens), cells);
    }

    #[test]
    fn out_of_range_int_is_rejected() {
        let err = decode(&[CanonicalCell::Int(999)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidToken { .. }));
    }
}
