//! A human-typeable text form: whitespace-separated cells, one row per
//! line, each cell either `0`/`1`/a digit, or `a.d` for a clue (either side
//! of the dot may be empty, e.g. `.7` or `4.`).

use crate::error::CoreError;
use crate::puzzle::{KakuroOptions, Puzzle};
use crate::token::Token;

/// Parse the typed form into a flat token sequence plus its width.
pub fn parse(input: &str) -> Result<(Vec<Token>, usize), CoreError> {
    let mut width = None;
    let mut tokens = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split_whitespace().collect();
        let w = *width.get_or_insert(cells.len());
        if cells.len() != w {
            return Err(CoreError::MalformedShape {
                len: tokens.len() + cells.len(),
                width: w,
            });
        }
        for cell in cells {
            tokens.push(parse_cell(cell)?);
        }
    }

    Ok((tokens, width.unwrap_or(0)))
}

/// Parse and lower straight into a `Puzzle`.
pub fn parse_puzzle(input: &str, opts: KakuroOptions) -> Result<Puzzle, CoreError> {
    let (tokens, width) = parse(input)?;
    Puzzle::from_tokens(tokens, width, opts)
}

fn parse_cell(s: &str) -> Result<Token, CoreError> {
    if let Some(dot) = s.find('.') {
        let (a, d) = (&s[..dot], &s[dot + 1..]);
        let across = parse_clue_component(a)?;
        let down = parse_clue_component(d)?;
        return Ok(Token::Clue { across, down });
    }
    let v: u32 = s.parse().map_err(|_| CoreError::InvalidToken { token: s.to_string() })?;
    Token::from_canonical_int(v).ok_or_else(|| CoreError::InvalidToken { token: s.to_string() })
}

fn parse_clue_component(s: &str) -> Result<u8, CoreError> {
    if s.is_empty() {
        return Ok(0);
    }
    s.parse().map_err(|_| CoreError::InvalidToken { token: s.to_string() })
}
