#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod error;

pub use crate::error::GenError;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use kakuro_core::token::Token;
use kakuro_core::{KakuroOptions, Puzzle};
use kakuro_verify::PuzzleVerifyExt;

/// Parameters governing one `generate_random` call, mirroring
/// `KakuroOptions`'s plain-`Copy`-struct shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub solved: bool,
    pub opts: KakuroOptions,
}

impl GenerateConfig {
    pub fn generate(&self) -> Result<Puzzle, GenError> {
        generate_random(
            self.width,
            self.height,
            self.seed,
            self.solved,
            self.opts.exclusive,
            self.opts.min_val,
            self.opts.max_val,
        )
    }
}

/// Generate a random Kakuro.
///
/// Always builds the fully solved grid first regardless of `solved`, and
/// only erases entries back to the unknown marker as a final pass when
/// `solved` is false — the RNG stream is identical either way, so calling
/// this twice with the same `seed` and `solved` flipped describes the same
/// underlying board.
#[cfg_attr(feature = "tracing", tracing::instrument(fields(width, height, solved)))]
pub fn generate_random(
    width: usize,
    height: usize,
    seed: Option<u64>,
    solved: bool,
    exclusive: bool,
    min_val: u8,
    max_val: u8,
) -> Result<Puzzle, GenError> {
    let mut rng = match seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_os_rng(),
    };

    let n = width * height;
    let mut filled: Vec<Option<u8>> = vec![None; n];
    let mut row_seen = vec![0u16; height];
    let mut col_seen = vec![0u16; width];

    // Step 2: row-major fill attempts.
    let mut attempts = 0u32;
    for r in 0..height {
        for c in 0..width {
            if !rng.random_bool(0.4) {
                continue;
            }
            for _ in 0..20 {
                attempts += 1;
                let d = rng.random_range(min_val..=max_val);
                let bit = 1u16 << (d - 1);
                if exclusive && (row_seen[r] & bit != 0 || col_seen[c] & bit != 0) {
                    continue;
                }
                filled[r * width + c] = Some(d);
                row_seen[r] |= bit;
                col_seen[c] |= bit;
                break;
            }
        }
    }
    trace_fill_attempts(attempts);

    // Step 3: first row and first column are always Black.
    for c in 0..width {
        filled[c] = None;
    }
    for r in 0..height {
        filled[r * width] = None;
    }

    let (across, down) = accumulate_clue_sums(&filled, width, height);

    let mut tokens = Vec::with_capacity(n);
    for idx in 0..n {
        tokens.push(match (across[idx], down[idx]) {
            (None, None) => match filled[idx] {
                Some(d) => Token::Entry(Some(d)),
                None => Token::Black,
            },
            (a, d) => Token::Clue { across: a.unwrap_or(0), down: d.unwrap_or(0) },
        });
    }

    if !solved {
        for tok in tokens.iter_mut() {
            if let Token::Entry(Some(_)) = tok {
                *tok = Token::Entry(None);
            }
        }
    }

    let opts = KakuroOptions { min_val, max_val, exclusive };
    let puzzle = Puzzle::from_tokens(tokens, width, opts)?;

    if solved {
        debug_assert!(
            puzzle.check_solution().is_ok(),
            "a freshly generated solved board must satisfy its own runs by construction"
        );
    }

    Ok(puzzle)
}

#[cfg(feature = "tracing")]
fn trace_fill_attempts(attempts: u32) {
    tracing::debug!(attempts, "generator fill attempts");
}

#[cfg(not(feature = "tracing"))]
fn trace_fill_attempts(_attempts: u32) {}

/// Step 4 (across, scanning each row right to left) and step 5 (down,
/// scanning each column bottom to top): accumulate consecutive filled
/// digits and drop the sum onto the Black cell that ends the run. A cell
/// that terminates both an across and a down run gets both components.
fn accumulate_clue_sums(filled: &[Option<u8>], width: usize, height: usize) -> (Vec<Option<u8>>, Vec<Option<u8>>) {
    let n = width * height;
    let mut across = vec![None; n];
    let mut down = vec![None; n];

    for r in 0..height {
        let mut sum = 0u32;
        for c in (0..width).rev() {
            let idx = r * width + c;
            match filled[idx] {
                Some(d) => sum += d as u32,
                None => {
                    if sum > 0 {
                        across[idx] = Some(sum as u8);
                        sum = 0;
                    }
                }
            }
        }
    }

    for c in 0..width {
        let mut sum = 0u32;
        for r in (0..height).rev() {
            let idx = r * width + c;
            match filled[idx] {
                Some(d) => sum += d as u32,
                None => {
                    if sum > 0 {
                        down[idx] = Some(sum as u8);
                        sum = 0;
                    }
                }
            }
        }
    }

    (across, down)
}
