#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod error;

pub use crate::error::SolutionError;

use kakuro_core::token::Token;
use kakuro_core::{CoreError, KakuroOptions, Puzzle};

/// Gives `Puzzle` a `check_solution`/`check_puzzle` method-call surface,
/// analogous to `kakuro_solver`'s `PuzzleSolveExt` and kept out of
/// `kakuro-core` for the same reason.
pub trait PuzzleVerifyExt {
    fn check_solution(&self) -> Result<(), SolutionError>;
    fn check_puzzle(&self) -> Result<(), CoreError>;
}

impl PuzzleVerifyExt for Puzzle {
    fn check_solution(&self) -> Result<(), SolutionError> {
        check_runs(&self.board.tokens, &self.cell_at, &self.runs, self.opts)
    }

    fn check_puzzle(&self) -> Result<(), CoreError> {
        Puzzle::check_puzzle(self)
    }
}

/// Re-derive runs from `tokens`/`width` entirely from scratch (never
/// trusting a caller's own solver or generator bookkeeping) and check the
/// claimed solution against them. Structurally malformed input surfaces as
/// `SolutionError::Malformed` rather than panicking.
pub fn verify_solution(tokens: &[Token], width: usize, opts: KakuroOptions) -> Result<(), SolutionError> {
    let puzzle = Puzzle::from_tokens(tokens.to_vec(), width, opts)?;
    check_runs(&puzzle.board.tokens, &puzzle.cell_at, &puzzle.runs, opts)
}

/// Check an already-derived run list against the claimed solution: any
/// still-unknown entry is `NotSolved`; otherwise `InvalidSum`, then
/// `OutOfRange`, then (if exclusive) `NonUnique`. Range is validated before
/// distinctness so the distinctness check's digit-indexed bitmask never
/// has to shift by an out-of-range digit.
fn check_runs(
    tokens: &[Token],
    cell_at: &[Option<kakuro_core::puzzle::CellId>],
    runs: &[kakuro_core::puzzle::Run],
    opts: kakuro_core::KakuroOptions,
) -> Result<(), SolutionError> {
    for (idx, tok) in tokens.iter().enumerate() {
        if matches!(tok, Token::Entry(None)) {
            return Err(SolutionError::NotSolved { position: idx });
        }
    }

    let digit_at = |idx: usize| -> u8 {
        match tokens[idx] {
            Token::Entry(Some(d)) => d,
            _ => unreachable!("run cells are always Entry positions, already checked solved above"),
        }
    };
    let position_of = |cid: kakuro_core::puzzle::CellId| -> usize {
        cell_at
            .iter()
            .position(|c| *c == Some(cid))
            .expect("every run cell id appears in cell_at")
    };

    for (run_index, run) in runs.iter().enumerate() {
        let sum: u32 = run.cells.iter().map(|cid| digit_at(position_of(*cid)) as u32).sum();
        if sum != run.target_sum {
            return Err(SolutionError::InvalidSum { run_index, expected: run.target_sum, actual: sum });
        }
    }

    // Checked before the distinctness pass below: that pass shifts a `1u16`
    // by `digit - 1`, which underflows for `digit == 0` and overflows a
    // `u16` for `digit > 16`. Range-checking first means that shift only
    // ever runs against a digit already known to fit.
    for (idx, tok) in tokens.iter().enumerate() {
        if let Token::Entry(Some(d)) = tok {
            if *d < opts.min_val || *d > opts.max_val {
                return Err(SolutionError::OutOfRange { position: idx, value: *d, min: opts.min_val, max: opts.max_val });
            }
        }
    }

    if opts.exclusive {
        for (run_index, run) in runs.iter().enumerate() {
            let mut seen_mask = 0u16;
            for cid in &run.cells {
                let d = digit_at(position_of(*cid));
                let bit = 1u16 << (d - 1);
                if seen_mask & bit != 0 {
                    return Err(SolutionError::NonUnique { run_index });
                }
                seen_mask |= bit;
            }
        }
    }

    Ok(())
}
