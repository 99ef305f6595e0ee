//! Backtracking search over the residual domains left once propagation
//! stalls. Cells are visited in ascending arena order — already-singleton
//! cells (including a puzzle propagation solved outright) contribute
//! nothing to the search and fall out of `depth == ambiguous.len()` on the
//! very first call, so "propagation alone solved it" and "propagation left
//! a residual" share one code path.

use kakuro_core::puzzle::Solution;
use kakuro_core::token::Token;
use kakuro_core::Puzzle;

use crate::error::SolveError;
use crate::timeout::Deadline;

/// Above this many residual assignments, a solve with no deadline logs a
/// diagnostic rather than silently grinding.
const WARNING_SEARCH_SPACE: u128 = 500_000;

pub fn search(puzzle: &mut Puzzle, limit: u32, deadline: Option<&Deadline>) -> Result<Vec<Solution>, SolveError> {
    if puzzle.cells.iter().any(|c| c.domain.is_empty()) {
        return Err(SolveError::Unsolvable);
    }

    for cell in puzzle.cells.iter_mut() {
        if let Some(d) = cell.domain.single_value() {
            cell.trial = d;
        }
    }

    let ambiguous: Vec<usize> = puzzle
        .cells
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.domain.is_singleton())
        .map(|(i, _)| i)
        .collect();

    let residual: u128 = ambiguous.iter().map(|&i| puzzle.cells[i].domain.count() as u128).product();
    if residual > WARNING_SEARCH_SPACE && deadline.is_none() {
        log_large_search_space(residual);
    }

    let mut solutions = Vec::new();
    enumerate(puzzle, &ambiguous, 0, limit, deadline, &mut solutions)?;
    Ok(solutions)
}

#[cfg(feature = "tracing")]
fn log_large_search_space(residual: u128) {
    tracing::warn!(residual, "residual search space exceeds warning threshold");
}

#[cfg(not(feature = "tracing"))]
fn log_large_search_space(_residual: u128) {}

fn enumerate(
    puzzle: &mut Puzzle,
    ambiguous: &[usize],
    depth: usize,
    limit: u32,
    deadline: Option<&Deadline>,
    out: &mut Vec<Solution>,
) -> Result<(), SolveError> {
    if out.len() as u32 >= limit {
        return Ok(());
    }
    if let Some(dl) = deadline {
        if dl.expired() {
            return Err(SolveError::Timeout);
        }
    }

    if depth == ambiguous.len() {
        if satisfies_every_run(puzzle) {
            out.push(snapshot(puzzle));
        }
        return Ok(());
    }

    let cell_idx = ambiguous[depth];
    let digits: Vec<u8> = puzzle.cells[cell_idx].domain.iter().collect();
    for d in digits {
        puzzle.cells[cell_idx].trial = d;
        enumerate(puzzle, ambiguous, depth + 1, limit, deadline, out)?;
        if out.len() as u32 >= limit {
            return Ok(());
        }
    }

    if let Some(dl) = deadline {
        if dl.expired() {
            return Err(SolveError::Timeout);
        }
    }
    Ok(())
}

fn satisfies_every_run(puzzle: &Puzzle) -> bool {
    for run in &puzzle.runs {
        let mut sum = 0u32;
        let mut seen_mask = 0u16;
        for cid in &run.cells {
            let v = puzzle.cells[cid.0 as usize].trial;
            sum += v as u32;
            if puzzle.opts.exclusive {
                let bit = 1u16 << (v - 1);
                if seen_mask & bit != 0 {
                    return false;
                }
                seen_mask |= bit;
            }
        }
        if sum != run.target_sum {
            return false;
        }
    }
    true
}

fn snapshot(puzzle: &Puzzle) -> Solution {
    let mut tokens = puzzle.board.tokens.clone();
    for (idx, tok) in tokens.iter_mut().enumerate() {
        if matches!(tok, Token::Entry(_)) {
            if let Some(cid) = puzzle.cell_at[idx] {
                *tok = Token::Entry(Some(puzzle.cells[cid.0 as usize].trial));
            }
        }
    }
    Solution { width: puzzle.board.width, tokens }
}
