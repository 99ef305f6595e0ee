#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod propagate;
pub mod search;
pub mod timeout;

pub use crate::error::SolveError;
pub use crate::timeout::Deadline;

use std::time::Duration;

use kakuro_core::puzzle::Solution;
use kakuro_core::token::Token;
use kakuro_core::{Domain, Puzzle};

/// A scalar difficulty estimate derived from how much residual search a
/// solve actually needed. Not calibrated against any external scale: useful
/// only for ranking puzzles relative to each other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    pub residual_search_space: u128,
    pub entries_remaining: u32,
}

pub fn difficulty_scalar(stats: &SolveStats) -> f64 {
    (stats.residual_search_space.max(1) as f64).ln() + 0.15 * stats.entries_remaining as f64
}

/// Solve and return the first solution without mutating `puzzle`.
pub fn solve_one(puzzle: &Puzzle) -> Result<Option<Solution>, SolveError> {
    let mut scratch = puzzle.clone();
    let solutions = solve_inner(&mut scratch, 1, None)?;
    Ok(solutions.into_iter().next())
}

/// Count solutions up to `limit` without mutating `puzzle`; used by the
/// generator to check uniqueness without committing a guess.
pub fn count_solutions_up_to(puzzle: &Puzzle, limit: u32) -> Result<u32, SolveError> {
    let mut scratch = puzzle.clone();
    let solutions = solve_inner(&mut scratch, limit, None)?;
    Ok(solutions.len() as u32)
}

fn solve_inner(puzzle: &mut Puzzle, limit: u32, deadline: Option<&Deadline>) -> Result<Vec<Solution>, SolveError> {
    match propagate::propagate(puzzle, deadline)? {
        propagate::PropagateOutcome::Infeasible => Err(SolveError::Unsolvable),
        propagate::PropagateOutcome::Solved | propagate::PropagateOutcome::Stalled => {
            search::search(puzzle, limit, deadline)
        }
    }
}

/// Gives `Puzzle` a `solve`/`solve_all` method-call surface, kept out of
/// `kakuro-core` so the core model stays free of any algorithm-crate
/// dependency.
pub trait PuzzleSolveExt {
    /// Find and commit the first solution. Returns `Ok(false)` (puzzle left
    /// untouched) on an unsolvable puzzle only if no error path applies;
    /// genuinely unsatisfiable puzzles return `Err(SolveError::Unsolvable)`.
    fn solve(&mut self, timeout: Option<Duration>, raise_on_timeout: bool) -> Result<bool, SolveError>;

    /// Like `solve`, but records up to `limit` distinct solutions rather
    /// than just the first.
    fn solve_all(&mut self, limit: u32, timeout: Option<Duration>, raise_on_timeout: bool) -> Result<bool, SolveError>;

    /// Residual search space and remaining ambiguous entries, as of the
    /// puzzle's current domain state (for `difficulty_scalar`).
    fn stats(&self) -> SolveStats;
}

impl PuzzleSolveExt for Puzzle {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(cells = self.cells.len())))]
    fn solve(&mut self, timeout: Option<Duration>, raise_on_timeout: bool) -> Result<bool, SolveError> {
        self.solve_all(1, timeout, raise_on_timeout)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(cells = self.cells.len(), limit)))]
    fn solve_all(&mut self, limit: u32, timeout: Option<Duration>, raise_on_timeout: bool) -> Result<bool, SolveError> {
        if self.is_solved() && !self.solutions.is_empty() {
            return Err(SolveError::AlreadySolved);
        }

        let pre_solve_cells = self.cells.clone();
        let deadline = timeout.map(Deadline::after);

        match solve_inner(self, limit, deadline.as_ref()) {
            Ok(solutions) if solutions.is_empty() => {
                self.cells = pre_solve_cells;
                Ok(false)
            }
            Ok(solutions) => {
                commit_first_solution(self, &solutions[0]);
                self.solutions = solutions;
                Ok(true)
            }
            Err(SolveError::Timeout) => {
                self.cells = pre_solve_cells;
                if raise_on_timeout {
                    Err(SolveError::Timeout)
                } else {
                    Ok(false)
                }
            }
            Err(other) => {
                self.cells = pre_solve_cells;
                Err(other)
            }
        }
    }

    fn stats(&self) -> SolveStats {
        let ambiguous = self.cells.iter().filter(|c| !c.domain.is_singleton());
        let residual_search_space = ambiguous.clone().map(|c| c.domain.count() as u128).product();
        let entries_remaining = ambiguous.count() as u32;
        SolveStats { residual_search_space, entries_remaining }
    }
}

/// Write the first solution's digits back onto the puzzle's own board and
/// collapse every entry domain to match, so `is_solved` and `pretty_print`
/// reflect it immediately.
fn commit_first_solution(puzzle: &mut Puzzle, solution: &Solution) {
    puzzle.board.tokens = solution.tokens.clone();
    for (idx, tok) in solution.tokens.iter().enumerate() {
        if let Token::Entry(Some(d)) = tok {
            if let Some(cid) = puzzle.cell_at[idx] {
                puzzle.cells[cid.0 as usize].domain = Domain::singleton(*d);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kakuro_core::{KakuroOptions, Puzzle};

    fn tok(v: i64) -> Token {
        Token::from_canonical_int(v as u32).unwrap()
    }

    fn sample_tokens() -> Vec<Token> {
        vec![
            tok(0), tok(0), Token::Clue { across: 0, down: 7 }, Token::Clue { across: 0, down: 6 },
            tok(0), Token::Clue { across: 4, down: 4 }, tok(1), tok(1),
            Token::Clue { across: 7, down: 0 }, tok(1), tok(1), tok(1),
            Token::Clue { across: 6, down: 0 }, tok(1), tok(1), tok(1),
        ]
    }

    #[test]
    fn solve_commits_the_first_solution() {
        let mut puzzle = Puzzle::from_tokens(sample_tokens(), 4, KakuroOptions::standard()).unwrap();
        assert!(puzzle.solve(None, true).unwrap());
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.solutions.len(), 1);
    }

    #[test]
    fn solve_on_an_already_solved_puzzle_errors() {
        let mut puzzle = Puzzle::from_tokens(sample_tokens(), 4, KakuroOptions::standard()).unwrap();
        assert!(puzzle.solve(None, true).unwrap());
        let err = puzzle.solve(None, true).unwrap_err();
        assert!(matches!(err, SolveError::AlreadySolved));
    }

    #[test]
    fn solve_one_does_not_mutate_its_input() {
        let puzzle = Puzzle::from_tokens(sample_tokens(), 4, KakuroOptions::standard()).unwrap();
        let before = puzzle.clone();
        let solution = solve_one(&puzzle).unwrap();
        assert!(solution.is_some());
        assert_eq!(puzzle, before);
    }

    #[test]
    fn unsolvable_puzzle_reports_unsolvable() {
        let tokens = vec![Token::Clue { across: 3, down: 0 }, tok(1), tok(1)];
        let mut puzzle = Puzzle::from_tokens(tokens, 3, KakuroOptions::standard()).unwrap();
        for cell in puzzle.cells.iter_mut() {
            cell.domain = Domain::singleton(9);
        }
        let err = puzzle.solve(None, true).unwrap_err();
        assert!(matches!(err, SolveError::Unsolvable));
    }

    #[test]
    fn zero_timeout_either_times_out_or_still_finds_a_solution() {
        // A zero-duration deadline may or may not expire before this tiny
        // puzzle finishes; both outcomes are valid, a panic is not.
        let mut puzzle = Puzzle::from_tokens(sample_tokens(), 4, KakuroOptions::standard()).unwrap();
        match puzzle.solve(Some(Duration::from_secs(0)), true) {
            Ok(solved) => assert!(solved || !puzzle.is_solved()),
            Err(SolveError::Timeout) => assert!(!puzzle.is_solved()),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
}
