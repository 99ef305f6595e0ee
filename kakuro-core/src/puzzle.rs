//! Board parser and puzzle model: a flat token sequence becomes a cell arena
//! plus a list of run constraints that share cells, which is the mechanism
//! constraint propagation relies on.

use smallvec::SmallVec;

use crate::domain::Domain;
use crate::error::{CoreError, Direction};
use crate::token::Token;

/// Index into the puzzle's cell arena. Cells are shared by reference between
/// at most one across-run and one down-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u16);

impl core::fmt::Display for CellId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mutable state of one entry square: its remaining candidate digits,
/// and a scratch `trial` digit used by the backtracking searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub domain: Domain,
    pub trial: u8,
}

/// A run constraint: an ordered list of cells that must sum to `target_sum`,
/// with pairwise-distinct digits under the default exclusivity rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub target_sum: u32,
    pub cells: SmallVec<[CellId; 9]>,
}

/// Parameters governing a puzzle's solving/generation/verification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KakuroOptions {
    pub min_val: u8,
    pub max_val: u8,
    pub exclusive: bool,
}

impl KakuroOptions {
    pub const fn standard() -> Self {
        Self {
            min_val: 1,
            max_val: 9,
            exclusive: true,
        }
    }
}

impl Default for KakuroOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// The flat board: a token sequence plus its declared width. Height is
/// `tokens.len() / width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub tokens: Vec<Token>,
}

impl Board {
    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.tokens.len() / self.width
        }
    }
}

/// An immutable snapshot of a board's token sequence with all entry
/// positions filled with concrete digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub width: usize,
    pub tokens: Vec<Token>,
}

impl Solution {
    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.tokens.len() / self.width
        }
    }

    pub fn pretty_print(&self) -> String {
        pretty_print(&self.tokens, self.width)
    }
}

/// A Puzzle owns its Board, a cell arena, the derived run list, and the
/// parameters under which it was parsed. It is mutated only by `solve`
/// (via `kakuro-solver`'s `PuzzleSolveExt`) and `unsolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub board: Board,
    pub opts: KakuroOptions,
    /// One `Cell` per entry square, in the order it was first encountered
    /// (row-major). Shared, mutable state: a cell's index here is referenced
    /// by both the across-run and down-run it belongs to.
    pub cells: Vec<Cell>,
    /// Board position -> cell id, for positions that are entries. `None`
    /// elsewhere (black squares and clues).
    pub cell_at: Vec<Option<CellId>>,
    pub runs: Vec<Run>,
    /// Solutions discovered by the most recent `solve` call.
    pub solutions: Vec<Solution>,
}

impl Puzzle {
    /// Parse a flat token sequence into runs sharing a fresh cell arena.
    /// Never mutates its input.
    pub fn from_tokens(tokens: Vec<Token>, width: usize, opts: KakuroOptions) -> Result<Puzzle, CoreError> {
        if width == 0 || tokens.len() % width != 0 {
            return Err(CoreError::MalformedShape {
                len: tokens.len(),
                width,
            });
        }
        let height = tokens.len() / width;

        let mut cells = Vec::new();
        let mut cell_at: Vec<Option<CellId>> = vec![None; tokens.len()];
        for (idx, tok) in tokens.iter().enumerate() {
            if let Token::Entry(value) = tok {
                let id = CellId(cells.len() as u16);
                let domain = match value {
                    Some(d) => Domain::singleton(*d),
                    None => Domain::full(opts.min_val, opts.max_val),
                };
                cells.push(Cell { domain, trial: 0 });
                cell_at[idx] = Some(id);
            }
        }

        let mut runs = Vec::new();

        // Row scan (across runs).
        for row in 0..height {
            let base = row * width;
            for col in 0..width {
                let idx = base + col;
                if let Token::Clue { across, .. } = tokens[idx] {
                    if across > 0 {
                        let run_cells = scan_run(&tokens, &cell_at, idx + 1, 1, width - col - 1)?;
                        if run_cells.is_empty() {
                            return Err(CoreError::ClueWithoutEntry {
                                position: idx,
                                direction: Direction::Across,
                            });
                        }
                        runs.push(build_run(idx, across as u32, run_cells)?);
                    }
                }
            }
        }

        // Column scan (down runs).
        for col in 0..width {
            for row in 0..height {
                let idx = row * width + col;
                if let Token::Clue { down, .. } = tokens[idx] {
                    if down > 0 {
                        let run_cells = scan_run(&tokens, &cell_at, idx + width, width, height - row - 1)?;
                        if run_cells.is_empty() {
                            return Err(CoreError::ClueWithoutEntry {
                                position: idx,
                                direction: Direction::Down,
                            });
                        }
                        runs.push(build_run(idx, down as u32, run_cells)?);
                    }
                }
            }
        }

        Ok(Puzzle {
            board: Board { width, tokens },
            opts,
            cells,
            cell_at,
            runs,
            solutions: Vec::new(),
        })
    }

    /// Re-parse this puzzle's own board, discarding the result. A structural
    /// sanity check after external mutation of `board.tokens`.
    pub fn check_puzzle(&self) -> Result<(), CoreError> {
        Puzzle::from_tokens(self.board.tokens.clone(), self.board.width, self.opts).map(|_| ())
    }

    /// Reset every entry back to the unknown marker and every cell domain
    /// back to `full(min_val, max_val)`. Idempotent.
    pub fn unsolve(&mut self) {
        for tok in self.board.tokens.iter_mut() {
            if let Token::Entry(value) = tok {
                *value = None;
            }
        }
        for cell in self.cells.iter_mut() {
            cell.domain = Domain::full(self.opts.min_val, self.opts.max_val);
            cell.trial = 0;
        }
        self.solutions.clear();
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|c| c.domain.is_singleton())
    }

    pub fn pretty_print(&self) -> String {
        pretty_print(&self.board.tokens, self.board.width)
    }
}

/// Scan forward from `start`, stepping by `stride`, for up to `max_steps`
/// positions, collecting consecutive entry cells. Stops at the first
/// non-entry token or the board edge.
fn scan_run(
    tokens: &[Token],
    cell_at: &[Option<CellId>],
    start: usize,
    stride: usize,
    max_steps: usize,
) -> Result<SmallVec<[CellId; 9]>, CoreError> {
    let mut out = SmallVec::new();
    let mut pos = start;
    for _ in 0..max_steps {
        match tokens.get(pos) {
            Some(Token::Entry(_)) => {
                out.push(cell_at[pos].expect("entry token must have a cell id"));
                pos += stride;
            }
            _ => break,
        }
    }
    Ok(out)
}

fn build_run(position: usize, target_sum: u32, cells: SmallVec<[CellId; 9]>) -> Result<Run, CoreError> {
    if cells.len() > 9 {
        return Err(CoreError::RunTooLong {
            position,
            len: cells.len(),
        });
    }
    if !(1..=45).contains(&target_sum) {
        return Err(CoreError::RunSumOutOfRange {
            position,
            sum: target_sum,
        });
    }
    Ok(Run { target_sum, cells })
}

fn cell_label(tok: &Token) -> String {
    match tok {
        Token::Black => "0".to_string(),
        Token::Entry(None) => "1".to_string(),
        Token::Entry(Some(d)) => d.to_string(),
        Token::Clue { across, down } => format!("{across},{down}"),
    }
}

/// Render a grid for terminal display: cell width equal to the longest
/// token's rendering, cells centered, `|`-separated, rows delimited by
/// `+---+...+` divider lines.
pub fn pretty_print(tokens: &[Token], width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let labels: Vec<String> = tokens.iter().map(cell_label).collect();
    let cell_w = labels.iter().map(|s| s.len()).max().unwrap_or(1).max(1);

    let divider: String = {
        let mut d = String::new();
        for _ in 0..width {
            d.push('+');
            d.push_str(&"-".repeat(cell_w + 2));
        }
        d.push('+');
        d
    };

    let mut out = String::new();
    for row in labels.chunks(width) {
        out.push_str(&divider);
        out.push('\n');
        out.push('|');
        for label in row {
            let total_pad = cell_w + 2 - label.len();
            let left = total_pad / 2;
            let right = total_pad - left;
            out.push_str(&" ".repeat(left));
            out.push_str(label);
            out.push_str(&" ".repeat(right));
            out.push('|');
        }
        out.push('\n');
    }
    out.push_str(&divider);
    out.push('\n');
    out
}
