//! Constraint propagation: narrow every cell's domain to a fixed point
//! using two rules, re-applied pass after pass until neither changes
//! anything:
//!
//! - **R1, sum-combination filter.** A run's cells can only end up holding
//!   digits that appear in some valid combination for `(target_sum, k)`. The
//!   very first pass intersects each cell against the whole-run digit union
//!   (cheap, from the precomputed table); later passes enumerate the actual
//!   tuples consistent with the run's *current*, already-narrowed domains and
//!   project back onto each position. Enumeration cost is bounded by a
//!   pass-dependent budget; a run too expensive for this pass is retried once
//!   the budget has grown on a later one.
//! - **R2, exclusivity by subset count.** If `n` cells in an exclusive run
//!   share an identical domain of size `n`, those cells occupy exactly that
//!   digit set, so every other cell in the run has it subtracted out. `n`
//!   exceeding the shared domain's size is a direct contradiction.
//!
//! A cell domain going empty at any point is reported immediately as
//! `Infeasible` rather than let propagation keep spinning on a dead puzzle.

use kakuro_core::{combinations, Domain, Puzzle, Run};

use crate::error::SolveError;
use crate::timeout::Deadline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagateOutcome {
    /// Every cell domain has collapsed to a singleton.
    Solved,
    /// A fixed point was reached with some domains still ambiguous.
    Stalled,
    /// Some cell domain went empty; no assignment can satisfy every run.
    Infeasible,
}

pub fn propagate(puzzle: &mut Puzzle, deadline: Option<&Deadline>) -> Result<PropagateOutcome, SolveError> {
    seed_initial_domains(puzzle);
    if has_empty_domain(puzzle) {
        return Ok(PropagateOutcome::Infeasible);
    }

    let mut pass = 0usize;
    loop {
        if let Some(dl) = deadline {
            if dl.expired() {
                return Err(SolveError::Timeout);
            }
        }

        let budget = pass_budget(pass);
        let changed_r1 = apply_rule_r1(puzzle, budget);
        if has_empty_domain(puzzle) {
            return Ok(PropagateOutcome::Infeasible);
        }

        let changed_r2 = if puzzle.opts.exclusive { apply_rule_r2(puzzle) } else { false };
        if has_empty_domain(puzzle) {
            return Ok(PropagateOutcome::Infeasible);
        }

        trace_pass(pass, budget, changed_r1, changed_r2);

        if puzzle.is_solved() {
            return Ok(PropagateOutcome::Solved);
        }
        if !changed_r1 && !changed_r2 {
            return Ok(PropagateOutcome::Stalled);
        }
        pass += 1;
    }
}

#[cfg(feature = "tracing")]
fn trace_pass(pass: usize, budget: f64, changed_r1: bool, changed_r2: bool) {
    tracing::trace!(pass, budget, changed_r1, changed_r2, "propagation pass boundary");
}

#[cfg(not(feature = "tracing"))]
fn trace_pass(_pass: usize, _budget: f64, _changed_r1: bool, _changed_r2: bool) {}

fn pass_budget(pass: usize) -> f64 {
    1.7f64.powi(pass as i32) + 500.0
}

fn has_empty_domain(puzzle: &Puzzle) -> bool {
    puzzle.cells.iter().any(|c| c.domain.is_empty())
}

fn seed_initial_domains(puzzle: &mut Puzzle) {
    for i in 0..puzzle.runs.len() {
        let run = puzzle.runs[i].clone();
        let whole_run_union = combinations::union(run.target_sum, run.cells.len() as u32);
        for cid in &run.cells {
            puzzle.cells[cid.0 as usize].domain.intersect_with(whole_run_union);
        }
    }
}

fn apply_rule_r1(puzzle: &mut Puzzle, budget: f64) -> bool {
    let mut changed = false;
    for i in 0..puzzle.runs.len() {
        let run = puzzle.runs[i].clone();
        let cost: f64 = run
            .cells
            .iter()
            .map(|cid| puzzle.cells[cid.0 as usize].domain.count() as f64)
            .product();
        if cost > budget {
            continue;
        }

        let projected = project_valid_tuples(&run, puzzle);
        for (pos, cid) in run.cells.iter().enumerate() {
            let cell = &mut puzzle.cells[cid.0 as usize];
            let before = cell.domain;
            cell.domain.intersect_with(projected[pos]);
            if cell.domain != before {
                changed = true;
            }
        }
    }
    changed
}

/// Enumerate every digit tuple consistent with `run`'s current domains and
/// `target_sum`, and return, per position, the union of digits that tuple
/// position took across all valid tuples. A position whose projected domain
/// comes back empty means no valid tuple exists at all, which the caller
/// turns into an empty cell domain (and thus `Infeasible`).
fn project_valid_tuples(run: &Run, puzzle: &Puzzle) -> [Domain; 9] {
    let domains: Vec<Domain> = run.cells.iter().map(|cid| puzzle.cells[cid.0 as usize].domain).collect();
    let mut projected = [Domain::EMPTY; 9];
    let mut cur = [0u8; 9];
    enumerate_tuples(&domains, run.target_sum, puzzle.opts.exclusive, 0, 0, 0, &mut cur, &mut projected);
    projected
}

#[allow(clippy::too_many_arguments)]
fn enumerate_tuples(
    domains: &[Domain],
    target: u32,
    exclusive: bool,
    pos: usize,
    sum: u32,
    used_mask: u16,
    cur: &mut [u8; 9],
    projected: &mut [Domain; 9],
) {
    if pos == domains.len() {
        if sum == target {
            for (i, &d) in cur.iter().take(pos).enumerate() {
                projected[i].insert(d);
            }
        }
        return;
    }
    for d in domains[pos].iter() {
        let next_sum = sum + d as u32;
        if next_sum > target {
            continue;
        }
        let bit = 1u16 << (d - 1);
        if exclusive && used_mask & bit != 0 {
            continue;
        }
        cur[pos] = d;
        enumerate_tuples(domains, target, exclusive, pos + 1, next_sum, used_mask | bit, cur, projected);
    }
}

/// For each group of cells in `run` sharing an identical domain, either
/// subtracts that domain from the rest of the run (the group is exactly that
/// size) or empties the group's domains (the group is larger, a
/// contradiction). Comparisons run in ascending cell-index order so the
/// result never depends on hash iteration order.
fn apply_rule_r2(puzzle: &mut Puzzle) -> bool {
    let mut changed = false;
    for i in 0..puzzle.runs.len() {
        let run = puzzle.runs[i].clone();
        let n = run.cells.len();
        let mut grouped = vec![false; n];

        for a in 0..n {
            if grouped[a] {
                continue;
            }
            let domain = puzzle.cells[run.cells[a].0 as usize].domain;
            if domain.is_empty() {
                continue;
            }
            let mut members = vec![a];
            for b in (a + 1)..n {
                if !grouped[b] && puzzle.cells[run.cells[b].0 as usize].domain == domain {
                    members.push(b);
                }
            }

            let size = domain.count() as usize;
            if members.len() == size {
                for &m in &members {
                    grouped[m] = true;
                }
                for other in 0..n {
                    if members.contains(&other) {
                        continue;
                    }
                    let cid = run.cells[other];
                    let before = puzzle.cells[cid.0 as usize].domain;
                    puzzle.cells[cid.0 as usize].domain.subtract_with(domain);
                    if puzzle.cells[cid.0 as usize].domain != before {
                        changed = true;
                    }
                }
            } else if members.len() > size {
                for &m in &members {
                    puzzle.cells[run.cells[m].0 as usize].domain = Domain::EMPTY;
                }
                changed = true;
            }
        }
    }
    changed
}
