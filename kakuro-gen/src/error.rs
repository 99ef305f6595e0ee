use kakuro_core::CoreError;
use thiserror::Error;

/// Generation failures. A generated layout can, by bad luck, produce a run
/// longer than nine cells or an out-of-range sum; the board parser's own
/// structural check catches both, and we surface them rather than silently
/// retrying, accepting an occasional thinner-than-intended layout instead
/// of a hidden retry loop.
#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    Core(#[from] CoreError),
}
