#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod combinations;
pub mod domain;
pub mod error;
pub mod format;
pub mod puzzle;
pub mod token;

pub use crate::domain::Domain;
pub use crate::error::{CoreError, Direction};
pub use crate::puzzle::{Board, Cell, CellId, KakuroOptions, Puzzle, Run, Solution};
pub use crate::token::Token;
