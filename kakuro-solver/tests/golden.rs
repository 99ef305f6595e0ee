//! Golden corpus: literal puzzle/solution pairs, not derived at test time.
//! Reproduced as `Token` literals rather than transcribed by hand from the
//! wire-format integers (a digit of exactly `1` is never representable
//! through `Token::from_canonical_int`; see `kakuro-core/src/token.rs`).

use kakuro_core::token::Token;
use kakuro_core::{KakuroOptions, Puzzle};
use kakuro_solver::PuzzleSolveExt;

struct Golden {
    label: &'static str,
    width: usize,
    input: Vec<Token>,
    solution: Vec<Token>,
}

fn golden_corpus() -> Vec<Golden> {
    vec![
        Golden {
            label: "the canonical 4-wide example",
            width: 4,
            input: vec![
                Token::Black, Token::Black, Token::Clue { across: 0, down: 7 }, Token::Clue { across: 0, down: 6 },
                Token::Black, Token::Clue { across: 4, down: 4 }, Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 7, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 6, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None),
            ],
            solution: vec![
                Token::Black, Token::Black, Token::Clue { across: 0, down: 7 }, Token::Clue { across: 0, down: 6 },
                Token::Black, Token::Clue { across: 4, down: 4 }, Token::Entry(Some(1)), Token::Entry(Some(3)),
                Token::Clue { across: 7, down: 0 }, Token::Entry(Some(1)), Token::Entry(Some(4)), Token::Entry(Some(2)),
                Token::Clue { across: 6, down: 0 }, Token::Entry(Some(3)), Token::Entry(Some(2)), Token::Entry(Some(1)),
            ],
        },
        Golden {
            label: "the 5-wide \"two\" puzzle",
            width: 5,
            input: vec![
                Token::Black, Token::Black, Token::Clue { across: 0, down: 23 }, Token::Clue { across: 0, down: 21 }, Token::Black,
                Token::Black, Token::Clue { across: 8, down: 15 }, Token::Entry(None), Token::Entry(None), Token::Black,
                Token::Clue { across: 8, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Black,
                Token::Clue { across: 27, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 5, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Black, Token::Black,
                Token::Clue { across: 14, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Black, Token::Black,
                Token::Black, Token::Black, Token::Black, Token::Black, Token::Black,
            ],
            solution: vec![
                Token::Black, Token::Black, Token::Clue { across: 0, down: 23 }, Token::Clue { across: 0, down: 21 }, Token::Black,
                Token::Black, Token::Clue { across: 8, down: 15 }, Token::Entry(Some(1)), Token::Entry(Some(7)), Token::Black,
                Token::Clue { across: 8, down: 0 }, Token::Entry(Some(1)), Token::Entry(Some(2)), Token::Entry(Some(5)), Token::Black,
                Token::Clue { across: 27, down: 0 }, Token::Entry(Some(7)), Token::Entry(Some(8)), Token::Entry(Some(9)), Token::Entry(Some(3)),
                Token::Clue { across: 5, down: 0 }, Token::Entry(Some(2)), Token::Entry(Some(3)), Token::Black, Token::Black,
                Token::Clue { across: 14, down: 0 }, Token::Entry(Some(5)), Token::Entry(Some(9)), Token::Black, Token::Black,
                Token::Black, Token::Black, Token::Black, Token::Black, Token::Black,
            ],
        },
        Golden {
            label: "the 8-wide \"three\" puzzle",
            width: 8,
            input: vec![
                Token::Black, Token::Clue { across: 0, down: 23 }, Token::Clue { across: 0, down: 30 }, Token::Black, Token::Black, Token::Clue { across: 0, down: 27 }, Token::Clue { across: 0, down: 12 }, Token::Clue { across: 0, down: 16 },
                Token::Clue { across: 16, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Black, Token::Clue { across: 24, down: 17 }, Token::Entry(None), Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 17, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Clue { across: 29, down: 15 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 35, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Clue { across: 0, down: 12 }, Token::Black,
                Token::Black, Token::Clue { across: 7, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Clue { across: 8, down: 7 }, Token::Entry(None), Token::Entry(None), Token::Clue { across: 0, down: 7 },
                Token::Black, Token::Clue { across: 0, down: 11 }, Token::Clue { across: 16, down: 10 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 21, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Clue { across: 5, down: 0 }, Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 6, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Black, Token::Clue { across: 3, down: 0 }, Token::Entry(None), Token::Entry(None),
            ],
            solution: vec![
                Token::Black, Token::Clue { across: 0, down: 23 }, Token::Clue { across: 0, down: 30 }, Token::Black, Token::Black, Token::Clue { across: 0, down: 27 }, Token::Clue { across: 0, down: 12 }, Token::Clue { across: 0, down: 16 },
                Token::Clue { across: 16, down: 0 }, Token::Entry(Some(9)), Token::Entry(Some(7)), Token::Black, Token::Clue { across: 24, down: 17 }, Token::Entry(Some(8)), Token::Entry(Some(7)), Token::Entry(Some(9)),
                Token::Clue { across: 17, down: 0 }, Token::Entry(Some(8)), Token::Entry(Some(9)), Token::Clue { across: 29, down: 15 }, Token::Entry(Some(8)), Token::Entry(Some(9)), Token::Entry(Some(5)), Token::Entry(Some(7)),
                Token::Clue { across: 35, down: 0 }, Token::Entry(Some(6)), Token::Entry(Some(8)), Token::Entry(Some(5)), Token::Entry(Some(9)), Token::Entry(Some(7)), Token::Clue { across: 0, down: 12 }, Token::Black,
                Token::Black, Token::Clue { across: 7, down: 0 }, Token::Entry(Some(6)), Token::Entry(Some(1)), Token::Clue { across: 8, down: 7 }, Token::Entry(Some(2)), Token::Entry(Some(6)), Token::Clue { across: 0, down: 7 },
                Token::Black, Token::Clue { across: 0, down: 11 }, Token::Clue { across: 16, down: 10 }, Token::Entry(Some(4)), Token::Entry(Some(6)), Token::Entry(Some(1)), Token::Entry(Some(3)), Token::Entry(Some(2)),
                Token::Clue { across: 21, down: 0 }, Token::Entry(Some(8)), Token::Entry(Some(9)), Token::Entry(Some(3)), Token::Entry(Some(1)), Token::Clue { across: 5, down: 0 }, Token::Entry(Some(1)), Token::Entry(Some(4)),
                Token::Clue { across: 6, down: 0 }, Token::Entry(Some(3)), Token::Entry(Some(1)), Token::Entry(Some(2)), Token::Black, Token::Clue { across: 3, down: 0 }, Token::Entry(Some(2)), Token::Entry(Some(1)),
            ],
        },
        Golden {
            label: "the 8-wide \"four\" puzzle, 9 rows",
            width: 8,
            input: vec![
                Token::Black, Token::Black, Token::Black, Token::Black, Token::Black, Token::Black, Token::Clue { across: 0, down: 16 }, Token::Clue { across: 0, down: 3 },
                Token::Black, Token::Black, Token::Black, Token::Black, Token::Black, Token::Clue { across: 8, down: 6 }, Token::Entry(None), Token::Entry(None),
                Token::Black, Token::Clue { across: 0, down: 16 }, Token::Clue { across: 0, down: 6 }, Token::Black, Token::Clue { across: 14, down: 30 }, Token::Entry(None), Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 11, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Clue { across: 7, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Clue { across: 0, down: 6 }, Token::Black,
                Token::Clue { across: 10, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Clue { across: 13, down: 7 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Clue { across: 0, down: 16 },
                Token::Black, Token::Clue { across: 14, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Clue { across: 8, down: 0 }, Token::Entry(None), Token::Entry(None),
                Token::Black, Token::Clue { across: 0, down: 4 }, Token::Clue { across: 9, down: 17 }, Token::Entry(None), Token::Entry(None), Token::Clue { across: 11, down: 0 }, Token::Entry(None), Token::Entry(None),
                Token::Clue { across: 12, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Entry(None), Token::Black, Token::Black, Token::Black, Token::Black,
                Token::Clue { across: 10, down: 0 }, Token::Entry(None), Token::Entry(None), Token::Black, Token::Black, Token::Black, Token::Black, Token::Black,
            ],
            solution: vec![
                Token::Black, Token::Black, Token::Black, Token::Black, Token::Black, Token::Black, Token::Clue { across: 0, down: 16 }, Token::Clue { across: 0, down: 3 },
                Token::Black, Token::Black, Token::Black, Token::Black, Token::Black, Token::Clue { across: 8, down: 6 }, Token::Entry(Some(7)), Token::Entry(Some(1)),
                Token::Black, Token::Clue { across: 0, down: 16 }, Token::Clue { across: 0, down: 6 }, Token::Black, Token::Clue { across: 14, down: 30 }, Token::Entry(Some(3)), Token::Entry(Some(9)), Token::Entry(Some(2)),
                Token::Clue { across: 11, down: 0 }, Token::Entry(Some(9)), Token::Entry(Some(2)), Token::Clue { across: 7, down: 0 }, Token::Entry(Some(6)), Token::Entry(Some(1)), Token::Clue { across: 0, down: 6 }, Token::Black,
                Token::Clue { across: 10, down: 0 }, Token::Entry(Some(7)), Token::Entry(Some(3)), Token::Clue { across: 13, down: 7 }, Token::Entry(Some(8)), Token::Entry(Some(2)), Token::Entry(Some(3)), Token::Clue { across: 0, down: 16 },
                Token::Black, Token::Clue { across: 14, down: 0 }, Token::Entry(Some(1)), Token::Entry(Some(4)), Token::Entry(Some(9)), Token::Clue { across: 8, down: 0 }, Token::Entry(Some(1)), Token::Entry(Some(7)),
                Token::Black, Token::Clue { across: 0, down: 4 }, Token::Clue { across: 9, down: 17 }, Token::Entry(Some(2)), Token::Entry(Some(7)), Token::Clue { across: 11, down: 0 }, Token::Entry(Some(2)), Token::Entry(Some(9)),
                Token::Clue { across: 12, down: 0 }, Token::Entry(Some(3)), Token::Entry(Some(8)), Token::Entry(Some(1)), Token::Black, Token::Black, Token::Black, Token::Black,
                Token::Clue { across: 10, down: 0 }, Token::Entry(Some(1)), Token::Entry(Some(9)), Token::Black, Token::Black, Token::Black, Token::Black, Token::Black,
            ],
        },
    ]
}

#[test]
fn golden_corpus_solves_to_the_recorded_solution() {
    for entry in golden_corpus() {
        let mut puzzle = Puzzle::from_tokens(entry.input.clone(), entry.width, KakuroOptions::standard())
            .unwrap_or_else(|e| panic!("{}: failed to parse: {e}", entry.label));
        assert!(puzzle.solve(None, true).unwrap(), "{}: expected a solution", entry.label);
        assert_eq!(puzzle.board.tokens, entry.solution, "{}: solved board mismatch", entry.label);
        assert_eq!(puzzle.solutions.len(), 1, "{}: expected a unique recorded solution", entry.label);
    }
}
