//! Alternative textual encodings that lower to the canonical token form.
//! `canonical` is the wire format itself (plain integers plus `(across,
//! down)` pairs); `typed` is an easier-to-type whitespace form.

pub mod canonical;
pub mod typed;
