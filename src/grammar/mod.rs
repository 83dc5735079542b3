//! Grammar Module
//!
//! A strip grammar is a sequence of fold tokens (`A`-`D` front, `a`-`d` back,
//! each followed by an angle digit `0`-`2`) with `{ }` opening side branches.
//!
//! ```text
//! A0{B1}C2   panel on edge A, a branch hinged off it, then C continues the main chain
//! ```

pub mod grammar_data;
pub mod grammar_operations;

pub use grammar_data::{AngleCode, FaceSide, GrammarToken, PanelPlan};
pub use grammar_operations::{parse_grammar, tokenize};
