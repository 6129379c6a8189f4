//! Pythagorean numerology engine
//!
//! Implements the digit-reduction arithmetic and the five named formulas
//! (Life Path, Expression, Soul Urge, Personality, Birth Day) over a name
//! and date of birth. The engine is pure: no I/O, no clocks, no state.

pub mod catalog;
pub mod formulas;
pub mod letters;
pub mod reduce;

use thiserror::Error;

pub use catalog::{interpretation, Interpretation};
pub use formulas::{birth_day, expression, life_path, personality, soul_urge, Chart};
pub use letters::{is_consonant, is_vowel, letter_value, CONSONANTS, VOWELS};
pub use reduce::{digit_sum, reduce, Figure, MASTER_NUMBERS};

/// Errors for formula inputs the engine cannot read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumerologyError {
    #[error("name contains no letters with a numerological value")]
    NoLetters,
}
