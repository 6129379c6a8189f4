//! The five named numerology formulas
//!
//! Every formula is a character subset (or date-component split) fed
//! through the letter table and the reduction loop.

use super::letters::{is_consonant, is_vowel, letter_value};
use super::reduce::{reduce, Figure};
use super::NumerologyError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sum the letter values of the characters selected by `keep`
fn name_sum<F>(name: &str, keep: F) -> u64
where
    F: Fn(char) -> bool,
{
    name.chars()
        .filter(|&c| keep(c))
        .map(|c| u64::from(letter_value(c)))
        .sum()
}

fn name_figure(sum: u64) -> Result<Figure, NumerologyError> {
    Figure::reduce_from(sum).ok_or(NumerologyError::NoLetters)
}

/// Expression (Destiny) Number: every letter of the full name
pub fn expression(full_name: &str) -> Result<Figure, NumerologyError> {
    name_figure(name_sum(full_name, |_| true))
}

/// Soul Urge (Heart's Desire) Number: vowels only
pub fn soul_urge(full_name: &str) -> Result<Figure, NumerologyError> {
    name_figure(name_sum(full_name, is_vowel))
}

/// Personality Number: consonants only
pub fn personality(full_name: &str) -> Result<Figure, NumerologyError> {
    name_figure(name_sum(full_name, is_consonant))
}

/// Life Path Number: year, month, and day each pre-reduced, the three
/// parts summed, the sum reduced. A part that lands on a master number
/// enters the sum unreduced.
pub fn life_path(date_of_birth: NaiveDate) -> Figure {
    let year = reduce(u64::from(date_of_birth.year().unsigned_abs()));
    let month = reduce(u64::from(date_of_birth.month()));
    let day = reduce(u64::from(date_of_birth.day()));
    // month and day are at least 1, so the sum is never zero
    Figure::reduce_from(year + month + day).expect("calendar components sum to a positive number")
}

/// Birth Day Number: the day of the month alone, reduced
pub fn birth_day(date_of_birth: NaiveDate) -> Figure {
    Figure::reduce_from(u64::from(date_of_birth.day())).expect("day of month is at least 1")
}

/// The five core figures computed together for one person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub life_path: Figure,
    pub expression: Figure,
    pub soul_urge: Figure,
    pub personality: Figure,
    pub birth_day: Figure,
}

impl Chart {
    /// Compute all five figures for a name and date of birth
    pub fn compute(full_name: &str, date_of_birth: NaiveDate) -> Result<Chart, NumerologyError> {
        Ok(Chart {
            life_path: life_path(date_of_birth),
            expression: expression(full_name)?,
            soul_urge: soul_urge(full_name)?,
            personality: personality(full_name)?,
            birth_day: birth_day(date_of_birth),
        })
    }
}
