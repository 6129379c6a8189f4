//! User profile: the full name and date of birth a reading is computed from
//!
//! Validation mirrors the intake form of the service: both fields are
//! required, the name must be readable by the letter table, and the date
//! of birth must fall within the last hundred years.

use crate::numerology::letter_value;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Profile validation errors, worded for direct display
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Please enter both your full name and birth date.")]
    MissingField,
    #[error("Full name must contain at least one letter.")]
    NameUnreadable,
    #[error("Date of birth cannot be in the future.")]
    DateOfBirthInFuture,
    #[error("Date of birth must be within the last 100 years.")]
    DateOfBirthTooOld,
}

/// A stored user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full name as on the birth certificate
    pub full_name: String,
    /// Date of birth, ISO-8601 on the wire
    pub date_of_birth: NaiveDate,
    /// When this profile was last written
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Build a validated profile against today's date
    pub fn new(full_name: &str, date_of_birth: NaiveDate) -> Result<Self, ProfileError> {
        Self::new_at(full_name, date_of_birth, Utc::now())
    }

    /// Build a validated profile against an explicit clock
    pub fn new_at(
        full_name: &str,
        date_of_birth: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Self, ProfileError> {
        let full_name = full_name.trim();
        validate_name(full_name)?;
        validate_date_of_birth(date_of_birth, now.date_naive())?;
        Ok(Self {
            full_name: full_name.to_string(),
            date_of_birth,
            updated_at: now,
        })
    }
}

fn validate_name(full_name: &str) -> Result<(), ProfileError> {
    if full_name.is_empty() {
        return Err(ProfileError::MissingField);
    }
    if !full_name.chars().any(|c| letter_value(c) > 0) {
        return Err(ProfileError::NameUnreadable);
    }
    Ok(())
}

fn validate_date_of_birth(date_of_birth: NaiveDate, today: NaiveDate) -> Result<(), ProfileError> {
    if date_of_birth > today {
        return Err(ProfileError::DateOfBirthInFuture);
    }
    let min_allowed = earliest_allowed(today);
    if date_of_birth < min_allowed {
        return Err(ProfileError::DateOfBirthTooOld);
    }
    Ok(())
}

/// The oldest accepted date of birth: one hundred years before today
fn earliest_allowed(today: NaiveDate) -> NaiveDate {
    today
        .with_year(today.year() - 100)
        // Feb 29 in a year where it does not exist slides to Feb 28
        .or_else(|| {
            NaiveDate::from_ymd_opt(today.year() - 100, today.month(), today.day() - 1)
        })
        .expect("a century before a valid date is a valid date")
}
