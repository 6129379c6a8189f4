//! Namaskar - numerology reading service
//!
//! Computes Pythagorean numerology readings (Life Path, Expression, Soul
//! Urge, Personality, Birth Day) for an authenticated user's profile.
//!
//! # Overview
//!
//! This crate provides the full reading pipeline:
//! - Pure numerology engine: digit reduction with master-number fixed
//!   points, the Pythagorean letter table, and the five named formulas
//! - Identity providers behind a common trait (hosted REST backend and an
//!   offline local registry) with persisted sessions
//! - Local JSON persistence for accounts, sessions, and profiles
//! - Optional generative-text annotation of the Life Path figure
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use namaskar::numerology::Chart;
//!
//! let dob = NaiveDate::from_ymd_opt(1990, 3, 21).unwrap();
//! let chart = Chart::compute("John Doe", dob).unwrap();
//!
//! assert_eq!(chart.life_path.value(), 7);
//! assert_eq!(chart.expression.value(), 8);
//! assert!(!chart.life_path.is_master());
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod insight;
pub mod numerology;
pub mod observability;
pub mod profile;
pub mod reading;
pub mod store;
pub mod testing;

pub use auth::{AuthSession, IdentityProvider};
pub use config::AppConfig;
pub use error::{NamaskarError, NamaskarResult};
pub use insight::InsightProvider;
pub use numerology::{Chart, Figure};
pub use profile::UserProfile;
pub use reading::Reading;
