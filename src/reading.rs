//! Reading assembly and rendering
//!
//! Turns a stored profile into the full five-figure reading, pairs each
//! figure with its catalog entry, and renders terminal text. The optional
//! provider annotation rides alongside the catalog text and never replaces
//! it.

use crate::insight::{InsightProvider, InsightRequest};
use crate::numerology::{interpretation, Chart, Figure, NumerologyError};
use crate::profile::UserProfile;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::warn;

/// One displayed figure with its catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct ReadingEntry {
    pub label: &'static str,
    pub figure: Figure,
    pub title: &'static str,
    pub text: &'static str,
}

fn entry(label: &'static str, figure: Figure) -> ReadingEntry {
    let interpretation = interpretation(figure);
    ReadingEntry {
        label,
        figure,
        title: interpretation.title,
        text: interpretation.text,
    }
}

/// A complete reading for one profile
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub chart: Chart,
    /// Personalized Life Path annotation, when one was fetched
    pub annotation: Option<String>,
}

impl Reading {
    /// Compute the reading for a profile
    pub fn from_profile(profile: &UserProfile) -> Result<Self, NumerologyError> {
        let chart = Chart::compute(&profile.full_name, profile.date_of_birth)?;
        Ok(Self {
            full_name: profile.full_name.clone(),
            date_of_birth: profile.date_of_birth,
            chart,
            annotation: None,
        })
    }

    /// The five figures in display order
    pub fn entries(&self) -> Vec<ReadingEntry> {
        vec![
            entry("Life Path Number", self.chart.life_path),
            entry("Expression/Destiny Number", self.chart.expression),
            entry("Soul Urge/Heart's Desire Number", self.chart.soul_urge),
            entry("Personality Number", self.chart.personality),
            entry("Birth Day Number", self.chart.birth_day),
        ]
    }

    /// Fetch a personalized Life Path annotation.
    ///
    /// A failing provider leaves the reading unannotated; the catalog text
    /// still covers every figure.
    pub async fn annotate(&mut self, provider: &dyn InsightProvider) {
        let request = InsightRequest::life_path(self.chart.life_path, &self.full_name);
        match provider.annotate(&request).await {
            Ok(text) => self.annotation = Some(text),
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "insight annotation failed");
            }
        }
    }

    /// Render the reading as terminal text
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Numerology Report for {}, born on {}:",
            self.full_name, self.date_of_birth
        );
        for entry in self.entries() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}: {} ({})", entry.label, entry.figure, entry.title);
            let _ = writeln!(out, "  {}", entry.text);
        }
        if let Some(annotation) = &self.annotation {
            let _ = writeln!(out);
            let _ = writeln!(out, "Your Life Path, interpreted:");
            let _ = writeln!(out, "  {}", annotation.trim());
        }
        out
    }
}
