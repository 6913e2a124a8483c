// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use serde::Serialize;
use std::fmt::{self, Display};

use crate::config::Config;
use crate::strength::{self, Assessment};

/// Score at which the progress value saturates.
const PROGRESS_SCALE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub(crate) fn from_score(score: i32) -> Strength {
        match score {
            i32::MIN..=2 => Strength::Weak,
            3..=4 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }
}

impl Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak Password"),
            Strength::Moderate => write!(f, "Moderate Password"),
            Strength::Strong => write!(f, "Strong Password"),
        }
    }
}

/// Normalizes a score into `[0, 1]` for display.
pub(crate) fn progress(score: i32) -> f64 {
    (f64::from(score) / PROGRESS_SCALE).clamp(0.0, 1.0)
}

/// Per-category notes, reported independently of the scorer's feedback.
pub(crate) fn hints(password: &str, config: &Config) -> Vec<String> {
    let mut hints = Vec::new();

    if !strength::has_uppercase(password) {
        hints.push("Missing uppercase letter.".to_string());
    }
    if !strength::has_lowercase(password) {
        hints.push("Missing lowercase letter.".to_string());
    }
    if !strength::has_digit(password) {
        hints.push("Missing number.".to_string());
    }
    if !strength::has_special(password, &config.special_chars) {
        hints.push(format!(
            "Missing special character ({}).",
            config.special_chars
        ));
    }

    hints
}

#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub(crate) score: i32,
    pub(crate) progress: f64,
    pub(crate) strength: Strength,
    pub(crate) length: usize,
    pub(crate) min_length: usize,
    pub(crate) hints: Vec<String>,
    pub(crate) feedback: Vec<String>,
}

impl Report {
    pub(crate) fn new(password: &str, assessment: Assessment, config: &Config) -> Report {
        Report {
            score: assessment.score,
            progress: progress(assessment.score),
            strength: Strength::from_score(assessment.score),
            length: strength::char_count(password),
            min_length: config.min_length,
            hints: hints(password, config),
            feedback: assessment.feedback,
        }
    }

    pub(crate) fn render_text(&self) -> String {
        let mut out = format!(
            "{}\nScore: {} (progress {:.0}%)\nLength: {} characters (Min: {})\n",
            self.strength,
            self.score,
            self.progress * 100.0,
            self.length,
            self.min_length
        );
        for hint in &self.hints {
            out.push_str(&format!("⚠️ {hint}\n"));
        }
        for message in &self.feedback {
            out.push_str(&format!("❌ {message}\n"));
        }

        out
    }
}

pub(crate) fn render_suggestions(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| format!("Suggestion {}: {suggestion}\n", i + 1))
        .collect()
}
