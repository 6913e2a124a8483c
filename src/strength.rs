// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::trace;

use crate::config::Config;

/// Outcome of scoring a single candidate password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Assessment {
    pub(crate) score: i32,
    pub(crate) feedback: Vec<String>,
}

pub(crate) struct Scorer<'a> {
    config: &'a Config,
}

impl<'a> Scorer<'a> {
    pub(crate) fn new(config: &'a Config) -> Scorer<'a> {
        Scorer { config }
    }

    /// Runs every check against `password` and sums the triggered weights.
    ///
    /// All checks run unconditionally. Feedback follows the check order
    /// length, case mix, digit, special character, blacklist.
    pub(crate) fn score_password(&self, password: &str) -> Assessment {
        trace!("Scoring password candidate");

        let weights = &self.config.weights;
        let mut score: i32 = 0;
        let mut feedback = Vec::new();

        if char_count(password) >= self.config.min_length {
            score = score.saturating_add(weights.length);
        } else {
            feedback.push(format!(
                "Password should be at least {} characters long.",
                self.config.min_length
            ));
        }

        if has_uppercase(password) && has_lowercase(password) {
            score = score.saturating_add(weights.case_mix);
        } else {
            feedback.push("Include both uppercase and lowercase letters.".to_string());
        }

        if has_digit(password) {
            score = score.saturating_add(weights.digit);
        } else {
            feedback.push("Add at least one number (0-9).".to_string());
        }

        if has_special(password, &self.config.special_chars) {
            score = score.saturating_add(weights.special_char);
        } else {
            feedback.push(format!(
                "Include at least one special character ({}).",
                self.config.special_chars
            ));
        }

        // Additive: a blacklisted password keeps whatever it earned above.
        if self.is_blacklisted(password) {
            score = score.saturating_add(weights.blacklist);
            feedback.push("This password is too common and easy to guess.".to_string());
        }

        Assessment { score, feedback }
    }

    pub(crate) fn is_blacklisted(&self, password: &str) -> bool {
        self.config.blacklist.contains(&password.to_lowercase())
    }
}

pub(crate) fn char_count(password: &str) -> usize {
    password.chars().count()
}

pub(crate) fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Closed allow-list: only characters in `special_chars` count.
pub(crate) fn has_special(password: &str, special_chars: &str) -> bool {
    password.chars().any(|c| special_chars.contains(c))
}
