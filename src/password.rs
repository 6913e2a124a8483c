// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::trace;
use rand::Rng;

use crate::config::Config;

pub(crate) struct Generator {
    alphabet: Vec<char>,
    length: usize,
}

impl Generator {
    /// Alphabet is `A-Z`, `a-z`, `0-9` followed by the configured special characters.
    pub(crate) fn new(config: &Config) -> Generator {
        let mut alphabet: Vec<char> = ('A'..='Z').chain('a'..='z').chain('0'..='9').collect();
        for c in config.special_chars.chars() {
            if !alphabet.contains(&c) {
                alphabet.push(c);
            }
        }

        Generator {
            alphabet,
            length: config.generated_length,
        }
    }

    pub(crate) fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub(crate) fn generate_password(&self) -> String {
        self.generate_password_with(&mut rand::rng())
    }

    /// Draws every position uniformly, with replacement, from the alphabet.
    ///
    /// The result is not checked against the scorer: a password lacking a
    /// character category is unlikely but possible.
    pub(crate) fn generate_password_with<R: Rng>(&self, rng: &mut R) -> String {
        trace!("Generating random password");

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    /// Each suggestion is an independent call to [`Generator::generate_password`].
    pub(crate) fn generate_suggestions(&self, count: usize) -> Vec<String> {
        trace!("Generating {count} password suggestions");

        (0..count).map(|_| self.generate_password()).collect()
    }
}
