//! # Program Image
//!
//! The immutable initial memory image of an Intcode program.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Initial memory image, one signed word per cell
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Program {
    words: Vec<i64>,
}

impl Program {
    /// Create a program from its words
    pub fn new(words: Vec<i64>) -> Self {
        Self { words }
    }

    /// Program words
    #[inline]
    pub fn words(&self) -> &[i64] {
        &self.words
    }

    /// Number of words in the image
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `address`, if within the image
    #[inline]
    pub fn get(&self, address: usize) -> Option<i64> {
        self.words.get(address).copied()
    }

    /// Canonical text form: comma-separated decimal words, no whitespace
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.words.len() * 4);
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                text.push(',');
            }
            text.push_str(&word.to_string());
        }
        text
    }

    /// SHA-256 of the canonical text form
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.to_text().as_bytes());
        hasher.finalize().into()
    }

    /// Lowercase hex of [`Program::fingerprint`]
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

impl From<Vec<i64>> for Program {
    fn from(words: Vec<i64>) -> Self {
        Self::new(words)
    }
}

impl FromIterator<i64> for Program {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
