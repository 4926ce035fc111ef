//! Guess alphabet
//!
//! The ordered symbol set the engine scans at every position. Order defines
//! attempt order, so the first matching symbol always wins.

use crate::error::{Error, Result};
use std::fmt;

/// First printable ASCII code point (space)
pub const PRINTABLE_START: u8 = 0x20;

/// Last printable ASCII code point (tilde)
pub const PRINTABLE_END: u8 = 0x7E;

/// An ordered, duplicate-free set of guess symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// The 95 printable ASCII symbols, space through tilde
    ///
    /// # Examples
    /// ```
    /// use pwd_brkr::core::Alphabet;
    ///
    /// let alphabet = Alphabet::printable_ascii();
    /// assert_eq!(alphabet.len(), 95);
    /// assert_eq!(alphabet.index_of(' '), Some(0));
    /// assert_eq!(alphabet.index_of('~'), Some(94));
    /// ```
    #[must_use]
    pub fn printable_ascii() -> Self {
        Self {
            symbols: (PRINTABLE_START..=PRINTABLE_END).map(char::from).collect(),
        }
    }

    /// Build a custom alphabet, keeping the given order
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the input is empty or repeats a symbol.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut symbols: Vec<char> = Vec::new();
        for ch in chars {
            if symbols.contains(&ch) {
                return Err(Error::invalid(format!(
                    "alphabet contains duplicate symbol {ch:?}"
                )));
            }
            symbols.push(ch);
        }

        if symbols.is_empty() {
            return Err(Error::invalid("alphabet must not be empty"));
        }

        Ok(Self { symbols })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in attempt order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Position of a symbol in attempt order
    #[must_use]
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == ch)
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.index_of(ch).is_some()
    }

    /// Symbols as single-glyph animation frames
    #[must_use]
    pub fn as_frames(&self) -> Vec<String> {
        self.symbols.iter().map(char::to_string).collect()
    }

    /// Attempts a full scan needs to reconstruct `target`
    ///
    /// Sum over positions of one plus the symbol's index. `None` if any
    /// symbol of `target` is outside the alphabet.
    #[must_use]
    pub fn attempts_for(&self, target: &str) -> Option<u64> {
        target
            .chars()
            .map(|ch| self.index_of(ch).map(|i| i as u64 + 1))
            .sum()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::printable_ascii()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.symbols {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_has_95_symbols() {
        let alphabet = Alphabet::printable_ascii();
        assert_eq!(alphabet.len(), 95);
        assert_eq!(alphabet.symbols().first(), Some(&' '));
        assert_eq!(alphabet.symbols().last(), Some(&'~'));
    }

    #[test]
    fn printable_ascii_is_code_point_ordered() {
        let alphabet = Alphabet::printable_ascii();
        for (i, ch) in alphabet.iter().enumerate() {
            assert_eq!(ch as usize, 32 + i);
        }
    }

    #[test]
    fn index_of_letters() {
        let alphabet = Alphabet::printable_ascii();
        assert_eq!(alphabet.index_of('a'), Some(65));
        assert_eq!(alphabet.index_of('b'), Some(66));
        assert_eq!(alphabet.index_of('\n'), None);
        assert!(!alphabet.contains('é'));
    }

    #[test]
    fn attempts_for_ab() {
        let alphabet = Alphabet::printable_ascii();
        assert_eq!(alphabet.attempts_for("ab"), Some(66 + 67));
        assert_eq!(alphabet.attempts_for("a\tb"), None);
    }

    #[test]
    fn from_chars_rejects_duplicates() {
        let result = Alphabet::from_chars("abca".chars());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn from_chars_rejects_empty() {
        assert!(Alphabet::from_chars(std::iter::empty()).is_err());
    }

    #[test]
    fn from_chars_keeps_order() {
        let alphabet = Alphabet::from_chars("zyx".chars()).unwrap();
        assert_eq!(alphabet.to_string(), "zyx");
        assert_eq!(alphabet.index_of('x'), Some(2));
    }

    #[test]
    fn frames_are_single_glyphs() {
        let frames = Alphabet::printable_ascii().as_frames();
        assert_eq!(frames.len(), 95);
        assert!(frames.iter().all(|f| f.chars().count() == 1));
    }
}
