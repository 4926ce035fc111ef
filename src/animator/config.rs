//! Animation configuration and built-in frame sets

use crate::core::Alphabet;
use crate::error::{Error, Result};
use std::time::Duration;

/// Braille spinner glyphs
pub const BRAILLE_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Classic ASCII line spinner
pub const LINE_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Status messages rotated while a run is in progress
pub const DEFAULT_MESSAGES: &[&str] = &[
    "Probing character space",
    "Cycling symbol table",
    "Aligning candidate prefix",
    "Checking prefix match",
    "Extending matched prefix",
];

/// Which glyphs the spinner cycles through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameSet {
    #[default]
    Braille,
    Line,
    /// The guess alphabet itself
    Alphabet,
}

impl FrameSet {
    /// Parse a frame set name
    ///
    /// Supported names: "braille", "line", "alphabet". Defaults to braille if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "line" | "ascii" => Self::Line,
            "alphabet" | "charset" => Self::Alphabet,
            _ => Self::Braille,
        }
    }

    #[must_use]
    pub fn frames(self, alphabet: &Alphabet) -> Vec<String> {
        match self {
            Self::Braille => BRAILLE_FRAMES.iter().map(ToString::to_string).collect(),
            Self::Line => LINE_FRAMES.iter().map(ToString::to_string).collect(),
            Self::Alphabet => alphabet.as_frames(),
        }
    }
}

/// Timing and content of the status animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
    pub messages: Vec<String>,
    pub frames: Vec<String>,
    pub tick: Duration,
    pub message_interval: Duration,
    /// Extra columns after the longest message
    pub margin: usize,
    /// Upper bound on how long `stop` waits for the thread
    pub stop_timeout: Duration,
}

impl AnimationConfig {
    /// Check the config can drive an animator
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if messages or frames are empty, or the
    /// tick interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.messages.is_empty() {
            return Err(Error::invalid("animation needs at least one message"));
        }
        if self.frames.is_empty() {
            return Err(Error::invalid("animation needs at least one frame"));
        }
        if self.tick.is_zero() {
            return Err(Error::invalid("animation tick must be non-zero"));
        }
        Ok(())
    }

    /// Column width messages are padded to
    #[must_use]
    pub fn message_width(&self) -> usize {
        self.messages
            .iter()
            .map(|m| m.chars().count())
            .max()
            .unwrap_or(0)
            + self.margin
    }

    #[must_use]
    pub fn with_frames(mut self, frames: Vec<String>) -> Self {
        self.frames = frames;
        self
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES.iter().map(ToString::to_string).collect(),
            frames: BRAILLE_FRAMES.iter().map(ToString::to_string).collect(),
            tick: Duration::from_millis(80),
            message_interval: Duration::from_millis(1500),
            margin: 2,
            stop_timeout: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AnimationConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_messages_rejected() {
        let config = AnimationConfig {
            messages: vec![],
            ..AnimationConfig::default()
        };
        assert!(config.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn empty_frames_rejected() {
        let config = AnimationConfig::default().with_frames(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_tick_rejected() {
        let config = AnimationConfig {
            tick: Duration::ZERO,
            ..AnimationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn message_width_is_longest_plus_margin() {
        let config = AnimationConfig {
            messages: vec!["ab".to_string(), "abcdef".to_string()],
            margin: 3,
            ..AnimationConfig::default()
        };
        assert_eq!(config.message_width(), 9);
    }

    #[test]
    fn frame_set_from_name() {
        assert_eq!(FrameSet::from_name("line"), FrameSet::Line);
        assert_eq!(FrameSet::from_name("alphabet"), FrameSet::Alphabet);
        assert_eq!(FrameSet::from_name("whatever"), FrameSet::Braille);
    }

    #[test]
    fn alphabet_frames_follow_alphabet() {
        let alphabet = Alphabet::printable_ascii();
        let frames = FrameSet::Alphabet.frames(&alphabet);
        assert_eq!(frames.len(), 95);
        assert_eq!(frames[0], " ");
    }
}
