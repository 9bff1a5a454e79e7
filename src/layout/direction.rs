//! Right-to-left script detection
//!
//! The widget switches to right-to-left presentation as soon as any Hebrew
//! character is present in the buffer, and back when the last one is removed.

/// Hebrew block (letters, points, punctuation)
const HEBREW_BLOCK: std::ops::RangeInclusive<char> = '\u{0590}'..='\u{05FF}';

/// Hebrew presentation forms from the Alphabetic Presentation Forms block
const HEBREW_PRESENTATION_FORMS: std::ops::RangeInclusive<char> = '\u{FB1D}'..='\u{FB4F}';

/// Returns true if `ch` is a Hebrew code point
pub fn is_hebrew(ch: char) -> bool {
    HEBREW_BLOCK.contains(&ch) || HEBREW_PRESENTATION_FORMS.contains(&ch)
}

/// Returns true if any character of `text` is Hebrew
pub fn contains_hebrew(text: &str) -> bool {
    text.chars().any(is_hebrew)
}

/// Text direction of the whole buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Direction implied by the contents of `text`
    pub fn detect(text: &str) -> Self {
        if contains_hebrew(text) {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }
}

/// Tracks the current direction and reports when it flips
#[derive(Debug, Clone, Default)]
pub struct DirectionState {
    direction: TextDirection,
}

impl DirectionState {
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }

    /// Re-evaluate the direction for `text`.
    ///
    /// Returns `true` only when the direction changed, so callers can restyle
    /// the display once per transition instead of on every keystroke.
    pub fn update(&mut self, text: &str) -> bool {
        let detected = TextDirection::detect(text);
        if detected == self.direction {
            return false;
        }
        tracing::debug!("Text direction changed: {:?} -> {:?}", self.direction, detected);
        self.direction = detected;
        true
    }
}
