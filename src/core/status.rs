//! Per-letter feedback status

use std::fmt;

/// Relationship of a guessed letter to the target word
///
/// Ordered by strength: `Absent < Present < Correct`. The keyboard keeps the
/// strongest status seen for each letter, so the derived `Ord` is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter does not occur in the target (or all occurrences are already accounted for)
    Absent,
    /// Letter occurs in the target at a different position
    Present,
    /// Letter is in the right position
    Correct,
}

impl LetterStatus {
    /// Emoji square for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback symbol (`G`/`Y`/`-` or the matching emoji)
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ordering() {
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Correct);
        assert_eq!(
            LetterStatus::Present.max(LetterStatus::Absent),
            LetterStatus::Present
        );
    }

    #[test]
    fn status_symbols() {
        assert_eq!(LetterStatus::from_symbol('g'), Some(LetterStatus::Correct));
        assert_eq!(LetterStatus::from_symbol('🟨'), Some(LetterStatus::Present));
        assert_eq!(LetterStatus::from_symbol('_'), Some(LetterStatus::Absent));
        assert_eq!(LetterStatus::from_symbol('x'), None);
    }

    #[test]
    fn status_display() {
        assert_eq!(LetterStatus::Correct.to_string(), "correct");
        assert_eq!(LetterStatus::Absent.emoji(), '⬜');
    }
}
