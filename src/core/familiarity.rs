//! Familiarity tiers
//!
//! The three-valued self-assessment a learner gives a word. The tier decides
//! which pool a word lives in and how often it comes back during review.

use std::fmt;

use super::VocabError;

/// Self-assessed familiarity with a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Familiarity {
    /// Not known yet; the word stays in the unlearned pool
    #[default]
    Unfamiliar = 0,
    /// Seen and partly remembered
    Moderate = 1,
    /// Known well
    Familiar = 2,
}

impl Familiarity {
    /// All tiers in ascending order
    pub const ALL: [Self; 3] = [Self::Unfamiliar, Self::Moderate, Self::Familiar];

    /// Numeric rating (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Whether a word at this tier counts as learned
    #[inline]
    #[must_use]
    pub const fn is_learned(self) -> bool {
        self.value() > 0
    }

    /// Relative weight of a word at this tier during review
    ///
    /// Lower familiarity means higher weight: `3 - value`. Unfamiliar words
    /// never sit in the learned pool, so their weight of 3 is never drawn.
    #[inline]
    #[must_use]
    pub const fn review_weight(self) -> u32 {
        3 - self.value() as u32
    }

    /// Convert a stored rating, clamping anything outside 0..=2
    #[must_use]
    pub const fn clamped(raw: i64) -> Self {
        if raw <= 0 {
            Self::Unfamiliar
        } else if raw == 1 {
            Self::Moderate
        } else {
            Self::Familiar
        }
    }

    /// Short human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unfamiliar => "unfamiliar",
            Self::Moderate => "moderate",
            Self::Familiar => "familiar",
        }
    }
}

impl TryFrom<u8> for Familiarity {
    type Error = VocabError;

    fn try_from(rating: u8) -> Result<Self, Self::Error> {
        match rating {
            0 => Ok(Self::Unfamiliar),
            1 => Ok(Self::Moderate),
            2 => Ok(Self::Familiar),
            other => Err(VocabError::InvalidFamiliarity(other)),
        }
    }
}

impl fmt::Display for Familiarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_accepts_valid_ratings() {
        assert_eq!(Familiarity::try_from(0u8), Ok(Familiarity::Unfamiliar));
        assert_eq!(Familiarity::try_from(1u8), Ok(Familiarity::Moderate));
        assert_eq!(Familiarity::try_from(2u8), Ok(Familiarity::Familiar));
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(
            Familiarity::try_from(3u8),
            Err(VocabError::InvalidFamiliarity(3))
        );
        assert_eq!(
            Familiarity::try_from(255u8),
            Err(VocabError::InvalidFamiliarity(255))
        );
    }

    #[test]
    fn review_weights_favor_weaker_words() {
        assert_eq!(Familiarity::Moderate.review_weight(), 2);
        assert_eq!(Familiarity::Familiar.review_weight(), 1);
        // Unreachable in practice, kept as the formula gives it
        assert_eq!(Familiarity::Unfamiliar.review_weight(), 3);
    }

    #[test]
    fn learned_split() {
        assert!(!Familiarity::Unfamiliar.is_learned());
        assert!(Familiarity::Moderate.is_learned());
        assert!(Familiarity::Familiar.is_learned());
    }

    #[test]
    fn clamped_bounds() {
        assert_eq!(Familiarity::clamped(-4), Familiarity::Unfamiliar);
        assert_eq!(Familiarity::clamped(0), Familiarity::Unfamiliar);
        assert_eq!(Familiarity::clamped(1), Familiarity::Moderate);
        assert_eq!(Familiarity::clamped(2), Familiarity::Familiar);
        assert_eq!(Familiarity::clamped(9), Familiarity::Familiar);
    }

    #[test]
    fn default_is_unfamiliar() {
        assert_eq!(Familiarity::default(), Familiarity::Unfamiliar);
    }
}
