//! Personality tags: four binary axes giving sixteen canonical codes.
//!
//! A tag is a struct of four two-variant axis enums, so every value the type
//! can hold is one of the sixteen canonical four-letter codes. The string
//! boundary (`Display`/`FromStr`) renders and parses the canonical code and
//! rejects everything else.
//!
//! # Examples
//! ```
//! use std::str::FromStr;
//! use presence_core::PersonalityTag;
//!
//! let tag = PersonalityTag::from_str("INTJ").expect("canonical code");
//! assert_eq!(tag, PersonalityTag::INTJ);
//! assert_eq!(tag.to_string(), "INTJ");
//! ```

use thiserror::Error;

/// Number of axes in a personality tag, and the maximum affinity score.
pub const AXIS_COUNT: u8 = 4;

/// First axis: where attention is directed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attitude {
    /// Outward-directed (`E`).
    Extraversion,
    /// Inward-directed (`I`).
    Introversion,
}

/// Second axis: how information is taken in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Perception {
    /// Concrete and observational (`S`).
    Sensing,
    /// Abstract and associative (`N`).
    Intuition,
}

/// Third axis: how decisions are weighed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Judgement {
    /// Detached and analytical (`T`).
    Thinking,
    /// Value-led (`F`).
    Feeling,
}

/// Fourth axis: how the outer world is approached.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lifestyle {
    /// Structured and decided (`J`).
    Judging,
    /// Open-ended and adaptive (`P`).
    Perceiving,
}

impl Attitude {
    /// Canonical code letter for this axis choice.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Extraversion => 'E',
            Self::Introversion => 'I',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'E' => Some(Self::Extraversion),
            'I' => Some(Self::Introversion),
            _ => None,
        }
    }
}

impl Perception {
    /// Canonical code letter for this axis choice.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Sensing => 'S',
            Self::Intuition => 'N',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'S' => Some(Self::Sensing),
            'N' => Some(Self::Intuition),
            _ => None,
        }
    }
}

impl Judgement {
    /// Canonical code letter for this axis choice.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Thinking => 'T',
            Self::Feeling => 'F',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'T' => Some(Self::Thinking),
            'F' => Some(Self::Feeling),
            _ => None,
        }
    }
}

impl Lifestyle {
    /// Canonical code letter for this axis choice.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Judging => 'J',
            Self::Perceiving => 'P',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'J' => Some(Self::Judging),
            'P' => Some(Self::Perceiving),
            _ => None,
        }
    }
}

/// One of the sixteen canonical four-letter personality codes.
///
/// Tags are never partially specified: the type carries one choice per axis,
/// so the sixteen canonical values are the only inhabitants.
///
/// # Examples
/// ```
/// use presence_core::PersonalityTag;
///
/// assert_eq!(PersonalityTag::ENFP.to_string(), "ENFP");
/// assert_eq!(PersonalityTag::ALL.len(), 16);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalityTag {
    /// Attention axis (`E`/`I`).
    pub attitude: Attitude,
    /// Information axis (`S`/`N`).
    pub perception: Perception,
    /// Decision axis (`T`/`F`).
    pub judgement: Judgement,
    /// Structure axis (`J`/`P`).
    pub lifestyle: Lifestyle,
}

/// Errors returned when parsing a [`PersonalityTag`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagParseError {
    /// The input was not exactly four letters long.
    #[error("personality tag '{input}' must be exactly four letters")]
    Length {
        /// The rejected input.
        input: String,
    },
    /// A letter was not a valid choice for its axis.
    #[error("letter '{letter}' is not a valid choice for axis {position}")]
    Letter {
        /// Zero-based axis position of the offending letter.
        position: usize,
        /// The rejected letter.
        letter: char,
    },
}

macro_rules! canonical_tags {
    ($(($name:ident, $doc:literal, $attitude:ident, $perception:ident, $judgement:ident, $lifestyle:ident)),+ $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: Self = Self {
                attitude: Attitude::$attitude,
                perception: Perception::$perception,
                judgement: Judgement::$judgement,
                lifestyle: Lifestyle::$lifestyle,
            };
        )+

        /// Every canonical tag, in the conventional table order.
        pub const ALL: [Self; 16] = [$(Self::$name),+];
    };
}

impl PersonalityTag {
    canonical_tags![
        (ISTJ, "`ISTJ`.", Introversion, Sensing, Thinking, Judging),
        (ISFJ, "`ISFJ`.", Introversion, Sensing, Feeling, Judging),
        (INFJ, "`INFJ`.", Introversion, Intuition, Feeling, Judging),
        (INTJ, "`INTJ`.", Introversion, Intuition, Thinking, Judging),
        (ISTP, "`ISTP`.", Introversion, Sensing, Thinking, Perceiving),
        (ISFP, "`ISFP`.", Introversion, Sensing, Feeling, Perceiving),
        (INFP, "`INFP`.", Introversion, Intuition, Feeling, Perceiving),
        (INTP, "`INTP`.", Introversion, Intuition, Thinking, Perceiving),
        (ESTP, "`ESTP`.", Extraversion, Sensing, Thinking, Perceiving),
        (ESFP, "`ESFP`.", Extraversion, Sensing, Feeling, Perceiving),
        (ENFP, "`ENFP`.", Extraversion, Intuition, Feeling, Perceiving),
        (ENTP, "`ENTP`.", Extraversion, Intuition, Thinking, Perceiving),
        (ESTJ, "`ESTJ`.", Extraversion, Sensing, Thinking, Judging),
        (ESFJ, "`ESFJ`.", Extraversion, Sensing, Feeling, Judging),
        (ENFJ, "`ENFJ`.", Extraversion, Intuition, Feeling, Judging),
        (ENTJ, "`ENTJ`.", Extraversion, Intuition, Thinking, Judging),
    ];

    /// Count the axes on which two tags agree.
    ///
    /// The result is in `0..=4`. The metric is symmetric and reflexive
    /// (`a.affinity(a) == 4`); it is not an edit distance and no axis is
    /// weighted above another. Ties between distinct tags are expected and
    /// are preserved by callers that rank on this value.
    ///
    /// # Examples
    /// ```
    /// use presence_core::PersonalityTag;
    ///
    /// assert_eq!(PersonalityTag::INTJ.affinity(PersonalityTag::INTJ), 4);
    /// assert_eq!(PersonalityTag::INTJ.affinity(PersonalityTag::INTP), 3);
    /// assert_eq!(PersonalityTag::INTJ.affinity(PersonalityTag::ESFP), 0);
    /// ```
    #[must_use]
    pub fn affinity(self, other: Self) -> u8 {
        u8::from(self.attitude == other.attitude)
            + u8::from(self.perception == other.perception)
            + u8::from(self.judgement == other.judgement)
            + u8::from(self.lifestyle == other.lifestyle)
    }
}

impl std::fmt::Display for PersonalityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.attitude.letter(),
            self.perception.letter(),
            self.judgement.letter(),
            self.lifestyle.letter(),
        )
    }
}

impl std::str::FromStr for PersonalityTag {
    type Err = TagParseError;

    /// Parse a canonical four-letter code, ignoring letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = s.chars().map(|c| c.to_ascii_uppercase());
        let (Some(a), Some(p), Some(j), Some(l), None) = (
            letters.next(),
            letters.next(),
            letters.next(),
            letters.next(),
            letters.next(),
        ) else {
            return Err(TagParseError::Length {
                input: s.to_owned(),
            });
        };
        Ok(Self {
            attitude: Attitude::from_letter(a).ok_or(TagParseError::Letter {
                position: 0,
                letter: a,
            })?,
            perception: Perception::from_letter(p).ok_or(TagParseError::Letter {
                position: 1,
                letter: p,
            })?,
            judgement: Judgement::from_letter(j).ok_or(TagParseError::Letter {
                position: 2,
                letter: j,
            })?,
            lifestyle: Lifestyle::from_letter(l).ok_or(TagParseError::Letter {
                position: 3,
                letter: l,
            })?,
        })
    }
}
