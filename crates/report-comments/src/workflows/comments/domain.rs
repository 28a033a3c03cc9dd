use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Performance level used to key phrase tables. Higher values describe stronger work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Band(u8);

impl Band {
    pub const HIGHEST: Band = Band(90);
    pub const LOWEST: Band = Band(40);
    /// Band used when a score carries no usable value.
    pub const DEFAULT: Band = Band(75);

    /// Every band in descending order.
    pub const fn ordered() -> [Self; 9] {
        [
            Band(90),
            Band(85),
            Band(80),
            Band(75),
            Band(70),
            Band(65),
            Band(60),
            Band(55),
            Band(40),
        ]
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn from_exact(value: u8) -> Option<Self> {
        Self::ordered().into_iter().find(|band| band.0 == value)
    }

    /// Coerces a raw score to the closest band by absolute distance.
    ///
    /// Equidistant scores resolve toward the higher band. Infinite scores clamp to the ends of
    /// the scale and `NaN` maps to [`Band::DEFAULT`].
    pub fn nearest(score: f64) -> Self {
        if score.is_nan() {
            return Self::DEFAULT;
        }

        let score = score.clamp(f64::from(Self::LOWEST.0), f64::from(Self::HIGHEST.0));
        let mut best = Self::HIGHEST;
        let mut best_distance = f64::INFINITY;

        // Descending walk with a strict comparison keeps the higher band on ties.
        for band in Self::ordered() {
            let distance = (score - f64::from(band.0)).abs();
            if distance < best_distance {
                best = band;
                best_distance = distance;
            }
        }

        best
    }
}

impl TryFrom<u8> for Band {
    type Error = UnknownBand;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_exact(value).ok_or(UnknownBand(value))
    }
}

impl From<Band> for u8 {
    fn from(band: Band) -> Self {
        band.0
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a phrase band (expected one of 90, 85, 80, 75, 70, 65, 60, 55, 40)")]
pub struct UnknownBand(pub u8);

/// Skill area a banded achievement or target fragment describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Reading,
    Writing,
    Speaking,
    Listening,
    /// The whole subject, for tracks assessed as a single skill.
    General,
}

impl Skill {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Writing => "writing",
            Self::Speaking => "speaking",
            Self::Listening => "listening",
            Self::General => "general",
        }
    }

    /// Sentence opener naming the skill, if the skill gets one.
    pub const fn lead_in(self) -> Option<&'static str> {
        match self {
            Self::Reading => Some("In reading, "),
            Self::Writing => Some("In writing, "),
            Self::Speaking => Some("In speaking, "),
            Self::Listening => Some("In listening, "),
            Self::General => None,
        }
    }
}

/// Role a fragment plays within the finished comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Opening,
    Attitude,
    Achievement(Skill),
    Target(Skill),
    Closing,
}

impl Category {
    /// Whether phrases for this category are keyed by band.
    pub const fn is_banded(self) -> bool {
        matches!(self, Self::Attitude | Self::Achievement(_) | Self::Target(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Opening => write!(f, "opening"),
            Category::Attitude => write!(f, "attitude"),
            Category::Achievement(Skill::General) => write!(f, "achievement"),
            Category::Achievement(skill) => write!(f, "{} achievement", skill.label()),
            Category::Target(Skill::General) => write!(f, "target"),
            Category::Target(skill) => write!(f, "{} target", skill.label()),
            Category::Closing => write!(f, "closing"),
        }
    }
}

/// Curriculum track: a subject taught at a given year or level.
///
/// Subject names compare case-insensitively after whitespace is collapsed; the display form keeps
/// the spelling the key was created with.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectKey {
    subject: String,
    year: u8,
}

impl SubjectKey {
    pub fn new(subject: impl AsRef<str>, year: u8) -> Self {
        let subject = subject
            .as_ref()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        Self { subject, year }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub const fn year(&self) -> u8 {
        self.year
    }

    fn normalized_subject(&self) -> String {
        self.subject.to_lowercase()
    }
}

impl PartialEq for SubjectKey {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year && self.normalized_subject() == other.normalized_subject()
    }
}

impl Eq for SubjectKey {}

impl Hash for SubjectKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_subject().hash(state);
        self.year.hash(state);
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Year {}", self.subject, self.year)
    }
}

/// Subject and possessive pronouns substituted into phrase placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PronounPair {
    pub subject: &'static str,
    pub possessive: &'static str,
}

impl PronounPair {
    pub const MASCULINE: PronounPair = PronounPair {
        subject: "he",
        possessive: "his",
    };
    pub const FEMININE: PronounPair = PronounPair {
        subject: "she",
        possessive: "her",
    };
    pub const NEUTRAL: PronounPair = PronounPair {
        subject: "they",
        possessive: "their",
    };
}

/// Everything needed to produce one comment. Band fields hold raw scores; they are coerced to
/// the nearest [`Band`] during generation.
#[derive(Debug, Clone)]
pub struct CommentRequest {
    pub subject: SubjectKey,
    pub student_name: String,
    pub gender: String,
    pub attitude: f64,
    pub achievement: f64,
    pub target: f64,
    pub addendum: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedComment {
    pub text: String,
    pub char_count: usize,
}

impl GeneratedComment {
    pub(crate) fn new(text: String) -> Self {
        let char_count = text.chars().count();
        Self { text, char_count }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentError {
    #[error("phrase bank has no {category} phrases for {subject}")]
    Configuration {
        subject: SubjectKey,
        category: Category,
    },
    #[error("phrase bank has no {category} phrase for {subject} at band {band}")]
    MissingBand {
        subject: SubjectKey,
        category: Category,
        band: Band,
    },
}
