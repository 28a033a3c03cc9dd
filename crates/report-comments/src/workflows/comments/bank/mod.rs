mod document;

use super::domain::{Band, Category, CommentError, Skill, SubjectKey};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Candidate phrases for one banded category, keyed by band.
pub type BandTable = BTreeMap<Band, Vec<String>>;

/// Builds a [`BandTable`] from nine phrases listed from the highest band down to the lowest.
pub fn banded_table(phrases: [&str; 9]) -> BandTable {
    Band::ordered()
        .into_iter()
        .zip(phrases)
        .map(|(band, phrase)| (band, vec![phrase.to_string()]))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("track {0} is defined more than once")]
    DuplicateTrack(SubjectKey),
    #[error("track {0} has no opening phrases")]
    MissingOpenings(SubjectKey),
    #[error("track {0} has no closing phrases")]
    MissingClosings(SubjectKey),
    #[error("track {0} does not assess any achievement skill")]
    NoAchievements(SubjectKey),
    #[error("track {subject} has no {category} table and no shared table covers it")]
    MissingCategory {
        subject: SubjectKey,
        category: Category,
    },
    #[error("track {subject} has no {category} phrase for band {band}")]
    MissingBand {
        subject: SubjectKey,
        category: Category,
        band: Band,
    },
    #[error("invalid phrase bank document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Skills a track reports on, in the order their sentences appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLayout {
    achievements: Vec<Skill>,
    targets: Vec<Skill>,
}

impl TrackLayout {
    pub fn new(achievements: impl Into<Vec<Skill>>, targets: impl Into<Vec<Skill>>) -> Self {
        Self {
            achievements: achievements.into(),
            targets: targets.into(),
        }
    }

    /// One general achievement and one general target.
    pub fn single_skill() -> Self {
        Self::new([Skill::General], [Skill::General])
    }

    pub fn achievements(&self) -> &[Skill] {
        &self.achievements
    }

    pub fn targets(&self) -> &[Skill] {
        &self.targets
    }

    /// Attitude, then achievements, then targets: every category that needs a full band table.
    pub fn banded_categories(&self) -> impl Iterator<Item = Category> + '_ {
        std::iter::once(Category::Attitude)
            .chain(self.achievements.iter().map(|skill| Category::Achievement(*skill)))
            .chain(self.targets.iter().map(|skill| Category::Target(*skill)))
    }
}

/// Content for one curriculum track.
#[derive(Debug, Clone)]
pub struct TrackPhrases {
    layout: TrackLayout,
    openings: Vec<String>,
    closings: Vec<String>,
    tables: HashMap<Category, BandTable>,
}

impl TrackPhrases {
    pub fn new(layout: TrackLayout) -> Self {
        Self {
            layout,
            openings: Vec::new(),
            closings: Vec::new(),
            tables: HashMap::new(),
        }
    }

    pub fn with_openings<I, S>(mut self, openings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.openings.extend(openings.into_iter().map(Into::into));
        self
    }

    pub fn with_closings<I, S>(mut self, closings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.closings.extend(closings.into_iter().map(Into::into));
        self
    }

    pub fn with_table(mut self, category: Category, table: BandTable) -> Self {
        self.tables.insert(category, table);
        self
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }
}

/// Immutable phrase store consulted by the assembler.
///
/// Banded categories a track leaves undefined fall back to the bank's shared tables. Every track
/// is checked for completeness when the bank is built, so lookups for a known track only fail when
/// asked for a category outside its layout.
#[derive(Debug, Clone)]
pub struct PhraseBank {
    tracks: HashMap<SubjectKey, TrackPhrases>,
    shared: HashMap<Category, BandTable>,
}

impl PhraseBank {
    pub fn builder() -> PhraseBankBuilder {
        PhraseBankBuilder::default()
    }

    pub fn lookup(
        &self,
        subject: &SubjectKey,
        category: Category,
        band: Band,
    ) -> Result<&[String], CommentError> {
        match category {
            Category::Opening => return self.lookup_openings(subject),
            Category::Closing => return self.lookup_closing(subject),
            _ => {}
        }

        let configuration = || CommentError::Configuration {
            subject: subject.clone(),
            category,
        };
        let track = self.tracks.get(subject).ok_or_else(configuration)?;
        let table = track
            .tables
            .get(&category)
            .or_else(|| self.shared.get(&category))
            .ok_or_else(configuration)?;

        table
            .get(&band)
            .filter(|candidates| !candidates.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| CommentError::MissingBand {
                subject: subject.clone(),
                category,
                band,
            })
    }

    pub fn lookup_openings(&self, subject: &SubjectKey) -> Result<&[String], CommentError> {
        self.track_phrases(subject, Category::Opening, |track| &track.openings)
    }

    pub fn lookup_closing(&self, subject: &SubjectKey) -> Result<&[String], CommentError> {
        self.track_phrases(subject, Category::Closing, |track| &track.closings)
    }

    pub fn layout(&self, subject: &SubjectKey) -> Option<&TrackLayout> {
        self.tracks.get(subject).map(TrackPhrases::layout)
    }

    pub fn contains(&self, subject: &SubjectKey) -> bool {
        self.tracks.contains_key(subject)
    }

    /// Known tracks ordered by subject name, then year.
    pub fn tracks(&self) -> Vec<&SubjectKey> {
        let mut keys: Vec<&SubjectKey> = self.tracks.keys().collect();
        keys.sort_by_key(|key| (key.subject().to_lowercase(), key.year()));
        keys
    }

    fn track_phrases<'a>(
        &'a self,
        subject: &SubjectKey,
        category: Category,
        select: impl FnOnce(&'a TrackPhrases) -> &'a Vec<String>,
    ) -> Result<&'a [String], CommentError> {
        self.tracks
            .get(subject)
            .map(select)
            .filter(|phrases| !phrases.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| CommentError::Configuration {
                subject: subject.clone(),
                category,
            })
    }
}

#[derive(Debug, Default)]
pub struct PhraseBankBuilder {
    tracks: Vec<(SubjectKey, TrackPhrases)>,
    shared: HashMap<Category, BandTable>,
}

impl PhraseBankBuilder {
    pub fn track(mut self, subject: SubjectKey, phrases: TrackPhrases) -> Self {
        self.tracks.push((subject, phrases));
        self
    }

    /// Registers the same content under several keys, e.g. two years taught from one syllabus.
    pub fn tracks<I>(mut self, subjects: I, phrases: TrackPhrases) -> Self
    where
        I: IntoIterator<Item = SubjectKey>,
    {
        for subject in subjects {
            self.tracks.push((subject, phrases.clone()));
        }
        self
    }

    pub fn shared(mut self, category: Category, table: BandTable) -> Self {
        self.shared.insert(category, table);
        self
    }

    pub fn build(self) -> Result<PhraseBank, BankError> {
        {
            let mut seen = HashSet::new();
            for (subject, phrases) in &self.tracks {
                if !seen.insert(subject) {
                    return Err(BankError::DuplicateTrack(subject.clone()));
                }
                validate_track(subject, phrases, &self.shared)?;
            }
        }

        let bank = PhraseBank {
            tracks: self.tracks.into_iter().collect(),
            shared: self.shared,
        };
        debug!(
            tracks = bank.tracks.len(),
            shared_tables = bank.shared.len(),
            "phrase bank built"
        );
        Ok(bank)
    }
}

fn validate_track(
    subject: &SubjectKey,
    phrases: &TrackPhrases,
    shared: &HashMap<Category, BandTable>,
) -> Result<(), BankError> {
    if !has_content(&phrases.openings) {
        return Err(BankError::MissingOpenings(subject.clone()));
    }
    if !has_content(&phrases.closings) {
        return Err(BankError::MissingClosings(subject.clone()));
    }
    if phrases.layout.achievements.is_empty() {
        return Err(BankError::NoAchievements(subject.clone()));
    }

    for category in phrases.layout.banded_categories() {
        let table = phrases
            .tables
            .get(&category)
            .or_else(|| shared.get(&category))
            .ok_or_else(|| BankError::MissingCategory {
                subject: subject.clone(),
                category,
            })?;

        for band in Band::ordered() {
            let covered = table.get(&band).is_some_and(|candidates| has_content(candidates));
            if !covered {
                return Err(BankError::MissingBand {
                    subject: subject.clone(),
                    category,
                    band,
                });
            }
        }
    }

    Ok(())
}

fn has_content(phrases: &[String]) -> bool {
    phrases.iter().any(|phrase| !phrase.trim().is_empty())
}
