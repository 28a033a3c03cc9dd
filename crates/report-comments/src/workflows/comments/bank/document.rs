use super::{BandTable, BankError, PhraseBank, PhraseBankBuilder, TrackLayout, TrackPhrases};
use crate::workflows::comments::domain::{Category, Skill, SubjectKey};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// External phrase content as authored in JSON.
///
/// ```json
/// {
///   "shared": { "attitude": { "90": ["..."], "85": ["..."] } },
///   "tracks": [{
///     "subject": "Art",
///     "years": [6],
///     "openings": ["This term,"],
///     "closings": ["Well done."],
///     "achievement": { "general": { "90": ["..."] } },
///     "target": { "general": { "90": ["..."] } }
///   }]
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BankDocument {
    #[serde(default)]
    shared: CategoryTables,
    tracks: Vec<TrackDocument>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryTables {
    #[serde(default)]
    attitude: Option<BandTable>,
    #[serde(default)]
    achievement: HashMap<Skill, BandTable>,
    #[serde(default)]
    target: HashMap<Skill, BandTable>,
}

impl CategoryTables {
    fn into_categories(self) -> impl Iterator<Item = (Category, BandTable)> {
        let attitude = self
            .attitude
            .map(|table| (Category::Attitude, table))
            .into_iter();
        let achievements = self
            .achievement
            .into_iter()
            .map(|(skill, table)| (Category::Achievement(skill), table));
        let targets = self
            .target
            .into_iter()
            .map(|(skill, table)| (Category::Target(skill), table));
        attitude.chain(achievements).chain(targets)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TrackDocument {
    subject: String,
    years: Vec<u8>,
    #[serde(default = "general_only")]
    achievements: Vec<Skill>,
    #[serde(default = "general_only")]
    targets: Vec<Skill>,
    openings: Vec<String>,
    closings: Vec<String>,
    #[serde(default)]
    attitude: Option<BandTable>,
    #[serde(default)]
    achievement: HashMap<Skill, BandTable>,
    #[serde(default)]
    target: HashMap<Skill, BandTable>,
}

fn general_only() -> Vec<Skill> {
    vec![Skill::General]
}

impl TrackDocument {
    fn register(self, builder: PhraseBankBuilder) -> PhraseBankBuilder {
        let keys: Vec<SubjectKey> = self
            .years
            .iter()
            .map(|year| SubjectKey::new(&self.subject, *year))
            .collect();
        let tables = CategoryTables {
            attitude: self.attitude,
            achievement: self.achievement,
            target: self.target,
        };
        let base = TrackPhrases::new(TrackLayout::new(self.achievements, self.targets))
            .with_openings(self.openings)
            .with_closings(self.closings);
        let phrases = tables
            .into_categories()
            .fold(base, |phrases, (category, table)| phrases.with_table(category, table));
        builder.tracks(keys, phrases)
    }
}

impl PhraseBank {
    /// Loads phrase content from a JSON document and validates it like any other bank.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        let document: BankDocument = serde_json::from_reader(reader)?;
        let builder = document
            .shared
            .into_categories()
            .fold(PhraseBank::builder(), |builder, (category, table)| {
                builder.shared(category, table)
            });

        document
            .tracks
            .into_iter()
            .fold(builder, |builder, track| track.register(builder))
            .build()
    }
}
