//! Phrase content shipped with the generator.

mod chemistry;
mod english;
mod esl;
mod maths;
mod science;

use super::bank::{banded_table, BankError, PhraseBank, TrackLayout, TrackPhrases};
use super::domain::{Category, Skill};

/// Literal content for one track. Banded arrays run from band 90 down to band 40.
struct TrackContent {
    openings: &'static [&'static str],
    attitude: [&'static str; 9],
    achievements: &'static [(Skill, [&'static str; 9])],
    targets: &'static [(Skill, [&'static str; 9])],
    closings: &'static [&'static str],
}

impl TrackContent {
    fn phrases(&self) -> TrackPhrases {
        let layout = TrackLayout::new(
            self.achievements
                .iter()
                .map(|(skill, _)| *skill)
                .collect::<Vec<_>>(),
            self.targets
                .iter()
                .map(|(skill, _)| *skill)
                .collect::<Vec<_>>(),
        );

        let achievements = self
            .achievements
            .iter()
            .map(|(skill, phrases)| (Category::Achievement(*skill), *phrases));
        let targets = self
            .targets
            .iter()
            .map(|(skill, phrases)| (Category::Target(*skill), *phrases));

        std::iter::once((Category::Attitude, self.attitude))
            .chain(achievements)
            .chain(targets)
            .fold(
                TrackPhrases::new(layout)
                    .with_openings(self.openings.iter().copied())
                    .with_closings(self.closings.iter().copied()),
                |phrases, (category, table)| phrases.with_table(category, banded_table(table)),
            )
    }
}

impl PhraseBank {
    /// Bank holding every built-in track: English, Maths and Science for years 5, 7 and 8, plus
    /// the IGCSE ESL and Chemistry courses for years 10 and 11.
    pub fn standard() -> Result<Self, BankError> {
        let builder = PhraseBank::builder();
        let builder = english::register(builder);
        let builder = maths::register(builder);
        let builder = science::register(builder);
        let builder = esl::register(builder);
        chemistry::register(builder).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::comments::domain::{Band, SubjectKey};

    #[test]
    fn standard_bank_passes_validation() {
        let bank = PhraseBank::standard().expect("built-in content is complete");
        let tracks: Vec<String> = bank.tracks().iter().map(|key| key.to_string()).collect();
        assert_eq!(
            tracks,
            vec![
                "Chemistry Year 10",
                "Chemistry Year 11",
                "English Year 5",
                "English Year 7",
                "English Year 8",
                "ESL (IGCSE) Year 10",
                "ESL (IGCSE) Year 11",
                "Maths Year 5",
                "Maths Year 7",
                "Maths Year 8",
                "Science Year 5",
                "Science Year 7",
                "Science Year 8",
            ]
        );
    }

    #[test]
    fn esl_assesses_four_skills_and_targets_two() {
        let bank = PhraseBank::standard().expect("bank builds");
        let layout = bank
            .layout(&SubjectKey::new("ESL (IGCSE)", 11))
            .expect("esl layout");
        assert_eq!(
            layout.achievements(),
            [Skill::Reading, Skill::Writing, Skill::Speaking, Skill::Listening]
        );
        assert_eq!(layout.targets(), [Skill::Reading, Skill::Writing]);
    }

    #[test]
    fn single_skill_tracks_use_general_tables() {
        let bank = PhraseBank::standard().expect("bank builds");
        let maths = SubjectKey::new("maths", 7);
        assert_eq!(bank.layout(&maths), Some(&TrackLayout::single_skill()));
        assert!(bank
            .lookup(&maths, Category::Achievement(Skill::General), Band::LOWEST)
            .is_ok());
    }

    #[test]
    fn built_in_phrases_only_use_masculine_placeholders() {
        let bank = PhraseBank::standard().expect("bank builds");
        for key in bank.tracks() {
            let layout = bank.layout(key).expect("layout");
            for category in layout.banded_categories() {
                for band in Band::ordered() {
                    for phrase in bank.lookup(key, category, band).expect("phrase") {
                        let lowered = phrase.to_lowercase();
                        let words: Vec<&str> = lowered
                            .split(|ch: char| !ch.is_alphanumeric())
                            .collect();
                        for feminine in ["she", "her", "hers"] {
                            assert!(
                                !words.contains(&feminine),
                                "{key} {category} {band}: {phrase}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn built_in_phrases_carry_no_template_markers() {
        let bank = PhraseBank::standard().expect("bank builds");
        for key in bank.tracks() {
            let layout = bank.layout(key).expect("layout");
            let mut phrases: Vec<&String> = Vec::new();
            phrases.extend(bank.lookup_openings(key).expect("openings"));
            phrases.extend(bank.lookup_closing(key).expect("closings"));
            for category in layout.banded_categories() {
                for band in Band::ordered() {
                    phrases.extend(bank.lookup(key, category, band).expect("phrase"));
                }
            }

            for phrase in phrases {
                assert!(
                    !phrase.contains(['{', '}']),
                    "{key} carries a template marker: {phrase}"
                );
            }
        }
    }

    #[test]
    fn chemistry_is_keyed_by_its_plain_subject_name() {
        let bank = PhraseBank::standard().expect("bank builds");
        assert!(bank.contains(&SubjectKey::new("Chemistry", 10)));
        assert!(bank.contains(&SubjectKey::new("chemistry", 11)));
    }
}
