use super::bank::PhraseBank;
use super::domain::{
    Band, Category, CommentError, CommentRequest, GeneratedComment, SubjectKey,
};
use super::pronouns::resolve_pronouns;
use super::random::{choose, RandomSource};
use super::render::render_fragment;
use super::text::{
    capitalize_first, capitalize_sentences, collapse_punctuation, lowercase_first,
    terminate_sentence, truncate_to_budget,
};
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_TARGET_CHARS: usize = 500;
/// Smallest comment budget that still leaves room for an opening sentence.
pub const MIN_TARGET_CHARS: usize = 40;

/// Builds report comments from a shared [`PhraseBank`].
///
/// The assembler holds no mutable state; clones share the bank and can generate concurrently as
/// long as each caller brings its own [`RandomSource`].
#[derive(Debug, Clone)]
pub struct CommentAssembler {
    bank: Arc<PhraseBank>,
    target_chars: usize,
}

impl CommentAssembler {
    pub fn new(bank: Arc<PhraseBank>) -> Self {
        Self::with_budget(bank, DEFAULT_TARGET_CHARS)
    }

    /// Budgets below [`MIN_TARGET_CHARS`] are raised to it.
    pub fn with_budget(bank: Arc<PhraseBank>, target_chars: usize) -> Self {
        Self {
            bank,
            target_chars: target_chars.max(MIN_TARGET_CHARS),
        }
    }

    pub fn bank(&self) -> &PhraseBank {
        &self.bank
    }

    pub fn target_chars(&self) -> usize {
        self.target_chars
    }

    pub fn generate<R>(
        &self,
        request: &CommentRequest,
        random: &mut R,
    ) -> Result<GeneratedComment, CommentError>
    where
        R: RandomSource + ?Sized,
    {
        let subject = &request.subject;
        let pronouns = resolve_pronouns(&request.gender);
        let attitude_band = Band::nearest(request.attitude);
        let achievement_band = Band::nearest(request.achievement);
        let target_band = Band::nearest(request.target);

        let opening = pick(random, self.bank.lookup_openings(subject)?);
        let layout = self
            .bank
            .layout(subject)
            .ok_or_else(|| CommentError::Configuration {
                subject: subject.clone(),
                category: Category::Opening,
            })?;

        let mut sentences =
            Vec::with_capacity(layout.achievements().len() + layout.targets().len() + 3);

        let attitude = self.pick_banded(subject, Category::Attitude, attitude_band, random)?;
        let lead_in = attitude_lead_in(opening, &request.student_name);
        sentences.push(render_fragment(
            &lowercase_first(attitude.trim()),
            pronouns,
            Some(lead_in.as_str()),
        ));

        for skill in layout.achievements() {
            let category = Category::Achievement(*skill);
            let phrase = self.pick_banded(subject, category, achievement_band, random)?;
            let fragment = render_fragment(phrase, pronouns, None);
            sentences.push(match skill.lead_in() {
                Some(lead_in) if !fragment.is_empty() => {
                    format!("{lead_in}{}", lowercase_first(&fragment))
                }
                _ => fragment,
            });
        }

        for (position, skill) in layout.targets().iter().enumerate() {
            let category = Category::Target(*skill);
            let phrase = self.pick_banded(subject, category, target_band, random)?;
            let lead_in = if position == 0 {
                format!("For the next term, {} should ", pronouns.subject)
            } else {
                format!("Additionally, {} should ", pronouns.subject)
            };
            sentences.push(render_fragment(
                &lowercase_first(phrase.trim()),
                pronouns,
                Some(lead_in.as_str()),
            ));
        }

        let closing = pick(random, self.bank.lookup_closing(subject)?);
        sentences.push(render_fragment(closing, pronouns, None));

        if let Some(addendum) = request.addendum.as_deref().map(str::trim) {
            if !addendum.is_empty() {
                sentences.push(capitalize_first(addendum));
            }
        }

        let text = finish(&sentences, self.target_chars);
        let comment = GeneratedComment::new(text);
        debug!(
            subject = subject.subject(),
            year = subject.year(),
            chars = comment.char_count,
            "comment generated"
        );
        Ok(comment)
    }

    fn pick_banded<'a, R>(
        &'a self,
        subject: &SubjectKey,
        category: Category,
        band: Band,
        random: &mut R,
    ) -> Result<&'a str, CommentError>
    where
        R: RandomSource + ?Sized,
    {
        let candidates = self.bank.lookup(subject, category, band)?;
        Ok(pick(random, candidates))
    }
}

fn pick<'a, R>(random: &mut R, candidates: &'a [String]) -> &'a str
where
    R: RandomSource + ?Sized,
{
    choose(random, candidates)
        .map(String::as_str)
        .unwrap_or_default()
}

fn attitude_lead_in(opening: &str, student_name: &str) -> String {
    let mut lead_in = [opening.trim(), student_name.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    lead_in.push(' ');
    lead_in
}

/// Terminates and joins the sentences, then normalizes capitalization, length and punctuation.
fn finish(sentences: &[String], target_chars: usize) -> String {
    let joined = sentences
        .iter()
        .map(|sentence| terminate_sentence(sentence))
        .filter(|sentence| !sentence.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let capitalized = capitalize_sentences(&joined);
    let truncated = truncate_to_budget(&capitalized, target_chars);
    collapse_punctuation(&truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::comments::bank::{banded_table, BandTable, TrackLayout, TrackPhrases};
    use crate::workflows::comments::domain::Skill;
    use crate::workflows::comments::random::{FixedSequence, SeededRandom};

    fn uniform(phrase: &str) -> BandTable {
        banded_table([phrase; 9])
    }

    fn art_bank() -> Arc<PhraseBank> {
        let track = TrackPhrases::new(TrackLayout::single_skill())
            .with_openings(["This term,"])
            .with_closings(["Keep it up!"])
            .with_table(
                Category::Attitude,
                banded_table([
                    "Showed real commitment to his projects",
                    "a85", "a80", "a75", "a70", "a65", "a60", "a55", "a40",
                ]),
            )
            .with_table(
                Category::Achievement(Skill::General),
                uniform("produced bold, expressive work"),
            )
            .with_table(
                Category::Target(Skill::General),
                uniform("Experiment with mixed media,"),
            );
        Arc::new(
            PhraseBank::builder()
                .track(SubjectKey::new("Art", 6), track)
                .build()
                .expect("art bank builds"),
        )
    }

    fn art_request() -> CommentRequest {
        CommentRequest {
            subject: SubjectKey::new("Art", 6),
            student_name: "Mia".to_string(),
            gender: "female".to_string(),
            attitude: 90.0,
            achievement: 75.0,
            target: 75.0,
            addendum: None,
        }
    }

    fn standard() -> CommentAssembler {
        CommentAssembler::new(Arc::new(PhraseBank::standard().expect("standard bank")))
    }

    #[test]
    fn assembles_sentences_with_positional_lead_ins() {
        let assembler = CommentAssembler::new(art_bank());
        let comment = assembler
            .generate(&art_request(), &mut FixedSequence::first())
            .expect("comment");

        assert_eq!(
            comment.text,
            "This term, Mia showed real commitment to her projects. She produced bold, \
             expressive work. For the next term, she should experiment with mixed media. \
             Keep it up!"
        );
        assert_eq!(comment.char_count, comment.text.chars().count());
    }

    #[test]
    fn raw_scores_are_coerced_to_the_nearest_band() {
        let assembler = CommentAssembler::new(art_bank());
        let mut request = art_request();
        request.attitude = 72.5;
        let comment = assembler
            .generate(&request, &mut FixedSequence::first())
            .expect("comment");
        assert!(comment.text.starts_with("This term, Mia a75."), "{}", comment.text);
    }

    #[test]
    fn addendum_becomes_a_trailing_sentence() {
        let assembler = CommentAssembler::new(art_bank());
        let mut request = art_request();
        request.addendum = Some("  she led the gallery visit ".to_string());
        let comment = assembler
            .generate(&request, &mut FixedSequence::first())
            .expect("comment");
        assert!(comment.text.ends_with("Keep it up! She led the gallery visit."));
    }

    #[test]
    fn long_addendum_is_dropped_at_a_sentence_boundary() {
        let assembler = CommentAssembler::new(art_bank());
        let base = assembler
            .generate(&art_request(), &mut FixedSequence::first())
            .expect("base comment");

        let mut request = art_request();
        request.addendum = Some("really ".repeat(86));
        let comment = assembler
            .generate(&request, &mut FixedSequence::first())
            .expect("comment");

        assert!(comment.char_count <= DEFAULT_TARGET_CHARS);
        assert_eq!(comment.text, base.text);
    }

    #[test]
    fn small_budgets_keep_whole_sentences() {
        let assembler = CommentAssembler::with_budget(art_bank(), 120);
        let comment = assembler
            .generate(&art_request(), &mut FixedSequence::first())
            .expect("comment");
        assert!(comment.char_count <= 120);
        assert!(comment.text.ends_with("expressive work."), "{}", comment.text);
    }

    #[test]
    fn tiny_budgets_are_raised_to_the_minimum() {
        for budget in [0, 1, 2, MIN_TARGET_CHARS - 1] {
            let assembler = CommentAssembler::with_budget(art_bank(), budget);
            assert_eq!(assembler.target_chars(), MIN_TARGET_CHARS);

            let comment = assembler
                .generate(&art_request(), &mut FixedSequence::first())
                .expect("comment");
            assert!(comment.char_count <= MIN_TARGET_CHARS);
            assert!(comment.text.starts_with("This term, Mia"), "{}", comment.text);
            assert!(comment.text.ends_with('.'), "{}", comment.text);
        }
    }

    #[test]
    fn unknown_gender_uses_neutral_pronouns() {
        let assembler = CommentAssembler::new(art_bank());
        let mut request = art_request();
        request.gender = "unspecified".to_string();
        let comment = assembler
            .generate(&request, &mut FixedSequence::first())
            .expect("comment");
        assert!(comment.text.contains("to their projects. They produced"));
        assert!(comment.text.contains("they should experiment"));
    }

    #[test]
    fn english_comment_names_each_skill() {
        let request = CommentRequest {
            subject: SubjectKey::new("English", 5),
            student_name: "Aseel".to_string(),
            gender: "Female".to_string(),
            attitude: 75.0,
            achievement: 80.0,
            target: 85.0,
            addendum: None,
        };
        let comment = standard()
            .generate(&request, &mut SeededRandom::new(3))
            .expect("english comment");

        assert!(comment.text.contains("Aseel showed consistent effort"));
        assert!(comment
            .text
            .contains("In reading, she read confidently and identified key themes"));
        assert!(comment
            .text
            .contains("In writing, she wrote structured pieces"));
        assert!(comment.text.contains(
            "For the next term, she should develop deeper inference skills and support her ideas"
        ));
        assert!(comment
            .text
            .contains("Additionally, she should develop her writing"));
        assert!(comment.text.ends_with('.'));
        assert!(comment.char_count <= DEFAULT_TARGET_CHARS);
    }

    #[test]
    fn unknown_subject_is_a_configuration_error() {
        let mut request = art_request();
        request.subject = SubjectKey::new("French", 5);
        let error = standard()
            .generate(&request, &mut FixedSequence::first())
            .expect_err("french is not in the catalog");

        assert!(matches!(error, CommentError::Configuration { .. }));
        assert!(error.to_string().contains("French Year 5"));
    }

    #[test]
    fn identical_seeds_produce_identical_comments() {
        let assembler = standard();
        let request = CommentRequest {
            subject: SubjectKey::new("ESL (IGCSE)", 10),
            student_name: "Omar".to_string(),
            gender: "male".to_string(),
            attitude: 62.0,
            achievement: 81.0,
            target: 58.0,
            addendum: Some("great debate captain".to_string()),
        };

        let first = assembler
            .generate(&request, &mut SeededRandom::new(99))
            .expect("first");
        let second = assembler
            .generate(&request, &mut SeededRandom::new(99))
            .expect("second");
        assert_eq!(first, second);
    }
}
