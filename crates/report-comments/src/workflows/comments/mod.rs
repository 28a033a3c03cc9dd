mod assembler;
pub mod bank;
mod catalog;
pub mod domain;
mod pronouns;
pub mod random;
pub mod render;
pub mod text;

pub use assembler::{CommentAssembler, DEFAULT_TARGET_CHARS, MIN_TARGET_CHARS};
pub use bank::{BankError, PhraseBank, TrackLayout, TrackPhrases};
pub use domain::{
    Band, Category, CommentError, CommentRequest, GeneratedComment, PronounPair, Skill,
    SubjectKey,
};
pub use pronouns::resolve_pronouns;
pub use random::{FixedSequence, RandomSource, SeededRandom, ThreadRandom};
