use super::TrackContent;
use crate::workflows::comments::bank::PhraseBankBuilder;
use crate::workflows::comments::domain::{Skill, SubjectKey};

const SUBJECT: &str = "ESL (IGCSE)";

pub(super) fn register(builder: PhraseBankBuilder) -> PhraseBankBuilder {
    builder
        .tracks([SubjectKey::new(SUBJECT, 10), SubjectKey::new(SUBJECT, 11)], IGCSE.phrases())
}

const IGCSE: TrackContent = TrackContent {
    openings: &[
        "This term,",
        "Throughout this term,",
        "During this term,",
        "Over the course of this term,",
        "Across the term,",
    ],
    attitude: [
        "demonstrated excellent motivation and consistently engaged with challenging language tasks independently",
        "showed strong commitment to improving English skills and participated actively in all activities",
        "approached learning positively and worked hard to develop language competence",
        "maintained consistent effort and responded well to feedback",
        "was generally focused and completed tasks with appropriate guidance",
        "showed steady engagement but occasionally needed encouragement to participate",
        "required regular support to maintain focus and complete activities",
        "needed frequent prompts to stay engaged with language learning tasks",
        "found it challenging to sustain focus and required consistent encouragement",
    ],
    achievements: &[
        (
            Skill::Reading,
            [
                "demonstrated excellent reading comprehension, identifying explicit and implicit meanings with confidence",
                "read with strong comprehension and made effective inferences from a variety of texts",
                "understood texts well and identified main ideas and supporting details accurately",
                "comprehended key information in texts and made basic inferences with support",
                "understood straightforward texts and identified main points with some guidance",
                "showed developing comprehension skills when reading familiar text types",
                "understood simple texts with support and guidance",
                "grasped basic information in simple texts with scaffolding",
                "needed substantial support to understand written texts",
            ],
        ),
        (
            Skill::Writing,
            [
                "produced well-structured writing with accurate grammar, varied vocabulary, and clear expression",
                "wrote coherently with good organization and generally accurate language use",
                "wrote organized pieces with appropriate vocabulary and mostly accurate grammar",
                "produced structured writing with developing accuracy in grammar and spelling",
                "wrote clear sentences with basic organization and some grammatical accuracy",
                "formed simple written responses with developing sentence structure",
                "wrote basic sentences with support, showing emerging accuracy",
                "produced simple written work with guidance on structure and vocabulary",
                "needed substantial support to express ideas in written English",
            ],
        ),
        (
            Skill::Speaking,
            [
                "communicated fluently and confidently with clear pronunciation and varied expression",
                "spoke with good fluency and clarity, expressing ideas effectively",
                "communicated clearly with developing fluency and appropriate vocabulary",
                "spoke comprehensibly with some fluency when discussing familiar topics",
                "expressed ideas verbally with adequate clarity, though with some hesitation",
                "communicated basic ideas orally with support and prompting",
                "spoke in simple sentences with guidance and encouragement",
                "produced basic spoken responses with scaffolding",
                "needed substantial support to express ideas verbally in English",
            ],
        ),
        (
            Skill::Listening,
            [
                "demonstrated excellent listening comprehension, understanding both explicit and implicit information",
                "listened attentively and understood the main points and details in spoken English",
                "comprehended spoken English well and identified key information accurately",
                "understood main ideas in spoken English with developing detail recognition",
                "followed spoken instructions and understood key points with some support",
                "showed developing listening skills when content was clearly presented",
                "understood simple spoken English with visual or contextual support",
                "grasped basic information from spoken English with scaffolding",
                "needed substantial support to understand spoken English",
            ],
        ),
    ],
    targets: &[
        (
            Skill::Reading,
            [
                "extend comprehension by analyzing writer's purpose and evaluating use of language in complex texts",
                "develop inference skills further and practice summarizing information from multiple sources",
                "focus on identifying implicit meanings and understanding text organization",
                "practice making inferences and supporting interpretations with textual evidence",
                "work on identifying main ideas and key details in a variety of text types",
                "build vocabulary knowledge and practice reading different text formats",
                "develop comprehension strategies such as predicting and questioning while reading",
                "focus on understanding key vocabulary and main ideas in texts",
                "practice regular reading with support to build confidence and fluency",
            ],
        ),
        (
            Skill::Writing,
            [
                "refine writing by using sophisticated vocabulary and complex sentence structures with precision",
                "focus on varying sentence structures and expanding vocabulary range for different purposes",
                "develop writing by improving paragraph organization and grammatical accuracy",
                "work on using connectives effectively and checking work for accuracy",
                "practice organizing ideas into clear paragraphs with topic sentences",
                "focus on using varied vocabulary and improving sentence structure",
                "develop writing skills by planning ideas before writing and checking basic grammar",
                "practice forming complete sentences with correct basic punctuation",
                "work on sentence construction and basic spelling with support",
            ],
        ),
    ],
    closings: &[
        "Overall, progress across the four language skills was evident throughout the term",
        "With continued practice and dedication, further improvement in English proficiency is expected",
        "The student showed steady development in English language competence during the term",
        "Continued engagement with English in all skill areas will support ongoing progress",
    ],
};
