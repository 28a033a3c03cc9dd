use super::TrackContent;
use crate::workflows::comments::bank::PhraseBankBuilder;
use crate::workflows::comments::domain::{Skill, SubjectKey};

const SUBJECT: &str = "English";

pub(super) fn register(builder: PhraseBankBuilder) -> PhraseBankBuilder {
    builder
        .track(SubjectKey::new(SUBJECT, 5), YEAR5.phrases())
        .track(SubjectKey::new(SUBJECT, 7), YEAR7.phrases())
        .track(SubjectKey::new(SUBJECT, 8), YEAR8.phrases())
}

const YEAR5: TrackContent = TrackContent {
    openings: &[
        "This term,",
        "Over the course of this term,",
        "During this term,",
        "Throughout this term,",
        "Across the term,",
    ],
    attitude: [
        "approached learning with enthusiasm and independence, showing curiosity and confidence",
        "demonstrated a highly positive and motivated attitude towards learning",
        "showed a positive attitude and participated confidently in class activities",
        "showed consistent effort and engaged well in lessons",
        "was generally focused and responded well to guidance",
        "showed a steady approach to learning but benefited from encouragement",
        "required support to remain focused and engaged in lessons",
        "needed regular guidance to remain engaged and confident",
        "found it challenging to stay focused and required consistent encouragement",
    ],
    achievements: &[
        (
            Skill::Reading,
            [
                "read with excellent comprehension, made insightful inferences, and discussed texts confidently",
                "understood texts well and made thoughtful interpretations of meaning",
                "read confidently and identified key themes and ideas in texts",
                "understood main ideas and some details in age-appropriate texts",
                "identified key points in texts with some support",
                "showed understanding of straightforward texts when guided",
                "understood simple texts with support and guidance",
                "grasped basic information in familiar texts",
                "needed support to understand texts",
            ],
        ),
        (
            Skill::Writing,
            [
                "wrote creatively and clearly using varied vocabulary and well-structured sentences",
                "produced well-organized writing with appropriate vocabulary and sentence variety",
                "wrote structured pieces with good use of vocabulary and grammar",
                "wrote organized paragraphs with suitable vocabulary",
                "wrote clear sentences and simple paragraphs",
                "wrote simple sentences with developing organization",
                "wrote basic sentences with support",
                "formed simple written responses with guidance",
                "needed support to express ideas in writing",
            ],
        ),
    ],
    targets: &[
        (
            Skill::Reading,
            [
                "explore complex themes and make connections between different texts",
                "develop deeper inference skills and support his ideas with textual evidence",
                "focus on identifying implied meanings and discussing author's choices",
                "practice making inferences and explaining character motivations",
                "work on identifying key themes and summarizing main ideas",
                "focus on reading for meaning and noting important details",
                "build vocabulary and re-read to improve understanding",
                "develop comprehension by discussing texts and asking questions",
                "practice reading regularly to build confidence and fluency",
            ],
        ),
        (
            Skill::Writing,
            [
                "experiment with varied sentence structures and ambitious vocabulary choices",
                "develop his writing by using figurative language and varied openers",
                "focus on using descriptive language and organizing ideas clearly",
                "add more detail and use varied sentence structures",
                "work on writing in paragraphs and using connectives",
                "include adjectives and interesting vocabulary to improve writing",
                "practice planning writing and organizing ideas into sentences",
                "focus on using capital letters, full stops, and basic punctuation correctly",
                "work on forming complete sentences with support",
            ],
        ),
    ],
    closings: &[
        "Overall, progress was evident over the course of the term",
        "With continued support, further progress is expected next term",
        "Confidence in English skills improved gradually as the term progressed",
    ],
};

const YEAR7: TrackContent = TrackContent {
    openings: &[
        "This term,",
        "Over the course of this term,",
        "During this term,",
        "Throughout this term,",
        "In this term,",
        "Over the past term,",
    ],
    attitude: [
        "approached learning with enthusiasm and confidence, showing independence and curiosity",
        "demonstrated a highly positive and motivated attitude towards learning",
        "showed a positive and motivated attitude towards learning and participated confidently",
        "showed consistent effort and engaged well in class activities",
        "was generally focused and responded well to guidance",
        "showed a steady approach to learning but benefited from encouragement",
        "required support to remain focused and engaged in lessons",
        "needed regular guidance to remain engaged and confident",
        "found it challenging to stay focused and required consistent encouragement",
    ],
    achievements: &[
        (
            Skill::Reading,
            [
                "understood texts and made insightful interpretations",
                "understood texts confidently and made strong interpretations",
                "understood texts confidently and interpreted key points",
                "understood texts securely and identified key ideas",
                "understood main ideas in texts with some support",
                "identified key points in texts with guidance",
                "showed basic understanding of texts with support",
                "understood simple information in texts",
                "understood texts with support",
            ],
        ),
        (
            Skill::Writing,
            [
                "expressed ideas clearly using varied vocabulary and sentence structures",
                "wrote confidently using varied sentences and well-chosen vocabulary",
                "wrote structured pieces with appropriate vocabulary",
                "wrote organised paragraphs with suitable vocabulary",
                "wrote clear sentences and simple paragraphs",
                "wrote simple sentences with some organisation",
                "wrote short sentences with support",
                "structured simple written responses",
                "expressed ideas with support",
            ],
        ),
    ],
    targets: &[
        (
            Skill::Reading,
            [
                "explore subtler inferences and interpret multiple perspectives to deepen analysis",
                "extend inference skills and examine alternative interpretations",
                "focus on recognising subtler implications and supporting ideas with evidence",
                "practice identifying hidden meanings and making connections within the text",
                "work on identifying implied ideas and summarising main points",
                "focus on reading for meaning and noting key details",
                "strengthen comprehension by paraphrasing and asking questions about the text",
                "build vocabulary and re-read to clarify meaning",
                "identify key events and main points with guided support",
            ],
        ),
        (
            Skill::Writing,
            [
                "experiment with subtle suspense, varied perspectives, and advanced sensory effects",
                "refine vocabulary and explore more varied sentence structures for impact",
                "focus on precise sensory words and 'showing' character emotions",
                "add more sensory details and actions that reveal character traits",
                "replace 'telling' statements with descriptive or action-based sentences",
                "include adjectives, vivid verbs, and sensory details to enhance imagery",
                "focus on including at least one sensory detail per paragraph",
                "use sentence starters and story maps to add detail",
                "begin with simple sentences describing events and character feelings",
            ],
        ),
    ],
    closings: &[
        "Overall, progress was evident over the course of the term",
        "With continued support, further progress is expected next term",
        "Confidence improved gradually as the term progressed",
    ],
};

const YEAR8: TrackContent = TrackContent {
    openings: &[
        "This term,",
        "Across this term,",
        "Throughout the term,",
        "During this term,",
        "Over the past term,",
    ],
    attitude: [
        "engaged consistently with challenging tasks and showed strong intellectual curiosity",
        "demonstrated a positive and reflective attitude to learning, contributing thoughtfully",
        "approached learning with confidence and participated actively in class",
        "showed reliable effort and responded well to feedback",
        "was generally engaged though sometimes needed prompts to stay focused",
        "needed occasional support to maintain focus and engagement",
        "required regular encouragement to participate in lessons",
        "struggled to stay engaged without frequent guidance",
        "found it difficult to sustain focus and required consistent support",
    ],
    achievements: &[
        (
            Skill::Reading,
            [
                "read challenging texts independently, made perceptive inferences and evaluated language choices",
                "interpreted meaning skilfully and supported ideas with textual evidence",
                "understood complex texts and made justified inferences",
                "understood key ideas and some subtleties in texts",
                "identified main points and some supporting details in texts",
                "showed understanding of texts with guidance",
                "understood basic meaning in familiar texts with support",
                "identified simple information in texts with support",
                "required substantial support to understand straightforward texts",
            ],
        ),
        (
            Skill::Writing,
            [
                "wrote accurately and effectively for a range of purposes with well-chosen vocabulary and sophisticated structure",
                "produced detailed and coherent writing, selecting vocabulary and structures appropriate to task",
                "wrote with clear organisation and controlled grammar for different purposes",
                "wrote organised paragraphs with appropriate sentence structure",
                "produced understandable pieces of writing with clear sentences",
                "showed emerging organisation in simple written responses",
                "crafted basic sentences with support",
                "expressed simple ideas in writing with guidance",
                "required substantial support to form coherent written responses",
            ],
        ),
    ],
    targets: &[
        (
            Skill::Reading,
            [
                "extend analysis by evaluating how language and structure influence meaning and reader response",
                "develop deeper inference skills and justify interpretations with clear textual references",
                "focus on analysing vocabulary and structural choices to enhance understanding",
                "practise making supported inferences and explaining his reasoning",
                "strengthen comprehension by identifying implied meanings and summarising accurately",
                "build confidence in reading independently and discuss key ideas orally",
                "improve understanding of unfamiliar vocabulary in texts",
                "re-read texts to clarify meaning and note key events",
                "work on decoding and basic comprehension with guided support",
            ],
        ),
        (
            Skill::Writing,
            [
                "refine writing by precision in vocabulary, purposeful structure and sophisticated grammatical control",
                "seek to embed varied sentence structures and precise vocabulary for impact",
                "focus on planning and editing to improve clarity and organisation",
                "develop use of paragraphs and cohesive devices to support clarity",
                "work on accurate punctuation and varied sentence openings",
                "include stronger connectives and vocabulary to link ideas",
                "practise drafting and revising to strengthen writing structure",
                "use planning tools to organise basic ideas before writing",
                "enhance sentences with clear subjects and verbs",
            ],
        ),
    ],
    closings: &[
        "Overall, progress across the key reading and writing skills was evident over the term",
        "With continued development and effort, further progress is expected next term",
        "Confidence and competence in English skills grew steadily throughout the term",
        "Next term should build on this progress through increased independent reading and writing",
    ],
};
