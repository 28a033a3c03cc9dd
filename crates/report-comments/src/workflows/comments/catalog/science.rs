use super::TrackContent;
use crate::workflows::comments::bank::PhraseBankBuilder;
use crate::workflows::comments::domain::{Skill, SubjectKey};

const SUBJECT: &str = "Science";

pub(super) fn register(builder: PhraseBankBuilder) -> PhraseBankBuilder {
    builder
        .track(SubjectKey::new(SUBJECT, 5), YEAR5.phrases())
        .track(SubjectKey::new(SUBJECT, 7), YEAR7.phrases())
        .track(SubjectKey::new(SUBJECT, 8), YEAR8.phrases())
}

const YEAR5: TrackContent = TrackContent {
    openings: &[
        "This term in science,",
        "During science lessons this term,",
        "Across our science learning,",
        "Over the past few weeks in science,",
        "In class investigations this term,",
        "Throughout our science topics,",
    ],
    attitude: [
        "showed strong curiosity, regularly asking thoughtful questions and exploring ideas with enthusiasm",
        "approached learning with interest and confidence, engaging actively in discussions and tasks",
        "showed enthusiasm for science and took part positively in investigations",
        "worked well in lessons and contributed sensibly during practical activities",
        "engaged with learning and followed instructions carefully during tasks",
        "showed a generally positive attitude but sometimes needed encouragement to stay focused",
        "needed support to remain engaged and complete tasks independently",
        "required regular reminders to stay focused and involved in activities",
        "found it challenging to stay engaged and needed frequent encouragement",
    ],
    achievements: &[
        (
            Skill::General,
            [
                "made careful observations, identified clear patterns, and explained results using scientific vocabulary",
                "observed changes accurately and used evidence to explain what happened",
                "made sensible observations and explained outcomes using simple scientific language",
                "recorded results clearly and described what happened during investigations",
                "made basic observations and described results with some support",
                "identified simple changes or patterns when guided",
                "showed basic understanding of ideas explored in class investigations",
                "recorded simple results but needed support to explain them",
                "found it difficult to describe observations without support",
            ],
        ),
    ],
    targets: &[
        (
            Skill::General,
            [
                "begin to plan simple tests independently and explain results using clear scientific reasoning",
                "develop explanations further by linking observations to scientific ideas",
                "use results to explain why changes occurred during investigations",
                "focus on explaining results clearly using evidence from observations",
                "practise recording results carefully and describing patterns noticed",
                "work on making clear observations and explaining what happened",
                "develop confidence in recording results and discussing findings",
                "practise describing observations using simple scientific vocabulary",
                "focus on making observations and recording results with guidance",
            ],
        ),
    ],
    closings: &[
        "Overall, the student showed growing curiosity and confidence when exploring scientific ideas",
        "With continued practice, the student is developing secure skills in observation and investigation",
        "Progress was evident as the student became more confident in practical science work",
    ],
};

const YEAR7: TrackContent = TrackContent {
    openings: &[
        "This term in science,",
        "During Key Stage 3 science lessons,",
        "Over the course of this term,",
        "Across scientific topics studied this term,",
        "In practical and theory-based lessons,",
        "Throughout science learning this term,",
    ],
    attitude: [
        "demonstrated strong independence in lessons, taking responsibility for learning and practical work",
        "showed high levels of engagement and contributed confidently to discussions and investigations",
        "approached learning positively and worked well during practical and written tasks",
        "worked consistently and followed instructions carefully during investigations",
        "engaged well in lessons and responded appropriately to guidance",
        "showed steady effort but occasionally relied on prompts to remain focused",
        "required some support to stay engaged and complete tasks effectively",
        "needed regular guidance to remain focused and organised",
        "found it difficult to sustain focus and needed frequent reminders",
    ],
    achievements: &[
        (
            Skill::General,
            [
                "applied scientific knowledge confidently to investigations and justified conclusions using evidence",
                "used scientific concepts accurately and explained results clearly using evidence",
                "applied knowledge effectively during investigations and explained outcomes clearly",
                "understood key scientific ideas and applied them correctly in practical work",
                "grasped main concepts and applied them with some support during investigations",
                "showed developing understanding and applied ideas when guided",
                "demonstrated basic understanding but needed support to apply concepts",
                "understood some ideas but found applying them independently challenging",
                "struggled to apply scientific knowledge without support",
            ],
        ),
    ],
    targets: &[
        (
            Skill::General,
            [
                "extend learning by planning investigations independently and justifying conclusions with clear evidence",
                "develop confidence in identifying variables and explaining results using scientific reasoning",
                "focus on linking scientific ideas to evidence gathered during investigations",
                "practise identifying variables and using results to support conclusions",
                "work on applying concepts more accurately during practical tasks",
                "focus on explaining results clearly using evidence from investigations",
                "develop confidence in applying scientific ideas during practical work",
                "practise following investigation methods and explaining outcomes",
                "focus on applying basic scientific ideas with structured support",
            ],
        ),
    ],
    closings: &[
        "Overall, the student made steady progress in applying scientific knowledge during investigations",
        "With continued practice, the student is developing confidence in practical and theoretical science",
        "Progress was evident as the student began to link scientific ideas with evidence",
    ],
};

const YEAR8: TrackContent = TrackContent {
    openings: &[
        "This term,",
        "Over the course of this term,",
        "Throughout this term,",
        "During this term,",
        "In this term,",
        "Over the past term,",
    ],
    attitude: [
        "showed exceptional scientific curiosity, questioning ideas and engaging deeply in investigations",
        "demonstrated a highly motivated approach and contributed meaningfully to practical work",
        "approached science with enthusiasm and applied knowledge confidently in lessons",
        "consistently engaged in activities and worked well during experiments",
        "was focused in lessons and followed scientific procedures accurately",
        "showed developing engagement and participated when prompted",
        "needed some encouragement to stay focused on tasks",
        "required regular guidance to remain engaged in scientific activities",
        "found it challenging to stay focused and needed substantial support",
    ],
    achievements: &[
        (
            Skill::General,
            [
                "showed outstanding understanding of scientific theories and evaluated evidence with precision",
                "demonstrated strong understanding of key concepts and used evidence to support explanations",
                "understood scientific ideas clearly and applied them appropriately in investigations",
                "interpreted scientific data accurately and drew sensible conclusions",
                "showed understanding of core principles and made justified observations",
                "applied scientific knowledge with guidance and explained ideas satisfactorily",
                "demonstrated basic understanding and described phenomena with support",
                "showed limited understanding and needed help to explain scientific ideas",
                "needed substantial support to make sense of scientific concepts",
            ],
        ),
    ],
    targets: &[
        (
            Skill::General,
            [
                "develop further by designing and conducting independent investigations, analysing patterns in data",
                "focus on explaining relationships between variables and improving precision in measurements",
                "work on interpreting data tables and graphs to support scientific claims",
                "practice explaining scientific ideas in writing and linking them to real‑world examples",
                "develop skills in planning fair tests and identifying variables with less support",
                "work on using specialised scientific vocabulary accurately in explanations",
                "strengthen observational skills and record findings clearly during practical work",
                "focus on understanding key terminology and organise simple data in structured ways",
                "work on completing basic practical steps with adult guidance",
            ],
        ),
    ],
    closings: &[
        "Overall, progress was evident, with increasing confidence in scientific reasoning and investigations",
        "With continued effort, further improvement in understanding and skills is expected next term",
        "Students showed growing ability to analyse and explain scientific phenomena throughout the term",
    ],
};
