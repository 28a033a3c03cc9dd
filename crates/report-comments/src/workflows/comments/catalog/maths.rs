use super::TrackContent;
use crate::workflows::comments::bank::PhraseBankBuilder;
use crate::workflows::comments::domain::{Skill, SubjectKey};

const SUBJECT: &str = "Maths";

pub(super) fn register(builder: PhraseBankBuilder) -> PhraseBankBuilder {
    builder
        .track(SubjectKey::new(SUBJECT, 5), YEAR5.phrases())
        .track(SubjectKey::new(SUBJECT, 7), YEAR7.phrases())
        .track(SubjectKey::new(SUBJECT, 8), YEAR8.phrases())
}

const YEAR5: TrackContent = TrackContent {
    openings: &[
        "This year in Maths,",
        "Throughout this term,",
        "During lessons,",
        "Across the term,",
        "Over the course of the year,",
    ],
    attitude: [
        "showed great enthusiasm for exploring mathematical ideas independently and asking thoughtful questions",
        "was motivated and engaged, contributing ideas confidently in class activities",
        "demonstrated consistent effort and approached tasks positively",
        "worked steadily and followed instructions carefully",
        "showed focus during lessons and completed tasks with some guidance",
        "participated when prompted and benefited from encouragement",
        "needed occasional reminders to stay on task and complete work",
        "required support to engage consistently with lessons",
        "struggled to maintain focus and needed regular guidance",
    ],
    achievements: &[
        (
            Skill::General,
            [
                "calculated with precision, applied mental strategies fluently, and explored number patterns confidently",
                "used mental and written methods accurately and showed clear understanding of place value",
                "applied number operations correctly and explained reasoning logically",
                "carried out calculations with care and showed sound understanding of concepts",
                "performed calculations correctly with some support and applied number skills in context",
                "completed basic calculations with guidance and understood key concepts",
                "applied number skills with help and showed developing understanding",
                "needed step-by-step support for calculations and concepts",
                "struggled with number operations and needed consistent guidance",
            ],
        ),
    ],
    targets: &[
        (
            Skill::General,
            [
                "extend reasoning by exploring complex multi-step problems and explaining strategies clearly",
                "challenge themselves with unfamiliar problems and justify methods used",
                "practise applying concepts to new contexts and check answers for accuracy",
                "focus on explaining steps and using known strategies confidently",
                "develop accuracy and confidence in applying number skills",
                "strengthen understanding of key operations and problem-solving strategies",
                "practise completing calculations independently and applying learned methods",
                "work on following problem-solving steps with guidance",
                "focus on understanding basic concepts and building confidence in calculations",
            ],
        ),
    ],
    closings: &[
        "Overall, the student is developing strong mathematical skills with increasing confidence in calculations and reasoning",
        "With consistent support, further progress in problem-solving and number work is expected next term",
        "The student showed gradual growth in applying mathematical methods and understanding key concepts",
    ],
};

const YEAR7: TrackContent = TrackContent {
    openings: &[
        "In Year 7 Maths, students have explored",
        "This term, pupils focused on developing skills in",
        "Throughout the term, learning concentrated on",
        "Over the course of the term, students practised",
        "During lessons this term, attention was given to",
    ],
    attitude: [
        "approached mathematical challenges with enthusiasm and curiosity, often extending learning independently",
        "engaged actively in lessons, showing determination and asking insightful questions",
        "participated consistently and applied methods with growing confidence",
        "showed steady effort and followed instructions carefully",
        "was attentive and completed tasks with guidance when needed",
        "required some encouragement to maintain focus and complete tasks",
        "needed regular support to stay on task and understand new ideas",
        "found it challenging to maintain focus without frequent reminders",
        "struggled to engage independently and needed constant guidance",
    ],
    achievements: &[
        (
            Skill::General,
            [
                "confidently solved complex problems involving fractions, percentages, ratios, and simple algebra, explaining reasoning clearly",
                "applied number and algebraic skills accurately to solve unfamiliar problems",
                "demonstrated secure understanding of fractions, decimals, percentages, and basic algebra",
                "used number operations and algebraic expressions with some support",
                "applied number and algebra skills correctly with guidance",
                "showed emerging understanding of algebra and numerical calculations",
                "completed basic calculations with support",
                "needed structured guidance to work with algebra or fractions",
                "found algebraic reasoning and number operations challenging",
            ],
        ),
    ],
    targets: &[
        (
            Skill::General,
            [
                "extend learning by exploring more complex multi-step problems and explaining methods with depth",
                "focus on tackling unfamiliar problems and reasoning systematically",
                "practise applying algebra, fractions, and measurement skills in varied contexts",
                "strengthen confidence in using number, algebra, and geometry methods",
                "develop fluency in calculations and geometric reasoning with guided practice",
                "work on following step-by-step reasoning strategies to solve problems",
                "consolidate foundational skills in number, algebra, and geometry",
                "practise structured problem-solving and apply methods carefully",
                "focus on understanding core concepts and building confidence in calculations",
            ],
        ),
    ],
    closings: &[
        "Overall, students showed steady progress in calculations, algebra, and geometry over the term",
        "With ongoing support, learners are expected to develop stronger problem-solving and reasoning skills next term",
        "Pupils demonstrated increasing confidence in approaching mathematical challenges throughout the term",
    ],
};

const YEAR8: TrackContent = TrackContent {
    openings: &[
        "During Year 8 Maths lessons,",
        "This term,",
        "Throughout the term,",
        "Over the course of the term,",
        "In lessons this term,",
    ],
    attitude: [
        "approached Maths lessons with exceptional curiosity and independence, often exploring ideas beyond the classroom",
        "demonstrated high engagement, contributing thoughtful ideas and reasoning during lessons",
        "showed enthusiasm for Maths and applied strategies confidently in problem-solving",
        "consistently worked hard in lessons and participated effectively in discussions",
        "paid attention in lessons and applied instructions accurately",
        "showed steady engagement and completed tasks when prompted",
        "required occasional support to stay focused and maintain momentum",
        "needed regular guidance to remain confident and complete tasks",
        "found it challenging to stay focused and needed consistent encouragement",
    ],
    achievements: &[
        (
            Skill::General,
            [
                "demonstrated mastery in algebra, geometry, number theory, and applied reasoning to complex problems",
                "showed strong understanding of mathematical concepts and applied methods effectively in problem-solving",
                "understood key concepts and applied procedures correctly in most tasks",
                "understood most topics and drew logical conclusions from evidence",
                "grasped fundamental principles and applied them with support in exercises",
                "showed developing understanding and applied knowledge when guided",
                "demonstrated basic understanding and applied concepts with assistance",
                "had limited understanding of core ideas and needed guidance to apply them",
                "struggled with some concepts and required support",
            ],
        ),
    ],
    targets: &[
        (
            Skill::General,
            [
                "extend learning by tackling multi-step problems and exploring advanced mathematical applications",
                "develop further by applying knowledge to unfamiliar problems and explaining reasoning clearly",
                "consolidate understanding and make connections across topics to strengthen problem-solving",
                "practice analysing methods and presenting solutions logically",
                "focus on accurate application of methods and reasoning in exercises",
                "work on using correct terminology and structuring solutions clearly",
                "practise applying concepts with guidance to improve confidence",
                "focus on recalling key facts and applying simple procedures",
                "complete tasks with support and focus on understanding fundamental ideas",
            ],
        ),
    ],
    closings: &[
        "Overall, progress in Maths was evident, showing increasing confidence in applying concepts",
        "With ongoing support, further development of skills and understanding is expected next term",
        "Growing competence in problem-solving and mathematical reasoning was demonstrated during the term",
    ],
};
