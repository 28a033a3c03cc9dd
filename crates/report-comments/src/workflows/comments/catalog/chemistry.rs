use super::TrackContent;
use crate::workflows::comments::bank::PhraseBankBuilder;
use crate::workflows::comments::domain::{Skill, SubjectKey};

const SUBJECT: &str = "Chemistry";

pub(super) fn register(builder: PhraseBankBuilder) -> PhraseBankBuilder {
    builder
        .tracks([SubjectKey::new(SUBJECT, 10), SubjectKey::new(SUBJECT, 11)], IGCSE.phrases())
}

const IGCSE: TrackContent = TrackContent {
    openings: &[
        "In IGCSE Chemistry this term,",
        "Throughout the Chemistry course this term,",
        "During Chemistry 0620 lessons this term,",
        "In the study of IGCSE Chemistry this term,",
        "This term in Chemistry,",
    ],
    attitude: [
        "demonstrated exceptional scientific curiosity and independent learning skills. He designed sophisticated experiments independently and showed deep engagement with complex chemical theory.",
        "showed outstanding commitment to Chemistry, consistently asking insightful questions and displaying excellent practical laboratory technique throughout all investigations.",
        "approached Chemistry with genuine enthusiasm, actively participating in discussions and applying theoretical knowledge effectively in both written work and practical activities.",
        "maintained consistent effort throughout the term, showing reliable engagement with both theoretical concepts and laboratory activities. He worked steadily to develop his understanding.",
        "was generally focused during lessons and followed experimental procedures carefully. He completed assignments to a satisfactory standard and responded well to guidance.",
        "showed steady engagement but sometimes required encouragement to tackle more challenging chemical concepts. With support, he participated meaningfully in practical work.",
        "needed regular support to maintain focus during complex topics and required guidance with practical techniques. He showed improvement when given structured tasks.",
        "required frequent reminders to stay engaged with theoretical content and needed step-by-step support during experiments. He worked best with clear, directed guidance.",
        "found it challenging to sustain interest in abstract chemical concepts and needed substantial scaffolding for practical work. He made progress with intensive support.",
    ],
    achievements: &[
        (
            Skill::General,
            [
                "demonstrated mastery across all Chemistry topics. He expertly explained complex concepts including equilibrium, electrochemistry, and organic reaction mechanisms. In practical work, he designed and conducted precise, independent investigations, analyzing data with sophistication.",
                "showed excellent understanding of chemical principles. He confidently applied knowledge to solve complex problems, analyzed experimental data accurately, and explained industrial applications of chemistry with clarity. His practical technique was consistently precise and methodical.",
                "displayed secure understanding of core IGCSE concepts including stoichiometry, bonding, and energy changes. He applied this knowledge accurately in written work and demonstrated good competence in practical activities such as titrations and qualitative analysis.",
                "grasped fundamental chemical principles well. He explained processes like acid-base reactions, redox processes, and basic organic chemistry with developing clarity and accuracy. In practical work, he followed methods carefully and recorded observations systematically.",
                "understood main chemical concepts and performed standard experiments competently. He showed ability to follow methods, make appropriate observations, and draw basic conclusions from experimental data with some guidance.",
                "showed developing understanding of basic chemical ideas. He occasionally required support with more abstract concepts like mole calculations or reaction mechanisms. In practical work, he followed instructions with supervision and recorded results adequately.",
                "demonstrated basic knowledge of chemical facts but needed structured support to apply this understanding to problem-solving or unfamiliar contexts. He completed practical work with step-by-step guidance and recorded observations with support.",
                "grasped simple chemical ideas with considerable guidance. He found abstract concepts like atomic structure or chemical equations particularly challenging. In the laboratory, he required close supervision to complete basic procedures safely.",
                "struggled to connect different areas of Chemistry and needed substantial support to understand fundamental principles and their applications. He required extensive guidance to complete practical work and interpret results.",
            ],
        ),
    ],
    targets: &[
        (
            Skill::General,
            [
                "To extend his learning further, he should explore advanced topics beyond the syllabus and design independent investigations into chemical systems. He would benefit from critically evaluating industrial processes and their environmental impacts to deepen his analytical skills.",
                "To develop greater depth, he should focus on analyzing complex reaction mechanisms and improving precision in quantitative analysis techniques. Applying chemical principles to novel, unfamiliar contexts will further strengthen his problem-solving abilities.",
                "Next term, he should focus on mastering examination technique, particularly for extended response questions. Improving accuracy in practical investigations and developing more sophisticated data analysis skills will also be important areas for development.",
                "For continued progress, he should practice applying chemical knowledge to unfamiliar scenarios and work on improving precision in quantitative techniques like titration. Developing clearer, more detailed explanations of reaction processes will strengthen his written communication.",
                "To build on current understanding, he should work on strengthening stoichiometry and mole calculations, while improving experimental accuracy. Developing more detailed written explanations of chemical phenomena will also be beneficial for his progress.",
                "Next term, he should develop confidence in writing and balancing chemical equations, and practice interpreting graphical data from experiments. Understanding the relationship between macroscopic observations and particulate theory will help consolidate his chemical understanding.",
                "To improve further, he should focus on mastering basic laboratory techniques and understanding fundamental concepts like periodic table trends. Regular practice with chemical calculations and vocabulary revision will support his ongoing development.",
                "For next term, he should practice naming chemical compounds correctly and writing simple balanced equations. Developing familiarity with basic practical procedures like filtration and crystallization will also be important areas for focus.",
                "To build foundational knowledge, he should work on states of matter, simple separation techniques, and basic atomic structure. Regular revision of core chemical vocabulary and supervised practical experience will support his learning.",
            ],
        ),
    ],
    closings: &[
        "Overall, steady progress was evident in both theoretical understanding and practical skills development throughout the term.",
        "With continued dedication and focused practice, further improvement in chemical knowledge and investigative competence is anticipated next term.",
        "The student demonstrated growing confidence in applying chemical principles and showed developing competence in essential laboratory techniques.",
        "Continued engagement with both theoretical study and practical work will be essential for ongoing progress in Chemistry next term.",
        "Noticeable progress was made in connecting different areas of the Chemistry curriculum as the term progressed.",
    ],
};
