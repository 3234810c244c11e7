use crate::types::question::{AnswerOption, Question, QuestionBank};

fn question(prompt: &'static str, options: [(char, &'static str, u32); 4]) -> Question {
    Question {
        prompt,
        options: options
            .into_iter()
            .map(|(key, text, score)| (key, AnswerOption { text, score }))
            .collect(),
    }
}

/// The built-in AQ question bank. Constructed once at startup and never
/// mutated for the process lifetime.
pub fn builtin() -> QuestionBank {
    QuestionBank::new(vec![
        question(
            "When your usual way of doing things is suddenly disrupted, you typically:",
            [
                ('a', "Feel a bit frustrated initially but then focus on finding a new approach.", 3),
                ('b', "Feel somewhat uneasy and prefer to stick to familiar methods if possible.", 2),
                ('c', "See it as an opportunity to explore different possibilities and learn something new.", 4),
                ('d', "Find it takes a while to adjust and can feel quite disruptive to your flow.", 1),
            ],
        ),
        question(
            "When faced with a completely new task or challenge, you are most likely to:",
            [
                ('a', "Feel a bit hesitant but willing to give it a try and learn as you go.", 3),
                ('b', "Prefer to have clear guidelines and examples before starting.", 2),
                ('c', "Approach it with enthusiasm and a desire to understand it thoroughly.", 4),
                ('d', "Feel somewhat uncertain and might take a while to figure out where to start.", 1),
            ],
        ),
        question(
            "When you encounter a significant change at work or in your personal life, your first reaction is usually to:",
            [
                ('a', "Acknowledge the change and try to understand its implications.", 3),
                ('b', "Feel a sense of uncertainty and worry about how it will affect you.", 2),
                ('c', "Actively seek information and look for ways to navigate the new situation effectively.", 4),
                ('d', "Initially resist the change and hope things will stabilize soon.", 1),
            ],
        ),
        question(
            "If you invest time and effort in learning a new skill and then realize it's no longer relevant, you would:",
            [
                ('a', "Be a little disappointed but recognize the value of learning itself.", 3),
                ('b', "Feel frustrated but eventually move on to other things.", 2),
                ('c', "Quickly identify other potentially useful skills and start exploring them.", 4),
                ('d', "Continue to try and find ways to apply the learned skill, even if less effective.", 1),
            ],
        ),
        question(
            "When someone presents a completely different perspective on a topic you feel strongly about, you typically:",
            [
                ('a', "Listen respectfully and consider their viewpoint, even if you don't agree.", 3),
                ('b', "Hear them out but maintain your original stance.", 2),
                ('c', "Find it interesting to understand different ways of thinking.", 4),
                ('d', "Become somewhat defensive and want to explain why your view is correct.", 1),
            ],
        ),
        question(
            "When faced with a complex problem you've never encountered before, you tend to:",
            [
                ('a', "Break it down into smaller steps and try different strategies.", 4),
                ('b', "Feel challenged and might need some time to figure out where to begin.", 2),
                ('c', "See it as an interesting puzzle to solve and enjoy the process.", 3),
                ('d', "Feel a bit lost and might seek guidance or help early on.", 1),
            ],
        ),
        question(
            "In situations where the rules or guidelines are unclear or constantly changing, you typically:",
            [
                ('a', "Adapt your approach as needed and try to find what works best.", 4),
                ('b', "Prefer more clarity but can manage in the absence of it.", 3),
                ('c', "See it as an opportunity to be flexible and innovative.", 3),
                ('d', "Prefer more structure and predictability and might find it difficult to operate without them.", 1),
            ],
        ),
        question(
            "If you receive constructive criticism that challenges your usual way of working, you are most likely to:",
            [
                ('a', "Reflect on the feedback and consider making adjustments.", 3),
                ('b', "Acknowledge it but might not immediately change your approach.", 2),
                ('c', "See it as valuable input for growth and improvement.", 4),
                ('d', "Feel a bit discouraged and question your abilities.", 1),
            ],
        ),
        question(
            "When you notice a new trend or technology emerging in your field, you typically:",
            [
                ('a', "Ignore it and stick to what you know.", 1),
                ('b', "Take a cautious approach, observing how others use them before trying them yourself.", 2),
                ('c', "Show interest and actively explore how these new tools can enhance your work.", 4),
                ('d', "Find it requires significant effort to keep up with these changes.", 3),
            ],
        ),
        question(
            "When you anticipate a significant upcoming change that will affect you, you typically:",
            [
                ('a', "Wait to see how things unfold and then react.", 1),
                ('b', "Think about potential challenges and start to plan how you might adapt.", 3),
                ('c', "Actively seek information about the change and look for ways to prepare and potentially benefit.", 4),
                ('d', "Feel a bit anxious and hope the change won't be too disruptive.", 2),
            ],
        ),
        question(
            "If you realize that a long-held belief or approach you have is no longer effective in a new situation, you are most likely to:",
            [
                ('a', "Hold onto it initially, hoping it will eventually become relevant again.", 1),
                ('b', "Gradually start to question its validity and consider alternative ways of thinking.", 2),
                ('c', "Recognize the need to change and actively seek out new information and perspectives.", 4),
                ('d', "Feel confused and unsure about what to believe or do.", 3),
            ],
        ),
        question(
            "When new technologies, tools, or AI are introduced that significantly change your usual ways of working, you typically:",
            [
                ('a', "Feel resistant and prefer to stick with the familiar methods as long as possible.", 1),
                ('b', "Take a cautious approach, observing how others use them before trying them yourself.", 2),
                ('c', "Show interest and actively explore how these new tools can enhance your work.", 4),
                ('d', "Find it challenging to adapt to new systems and processes.", 3),
            ],
        ),
    ])
}
