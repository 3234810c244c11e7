#[derive(Debug, Clone)]
pub struct AnswerOption {
    pub text: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: &'static str,
    // Vector order is display order; keys are unique within a question.
    pub options: Vec<(char, AnswerOption)>,
}

impl Question {
    pub fn option(&self, key: char) -> Option<&AnswerOption> {
        self.options
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, option)| option)
    }

    pub fn has_key(&self, key: char) -> bool {
        self.option(key).is_some()
    }

    pub fn max_option_score(&self) -> u32 {
        self.options
            .iter()
            .map(|(_, option)| option.score)
            .max()
            .unwrap_or(0)
    }

    pub fn min_option_score(&self) -> u32 {
        self.options
            .iter()
            .map(|(_, option)| option.score)
            .min()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    // Derived from the data so the constants stay correct if the bank changes.
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(Question::max_option_score)
            .sum()
    }

    pub fn min_score(&self) -> u32 {
        self.questions
            .iter()
            .map(Question::min_option_score)
            .sum()
    }
}
