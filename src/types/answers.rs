use std::collections::BTreeMap;

/// One interactive session's selections, keyed by question index.
/// Reselecting a question overwrites the prior choice; there is no history.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    selected: BTreeMap<usize, char>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize, key: char) {
        self.selected.insert(index, key);
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.selected.get(&index).copied()
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.selected.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_records_answer() {
        let mut answers = AnswerSet::new();
        assert!(!answers.is_answered(0));

        answers.select(0, 'c');
        assert!(answers.is_answered(0));
        assert_eq!(answers.get(0), Some('c'));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn reselect_overwrites_without_history() {
        let mut answers = AnswerSet::new();
        answers.select(3, 'a');
        answers.select(3, 'd');

        assert_eq!(answers.get(3), Some('d'));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn unanswered_index_reads_as_none() {
        let answers = AnswerSet::new();
        assert!(answers.is_empty());
        assert_eq!(answers.get(7), None);
    }
}
