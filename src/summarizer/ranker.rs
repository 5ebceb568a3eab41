// file: src/summarizer/ranker.rs
// description: frequency based sentence scoring and top-k selection
// reference: stable top-k with reading order restoration

use super::frequency::WordFrequencyTable;
use crate::models::Sentence;

pub struct SentenceRanker;

impl SentenceRanker {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, sentences: Vec<Sentence>, table: &WordFrequencyTable) -> Vec<Sentence> {
        sentences
            .into_iter()
            .map(|sentence| {
                let score = table.score(&sentence.text);
                sentence.with_score(score)
            })
            .collect()
    }

    /// Keeps the `k` highest scoring sentences and returns them in reading order.
    ///
    /// Equal scores are won by the sentence that appears first.
    pub fn select(
        &self,
        sentences: Vec<Sentence>,
        table: &WordFrequencyTable,
        k: usize,
    ) -> Vec<Sentence> {
        let mut scored = self.score(sentences, table);

        // sort_by is stable, so ties keep ascending index order
        scored.sort_by(|a, b| b.score_or_zero().cmp(&a.score_or_zero()));
        scored.truncate(k);
        scored.sort_by_key(|sentence| sentence.index);

        scored
    }
}

impl Default for SentenceRanker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::FrequencyScorer;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(i, *t))
            .collect()
    }

    #[test]
    fn test_select_highest_scores_in_reading_order() {
        let table = FrequencyScorer::new(Vec::<String>::new(), 0)
            .build("alpha alpha alpha beta beta gamma");
        let input = sentences(&["gamma only", "alpha alpha", "beta here", "alpha beta"]);

        let selected = SentenceRanker::new().select(input, &table, 2);

        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(selected[0].score, Some(6));
        assert_eq!(selected[1].score, Some(5));
    }

    #[test]
    fn test_ties_prefer_earliest_sentence() {
        let table = FrequencyScorer::new(Vec::<String>::new(), 0).build("word");
        let input = sentences(&["no match", "word", "word", "word"]);

        let selected = SentenceRanker::new().select(input, &table, 2);

        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_all_zero_scores_keep_first_sentences() {
        let table = WordFrequencyTable::default();
        let input = sentences(&["first one", "second one", "third one"]);

        let selected = SentenceRanker::new().select(input, &table, 2);

        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_k_larger_than_input() {
        let table = WordFrequencyTable::default();
        let selected = SentenceRanker::new().select(sentences(&["only one"]), &table, 4);
        assert_eq!(selected.len(), 1);
    }
}
