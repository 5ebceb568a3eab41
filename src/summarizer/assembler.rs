// file: src/summarizer/assembler.rs
// description: joins selected sentences into the final summary text

use super::segmenter::normalize_whitespace;
use crate::models::Sentence;

pub fn assemble(sentences: &[Sentence]) -> String {
    let joined = sentences
        .iter()
        .map(|sentence| sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");

    let mut summary = normalize_whitespace(&joined);
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assemble_joins_with_period() {
        let sentences = vec![
            Sentence::new(0, "First chosen sentence"),
            Sentence::new(4, "Second chosen sentence"),
        ];
        assert_eq!(
            assemble(&sentences),
            "First chosen sentence. Second chosen sentence."
        );
    }

    #[test]
    fn test_assemble_single_sentence() {
        let sentences = vec![Sentence::new(0, "Just one sentence")];
        assert_eq!(assemble(&sentences), "Just one sentence.");
    }
}
