// file: src/utils/validation.rs
// description: request input validation ahead of summarization
// reference: input validation patterns

use crate::error::{Result, SummarizeError};

pub const NO_TEXT_MESSAGE: &str = "No text provided";
pub const INVALID_MAX_LENGTH_MESSAGE: &str = "max_length must be a positive integer";

pub struct Validator;

impl Validator {
    /// Requires at least `min_words` whitespace separated words; returns the count.
    pub fn validate_word_count(text: &str, min_words: usize) -> Result<usize> {
        let words = text.split_whitespace().count();
        if words < min_words {
            return Err(SummarizeError::Validation(format!(
                "Text too short. Please provide at least {} words.",
                min_words
            )));
        }
        Ok(words)
    }

    pub fn validate_max_length(max_length: i64) -> Result<usize> {
        if max_length <= 0 {
            return Err(SummarizeError::Validation(
                INVALID_MAX_LENGTH_MESSAGE.to_string(),
            ));
        }

        usize::try_from(max_length)
            .map_err(|_| SummarizeError::Validation(INVALID_MAX_LENGTH_MESSAGE.to_string()))
    }

    pub fn validate_text_present(text: Option<&str>) -> Result<&str> {
        text.ok_or_else(|| SummarizeError::Validation(NO_TEXT_MESSAGE.to_string()))
    }
}
