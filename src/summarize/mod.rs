//! Frequency-based extractive summarization
//!
//! Scores each sentence by the summed document frequency of its words and
//! returns the top-N sentences verbatim. Words and sentences are segmented
//! per UAX #29, so boundary detection holds up across scripts and
//! abbreviation-heavy text.
//!
//! Output is rank order, not narrative order: the highest-scored sentence
//! comes first even if it appears late in the document. Equal scores keep
//! original document order (the sort is stable over sentences enumerated
//! in document order).

mod stopwords;

use std::collections::{HashMap, HashSet};

use unicode_segmentation::UnicodeSegmentation;

pub use stopwords::STOP_WORDS;

/// Default number of sentences in a summary
pub const DEFAULT_MAX_SENTENCES: usize = 5;

/// Extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    max_sentences: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SENTENCES)
    }
}

impl Summarizer {
    pub fn new(max_sentences: usize) -> Self {
        Self { max_sentences }
    }

    /// Summarize `text` into at most `max_sentences` sentences.
    ///
    /// Empty input, and input whose every word is a stop-word, yield an
    /// empty summary; callers treat that as a reportable condition.
    pub fn summarize(&self, text: &str) -> Vec<String> {
        let freq = self.frequency_table(text);
        if freq.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(u64, &str)> = Vec::new();
        for sentence in text.unicode_sentences() {
            let mut score: u64 = 0;
            for word in sentence.unicode_words() {
                if let Some(count) = freq.get(word.to_lowercase().as_str()) {
                    score += u64::from(*count);
                }
            }
            // Sentences with no scoring words are omitted entirely
            if score > 0 {
                scored.push((score, sentence));
            }
        }

        // Stable sort: equal scores keep document order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(self.max_sentences)
            .map(|(_, sentence)| sentence.trim().to_string())
            .collect()
    }

    /// Count occurrences of each scoring word: lower-cased, stop-words and
    /// tokens with non-alphabetic characters discarded.
    fn frequency_table(&self, text: &str) -> HashMap<String, u32> {
        let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();

        let mut freq: HashMap<String, u32> = HashMap::new();
        for word in text.unicode_words() {
            let lower = word.to_lowercase();
            if stop_words.contains(lower.as_str()) || !lower.chars().all(char::is_alphabetic) {
                continue;
            }
            *freq.entry(lower).or_insert(0) += 1;
        }
        freq
    }
}
