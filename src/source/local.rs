use crate::error::SourceError;
use crate::questions::QUESTIONS_LIST;
use crate::sentence::RawSentence;

use super::SentenceRepository;

/// 同梱のお題
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSentenceRepository;

impl SentenceRepository for LocalSentenceRepository {
    fn sentences(&self) -> Result<Vec<RawSentence>, SourceError> {
        Ok(QUESTIONS_LIST
            .iter()
            .map(|q| RawSentence::new(q.japanese, q.reading))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence_validator::is_valid_sentence;

    #[test]
    fn test_has_enough_sentences() {
        let sentences = LocalSentenceRepository.sentences().unwrap();
        assert!(sentences.len() >= 20);
    }

    #[test]
    fn test_every_bundled_sentence_is_valid() {
        for sentence in LocalSentenceRepository.sentences().unwrap() {
            assert!(is_valid_sentence(&sentence), "{sentence:?}");
        }
    }
}
