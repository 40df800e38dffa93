// ============================================
// src/source/mod.rs
// お題の取得元
// ============================================

mod api;
mod local;

pub use api::ApiSentenceRepository;
pub use local::LocalSentenceRepository;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::sentence::{RawSentence, Sentence};
use crate::sentence_validator::filter_valid_sentences;

/// お題の取得元を抽象化する
pub trait SentenceRepository {
    fn sentences(&self) -> Result<Vec<RawSentence>, SourceError>;
}

/// 設定・CLI で選ぶお題の取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SentenceSource {
    /// 同梱のお題
    #[default]
    Local,
    /// API で生成したお題
    Api,
}

/// 取得元に応じたリポジトリを作る
pub fn repository_for(
    source: SentenceSource,
    api_key: Option<&str>,
) -> Result<Box<dyn SentenceRepository>, SourceError> {
    match source {
        SentenceSource::Local => Ok(Box::new(LocalSentenceRepository)),
        SentenceSource::Api => {
            let key = api_key
                .filter(|k| !k.trim().is_empty())
                .ok_or(SourceError::MissingApiKey)?;
            Ok(Box::new(ApiSentenceRepository::new(key)))
        }
    }
}

/// 無効なお題を除外し、チャンクに変換してシャッフルする
pub fn prepare_sentences<R: Rng + ?Sized>(
    raws: Vec<RawSentence>,
    rng: &mut R,
) -> Result<Vec<Sentence>, SourceError> {
    let valid = filter_valid_sentences(raws);
    if valid.is_empty() {
        return Err(SourceError::NoValidSentences);
    }
    let mut sentences: Vec<Sentence> = valid.into_iter().map(Sentence::from_raw).collect();
    sentences.shuffle(rng);
    Ok(sentences)
}

/// リポジトリからお題を取得して対戦用に準備する
pub fn load_sentences<R: Rng + ?Sized>(
    repository: &dyn SentenceRepository,
    rng: &mut R,
) -> Result<Vec<Sentence>, SourceError> {
    let raws = repository.sentences()?;
    log::info!("お題を {} 件取得しました", raws.len());
    prepare_sentences(raws, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FixedRepository(Vec<RawSentence>);

    impl SentenceRepository for FixedRepository {
        fn sentences(&self) -> Result<Vec<RawSentence>, SourceError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_prepare_filters_and_converts() {
        let raws = vec![
            RawSentence::new("空", "そら"),
            RawSentence::new("ラーメン", "らーめん"),
            RawSentence::new("海", "うみ"),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let sentences = prepare_sentences(raws, &mut rng).unwrap();
        assert_eq!(sentences.len(), 2);
        let mut readings: Vec<&str> = sentences.iter().map(|s| s.reading.as_str()).collect();
        readings.sort();
        assert_eq!(readings, ["うみ", "そら"]);
        assert!(sentences.iter().all(|s| !s.chunks.is_empty()));
    }

    #[test]
    fn test_prepare_fails_without_valid_sentences() {
        let raws = vec![RawSentence::new("すごい！", "すごい")];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            prepare_sentences(raws, &mut rng),
            Err(SourceError::NoValidSentences)
        ));
    }

    #[test]
    fn test_load_sentences_from_repository() {
        let repo = FixedRepository(vec![RawSentence::new("猫", "ねこ")]);
        let mut rng = StdRng::seed_from_u64(7);
        let sentences = load_sentences(&repo, &mut rng).unwrap();
        assert_eq!(sentences[0].romaji, "neko");
    }

    #[test]
    fn test_api_source_requires_key() {
        assert!(matches!(
            repository_for(SentenceSource::Api, None),
            Err(SourceError::MissingApiKey)
        ));
        assert!(matches!(
            repository_for(SentenceSource::Api, Some("  ")),
            Err(SourceError::MissingApiKey)
        ));
        assert!(repository_for(SentenceSource::Api, Some("sk-test")).is_ok());
        assert!(repository_for(SentenceSource::Local, None).is_ok());
    }

    #[test]
    fn test_source_serde_names() {
        assert_eq!(serde_json::to_string(&SentenceSource::Api).unwrap(), "\"api\"");
        let parsed: SentenceSource = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(parsed, SentenceSource::Local);
    }
}
