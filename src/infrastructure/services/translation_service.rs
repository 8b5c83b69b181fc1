//! Translation service - sentence to ordered gesture descriptions

use std::sync::Arc;

use futures::future::try_join_all;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::{
    closest_candidate, CandidateMatch, DomainError, Embedding, FailureStage, GestureDictionary,
    GestureEntry, GestureMatch, LanguageClient, TranslationFailure, TranslationResult,
};
use crate::infrastructure::observability::record_translation;

/// Translation pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// Fetch tokens before keyword extraction (logged, never consumed)
    #[serde(default = "default_tokenize")]
    pub tokenize: bool,
}

fn default_tokenize() -> bool {
    true
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            tokenize: default_tokenize(),
        }
    }
}

/// Orchestrates keyword extraction, dictionary lookup and gesture matching
pub struct TranslationService {
    language: Arc<dyn LanguageClient>,
    dictionary: Arc<GestureDictionary>,
    config: TranslationConfig,
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("provider", &self.language.provider_name())
            .field("keywords", &self.dictionary.len())
            .field("config", &self.config)
            .finish()
    }
}

impl TranslationService {
    pub fn new(
        language: Arc<dyn LanguageClient>,
        dictionary: Arc<GestureDictionary>,
        config: TranslationConfig,
    ) -> Self {
        Self {
            language,
            dictionary,
            config,
        }
    }

    pub fn dictionary(&self) -> &GestureDictionary {
        &self.dictionary
    }

    /// Translate a sentence into gesture descriptions
    ///
    /// Upstream failures never fail the call; they are recorded on the result.
    pub async fn translate(&self, text: &str) -> TranslationResult {
        let text = text.trim();

        if self.config.tokenize {
            match self.language.tokenize(text).await {
                Ok(tokens) => debug!(tokens = tokens.len(), "Tokens fetched"),
                Err(e) => warn!(error = %e, "Tokenization failed"),
            }
        }

        let keywords = match self.language.extract_keywords(text).await {
            Ok(keywords) => keywords,
            Err(e) => {
                warn!(error = %e, "Keyword extraction failed, returning empty translation");
                let result = TranslationResult::failed_extraction(text, &e);
                record_translation(&result);
                return result;
            }
        };

        debug!(keywords = ?keywords, "Keywords extracted");

        let mut result = TranslationResult::new(text, keywords.clone());

        for keyword in &keywords {
            let Some(entry) = self.dictionary.get(keyword) else {
                debug!(keyword = %keyword, "Keyword not in dictionary, skipped");
                continue;
            };

            let chosen = self.choose(entry, &mut result).await;
            let gesture = entry.description(chosen.index).unwrap_or_default().to_string();

            result.push_match(GestureMatch {
                keyword: keyword.clone(),
                gesture,
                candidate_index: chosen.index,
                distance: chosen.distance,
            });
        }

        info!(
            keywords = result.keywords().len(),
            gestures = result.matches().len(),
            degraded = result.is_degraded(),
            "Translation finished"
        );

        record_translation(&result);
        result
    }

    /// Pick a candidate for `entry`, falling back to the first one on failure
    async fn choose(&self, entry: &GestureEntry, result: &mut TranslationResult) -> CandidateMatch {
        if entry.is_unambiguous() {
            return CandidateMatch::trivial();
        }

        let keyword = entry.keyword();

        let (query, candidates) = match self.embed_entry(entry).await {
            Ok(embeddings) => embeddings,
            Err(e) => {
                warn!(keyword = %keyword, error = %e, "Embedding failed, using first candidate");
                result.record_failure(TranslationFailure::from_domain(
                    FailureStage::Embedding,
                    Some(keyword),
                    &e,
                ));
                return CandidateMatch::trivial();
            }
        };

        match closest_candidate(&query, &candidates) {
            Ok(chosen) => {
                debug!(
                    keyword = %keyword,
                    index = chosen.index,
                    distance = ?chosen.distance,
                    "Gesture matched"
                );
                chosen
            }
            Err(e) => {
                warn!(keyword = %keyword, error = %e, "Matching failed, using first candidate");
                result.record_failure(TranslationFailure::from_match(keyword, &e));
                CandidateMatch::trivial()
            }
        }
    }

    async fn embed_entry(
        &self,
        entry: &GestureEntry,
    ) -> Result<(Embedding, Vec<Embedding>), DomainError> {
        let query = self.language.embed(entry.keyword()).await?;
        let candidates = try_join_all(
            entry
                .descriptions()
                .iter()
                .map(|description| self.language.embed(description)),
        )
        .await?;

        Ok((query, candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::{LanguageOperation, MockLanguageClient};
    use crate::domain::TranslationStatus;
    use mockall::predicate::eq;

    fn seed() -> Arc<GestureDictionary> {
        Arc::new(GestureDictionary::seed())
    }

    fn menino_dictionary() -> Arc<GestureDictionary> {
        Arc::new(
            GestureDictionary::from_entries(vec![GestureEntry::new(
                "menino",
                vec!["Sinal de pessoa".into(), "Apontar para baixo".into()],
            )])
            .unwrap(),
        )
    }

    fn service(mock: MockLanguageClient, dictionary: Arc<GestureDictionary>) -> TranslationService {
        TranslationService::new(Arc::new(mock), dictionary, TranslationConfig::default())
    }

    fn with_keywords(mock: &mut MockLanguageClient, keywords: &'static [&'static str]) {
        mock.expect_tokenize()
            .returning(|text| Ok(text.split_whitespace().map(str::to_string).collect()));
        mock.expect_extract_keywords()
            .returning(move |_| Ok(keywords.iter().map(|k| k.to_string()).collect()));
    }

    #[tokio::test]
    async fn test_single_candidate_needs_no_embedding() {
        let mut mock = MockLanguageClient::new();
        with_keywords(&mut mock, &["bola"]);
        mock.expect_embed().never();

        let result = service(mock, seed()).translate("a bola").await;

        assert_eq!(result.gestures(), vec!["Fazer um círculo com as mãos"]);
        assert_eq!(result.status(), TranslationStatus::Complete);
        assert_eq!(result.matches()[0].distance, None);
    }

    #[tokio::test]
    async fn test_unknown_keywords_are_dropped() {
        let mut mock = MockLanguageClient::new();
        with_keywords(&mut mock, &["casa", "bola", "carro"]);

        let result = service(mock, seed()).translate("a casa, a bola e o carro").await;

        assert_eq!(result.keywords().len(), 3);
        assert_eq!(result.gestures(), vec!["Fazer um círculo com as mãos"]);
        assert!(!result.is_degraded());
    }

    #[tokio::test]
    async fn test_gestures_follow_keyword_order() {
        let mut mock = MockLanguageClient::new();
        with_keywords(&mut mock, &["bola", "menino", "bola"]);

        let result = service(mock, seed()).translate("o menino joga bola").await;

        assert_eq!(
            result.gestures(),
            vec![
                "Fazer um círculo com as mãos",
                "Fazer o sinal de 'pessoa' e depois apontar para baixo, indicando 'pequeno'",
                "Fazer um círculo com as mãos",
            ]
        );
    }

    #[tokio::test]
    async fn test_keyword_failure_yields_empty_degraded_result() {
        let mut mock = MockLanguageClient::new();
        mock.expect_tokenize().returning(|_| Ok(Vec::new()));
        mock.expect_extract_keywords().returning(|_| {
            Err(DomainError::upstream_status(
                LanguageOperation::Keywords,
                503,
                "HTTP 503",
            ))
        });

        let result = service(mock, seed()).translate("o menino").await;

        assert!(result.is_empty());
        assert_eq!(result.status(), TranslationStatus::Degraded);
        assert_eq!(result.failures()[0].stage, FailureStage::KeywordExtraction);
        assert_eq!(result.failures()[0].status, Some(503));
    }

    #[tokio::test]
    async fn test_tokenize_failure_is_not_degradation() {
        let mut mock = MockLanguageClient::new();
        mock.expect_tokenize().returning(|_| {
            Err(DomainError::upstream_status(
                LanguageOperation::Tokenize,
                500,
                "HTTP 500",
            ))
        });
        mock.expect_extract_keywords()
            .returning(|_| Ok(vec!["bola".to_string()]));

        let result = service(mock, seed()).translate("bola").await;

        assert_eq!(result.gestures(), vec!["Fazer um círculo com as mãos"]);
        assert!(!result.is_degraded());
    }

    #[tokio::test]
    async fn test_tokenize_can_be_disabled() {
        let mut mock = MockLanguageClient::new();
        mock.expect_tokenize().never();
        mock.expect_extract_keywords().returning(|_| Ok(Vec::new()));

        let service = TranslationService::new(
            Arc::new(mock),
            seed(),
            TranslationConfig { tokenize: false },
        );

        assert!(service.translate("nada").await.is_empty());
    }

    #[tokio::test]
    async fn test_closest_candidate_selected() {
        let mut mock = MockLanguageClient::new();
        with_keywords(&mut mock, &["menino"]);
        mock.expect_embed()
            .with(eq("menino"))
            .returning(|_| Ok(Embedding::new(vec![0.1, 0.9])));
        mock.expect_embed()
            .with(eq("Sinal de pessoa"))
            .returning(|_| Ok(Embedding::new(vec![1.0, 0.0])));
        mock.expect_embed()
            .with(eq("Apontar para baixo"))
            .returning(|_| Ok(Embedding::new(vec![0.0, 1.0])));

        let result = service(mock, menino_dictionary()).translate("o menino").await;

        assert_eq!(result.gestures(), vec!["Apontar para baixo"]);
        assert_eq!(result.matches()[0].candidate_index, 1);
        assert!(result.matches()[0].distance.unwrap() < 0.01);
    }

    #[tokio::test]
    async fn test_embedding_failure_falls_back_to_first_candidate() {
        let mut mock = MockLanguageClient::new();
        with_keywords(&mut mock, &["menino"]);
        mock.expect_embed().returning(|_| {
            Err(DomainError::upstream_status(
                LanguageOperation::Embed,
                500,
                "HTTP 500",
            ))
        });

        let result = service(mock, menino_dictionary()).translate("o menino").await;

        assert_eq!(result.gestures(), vec!["Sinal de pessoa"]);
        assert_eq!(result.failures()[0].stage, FailureStage::Embedding);
        assert_eq!(result.failures()[0].keyword.as_deref(), Some("menino"));
    }

    #[tokio::test]
    async fn test_empty_embedding_falls_back_to_first_candidate() {
        let mut mock = MockLanguageClient::new();
        with_keywords(&mut mock, &["menino"]);
        mock.expect_embed()
            .returning(|_| Ok(Embedding::new(Vec::new())));

        let result = service(mock, menino_dictionary()).translate("o menino").await;

        assert_eq!(result.gestures(), vec!["Sinal de pessoa"]);
        assert_eq!(result.failures()[0].stage, FailureStage::Matching);
    }

    #[tokio::test]
    async fn test_incomparable_embeddings_are_degraded() {
        let mut mock = MockLanguageClient::new();
        with_keywords(&mut mock, &["menino"]);
        mock.expect_embed()
            .returning(|_| Ok(Embedding::new(vec![f32::NAN, 1.0])));

        let result = service(mock, menino_dictionary()).translate("o menino").await;

        assert_eq!(result.gestures(), vec!["Sinal de pessoa"]);
        assert!(result.is_degraded());
        assert_eq!(result.failures()[0].stage, FailureStage::Matching);
    }

    #[tokio::test]
    async fn test_same_sentence_same_result() {
        let mut mock = MockLanguageClient::new();
        with_keywords(&mut mock, &["menino", "bola"]);
        mock.expect_embed().returning(|text| {
            let len = text.len() as f32;
            Ok(Embedding::new(vec![len, 1.0 / len]))
        });

        let service = service(mock, menino_dictionary());
        let first = service.translate("o menino e a bola").await;
        let second = service.translate("o menino e a bola").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_input_is_trimmed() {
        let mut mock = MockLanguageClient::new();
        mock.expect_tokenize().returning(|_| Ok(Vec::new()));
        mock.expect_extract_keywords()
            .with(eq("a bola"))
            .returning(|_| Ok(vec!["bola".to_string()]));

        let result = service(mock, seed()).translate("  a bola \n").await;

        assert_eq!(result.input(), "a bola");
        assert_eq!(result.gestures().len(), 1);
    }
}
