//! Frozen token → id mapping produced when the classifier was trained.
//!
//! Unknown-token handling is read from the artifact, never decided here: a
//! tokenizer saved with an `oov_token` maps misses to that token's id, one
//! saved without it drops them, and `num_words` caps the usable ids.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VocabularyFile {
    /// Output of the Keras `Tokenizer.to_json()`; `word_index` is itself a JSON string.
    Keras { config: KerasTokenizerConfig },
    Plain(PlainVocabulary),
}

#[derive(Debug, Deserialize)]
struct KerasTokenizerConfig {
    #[serde(default)]
    num_words: Option<usize>,
    #[serde(default)]
    oov_token: Option<String>,
    word_index: String,
}

#[derive(Debug, Deserialize)]
struct PlainVocabulary {
    word_index: HashMap<String, u32>,
    #[serde(default)]
    num_words: Option<usize>,
    #[serde(default)]
    oov_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_index: HashMap<String, u32>,
    num_words: Option<usize>,
    oov_id: Option<u32>,
}

impl Vocabulary {
    /// Build a vocabulary from an in-memory index.
    ///
    /// # Errors
    /// Fails when an id is 0, which is reserved for padding.
    pub fn new(
        word_index: HashMap<String, u32>,
        num_words: Option<usize>,
        oov_token: Option<&str>,
    ) -> Result<Self> {
        if let Some((token, _)) = word_index.iter().find(|(_, id)| **id == 0) {
            anyhow::bail!("token {token:?} has id 0, which is reserved for padding");
        }
        let oov_id = oov_token.and_then(|token| word_index.get(token).copied());
        Ok(Self {
            word_index,
            num_words: num_words.filter(|n| *n > 0),
            oov_id,
        })
    }

    /// Load a vocabulary artifact from disk.
    ///
    /// # Errors
    /// Fails when the file cannot be read or is not a recognised tokenizer document.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read tokenizer from {:?}", path.as_ref()))?;
        Self::from_json(&raw)
    }

    /// Parse either a Keras tokenizer document or a plain `word_index` document.
    ///
    /// # Errors
    /// Fails on malformed JSON, an unknown layout or a reserved id.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: VocabularyFile =
            serde_json::from_str(raw).context("failed to parse tokenizer json")?;
        match file {
            VocabularyFile::Keras { config } => {
                let word_index: HashMap<String, u32> = serde_json::from_str(&config.word_index)
                    .context("failed to parse embedded word_index")?;
                Self::new(word_index, config.num_words, config.oov_token.as_deref())
            }
            VocabularyFile::Plain(plain) => {
                Self::new(plain.word_index, plain.num_words, plain.oov_token.as_deref())
            }
        }
    }

    /// Id emitted for `token`, or `None` when the token is dropped.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<u32> {
        match self.word_index.get(token) {
            Some(&id) if self.exceeds_cap(id) => self.oov_id,
            Some(&id) => Some(id),
            None => self.oov_id,
        }
    }

    fn exceeds_cap(&self, id: u32) -> bool {
        self.num_words
            .is_some_and(|limit| usize::try_from(id).map_or(true, |id| id >= limit))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_index.is_empty()
    }

    #[must_use]
    pub fn oov_id(&self) -> Option<u32> {
        self.oov_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn index(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn unknown_tokens_are_dropped_without_oov_token() {
        let vocab = Vocabulary::new(index(&[("senate", 1), ("bill", 2)]), None, None).unwrap();
        assert_eq!(vocab.lookup("senate"), Some(1));
        assert_eq!(vocab.lookup("filibuster"), None);
    }

    #[test]
    fn unknown_tokens_map_to_oov_id() {
        let vocab =
            Vocabulary::new(index(&[("<OOV>", 1), ("senate", 2)]), None, Some("<OOV>")).unwrap();
        assert_eq!(vocab.oov_id(), Some(1));
        assert_eq!(vocab.lookup("filibuster"), Some(1));
        assert_eq!(vocab.lookup("senate"), Some(2));
    }

    #[test]
    fn num_words_caps_ids() {
        let words = index(&[("the", 1), ("senate", 2), ("rare", 5)]);
        let capped = Vocabulary::new(words.clone(), Some(5), None).unwrap();
        assert_eq!(capped.lookup("senate"), Some(2));
        assert_eq!(capped.lookup("rare"), None);

        let words = index(&[("<OOV>", 1), ("senate", 2), ("rare", 5)]);
        let with_oov = Vocabulary::new(words, Some(5), Some("<OOV>")).unwrap();
        assert_eq!(with_oov.lookup("rare"), Some(1));
    }

    #[test]
    fn zero_num_words_means_uncapped() {
        let vocab = Vocabulary::new(index(&[("rare", 900)]), Some(0), None).unwrap();
        assert_eq!(vocab.lookup("rare"), Some(900));
    }

    #[test]
    fn oov_token_missing_from_index_drops_unknowns() {
        let vocab = Vocabulary::new(index(&[("senate", 1)]), None, Some("<OOV>")).unwrap();
        assert_eq!(vocab.oov_id(), None);
        assert_eq!(vocab.lookup("house"), None);
    }

    #[test]
    fn rejects_padding_id() {
        let err = Vocabulary::new(index(&[("senate", 0)]), None, None).unwrap_err();
        assert!(err.to_string().contains("reserved for padding"));
    }

    #[test]
    fn parses_keras_tokenizer_document() {
        let word_index = serde_json::json!({"<OOV>": 1, "the": 2, "senate": 3}).to_string();
        let doc = serde_json::json!({
            "class_name": "Tokenizer",
            "config": {
                "num_words": 10000,
                "filters": "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n",
                "lower": true,
                "split": " ",
                "char_level": false,
                "oov_token": "<OOV>",
                "document_count": 2,
                "word_index": word_index,
            }
        });
        let vocab = Vocabulary::from_json(&doc.to_string()).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.lookup("senate"), Some(3));
        assert_eq!(vocab.lookup("congress"), Some(1));
    }

    #[test]
    fn parses_plain_document() {
        let doc = r#"{"word_index": {"white": 1, "house": 2}}"#;
        let vocab = Vocabulary::from_json(doc).unwrap();
        assert_eq!(vocab.lookup("house"), Some(2));
        assert_eq!(vocab.lookup("senate"), None);
    }

    #[test]
    fn rejects_unrecognised_document() {
        assert!(Vocabulary::from_json(r#"{"tokens": ["a", "b"]}"#).is_err());
        assert!(Vocabulary::from_json("not json").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"word_index": {{"senate": 1}}}}"#).unwrap();
        let vocab = Vocabulary::from_path(file.path()).unwrap();
        assert_eq!(vocab.lookup("senate"), Some(1));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Vocabulary::from_path("/nonexistent/tokenizer.json").unwrap_err();
        assert!(err.to_string().contains("failed to read tokenizer"));
    }
}
