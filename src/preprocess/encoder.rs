use super::vocabulary::Vocabulary;

/// Sequence length the classifier was trained on.
pub const MAX_LEN: usize = 300;

/// Padding id appended after the content.
pub const PAD_ID: u32 = 0;

/// Fixed-length id sequence fed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSequence {
    ids: Vec<u32>,
    content_len: usize,
}

impl EncodedSequence {
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of leading ids that came from tokens rather than padding.
    #[must_use]
    pub fn content_len(&self) -> usize {
        self.content_len
    }
}

/// Maps cleaned text to ids, keeps the first `max_len` of them and right-pads with [`PAD_ID`].
#[derive(Debug, Clone, Copy)]
pub struct SequenceEncoder {
    max_len: usize,
}

impl SequenceEncoder {
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[must_use]
    pub fn encode(&self, text: &str, vocabulary: &Vocabulary) -> EncodedSequence {
        let mut ids: Vec<u32> = text
            .split_whitespace()
            .filter_map(|token| vocabulary.lookup(token))
            .take(self.max_len)
            .collect();
        let content_len = ids.len();
        ids.resize(self.max_len, PAD_ID);
        EncodedSequence { ids, content_len }
    }
}

impl Default for SequenceEncoder {
    fn default() -> Self {
        Self::new(MAX_LEN)
    }
}

/// Encode `text` to exactly `max_len` ids.
#[must_use]
pub fn encode(text: &str, vocabulary: &Vocabulary, max_len: usize) -> EncodedSequence {
    SequenceEncoder::new(max_len).encode(text, vocabulary)
}
