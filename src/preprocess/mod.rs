//! Text → id sequence: cleaning, vocabulary lookup and fixed-length padding.
pub mod encoder;
pub mod normalizer;
pub mod vocabulary;

pub use encoder::{EncodedSequence, MAX_LEN, PAD_ID, SequenceEncoder, encode};
pub use normalizer::normalize;
pub use vocabulary::Vocabulary;
