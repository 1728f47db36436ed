pub mod bilstm;

pub use bilstm::BiLstmClassifier;
