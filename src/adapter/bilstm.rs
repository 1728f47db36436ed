//! Bidirectional LSTM text classifier evaluated from exported weights.
//!
//! The weights file mirrors a Keras `Embedding → Bidirectional(LSTM) → Dense*`
//! stack: kernels are `input × 4·units` with gates ordered i, f, c, o; gates
//! use sigmoid and the cell uses tanh; the two directions are concatenated
//! forward first. The last dense layer must have exactly one unit.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array1, Array2, ArrayView1, Axis, s};
use serde::Deserialize;

use crate::domain::Probability;
use crate::error::DetectorError;
use crate::port::Classifier;
use crate::preprocess::EncodedSequence;

#[derive(Debug, Deserialize)]
struct ModelWeights {
    #[serde(default)]
    mask_zero: bool,
    #[serde(default)]
    input_length: Option<usize>,
    embedding: Vec<Vec<f32>>,
    forward: LstmWeights,
    backward: LstmWeights,
    dense: Vec<DenseWeights>,
}

#[derive(Debug, Deserialize)]
struct LstmWeights {
    kernel: Vec<Vec<f32>>,
    recurrent_kernel: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct DenseWeights {
    kernel: Vec<Vec<f32>>,
    bias: Vec<f32>,
    #[serde(default)]
    activation: Activation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Activation {
    #[default]
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    fn apply(self, x: f32) -> f32 {
        match self {
            Self::Linear => x,
            Self::Relu => x.max(0.0),
            Self::Sigmoid => sigmoid(x),
            Self::Tanh => x.tanh(),
        }
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

fn matrix(name: &str, rows: Vec<Vec<f32>>) -> Result<Array2<f32>> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    anyhow::ensure!(height > 0 && width > 0, "{name} must not be empty");
    anyhow::ensure!(
        rows.iter().all(|row| row.len() == width),
        "{name} has rows of different lengths"
    );
    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((height, width), flat).with_context(|| format!("{name} shape"))
}

#[derive(Debug)]
struct LstmCell {
    kernel: Array2<f32>,
    recurrent_kernel: Array2<f32>,
    bias: Array1<f32>,
    units: usize,
}

impl LstmCell {
    fn from_weights(name: &str, weights: LstmWeights, input_dim: usize) -> Result<Self> {
        let kernel = matrix(&format!("{name}.kernel"), weights.kernel)?;
        let recurrent_kernel =
            matrix(&format!("{name}.recurrent_kernel"), weights.recurrent_kernel)?;
        let units = recurrent_kernel.nrows();
        anyhow::ensure!(
            kernel.nrows() == input_dim,
            "{name}.kernel has {} rows, expected embedding width {input_dim}",
            kernel.nrows()
        );
        anyhow::ensure!(
            kernel.ncols() == 4 * units,
            "{name}.kernel has {} columns, expected {}",
            kernel.ncols(),
            4 * units
        );
        anyhow::ensure!(
            recurrent_kernel.ncols() == 4 * units,
            "{name}.recurrent_kernel has {} columns, expected {}",
            recurrent_kernel.ncols(),
            4 * units
        );
        anyhow::ensure!(
            weights.bias.len() == 4 * units,
            "{name}.bias has length {}, expected {}",
            weights.bias.len(),
            4 * units
        );
        Ok(Self {
            kernel,
            recurrent_kernel,
            bias: Array1::from(weights.bias),
            units,
        })
    }

    fn step(
        &self,
        x: ArrayView1<'_, f32>,
        h: &Array1<f32>,
        c: &Array1<f32>,
    ) -> (Array1<f32>, Array1<f32>) {
        let z = x.dot(&self.kernel) + h.dot(&self.recurrent_kernel) + &self.bias;
        let u = self.units;
        let input_gate = z.slice(s![..u]).mapv(sigmoid);
        let forget_gate = z.slice(s![u..2 * u]).mapv(sigmoid);
        let candidate = z.slice(s![2 * u..3 * u]).mapv(f32::tanh);
        let output_gate = z.slice(s![3 * u..]).mapv(sigmoid);
        let c_next = &forget_gate * c + &input_gate * &candidate;
        let h_next = &output_gate * &c_next.mapv(f32::tanh);
        (h_next, c_next)
    }

    /// Final hidden state after consuming `steps`; zeros when there are none.
    fn run<'a>(&self, steps: impl Iterator<Item = ArrayView1<'a, f32>>) -> Array1<f32> {
        let mut h = Array1::zeros(self.units);
        let mut c = Array1::zeros(self.units);
        for x in steps {
            (h, c) = self.step(x, &h, &c);
        }
        h
    }
}

#[derive(Debug)]
struct DenseLayer {
    kernel: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
}

impl DenseLayer {
    fn apply(&self, x: ArrayView1<'_, f32>) -> Array1<f32> {
        let activation = self.activation;
        (x.dot(&self.kernel) + &self.bias).mapv(|v| activation.apply(v))
    }
}

#[derive(Debug)]
pub struct BiLstmClassifier {
    embedding: Array2<f32>,
    mask_zero: bool,
    input_length: Option<usize>,
    forward: LstmCell,
    backward: LstmCell,
    dense: Vec<DenseLayer>,
}

impl BiLstmClassifier {
    /// Load and validate a weights file.
    ///
    /// # Errors
    /// Fails when the file is unreadable, not valid JSON, or any matrix has the wrong shape.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read weights from {:?}", path.as_ref()))?;
        Self::from_json(&raw)
    }

    /// # Errors
    /// Fails on malformed JSON or inconsistent layer shapes.
    pub fn from_json(raw: &str) -> Result<Self> {
        let weights: ModelWeights =
            serde_json::from_str(raw).context("failed to parse classifier weights json")?;
        Self::from_weights(weights)
    }

    fn from_weights(weights: ModelWeights) -> Result<Self> {
        let embedding = matrix("embedding", weights.embedding)?;
        let embed_dim = embedding.ncols();
        let forward = LstmCell::from_weights("forward", weights.forward, embed_dim)?;
        let backward = LstmCell::from_weights("backward", weights.backward, embed_dim)?;

        anyhow::ensure!(!weights.dense.is_empty(), "model has no dense layers");
        let mut width = forward.units + backward.units;
        let mut dense = Vec::with_capacity(weights.dense.len());
        for (idx, layer) in weights.dense.into_iter().enumerate() {
            let kernel = matrix(&format!("dense[{idx}].kernel"), layer.kernel)?;
            anyhow::ensure!(
                kernel.nrows() == width,
                "dense[{idx}].kernel has {} rows, expected {width}",
                kernel.nrows()
            );
            anyhow::ensure!(
                layer.bias.len() == kernel.ncols(),
                "dense[{idx}].bias has length {}, expected {}",
                layer.bias.len(),
                kernel.ncols()
            );
            width = kernel.ncols();
            dense.push(DenseLayer {
                kernel,
                bias: Array1::from(layer.bias),
                activation: layer.activation,
            });
        }
        anyhow::ensure!(width == 1, "final dense layer has {width} units, expected 1");

        Ok(Self {
            embedding,
            mask_zero: weights.mask_zero,
            input_length: weights.input_length,
            forward,
            backward,
            dense,
        })
    }

    /// Number of rows in the embedding table; valid ids are `0..vocab_size`.
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.embedding.nrows()
    }

    /// Raw network output for `ids`.
    ///
    /// # Errors
    /// Fails on a length mismatch with the declared input length or an id
    /// outside the embedding table.
    pub fn score(&self, ids: &[u32]) -> Result<f32> {
        if let Some(expected) = self.input_length {
            anyhow::ensure!(
                ids.len() == expected,
                "sequence length {} does not match model input length {expected}",
                ids.len()
            );
        }
        let vocab_size = self.vocab_size();
        let mut steps = Vec::with_capacity(ids.len());
        for &id in ids {
            let row = id as usize;
            anyhow::ensure!(
                row < vocab_size,
                "token id {id} is outside the embedding table ({vocab_size} rows)"
            );
            if self.mask_zero && id == 0 {
                continue;
            }
            steps.push(self.embedding.row(row));
        }

        let forward = self.forward.run(steps.iter().cloned());
        let backward = self.backward.run(steps.iter().rev().cloned());
        let mut hidden = ndarray::concatenate(Axis(0), &[forward.view(), backward.view()])?;
        for layer in &self.dense {
            hidden = layer.apply(hidden.view());
        }
        Ok(hidden[0])
    }
}

impl Classifier for BiLstmClassifier {
    fn predict(&self, sequence: &EncodedSequence) -> Result<Probability, DetectorError> {
        let raw = self
            .score(sequence.as_slice())
            .map_err(|e| DetectorError::Inference(e.to_string()))?;
        Probability::new(f64::from(raw))
    }
}
