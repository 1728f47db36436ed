//! Probability → verdict bands and the fixed texts shown with each verdict.
use std::fmt;

use crate::error::DetectorError;

/// Lower bound of the UNCERTAIN band.
pub const UNCERTAIN_THRESHOLD: f64 = 0.30;
/// Lower bound of the FAKE band.
pub const FAKE_THRESHOLD: f64 = 0.60;

pub const DISCLAIMER: &str = "This system does NOT verify factual accuracy.\n\
It analyzes language patterns learned from historical US political news datasets.\n\n\
Predictions may not be reliable for international or non-political articles.";

/// Fake-news probability produced by the classifier, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// # Errors
    /// Returns [`DetectorError::Inference`] for NaN, infinities and values outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, DetectorError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(DetectorError::Inference(format!(
                "classifier output {value} is not a probability"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Real,
    Uncertain,
    Fake,
}

impl Verdict {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Uncertain => "UNCERTAIN",
            Self::Fake => "FAKE",
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::Real => "Likely REAL political news",
            Self::Uncertain => "Uncertain / Mixed signals",
            Self::Fake => "Likely FAKE political news",
        }
    }

    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Real => "The writing style resembles legitimate US political reporting.",
            Self::Uncertain => {
                "The model is not confident. The article contains mixed linguistic patterns."
            }
            Self::Fake => {
                "The writing style resembles patterns commonly found in fake political news."
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Probability> for Verdict {
    fn from(p: Probability) -> Self {
        classify(p)
    }
}

/// Each band is closed on its lower bound: 0.30 is UNCERTAIN, 0.60 is FAKE.
#[must_use]
pub fn classify(p: Probability) -> Verdict {
    let value = p.value();
    if value < UNCERTAIN_THRESHOLD {
        Verdict::Real
    } else if value < FAKE_THRESHOLD {
        Verdict::Uncertain
    } else {
        Verdict::Fake
    }
}
