/// Minimum trimmed length, in characters, of an article worth scoring.
pub const MIN_ARTICLE_CHARS: usize = 100;

/// Pasted article that passed the length gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article<'a> {
    text: &'a str,
}

/// Trimmed input was shorter than [`MIN_ARTICLE_CHARS`]; a warning, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTooShort {
    pub length: usize,
}

impl<'a> Article<'a> {
    /// Length is counted in characters after trimming surrounding whitespace.
    pub fn parse(raw: &'a str) -> Result<Self, InputTooShort> {
        let length = raw.trim().chars().count();
        if length < MIN_ARTICLE_CHARS {
            return Err(InputTooShort { length });
        }
        Ok(Self { text: raw })
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }
}
