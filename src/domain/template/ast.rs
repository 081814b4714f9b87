// Abstract Syntax Tree types for combinatorial templates

use super::range::RangeSpec;

/// A parsed template: `segments[0] placeholders[0] segments[1] ... segments[n]`
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<String>,
    placeholders: Vec<Placeholder>,
}

impl Template {
    /// Panics if `segments.len() != placeholders.len() + 1`
    pub(crate) fn new(segments: Vec<String>, placeholders: Vec<Placeholder>) -> Self {
        assert_eq!(
            segments.len(),
            placeholders.len() + 1,
            "a template needs exactly one more segment than placeholders"
        );
        Self {
            segments,
            placeholders,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Placeholders that contribute values, in actual order
    pub fn actual_placeholders(&self) -> Vec<&Placeholder> {
        self.placeholders
            .iter()
            .filter(|p| p.kind.is_actual())
            .collect()
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Placeholder>) {
        (self.segments, self.placeholders)
    }
}

/// Raw placeholder text and what it was classified as
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub raw: String,
    pub kind: PlaceholderKind,
}

impl Placeholder {
    pub fn new(raw: impl Into<String>, kind: PlaceholderKind) -> Self {
        Self {
            raw: raw.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaceholderKind {
    Range(RangeSpec),
    Choice(Vec<String>),
    /// Copies the value of the `index`th actual placeholder. `markup` is
    /// emitted verbatim when the reference cannot be resolved.
    BackReference { index: usize, markup: String },
}

impl PlaceholderKind {
    pub fn is_actual(&self) -> bool {
        !matches!(self, PlaceholderKind::BackReference { .. })
    }
}
