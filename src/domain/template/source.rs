// Caller-supplied value sources for building an expansion without template syntax

use super::ast::PlaceholderKind;
use super::range::RangeSpec;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource {
    Range(RangeSpec),
    Choices(Vec<String>),
    Static(String),
}

impl ValueSource {
    /// Materialize the source's values in order
    pub fn values(&self) -> Result<Vec<String>> {
        match self {
            ValueSource::Range(spec) => spec.rendered(),
            ValueSource::Choices(options) => Ok(options.clone()),
            ValueSource::Static(value) => Ok(vec![value.clone()]),
        }
    }

    pub fn cardinality(&self) -> Result<usize> {
        match self {
            ValueSource::Range(spec) => spec.cardinality(),
            ValueSource::Choices(options) => Ok(options.len()),
            ValueSource::Static(_) => Ok(1),
        }
    }

    /// The value source behind an actual placeholder; back-references have none
    pub fn from_kind(kind: &PlaceholderKind) -> Option<Self> {
        match kind {
            PlaceholderKind::Range(spec) => Some(ValueSource::Range(*spec)),
            PlaceholderKind::Choice(options) => Some(ValueSource::Choices(options.clone())),
            PlaceholderKind::BackReference { .. } => None,
        }
    }
}

impl From<RangeSpec> for ValueSource {
    fn from(spec: RangeSpec) -> Self {
        ValueSource::Range(spec)
    }
}

impl From<Vec<String>> for ValueSource {
    fn from(options: Vec<String>) -> Self {
        ValueSource::Choices(options)
    }
}

impl From<Vec<&str>> for ValueSource {
    fn from(options: Vec<&str>) -> Self {
        ValueSource::Choices(options.into_iter().map(str::to_string).collect())
    }
}

impl From<&str> for ValueSource {
    fn from(value: &str) -> Self {
        ValueSource::Static(value.to_string())
    }
}

impl From<String> for ValueSource {
    fn from(value: String) -> Self {
        ValueSource::Static(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpandError;

    #[test]
    fn test_range_source_values() {
        let source = ValueSource::from(RangeSpec::new(1.0, 3.0));
        assert_eq!(source.values().unwrap(), vec!["1", "2", "3"]);
        assert_eq!(source.cardinality().unwrap(), 3);
    }

    #[test]
    fn test_choice_source_values() {
        let source = ValueSource::from(vec!["a", "b"]);
        assert_eq!(source.values().unwrap(), vec!["a", "b"]);
        assert_eq!(source.cardinality().unwrap(), 2);
    }

    #[test]
    fn test_static_source_values() {
        let source = ValueSource::from("fixed");
        assert_eq!(source.values().unwrap(), vec!["fixed"]);
        assert_eq!(source.cardinality().unwrap(), 1);
    }

    #[test]
    fn test_invalid_range_source_fails() {
        let source = ValueSource::from(RangeSpec::new(1.0, 3.0).with_step(-1.0));
        assert!(matches!(
            source.values(),
            Err(ExpandError::InvalidRangeStep { .. })
        ));
    }

    #[test]
    fn test_from_kind_skips_backrefs() {
        let kind = PlaceholderKind::BackReference {
            index: 0,
            markup: "{$0}".to_string(),
        };
        assert!(ValueSource::from_kind(&kind).is_none());
        assert_eq!(
            ValueSource::from_kind(&PlaceholderKind::Choice(vec!["x".to_string()])),
            Some(ValueSource::Choices(vec!["x".to_string()]))
        );
    }
}
