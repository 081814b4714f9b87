// Decides whether placeholder content is a back-reference, range, or choice list

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::ast::PlaceholderKind;
use super::range::RangeSpec;
use crate::config::ExpandConfig;

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").unwrap());

pub struct Classifier {
    backref: Regex,
    delimiter_start: String,
    delimiter_end: String,
    range_separator: char,
    choice_separator: char,
    backref_marker: char,
}

impl Classifier {
    pub fn new(config: &ExpandConfig) -> Self {
        let pattern = format!(
            "^{}([0-9]+)$",
            regex::escape(&config.backref_marker.to_string())
        );
        Self {
            // escaped marker followed by a digit class always compiles
            backref: Regex::new(&pattern).unwrap(),
            delimiter_start: config.delimiter_start.clone(),
            delimiter_end: config.delimiter_end.clone(),
            range_separator: config.range_separator,
            choice_separator: config.choice_separator,
            backref_marker: config.backref_marker,
        }
    }

    pub fn classify(&self, raw: &str) -> PlaceholderKind {
        let kind = if let Some(kind) = self.as_backref(raw) {
            kind
        } else if let Some(spec) = self.as_range(raw) {
            PlaceholderKind::Range(spec)
        } else {
            PlaceholderKind::Choice(
                raw.split(self.choice_separator)
                    .map(str::to_string)
                    .collect(),
            )
        };
        debug!(raw, ?kind, "classified placeholder");
        kind
    }

    /// The whole trimmed content must be the marker followed by digits
    fn as_backref(&self, raw: &str) -> Option<PlaceholderKind> {
        let caps = self.backref.captures(raw.trim())?;
        let digits = caps.get(1)?.as_str();
        let normalized = match digits.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };
        // indices too large for usize can never resolve
        let index = normalized.parse::<usize>().unwrap_or(usize::MAX);
        Some(PlaceholderKind::BackReference {
            index,
            markup: format!(
                "{}{}{}{}",
                self.delimiter_start, self.backref_marker, normalized, self.delimiter_end
            ),
        })
    }

    fn as_range(&self, raw: &str) -> Option<RangeSpec> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let compact = compact.trim_end_matches(self.range_separator);
        if !compact.contains(self.range_separator) {
            return None;
        }

        let parts: Vec<&str> = compact.split(self.range_separator).collect();
        if !(2..=3).contains(&parts.len()) {
            return None;
        }

        let mut numbers = Vec::with_capacity(parts.len());
        for part in parts {
            numbers.push(parse_number(part)?);
        }

        let spec = RangeSpec::new(numbers[0], numbers[1]);
        Some(match numbers.get(2) {
            Some(step) => spec.with_step(*step),
            None => spec,
        })
    }
}

fn parse_number(part: &str) -> Option<f64> {
    if !NUMBER.is_match(part) {
        return None;
    }
    part.parse::<f64>().ok().filter(|n| n.is_finite())
}
