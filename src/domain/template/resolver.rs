// Back-reference resolution for one combination of actual values

use tracing::trace;

use super::ast::PlaceholderKind;

/// Resolution role of a placeholder, in template order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Actual,
    BackReference { index: usize, markup: String },
}

impl From<&PlaceholderKind> for Slot {
    fn from(kind: &PlaceholderKind) -> Self {
        match kind {
            PlaceholderKind::Range(_) | PlaceholderKind::Choice(_) => Slot::Actual,
            PlaceholderKind::BackReference { index, markup } => Slot::BackReference {
                index: *index,
                markup: markup.clone(),
            },
        }
    }
}

/// Maps values of actual placeholders onto every placeholder of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateResolver {
    slots: Vec<Slot>,
}

impl TemplateResolver {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// A resolver with no back-references
    pub fn all_actual(count: usize) -> Self {
        Self::new(vec![Slot::Actual; count])
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn actual_count(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::Actual).count()
    }

    /// `actual` holds one value per actual placeholder in actual order. A
    /// back-reference copies the value of an actual placeholder that appears
    /// before it; anything else renders as its original markup. Returns
    /// `None` when `actual` has fewer values than there are actual slots.
    pub fn resolve<'a>(&'a self, actual: &'a [String]) -> Option<Vec<&'a str>> {
        let mut resolved = Vec::with_capacity(self.slots.len());
        let mut seen = 0;

        for slot in &self.slots {
            match slot {
                Slot::Actual => {
                    resolved.push(actual.get(seen)?.as_str());
                    seen += 1;
                }
                Slot::BackReference { index, markup } => {
                    if *index < seen {
                        resolved.push(actual[*index].as_str());
                    } else {
                        trace!(index, seen, "unresolved back-reference kept as literal");
                        resolved.push(markup.as_str());
                    }
                }
            }
        }

        Some(resolved)
    }
}
