// Builds output strings from segments, value pools, and back-references

use rand::Rng;
use tracing::{debug, trace};

use super::ast::Template;
use super::product::CartesianProduct;
use super::resolver::{Slot, TemplateResolver};
use super::source::ValueSource;
use crate::error::{ExpandError, Result};

/// Lazy enumeration of every combination, rightmost placeholder varying fastest
#[derive(Debug, Clone)]
pub struct Expansion {
    segments: Vec<String>,
    resolver: TemplateResolver,
    product: CartesianProduct<String>,
}

impl Expansion {
    pub fn from_template(template: Template) -> Result<Self> {
        let (segments, resolver, pools) = materialize(template)?;
        Ok(Self::build(segments, resolver, pools))
    }

    /// One source per placeholder and one more segment than sources
    pub fn from_sources(segments: Vec<String>, sources: Vec<ValueSource>) -> Result<Self> {
        if segments.len() != sources.len() + 1 {
            return Err(ExpandError::SegmentMismatch {
                segments: segments.len(),
                sources: sources.len(),
            });
        }
        let pools = sources
            .iter()
            .map(ValueSource::values)
            .collect::<Result<Vec<_>>>()?;
        let resolver = TemplateResolver::all_actual(pools.len());
        Ok(Self::build(segments, resolver, pools))
    }

    fn build(segments: Vec<String>, resolver: TemplateResolver, pools: Vec<Vec<String>>) -> Self {
        let product = CartesianProduct::new(pools);
        debug!(total = ?product.total(), "built expansion");
        Self {
            segments,
            resolver,
            product,
        }
    }

    /// Total combinations this expansion started with, `None` on overflow
    pub fn total(&self) -> Option<u128> {
        self.product.total()
    }
}

impl Iterator for Expansion {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let combination = self.product.next()?;
        let resolved = self.resolver.resolve(&combination)?;
        let output = assemble(&self.segments, &resolved);
        trace!(%output, "expanded combination");
        Some(output)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.product.size_hint()
    }
}

/// Product of actual placeholder cardinalities; back-references count as 1
pub fn count_template(template: &Template) -> Result<u128> {
    let mut total: u128 = 1;
    for placeholder in template.placeholders() {
        if let Some(source) = ValueSource::from_kind(&placeholder.kind) {
            let cardinality = source.cardinality()? as u128;
            total = total
                .checked_mul(cardinality)
                .ok_or(ExpandError::CountOverflow)?;
        }
    }
    Ok(total)
}

/// Picks single combinations, by explicit index or at random
#[derive(Debug, Clone)]
pub struct Chooser {
    segments: Vec<String>,
    resolver: TemplateResolver,
    pools: Vec<Vec<String>>,
}

impl Chooser {
    pub fn from_template(template: Template) -> Result<Self> {
        let (segments, resolver, pools) = materialize(template)?;
        Ok(Self {
            segments,
            resolver,
            pools,
        })
    }

    /// Value count of each actual placeholder, in actual order
    pub fn cardinalities(&self) -> Vec<usize> {
        self.pools.iter().map(Vec::len).collect()
    }

    /// Pick with the thread-local RNG for any position left as `None`
    pub fn pick(&self, selections: &[Option<usize>]) -> Result<String> {
        self.pick_with(&mut rand::rng(), selections)
    }

    /// A fully random pick
    pub fn sample(&self) -> Result<String> {
        self.pick(&[])
    }

    /// `selections[i]` picks the value of the `i`th actual placeholder;
    /// missing or `None` entries are drawn uniformly from `rng`. Entries past
    /// the last actual placeholder are ignored.
    pub fn pick_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        selections: &[Option<usize>],
    ) -> Result<String> {
        if selections.len() > self.pools.len() {
            debug!(
                given = selections.len(),
                used = self.pools.len(),
                "ignoring extra selections"
            );
        }

        let mut chosen = Vec::with_capacity(self.pools.len());
        for (placeholder, pool) in self.pools.iter().enumerate() {
            let index = match selections.get(placeholder).copied().flatten() {
                Some(index) if index < pool.len() => index,
                Some(index) => {
                    return Err(ExpandError::SelectionOutOfRange {
                        placeholder,
                        index,
                        cardinality: pool.len(),
                    })
                }
                None if pool.is_empty() => {
                    return Err(ExpandError::EmptyPlaceholder { placeholder })
                }
                None => rng.random_range(0..pool.len()),
            };
            chosen.push(pool[index].clone());
        }

        // slots and pools come from the same template, one pool per actual slot
        let resolved = self.resolver.resolve(&chosen).unwrap_or_default();
        Ok(assemble(&self.segments, &resolved))
    }
}

fn materialize(template: Template) -> Result<(Vec<String>, TemplateResolver, Vec<Vec<String>>)> {
    let (segments, placeholders) = template.into_parts();
    let mut slots = Vec::with_capacity(placeholders.len());
    let mut pools = Vec::new();

    for placeholder in &placeholders {
        if let Some(source) = ValueSource::from_kind(&placeholder.kind) {
            pools.push(source.values()?);
        }
        slots.push(Slot::from(&placeholder.kind));
    }

    Ok((segments, TemplateResolver::new(slots), pools))
}

fn assemble(segments: &[String], values: &[&str]) -> String {
    let capacity = segments.iter().map(String::len).sum::<usize>()
        + values.iter().map(|v| v.len()).sum::<usize>();
    let mut output = String::with_capacity(capacity);

    for (i, segment) in segments.iter().enumerate() {
        output.push_str(segment);
        if let Some(value) = values.get(i) {
            output.push_str(value);
        }
    }

    output
}
