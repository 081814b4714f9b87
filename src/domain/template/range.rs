// Numeric range sequences

use crate::error::{ExpandError, Result};

/// Inclusive numeric range `start..=end` walked in `step` increments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub include_end: bool,
}

impl RangeSpec {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            step: 1.0,
            include_end: true,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_include_end(mut self, include_end: bool) -> Self {
        self.include_end = include_end;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for value in [self.start, self.end] {
            if !value.is_finite() {
                return Err(ExpandError::InvalidRangeBound { value });
            }
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ExpandError::InvalidRangeStep { step: self.step });
        }
        Ok(())
    }

    /// A fresh iterator over the range. Each call restarts the sequence.
    pub fn values(&self) -> Result<RangeValues> {
        self.validate()?;
        Ok(RangeValues {
            spec: *self,
            k: 0,
            last: None,
            regular_done: false,
            end_checked: false,
        })
    }

    /// Number of values the range produces, counted by walking the sequence
    pub fn cardinality(&self) -> Result<usize> {
        Ok(self.values()?.count())
    }

    /// Values rendered the way they appear in expanded output
    pub fn rendered(&self) -> Result<Vec<String>> {
        Ok(self.values()?.map(format_number).collect())
    }
}

/// Iterator returned by [`RangeSpec::values`]
#[derive(Debug, Clone)]
pub struct RangeValues {
    spec: RangeSpec,
    k: u64,
    last: Option<f64>,
    regular_done: bool,
    end_checked: bool,
}

impl Iterator for RangeValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if !self.regular_done {
            // start + k*step instead of repeated addition keeps drift bounded
            let value = self.spec.start + self.k as f64 * self.spec.step;
            if value <= self.spec.end {
                self.k += 1;
                self.last = Some(value);
                return Some(value);
            }
            self.regular_done = true;
        }

        if self.spec.include_end && !self.end_checked {
            self.end_checked = true;
            if let Some(last) = self.last {
                if self.spec.end > last {
                    self.last = Some(self.spec.end);
                    return Some(self.spec.end);
                }
            }
        }

        None
    }
}

/// Render a range value; integral values print without a fractional part
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0 into 0
        "0".to_string()
    } else {
        value.to_string()
    }
}
