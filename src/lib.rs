//! Expand annotated templates into every combination of their placeholders.
//!
//! A placeholder is text between delimiters (default `{` and `}`):
//!
//! - `{1,5}` or `{0,10,2}`: a numeric range `start,end[,step]`, end inclusive
//! - `{red|green|blue}`: a choice list
//! - `{$0}`: a back-reference to the value of the first range or choice
//!   placeholder before it
//!
//! ```
//! let all: Vec<String> = combo_template::parse("{A|B}-{1,2}").unwrap().collect();
//! assert_eq!(all, ["A-1", "A-2", "B-1", "B-2"]);
//! assert_eq!(combo_template::count("{A|B}-{1,2}").unwrap(), 4);
//! ```

pub mod config;
pub mod domain;
pub mod error;

pub use config::ExpandConfig;
pub use domain::template::{
    Chooser, Expansion, Placeholder, PlaceholderKind, RangeSpec, RangeValues, Template,
    TemplateParser, ValueSource,
};
pub use error::{ExpandError, Result};

use domain::template::count_template;

/// Entry points bound to a validated configuration
#[derive(Debug, Clone, Default)]
pub struct Expander {
    config: ExpandConfig,
}

impl Expander {
    pub fn new(config: ExpandConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }

    pub fn template(&self, template: &str) -> Result<Template> {
        TemplateParser::parse(template, &self.config)
    }

    /// Every expansion of `template`, produced lazily
    pub fn parse(&self, template: &str) -> Result<Expansion> {
        Expansion::from_template(self.template(template)?)
    }

    /// Number of expansions `parse` would produce, without producing them
    pub fn count(&self, template: &str) -> Result<u128> {
        count_template(&self.template(template)?)
    }

    /// A sampler that produces one expansion per call
    pub fn choose(&self, template: &str) -> Result<Chooser> {
        Chooser::from_template(self.template(template)?)
    }
}

/// Numeric range from `start` to `end` in `step` increments. With
/// `include_end`, an `end` not reachable on-step is appended last.
pub fn range(start: f64, end: f64, step: f64, include_end: bool) -> Result<RangeValues> {
    RangeSpec::new(start, end)
        .with_step(step)
        .with_include_end(include_end)
        .values()
}

/// [`Expander::parse`] with the default configuration
pub fn parse(template: &str) -> Result<Expansion> {
    Expander::default().parse(template)
}

/// [`Expander::count`] with the default configuration
pub fn count(template: &str) -> Result<u128> {
    Expander::default().count(template)
}

/// [`Expander::choose`] with the default configuration
pub fn choose(template: &str) -> Result<Chooser> {
    Expander::default().choose(template)
}

/// Expand literal `segments` around caller-supplied value sources, skipping
/// template syntax entirely. Needs exactly one more segment than sources.
pub fn compile<S: AsRef<str>>(segments: &[S], sources: Vec<ValueSource>) -> Result<Expansion> {
    let segments = segments.iter().map(|s| s.as_ref().to_string()).collect();
    Expansion::from_sources(segments, sources)
}
