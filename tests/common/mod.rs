// Common test utilities shared across test files

use combo_template::{ExpandConfig, Expander};

/// Fully expand a template with the default configuration
#[allow(dead_code)]
pub fn expand(template: &str) -> Vec<String> {
    combo_template::parse(template)
        .expect("Failed to parse template")
        .collect()
}

/// Fully expand a template with a custom configuration
#[allow(dead_code)]
pub fn expand_with(config: ExpandConfig, template: &str) -> Vec<String> {
    Expander::new(config)
        .expect("Invalid configuration")
        .parse(template)
        .expect("Failed to parse template")
        .collect()
}

#[allow(dead_code)]
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
