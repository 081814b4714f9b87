// Template parsing: tokenize, then classify every placeholder

use super::ast::{Placeholder, Template};
use super::classifier::Classifier;
use super::tokenizer::tokenize;
use crate::config::ExpandConfig;
use crate::error::Result;

pub struct TemplateParser;

impl TemplateParser {
    pub fn parse(template: &str, config: &ExpandConfig) -> Result<Template> {
        config.validate()?;

        let tokens = tokenize(template, &config.delimiter_start, &config.delimiter_end);
        let classifier = Classifier::new(config);
        let placeholders = tokens
            .placeholders
            .into_iter()
            .map(|raw| {
                let kind = classifier.classify(&raw);
                Placeholder::new(raw, kind)
            })
            .collect();

        Ok(Template::new(tokens.segments, placeholders))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::{PlaceholderKind, RangeSpec};

    #[test]
    fn test_parse_mixed_template() {
        let template = TemplateParser::parse(
            "You {see|hear} it {1,2} times. Once you {$0}.",
            &ExpandConfig::default(),
        )
        .unwrap();

        assert_eq!(template.segments(), &["You ", " it ", " times. Once you ", "."]);
        let kinds: Vec<&PlaceholderKind> =
            template.placeholders().iter().map(|p| &p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                &PlaceholderKind::Choice(vec!["see".to_string(), "hear".to_string()]),
                &PlaceholderKind::Range(RangeSpec::new(1.0, 2.0)),
                &PlaceholderKind::BackReference {
                    index: 0,
                    markup: "{$0}".to_string()
                },
            ]
        );
        assert_eq!(template.actual_placeholders().len(), 2);
    }

    #[test]
    fn test_parse_keeps_raw_text() {
        let template = TemplateParser::parse("{ 1, 3 }", &ExpandConfig::default()).unwrap();
        assert_eq!(template.placeholders()[0].raw, " 1, 3 ");
    }

    #[test]
    fn test_parse_rejects_invalid_config() {
        let config = ExpandConfig::new().with_delimiters("|", "}");
        assert!(TemplateParser::parse("{a}", &config).is_err());
    }

    #[test]
    fn test_parse_dollar_text_is_not_backref() {
        let template =
            TemplateParser::parse("${10|20}. $$$ dollars", &ExpandConfig::default()).unwrap();
        assert_eq!(template.segments(), &["$", ". $$$ dollars"]);
        assert_eq!(
            template.placeholders()[0].kind,
            PlaceholderKind::Choice(vec!["10".to_string(), "20".to_string()])
        );
    }
}
