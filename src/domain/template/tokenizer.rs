// Splits a template into literal segments and raw placeholder contents

use tracing::debug;

/// Output of [`Tokenizer::tokenize`]. `segments.len() == placeholders.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub segments: Vec<String>,
    pub placeholders: Vec<String>,
}

pub struct Tokenizer<'a> {
    input: &'a str,
    delimiter_start: &'a str,
    delimiter_end: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, delimiter_start: &'a str, delimiter_end: &'a str) -> Self {
        Self {
            input,
            delimiter_start,
            delimiter_end,
            pos: 0,
        }
    }

    /// Scan left to right for `start <content> end` spans. Placeholders do not
    /// nest; content ends at the first end delimiter after the start. An
    /// unterminated start delimiter is left as literal text.
    pub fn tokenize(mut self) -> Tokens {
        let mut segments = Vec::new();
        let mut placeholders = Vec::new();
        let mut literal_buf = String::new();

        while let Some((open, content, close)) = self.next_placeholder() {
            literal_buf.push_str(&self.input[self.pos..open]);
            segments.push(std::mem::take(&mut literal_buf));
            placeholders.push(self.input[content..close].to_string());
            self.pos = close + self.delimiter_end.len();
        }

        literal_buf.push_str(&self.input[self.pos..]);
        segments.push(literal_buf);

        debug!(
            placeholders = placeholders.len(),
            "tokenized template of {} bytes",
            self.input.len()
        );

        Tokens {
            segments,
            placeholders,
        }
    }

    /// Byte offsets of the next start delimiter, its content, and its end delimiter
    fn next_placeholder(&self) -> Option<(usize, usize, usize)> {
        if self.delimiter_start.is_empty() || self.delimiter_end.is_empty() {
            return None;
        }
        let open = self.pos + self.input[self.pos..].find(self.delimiter_start)?;
        let content = open + self.delimiter_start.len();
        let close = content + self.input[content..].find(self.delimiter_end)?;
        Some((open, content, close))
    }
}

pub fn tokenize(input: &str, delimiter_start: &str, delimiter_end: &str) -> Tokens {
    Tokenizer::new(input, delimiter_start, delimiter_end).tokenize()
}
