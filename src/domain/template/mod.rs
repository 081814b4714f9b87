// Combinatorial template engine
//
// This module tokenizes templates into literal segments and placeholders,
// classifies placeholders as ranges, choice lists or back-references, and
// expands them as a cartesian product.

mod assembler;
mod ast;
mod classifier;
mod parser;
mod product;
mod range;
mod resolver;
mod source;
mod tokenizer;

pub use assembler::{count_template, Chooser, Expansion};
pub use ast::{Placeholder, PlaceholderKind, Template};
pub use classifier::Classifier;
pub use parser::TemplateParser;
pub use product::{CartesianProduct, Odometer};
pub use range::{format_number, RangeSpec, RangeValues};
pub use resolver::{Slot, TemplateResolver};
pub use source::ValueSource;
pub use tokenizer::{tokenize, Tokenizer, Tokens};
