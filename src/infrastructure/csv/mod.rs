// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Header split, blank-row handling and quote-aware field tokenizing

mod row_parser;
mod tokenizer;

pub use row_parser::parse;
pub use tokenizer::tokenize_row;
