// ============================================================
// FIELD TOKENIZER
// ============================================================
// Quote-aware comma split for a single CSV row

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Token opens a quoted cell: `"x` or `  "x`
static OPENS_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\s*"[^"]"#).unwrap());

/// Token closes a quoted cell: `x"` or `x"  `
static CLOSES_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[^"]"\s*$"#).unwrap());

/// Split one row into fields.
///
/// Tokens are the maximal runs of non-comma characters, so empty cells
/// (`a,,b`) produce no field. A cell whose quotes open and close inside one
/// token is kept verbatim, quotes included. A quoted cell that spans commas
/// is rejoined with its commas and loses exactly its first and last
/// character, so whitespace outside the quotes leaves a quote behind. A
/// quoted cell still open at the end of the row is dropped. The comma that
/// delimits a plain token is consumed, never appended to the field.
pub fn tokenize_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut pending = String::new();

    for token in row.split(',').filter(|token| !token.is_empty()) {
        let opens = OPENS_QUOTE.is_match(token);
        let closes = CLOSES_QUOTE.is_match(token);

        if opens && closes {
            fields.push(token.to_string());
        } else if opens {
            if !pending.is_empty() {
                debug!(fragment = %pending, "Discarding unterminated quoted fragment");
            }
            pending.clear();
            pending.push_str(strip_opening_quote(token));
            pending.push(',');
        } else if closes {
            pending.push_str(strip_closing_quote(token));
            fields.push(std::mem::take(&mut pending));
        } else if !pending.is_empty() {
            pending.push_str(token);
            pending.push(',');
        } else {
            fields.push(token.to_string());
        }
    }

    if !pending.is_empty() {
        debug!(fragment = %pending, "Row ended inside a quoted cell");
    }

    fields
}

// Only the first character goes, whether it is the quote or leading space.
fn strip_opening_quote(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.as_str()
}

fn strip_closing_quote(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next_back();
    chars.as_str()
}
