//! Text codec for tile tokens and level documents.
//!
//! A level document is: a `width = N` line, a `height = N` line, `height`
//! grid rows, then any number of chest-table rows. A row is a sequence of
//! tokens, each one non-digit character followed by zero or more digits
//! greedily consumed as that token's variant.

use thiserror::Error;

use crate::game::tiles::{self, VariantPolicy};
use crate::game::types::TileToken;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("missing or malformed header line: {0}")]
    Header(String),
    #[error("grid row {0} is missing or empty")]
    MissingRow(usize),
    #[error("grid row {row} has {got} tiles, expected {expected}")]
    ShortRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed level document: header dimensions, grid rows, chest-table rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDocument {
    pub width: usize,
    pub height: usize,
    pub grid_rows: Vec<Vec<TileToken>>,
    pub table_rows: Vec<Vec<TileToken>>,
}

/// Decode one row of tokens. Any character starts a token; following digits
/// are its variant. Empty input decodes to an empty row — whether that is an
/// error depends on where the row sits, so `decode_document` checks it.
pub fn decode_row(line: &str) -> Vec<TileToken> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(symbol) = chars.next() {
        let mut digits = String::new();
        while let Some(c) = chars.peek() {
            if c.is_ascii_digit() {
                digits.push(*c);
                chars.next();
            } else {
                break;
            }
        }
        let variant = if digits.is_empty() {
            None
        } else {
            // All chars are ASCII digits, so the only parse failure is
            // overflow; saturate instead of dropping the suffix.
            Some(digits.parse::<u32>().unwrap_or(u32::MAX))
        };
        tokens.push(TileToken { symbol, variant });
    }
    tokens
}

/// Parse a `key = integer` header line, checking the key name.
fn parse_header_line(line: Option<&str>, key: &str) -> Result<usize, LevelError> {
    let line = line.ok_or_else(|| LevelError::Header(format!("{key} line absent")))?;
    let (name, value) = line
        .split_once('=')
        .ok_or_else(|| LevelError::Header(line.to_string()))?;
    if name.trim() != key {
        return Err(LevelError::Header(line.to_string()));
    }
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| LevelError::Header(line.to_string()))
}

/// Decode a whole level document.
pub fn decode_document(text: &str) -> Result<LevelDocument, LevelError> {
    let mut lines = text.lines().map(str::trim_end).filter(|l| !l.is_empty());

    let width = parse_header_line(lines.next(), "width")?;
    let height = parse_header_line(lines.next(), "height")?;

    let mut grid_rows = Vec::with_capacity(height);
    for row in 0..height {
        let line = lines.next().ok_or(LevelError::MissingRow(row))?;
        let tokens = decode_row(line);
        if tokens.is_empty() {
            return Err(LevelError::MissingRow(row));
        }
        if tokens.len() < width {
            return Err(LevelError::ShortRow {
                row,
                got: tokens.len(),
                expected: width,
            });
        }
        grid_rows.push(tokens);
    }

    let table_rows = lines.map(decode_row).collect();

    Ok(LevelDocument {
        width,
        height,
        grid_rows,
        table_rows,
    })
}

/// Encode one row. Suffix-numbered kinds always emit digits (default 0) so
/// that encode/decode round-trips; fixed kinds emit the bare symbol.
pub fn encode_row(tokens: &[TileToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push(token.symbol);
        let numbered = matches!(
            tiles::kind_of(token.symbol).map(|k| k.policy),
            Some(VariantPolicy::FromSuffix)
        );
        if numbered {
            out.push_str(&token.variant.unwrap_or(0).to_string());
        }
    }
    out
}

/// Encode a header plus grid rows as a level document.
pub fn encode_document(width: usize, height: usize, rows: &[Vec<TileToken>]) -> String {
    let mut out = format!("width = {width}\nheight = {height}\n");
    for row in rows {
        out.push_str(&encode_row(row));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_row_greedy_digits() {
        let row = decode_row("#0 12=3<10");
        assert_eq!(
            row,
            vec![
                TileToken::numbered('#', 0),
                TileToken::numbered(' ', 12),
                TileToken::numbered('=', 3),
                TileToken::numbered('<', 10),
            ]
        );
    }

    #[test]
    fn decode_row_bare_symbols() {
        let row = decode_row("-*-");
        assert_eq!(
            row,
            vec![
                TileToken::bare('-'),
                TileToken::bare('*'),
                TileToken::bare('-'),
            ]
        );
    }

    #[test]
    fn decode_row_saturates_oversized_suffix() {
        // 2^32 does not fit in a variant; the token keeps a (saturated)
        // suffix rather than silently turning bare.
        let row = decode_row("#4294967296");
        assert_eq!(row, vec![TileToken::numbered('#', u32::MAX)]);
    }

    #[test]
    fn header_errors() {
        assert!(matches!(
            decode_document("width = 2\n"),
            Err(LevelError::Header(_))
        ));
        assert!(matches!(
            decode_document("w = 2\nheight = 1\n--\n"),
            Err(LevelError::Header(_))
        ));
        assert!(matches!(
            decode_document("width = two\nheight = 1\n--\n"),
            Err(LevelError::Header(_))
        ));
    }

    #[test]
    fn missing_grid_row_is_an_error() {
        let err = decode_document("width = 2\nheight = 2\n--\n");
        assert!(matches!(err, Err(LevelError::MissingRow(1))));
    }

    #[test]
    fn trailing_lines_become_table_rows() {
        let doc = decode_document("width = 2\nheight = 1\n--\np1p2\n").unwrap();
        assert_eq!(doc.grid_rows.len(), 1);
        assert_eq!(
            doc.table_rows,
            vec![vec![TileToken::numbered('p', 1), TileToken::numbered('p', 2)]]
        );
    }

    #[test]
    fn encode_round_trip_for_numbered_kinds() {
        let rows = vec![vec![
            TileToken::numbered('#', 1),
            TileToken::numbered(' ', 2),
            TileToken::numbered('=', 3),
        ]];
        let text = encode_document(3, 1, &rows);
        let doc = decode_document(&text).unwrap();
        assert_eq!(doc.grid_rows, rows);
    }

    #[test]
    fn encode_forces_default_suffix() {
        // A numbered kind with no explicit variant serializes as 0.
        let row = vec![TileToken::bare('#'), TileToken::bare('-')];
        assert_eq!(encode_row(&row), "#0-");
    }
}
