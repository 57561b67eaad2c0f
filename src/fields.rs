//! Splitting of multi-valued text cells into tokens.
//!
//! Tokens keep source order and are compared by exact string match; the only
//! normalization is trimming surrounding whitespace.

const AUTHOR_SEP: char = ',';
const KEYWORD_SEP: char = ';';
const AUTHOR_ID_SEP: char = ';';

pub fn split_authors(raw: Option<&str>) -> Vec<String> {
    split_tokens(raw, AUTHOR_SEP)
}

pub fn split_keywords(raw: Option<&str>) -> Vec<String> {
    split_tokens(raw, KEYWORD_SEP)
}

pub fn split_author_ids(raw: Option<&str>) -> Vec<String> {
    split_tokens(raw, AUTHOR_ID_SEP)
}

fn split_tokens(raw: Option<&str>, sep: char) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(sep)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
