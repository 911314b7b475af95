//! Turkish-alphabet string comparison.
//!
//! The grid's text is locale-fixed to tr-TR, so string sorting uses the
//! Turkish alphabet order (ç after c, ğ after g, ı before i, ö after o,
//! ş after s, ü after u) with Turkish case folding (I -> ı, İ -> i) instead
//! of code-point order. Characters outside the alphabet order after letters,
//! by code point.

use std::cmp::Ordering;

const ALPHABET: [char; 29] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z',
];

/// Lowercase with Turkish dotted/dotless i handling.
fn fold(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Letters sort by alphabet rank, everything else after them by code point.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum CollationKey {
    Letter(u8),
    Other(char),
}

fn key(c: char) -> CollationKey {
    let folded = fold(c);
    match ALPHABET.iter().position(|&l| l == folded) {
        Some(rank) => CollationKey::Letter(rank as u8),
        None => CollationKey::Other(folded),
    }
}

/// Case-insensitive Turkish-alphabet comparison.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars().map(key).cmp(b.chars().map(key))
}
