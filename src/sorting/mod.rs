//! Natural ordering for control and standard identifiers.
//!
//! Identifiers such as `AC-2` and `AC-12` are compared chunk by chunk:
//! runs of ASCII digits compare by numeric value, everything else compares
//! lexically. Two identifiers that are equal under that rule (for example
//! `AC-02` and `AC-2`) fall back to plain string comparison, so the order is
//! total and repeatable.
//!
//! # Example
//!
//! ```
//! use masonry::sorting::sort_natural;
//!
//! let mut keys = vec!["AC-12".to_string(), "AC-1".to_string(), "AC-2".to_string()];
//! sort_natural(&mut keys);
//! assert_eq!(keys, ["AC-1", "AC-2", "AC-12"]);
//! ```

use std::cmp::Ordering;

/// A maximal run of digits or non-digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Chunk<'a> {
    fn as_str(&self) -> &'a str {
        match self {
            Self::Digits(s) | Self::Text(s) => s,
        }
    }
}

/// Iterator over the digit/non-digit chunks of a string.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(idx, _)| idx);

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}

/// Compare two digit runs by value without parsing, so arbitrarily long runs work.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}

/// Compare two identifiers in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (l, r) {
                    (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
                    _ => l.as_str().cmp(r.as_str()),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// True when `a` sorts strictly before `b`.
pub fn natural_less(a: &str, b: &str) -> bool {
    natural_cmp(a, b) == Ordering::Less
}

/// Sort a slice of identifiers in place, naturally.
pub fn sort_natural<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

/// Collect keys from any iterator and return them naturally sorted.
pub fn sorted_natural<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    sort_natural(&mut keys);
    keys
}
