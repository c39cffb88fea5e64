use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use super::{IndexType, MatchIndices};

/// Text folded for comparison: lowercased, with diacritics removed.
///
/// `origin[i]` is the char index in the original text that produced `chars[i]`.
pub(crate) struct Folded {
    pub chars: Vec<char>,
    pub origin: Vec<IndexType>,
}

impl Folded {
    pub fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        for (idx, ch) in text.chars().enumerate() {
            decompose_canonical(ch, |d| {
                if is_combining_mark(d) {
                    return;
                }
                for lower in d.to_lowercase() {
                    chars.push(lower);
                    origin.push(idx);
                }
            });
        }
        Self { chars, origin }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Maps folded positions back to (deduplicated) char indices of the original text
    pub fn original_indices<I: IntoIterator<Item = usize>>(&self, positions: I) -> MatchIndices {
        let mut res: MatchIndices = Vec::new();
        for pos in positions {
            let idx = self.origin[pos];
            if res.last() != Some(&idx) {
                res.push(idx);
            }
        }
        res
    }
}

/// Position of the first occurrence of `needle` in `haystack`
pub(crate) fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
pub(crate) fn wrap_matches(line: &str, indices: &[IndexType]) -> String {
    let mut ret = String::new();
    let mut peekable = indices.iter().peekable();
    for (idx, ch) in line.chars().enumerate() {
        let next_id = **peekable.peek().unwrap_or(&&(line.len() as IndexType));
        if next_id == idx {
            ret.push_str(&format!("[{ch}]"));
            peekable.next();
        } else {
            ret.push(ch);
        }
    }
    ret
}
