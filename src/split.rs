//! Splitting a raw line into positional fields.
//!
//! Lines are handled as bytes so input in any ASCII compatible encoding
//! (UTF-8, Latin-1 exports, ...) passes through unchanged.

/// Splits lines on any of a set of single-byte delimiters.
///
/// Empty fields between consecutive delimiters are kept by default, but a
/// line that ends in a delimiter does not produce a trailing empty field, and
/// an empty line produces no fields at all.
///
/// ```
/// use kv_transpose::Splitter;
/// let s = Splitter::new(b",");
/// assert_eq!(s.split(b"a,,b,"), vec![b"a".to_vec(), b"".to_vec(), b"b".to_vec()]);
/// assert_eq!(
///     Splitter::new(b",").max_split(2).split(b"a,b,c"),
///     vec![b"a".to_vec(), b"b,c".to_vec()]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    delims: Vec<u8>,
    keep_empty: bool,
    max_split: Option<usize>,
}

impl Splitter {
    pub fn new(delims: &[u8]) -> Self {
        Splitter {
            delims: delims.to_vec(),
            keep_empty: true,
            max_split: None,
        }
    }

    /// Drop (false) or keep (true) empty fields between consecutive delimiters.
    pub fn keep_empty(mut self, keep: bool) -> Self {
        self.keep_empty = keep;
        self
    }

    /// Produce at most `n` fields; the last one carries the rest of the line.
    /// Zero yields only the text before the first delimiter.
    pub fn max_split(mut self, n: usize) -> Self {
        self.max_split = Some(n);
        self
    }

    fn next_delim(&self, line: &[u8], from: usize) -> Option<usize> {
        line[from..]
            .iter()
            .position(|b| self.delims.contains(b))
            .map(|i| from + i)
    }

    pub fn split(&self, line: &[u8]) -> Vec<Vec<u8>> {
        let mut fields = Vec::new();
        if self.max_split == Some(0) {
            if !line.is_empty() {
                let end = self.next_delim(line, 0).unwrap_or(line.len());
                fields.push(line[..end].to_vec());
            }
            return fields;
        }

        let mut budget = self.max_split.unwrap_or(usize::MAX);
        let mut last = 0;
        let mut pos = self.next_delim(line, 0);

        while let Some(at) = pos {
            // every delimiter spends budget, even when its empty field is dropped
            budget -= 1;
            if budget == 0 {
                break;
            }
            if self.keep_empty || at != last {
                fields.push(line[last..at].to_vec());
            }
            last = at + 1;
            pos = self.next_delim(line, last);
        }
        if last < line.len() {
            fields.push(line[last..].to_vec());
        }
        fields
    }
}

impl Default for Splitter {
    /// Comma separated, empties kept, unlimited.
    fn default() -> Self {
        Splitter::new(b",")
    }
}

/// Comma split with the default settings.
pub fn split_fields(line: &[u8]) -> Vec<Vec<u8>> {
    Splitter::default().split(line)
}
