//! Row key normalisation: date-like substrings are cut out of the first field
//! so that `header3 11/31/2011` and `header3 12/01/2011` land in the same column.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Digits/digits/digits. Syntactic only, `13/45/2011` matches as well.
pub const DATE_PATTERN: &str = r"[0-9]+/[0-9]+/[0-9]+";

static SHARED: Lazy<KeyNormalizer> = Lazy::new(KeyNormalizer::new);

#[derive(Debug, Clone)]
pub struct KeyNormalizer {
    date_reg: Regex,
}

impl KeyNormalizer {
    pub fn new() -> Self {
        KeyNormalizer {
            date_reg: Regex::new(DATE_PATTERN).expect("static date regex must compile"),
        }
    }

    /// Remove every date-like run from `raw`. No trimming: the space in front
    /// of a stripped date stays part of the key. Bytes outside the matches are
    /// copied as they are, whatever the encoding.
    pub fn normalize(&self, raw: &[u8]) -> Vec<u8> {
        self.date_reg.replace_all(raw, &b""[..]).into_owned()
    }
}

impl Default for KeyNormalizer {
    fn default() -> Self {
        KeyNormalizer::new()
    }
}

pub fn strip_dates(raw: &[u8]) -> Vec<u8> {
    SHARED.normalize(raw)
}
