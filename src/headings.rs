use std::collections::HashSet;

/// Column headings in first-seen order. Append only; never cleared between blocks.
#[derive(Debug, Default, Clone)]
pub struct Headings {
    order: Vec<Vec<u8>>,
    seen: HashSet<Vec<u8>>,
}

impl Headings {
    pub fn new() -> Self {
        Headings::default()
    }

    /// Returns true if `key` was new and has been appended.
    pub fn register(&mut self, key: &[u8]) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_vec());
        self.order.push(key.to_vec());
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<u8>> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[Vec<u8>] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// The heading line: every heading followed by a comma, the last one included.
    pub fn line(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(self.order.iter().map(|h| h.len() + 1).sum());
        for h in self.order.iter() {
            ret.extend_from_slice(h);
            ret.push(b',');
        }
        ret
    }
}
