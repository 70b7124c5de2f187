//! The grouping / transpose engine.
//!
//! Lines are accumulated into a table keyed by their (date stripped) row key.
//! As soon as a key shows up a second time the current table is a complete
//! block: it is printed column-major and cleared, and the repeating line starts
//! the next block. End of input is one more, implicit, block boundary.
//!
//! Two pieces of state outlive a block: the heading registry and `col_cnt`,
//! the widest field list seen so far. Every flush prints `col_cnt - 1` rows, so
//! an early narrow block is padded with placeholders once a wider line has
//! been read.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::headings::Headings;
use crate::key::KeyNormalizer;
use crate::split::Splitter;

/// Row key -> latest field list for that key within the open block.
pub type Table = HashMap<Vec<u8>, Vec<Vec<u8>>>;

/// A block ends when its key is already in the table.
pub fn detect_boundary(table: &Table, key: &[u8]) -> bool {
    table.contains_key(key)
}

/// Print the body of one block: rows `1..col_cnt`, one value (or an empty
/// placeholder) per heading, each followed by `", "`. Values are written as
/// raw bytes.
pub fn write_columns<W: Write>(
    out: &mut W,
    headings: &Headings,
    table: &Table,
    col_cnt: usize,
) -> io::Result<()> {
    for row in 1..col_cnt {
        for heading in headings.iter() {
            if let Some(value) = table.get(heading).and_then(|fields| fields.get(row)) {
                out.write_all(value)?;
            }
            out.write_all(b", ")?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn write_heading_line<W: Write>(out: &mut W, headings: &Headings) -> io::Result<()> {
    out.write_all(&headings.line())?;
    out.write_all(b"\n")
}

/// What a finished run looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    /// Non-empty flushes, including the final one at end of input.
    pub blocks: usize,
    pub col_cnt: usize,
    pub headings: Vec<Vec<u8>>,
}

pub struct Transposer<W: Write> {
    out: W,
    splitter: Splitter,
    normalizer: KeyNormalizer,
    headings: Headings,
    table: Table,
    col_cnt: usize,
    print_headers: bool,
    lines: usize,
    blocks: usize,
}

impl<W: Write> Transposer<W> {
    pub fn new(out: W) -> Self {
        Transposer::with_splitter(out, Splitter::default())
    }

    pub fn with_splitter(out: W, splitter: Splitter) -> Self {
        Transposer {
            out,
            splitter,
            normalizer: KeyNormalizer::new(),
            headings: Headings::new(),
            table: Table::new(),
            col_cnt: 0,
            print_headers: true,
            lines: 0,
            blocks: 0,
        }
    }

    pub fn headings(&self) -> &Headings {
        &self.headings
    }

    pub fn col_cnt(&self) -> usize {
        self.col_cnt
    }

    /// Feed one line (without its terminating newline).
    pub fn push_line(&mut self, line: &[u8]) -> Result<()> {
        let fields = self.splitter.split(line);
        let key = match fields.first() {
            Some(raw) => self.normalizer.normalize(raw),
            None => Vec::new(),
        };
        self.lines += 1;
        trace!(
            line = self.lines,
            key = %String::from_utf8_lossy(&key),
            fields = fields.len(),
            "read"
        );

        // single-field lines take part in grouping but never become a column
        if fields.len() > 1 && self.headings.register(&key) {
            debug!(key = %String::from_utf8_lossy(&key), "new heading");
        }

        if detect_boundary(&self.table, &key) {
            if self.print_headers {
                self.print_headers = false;
                write_heading_line(&mut self.out, &self.headings)?;
            }
            self.flush_block()?;
        }

        self.col_cnt = self.col_cnt.max(fields.len());
        self.table.insert(key, fields);
        Ok(())
    }

    fn flush_block(&mut self) -> Result<()> {
        write_columns(&mut self.out, &self.headings, &self.table, self.col_cnt)?;
        if !self.table.is_empty() {
            self.blocks += 1;
            debug!(
                block = self.blocks,
                keys = self.table.len(),
                columns = self.headings.len(),
                rows = self.col_cnt.saturating_sub(1),
                "flushed block"
            );
        }
        self.table.clear();
        Ok(())
    }

    /// Flush the last block, print the trailing heading line and flush the sink.
    pub fn finish(mut self) -> Result<Summary> {
        self.flush_block()?;
        write_heading_line(&mut self.out, &self.headings)?;
        self.out.flush()?;
        Ok(Summary {
            lines: self.lines,
            blocks: self.blocks,
            col_cnt: self.col_cnt,
            headings: self.headings.as_slice().to_vec(),
        })
    }
}

/// Run a whole stream through a fresh transposer.
///
/// Lines are split on `\n` only and handled as bytes, so the output carries
/// the input's bytes unchanged whatever its encoding. A read error part way
/// through ends the input: what was read so far is still transposed.
pub fn transpose<R: BufRead, W: Write>(mut reader: R, out: W) -> Result<Summary> {
    let mut engine = Transposer::new(out);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                engine.push_line(&buf)?;
            }
            Err(e) => {
                warn!(error = %e, "read failed, treating as end of input");
                break;
            }
        }
    }
    engine.finish()
}

/// In-memory convenience around [`transpose`] for text input.
pub fn transpose_str(input: &str) -> Result<String> {
    let mut out = Vec::new();
    transpose(input.as_bytes(), &mut out)?;
    // only bytes from `input` and ASCII separators are written
    let text =
        String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}
