// alignment.rs - Multiple sequence alignment data structure

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

/// Gap symbol after normalization. Input `.` gaps are rewritten to this.
pub const GAP: u8 = b'-';

/// A rectangular multiple sequence alignment.
///
/// Rows are sequences, columns are alignment positions. Symbols are
/// uppercased on construction and `.` gaps are normalized to `-`. The
/// alphabet (sorted distinct symbols, gap included when present) and the
/// per-column distinct-symbol counts are precomputed so statistics can
/// query them in constant time.
#[derive(Debug, Clone)]
pub struct Alignment {
    ids: Vec<String>,
    rows: Vec<Vec<u8>>,
    alphabet: Vec<u8>,
    column_type_counts: Vec<usize>,
}

impl Alignment {
    /// Build an alignment from sequence ids and rows.
    ///
    /// Fails when the alignment is empty, when ids and rows disagree in
    /// count, when an id repeats, or when rows have different lengths.
    pub fn new(ids: Vec<String>, rows: Vec<Vec<u8>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidAlignment(
                "alignment contains no sequences".to_string(),
            ));
        }
        if ids.len() != rows.len() {
            return Err(Error::InvalidAlignment(format!(
                "{} sequence ids for {} sequences",
                ids.len(),
                rows.len()
            )));
        }

        let mut rows = rows;
        for row in &mut rows {
            for symbol in row.iter_mut() {
                symbol.make_ascii_uppercase();
                if *symbol == b'.' {
                    *symbol = GAP;
                }
            }
        }

        let columns = rows[0].len();
        if columns == 0 {
            return Err(Error::InvalidAlignment(
                "alignment has no columns".to_string(),
            ));
        }
        for (id, row) in ids.iter().zip(&rows) {
            if row.len() != columns {
                return Err(Error::InvalidAlignment(format!(
                    "sequence '{}' has length {} but the alignment has {} columns",
                    id,
                    row.len(),
                    columns
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for id in &ids {
            if !seen.insert(id.as_str()) {
                return Err(Error::InvalidAlignment(format!(
                    "duplicate sequence id '{}'",
                    id
                )));
            }
        }

        let mut alignment = Self {
            ids,
            rows,
            alphabet: Vec::new(),
            column_type_counts: Vec::new(),
        };
        alignment.rebuild_derived();
        Ok(alignment)
    }

    /// Number of sequences (rows).
    pub fn num_sequences(&self) -> usize {
        self.rows.len()
    }

    /// Number of alignment columns.
    pub fn num_columns(&self) -> usize {
        self.column_type_counts.len()
    }

    /// Sequence ids, in row order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Sorted distinct symbols occurring anywhere in the alignment.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Symbol at (row, column).
    pub fn symbol(&self, row: usize, column: usize) -> u8 {
        self.rows[row][column]
    }

    /// Full row slice for a sequence.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.rows[row]
    }

    /// Number of distinct symbols in a column.
    pub fn column_type_count(&self, column: usize) -> usize {
        self.column_type_counts[column]
    }

    /// Keep only sequences whose id passes the include regex (when given)
    /// and does not match the exclude regex (when given). Derived data is
    /// rebuilt from the remaining rows. Fails when nothing remains, leaving
    /// the alignment untouched.
    pub fn retain_sequences(
        &mut self,
        include: Option<&Regex>,
        exclude: Option<&Regex>,
    ) -> Result<()> {
        if include.is_none() && exclude.is_none() {
            return Ok(());
        }

        let keep: Vec<bool> = self
            .ids
            .iter()
            .map(|id| {
                let included = include.map_or(true, |regex| regex.is_match(id));
                let excluded = exclude.is_some_and(|regex| regex.is_match(id));
                included && !excluded
            })
            .collect();

        let kept = keep.iter().filter(|&&k| k).count();
        if kept == 0 {
            return Err(Error::InvalidAlignment(
                "no sequences left after filtering".to_string(),
            ));
        }
        if kept == keep.len() {
            return Ok(());
        }

        let total = keep.len();
        let mut kept_ids = Vec::with_capacity(kept);
        let mut kept_rows = Vec::with_capacity(kept);
        for (keep_row, (id, row)) in keep.iter().zip(self.ids.drain(..).zip(self.rows.drain(..))) {
            if *keep_row {
                kept_ids.push(id);
                kept_rows.push(row);
            } else {
                debug!("filtered out sequence '{}'", id);
            }
        }
        debug!("kept {} of {} sequences", kept, total);

        self.ids = kept_ids;
        self.rows = kept_rows;
        self.rebuild_derived();
        Ok(())
    }

    fn rebuild_derived(&mut self) {
        let columns = self.rows[0].len();
        let mut global_seen = [false; 256];
        let mut counts = Vec::with_capacity(columns);

        for column in 0..columns {
            let mut seen = [false; 256];
            let mut distinct = 0;
            for row in &self.rows {
                let symbol = row[column] as usize;
                if !seen[symbol] {
                    seen[symbol] = true;
                    distinct += 1;
                }
                global_seen[symbol] = true;
            }
            counts.push(distinct);
        }

        self.alphabet = (0u8..=255)
            .filter(|&symbol| global_seen[symbol as usize])
            .collect();
        self.column_type_counts = counts;
    }
}
