// stockholm.rs - Stockholm alignment parser

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Parse Stockholm content into (ids, rows). `#` markup and the `//`
/// terminator are skipped; sequences split over multiple blocks are
/// concatenated in first-seen order.
pub fn parse(content: &str) -> Result<(Vec<String>, Vec<Vec<u8>>)> {
    let mut order: Vec<String> = Vec::new();
    let mut sequences: HashMap<String, Vec<u8>> = HashMap::new();

    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') || line == "//" {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (id, chunk) = match (fields.next(), fields.next()) {
            (Some(id), Some(chunk)) => (id, chunk),
            _ => {
                return Err(Error::InvalidAlignment(format!(
                    "malformed Stockholm line: '{}'",
                    line
                )))
            }
        };
        let entry = sequences.entry(id.to_string()).or_insert_with(|| {
            order.push(id.to_string());
            Vec::new()
        });
        entry.extend_from_slice(chunk.as_bytes());
    }

    let rows = order
        .iter()
        .filter_map(|id| sequences.remove(id))
        .collect();
    Ok((order, rows))
}
