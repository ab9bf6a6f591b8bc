#!/usr/bin/env rust-script

//! # Custom Statistic Example
//!
//! This example demonstrates how to implement and register custom
//! per-column statistics in alnstat.
//!
//! Usage:
//! ```bash
//! cargo run --example custom_statistic
//! ```

use alnstat::prelude::*;

/// Example 1: Majority fraction
/// Scores each column with the fraction of sequences that carry the most
/// common symbol. Gaps count as a symbol of their own.
pub struct MajorityStatistic {
    scores: ColumnScores,
}

impl MajorityStatistic {
    pub fn new() -> Self {
        Self {
            scores: ColumnScores::new(),
        }
    }
}

impl Statistic for MajorityStatistic {
    fn name(&self) -> &str {
        "majority"
    }

    fn description(&self) -> &str {
        "Fraction of sequences sharing the most common symbol"
    }

    fn compute(&mut self, alignment: &Alignment) -> Result<()> {
        self.scores.clear();
        let rows = alignment.num_sequences() as f64;
        for column in 0..alignment.num_columns() {
            let mut counts = [0usize; 256];
            let mut most_common = 0usize;
            for row in 0..alignment.num_sequences() {
                let symbol = alignment.symbol(row, column) as usize;
                counts[symbol] += 1;
                most_common = most_common.max(counts[symbol]);
            }
            self.scores.push(most_common as f64 / rows);
        }
        Ok(())
    }

    fn scores(&self) -> &ColumnScores {
        &self.scores
    }
}

/// Example 2: Sharpened majority fraction
/// Same score as `MajorityStatistic`, raised to a configurable exponent
/// so mid-range columns are pushed toward zero.
pub struct SharpenedMajorityStatistic {
    exponent: f64,
    scores: ColumnScores,
}

impl SharpenedMajorityStatistic {
    pub fn new(exponent: f64) -> Self {
        Self {
            exponent,
            scores: ColumnScores::new(),
        }
    }
}

impl Statistic for SharpenedMajorityStatistic {
    fn name(&self) -> &str {
        "sharpened"
    }

    fn description(&self) -> &str {
        "Majority fraction raised to a configurable exponent"
    }

    fn compute(&mut self, alignment: &Alignment) -> Result<()> {
        self.scores.clear();
        let rows = alignment.num_sequences() as f64;
        for column in 0..alignment.num_columns() {
            let mut counts = [0usize; 256];
            let mut most_common = 0usize;
            for row in 0..alignment.num_sequences() {
                let symbol = alignment.symbol(row, column) as usize;
                counts[symbol] += 1;
                most_common = most_common.max(counts[symbol]);
            }
            let fraction = most_common as f64 / rows;
            self.scores.push(fraction.powf(self.exponent));
        }
        Ok(())
    }

    fn scores(&self) -> &ColumnScores {
        &self.scores
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("🔌 alnstat Custom Statistic Examples");
    println!("====================================\n");

    // A small alignment to score
    let ids = vec![
        "seq1".to_string(),
        "seq2".to_string(),
        "seq3".to_string(),
        "seq4".to_string(),
    ];
    let rows = vec![
        b"ACDE-W".to_vec(),
        b"ACDF-W".to_vec(),
        b"ACEF-W".to_vec(),
        b"AGEFVW".to_vec(),
    ];
    let alignment = Alignment::new(ids, rows)?;

    // Create registry with custom statistics registered alongside the
    // built-in ones
    let mut registry = StatisticRegistry::new();
    registry.register("majority", || Box::new(MajorityStatistic::new()));
    registry.register("sharpened", || {
        Box::new(SharpenedMajorityStatistic::new(2.0))
    });

    println!("📊 Available Statistics:");
    for (name, description) in registry.list() {
        println!("  • {}: {}", name, description);
    }
    println!();

    // Score the alignment with each custom statistic
    for name in ["majority", "sharpened"] {
        let mut statistic = registry.create(name)?;
        statistic.compute(&alignment)?;
        println!("🧮 {}: {}", statistic.name(), statistic.description());
        for (column, score) in statistic.scores().iter().enumerate() {
            println!("   column {} → {}", column, score);
        }
        println!();
    }

    // Demonstrate compute idempotency
    println!("🔄 Testing Compute Idempotency:");
    let mut statistic = registry.create("majority")?;
    statistic.compute(&alignment)?;
    let first_run = statistic.scores().clone();
    statistic.compute(&alignment)?;
    println!("   Identical across runs: {}", first_run == *statistic.scores());
    println!();

    // The shared writer renders one line per column, or the mean when the
    // global flag is set
    println!("📝 Writing Scores:");
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("majority.txt");
    statistic.print(&OutputOptions::new(&path, false))?;
    print!("   Per-column file:\n{}", std::fs::read_to_string(&path)?);
    statistic.print(&OutputOptions::new(&path, true))?;
    println!("   Global mean: {}", std::fs::read_to_string(&path)?.trim_end());

    println!("\n✅ Custom statistic examples completed!");
    println!("💡 Tip: Use these patterns to plug your own scoring schemes into the registry");

    Ok(())
}
