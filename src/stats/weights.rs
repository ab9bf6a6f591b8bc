// weights.rs - Henikoff & Henikoff position-based sequence weights

use log::debug;

use crate::data::Alignment;

/// Compute one weight per sequence.
///
/// `w_i = (1/L) * sum over columns x of 1 / (k_x * n_{x,i})` where `k_x`
/// is the number of distinct symbols in column x and `n_{x,i}` how often
/// row i's symbol occurs in that column. Rows showing rare symbols weigh
/// more; the weights sum to 1 over all rows.
///
/// Per-column symbol counts are tallied first, so a full pass costs
/// O(N * L) instead of recounting per row.
pub fn sequence_weights(alignment: &Alignment) -> Vec<f64> {
    let sequences = alignment.num_sequences();
    let columns = alignment.num_columns();
    let mut weights = vec![0.0; sequences];

    for x in 0..columns {
        let mut counts = [0usize; 256];
        for i in 0..sequences {
            counts[alignment.symbol(i, x) as usize] += 1;
        }
        let types = alignment.column_type_count(x) as f64;
        for (i, weight) in weights.iter_mut().enumerate() {
            let occurrences = counts[alignment.symbol(i, x) as usize] as f64;
            *weight += 1.0 / (types * occurrences);
        }
    }

    for weight in &mut weights {
        *weight /= columns as f64;
    }

    debug!("sequence weights:");
    for (id, weight) in alignment.ids().iter().zip(&weights) {
        debug!("{:>10.6}  {}", weight, id);
    }
    weights
}
