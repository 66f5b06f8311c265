use crate::Error;
use crate::Probability;
use crate::Result;

/// Reverses both axes into a new matrix.
///
/// Realigns data laid out weakest rank first (deuces top-left) to the
/// strongest-first layout [`plot`](super::plot) expects.
pub fn flip<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    matrix
        .iter()
        .rev()
        .map(|row| row.iter().rev().cloned().collect())
        .collect()
}

/// Fails unless the matrix has one row per row label and one column per
/// column label in every row.
pub fn check_shape(matrix: &[Vec<Probability>], rows: &[String], cols: &[String]) -> Result<()> {
    let mismatch = |width: usize| Error::ShapeMismatch {
        rows: matrix.len(),
        cols: width,
        labels_rows: rows.len(),
        labels_cols: cols.len(),
    };
    if matrix.len() != rows.len() {
        return Err(mismatch(matrix.first().map_or(0, Vec::len)));
    }
    match matrix.iter().find(|row| row.len() != cols.len()) {
        Some(row) => Err(mismatch(row.len())),
        None => Ok(()),
    }
}

/// Starting-hand name of cell (i, j).
///
/// Below the diagonal the hand is suited and named column rank first;
/// everywhere else it is named row rank first with an offsuit marker, which
/// includes the diagonal, so pocket aces read `"AAo"`.
pub fn hand_name(i: usize, j: usize, row: &str, col: &str) -> String {
    match i > j {
        true => format!("{}{}s", col, row),
        false => format!("{}{}o", row, col),
    }
}

/// Cell value as a percentage with two decimals, e.g. 0.3 → `"30.00"`.
pub fn percent(value: Probability) -> String {
    format!("{:.2}", value * 100.)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flip_reverses_both_axes() {
        let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(flip(&m), vec![vec![6, 5, 4], vec![3, 2, 1]]);
    }

    #[test]
    fn flip_round_trips() {
        let m = (0..13)
            .map(|i| (0..13).map(|j| (i * 13 + j) as f64 / 169.).collect())
            .collect::<Vec<Vec<f64>>>();
        assert_eq!(flip(&flip(&m)), m);
        assert_ne!(flip(&m), m);
    }

    #[test]
    fn flip_leaves_input_untouched() {
        let m = vec![vec![0.5, 0.3], vec![0.1, 0.9]];
        let before = m.clone();
        let _ = flip(&m);
        assert_eq!(m, before);
    }

    #[test]
    fn flip_empty() {
        assert!(flip::<f64>(&[]).is_empty());
    }

    #[test]
    fn names_follow_convention() {
        assert_eq!(hand_name(0, 1, "A", "K"), "AKo");
        assert_eq!(hand_name(1, 0, "K", "A"), "AKs");
        assert_eq!(hand_name(0, 0, "A", "A"), "AAo");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(percent(0.3), "30.00");
        assert_eq!(percent(0.1), "10.00");
        assert_eq!(percent(1.), "100.00");
        assert_eq!(percent(0.12346), "12.35");
    }

    #[test]
    fn shape_matches() {
        let m = vec![vec![0.5, 0.3], vec![0.1, 0.9]];
        assert!(check_shape(&m, &labels(&["A", "K"]), &labels(&["A", "K"])).is_ok());
    }

    #[test]
    fn shape_mismatch_on_rows() {
        let m = vec![vec![0.5, 0.3]];
        assert!(matches!(
            check_shape(&m, &labels(&["A", "K"]), &labels(&["A", "K"])),
            Err(Error::ShapeMismatch { rows: 1, .. })
        ));
    }

    #[test]
    fn shape_mismatch_on_ragged_row() {
        let m = vec![vec![0.5, 0.3], vec![0.1]];
        assert!(matches!(
            check_shape(&m, &labels(&["A", "K"]), &labels(&["A", "K"])),
            Err(Error::ShapeMismatch { cols: 1, .. })
        ));
    }
}
