use std::mem;

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum DistanceAlgorithm {
    Levenshtein,
}

pub struct EditDistance {
    algorithm: DistanceAlgorithm,
}

impl EditDistance {
    pub fn new(algorithm: DistanceAlgorithm) -> EditDistance {
        EditDistance { algorithm }
    }

    /// Distance between `a` and `b`, or `-1` once it exceeds `max_distance`.
    pub fn compare(&self, a: &str, b: &str, max_distance: i64) -> i64 {
        let distance = match self.algorithm {
            DistanceAlgorithm::Levenshtein => levenshtein(a, b),
        };

        if distance as i64 <= max_distance {
            distance as i64
        } else {
            -1
        }
    }
}

/// Levenshtein distance between two strings, counted in unit-cost character
/// insertions, deletions and substitutions. Characters are compared for exact
/// equality; no case folding.
///
/// Keeps two rolling rows, so working memory is bounded by the shorter string.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();

    // Row width follows the shorter string; the swap is free because the
    // distance is symmetric.
    if a.len() > b.len() {
        mem::swap(&mut a, &mut b);
    }

    let mut previous: Vec<usize> = (0..=a.len()).collect();
    let mut current = vec![0; a.len() + 1];

    for (i, bc) in b.iter().enumerate() {
        current[0] = i + 1;

        for (j, ac) in a.iter().enumerate() {
            let add = previous[j + 1] + 1;
            let delete = current[j] + 1;
            let change = previous[j] + usize::from(ac != bc);
            current[j + 1] = add.min(delete).min(change);
        }

        mem::swap(&mut previous, &mut current);
    }

    previous[a.len()]
}
