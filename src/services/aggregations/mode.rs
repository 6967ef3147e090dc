use std::collections::BTreeMap;

fn tally<T: Ord, I: IntoIterator<Item = T>>(values: I) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0usize) += 1;
    }
    counts
}

/// Most frequent value, or `None` for no values.
/// Ties go to the smallest value.
pub fn mode<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    // ascending key order, so only a strictly higher count replaces the winner
    for (value, count) in tally(values) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Occurrences of each value, highest count first, ties by ascending value.
pub fn value_counts<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = tally(values).into_iter().collect();
    // stable sort keeps ascending value order within equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
