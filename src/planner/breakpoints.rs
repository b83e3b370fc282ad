use itertools::Itertools;

/// Compute, for each position `i` in a merit-ordered plant list, the set of
/// *significant stopping points* — sums of pmins of the plants at or after
/// `i`, over every subset of those plants that could end up switched on.
///
/// `S[n-1] = {0, pmin_g(n-1)}`; walking right to left, `S[i]` is built from
/// `S[i+1]` by offering the choice of adding plant `i`'s own pmin to each
/// already-known sum. Each returned vector is sorted descending, matching
/// the order the dispatch recurrence wants to try largest-residual-first.
pub fn significant_stopping_points(pmins_g: &[i64]) -> Vec<Vec<i64>> {
    let n = pmins_g.len();
    let mut steps: Vec<Vec<i64>> = vec![Vec::new(); n];
    if n == 0 {
        return steps;
    }

    let mut current: Vec<i64> = vec![0, pmins_g[n - 1]]
        .into_iter()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .dedup()
        .collect();
    steps[n - 1] = current.clone();

    for i in (0..n - 1).rev() {
        let pmin_i = pmins_g[i];
        let offset = current.iter().map(|&s| s + pmin_i).collect_vec();
        current = current
            .into_iter()
            .chain(offset)
            .sorted_unstable_by(|a, b| b.cmp(a))
            .dedup()
            .collect();
        steps[i] = current.clone();
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_plant_has_two_steps() {
        let steps = significant_stopping_points(&[1000]);
        assert_eq!(steps, vec![vec![1000, 0]]);
    }

    #[test]
    fn steps_deduplicate_equal_pmins() {
        let steps = significant_stopping_points(&[500, 500]);
        // S[1] = {0, 500}; S[0] = {0, 500, 0+500, 500+500} = {0, 500, 1000}
        assert_eq!(steps[1], vec![500, 0]);
        assert_eq!(steps[0], vec![1000, 500, 0]);
    }

    #[test]
    fn empty_fleet_has_no_steps() {
        assert!(significant_stopping_points(&[]).is_empty());
    }
}
