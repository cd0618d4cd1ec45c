use approx::assert_abs_diff_eq;
use catchment_core::math::{average_ranks, linear_quantile, tie_group_sizes};
use catchment_core::normalize_identifier;
use proptest::prelude::*;

fn sample() -> impl Strategy<Value = Vec<f64>> {
    // small integers produce plenty of ties
    prop::collection::vec((0i32..20).prop_map(f64::from), 1..40)
}

proptest! {
    #[test]
    fn quantile_is_monotone_and_bounded(data in sample(), p in 0.0f64..1.0, dp in 0.0f64..1.0) {
        let q = (p + dp).min(1.0);
        let low = linear_quantile(&data, p).unwrap();
        let high = linear_quantile(&data, q).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(low <= high);
        prop_assert!(min <= low && high <= max);
    }

    #[test]
    fn average_ranks_sum_to_triangle_number(data in sample()) {
        let n = data.len() as f64;
        let ranks = average_ranks(&data).unwrap();
        assert_abs_diff_eq!(ranks.iter().sum::<f64>(), n * (n + 1.0) / 2.0, epsilon = 1e-9);
        prop_assert!(ranks.iter().all(|r| *r >= 1.0 && *r <= n));
    }

    #[test]
    fn tie_groups_cover_the_sample(data in sample()) {
        let sizes = tie_group_sizes(&data).unwrap();
        prop_assert_eq!(sizes.iter().sum::<usize>(), data.len());
    }

    #[test]
    fn identifier_normalisation_is_idempotent(n in 0u32..5000) {
        let once = normalize_identifier(&format!("{n}.0"));
        prop_assert_eq!(normalize_identifier(&once), once.clone());
        prop_assert_eq!(once, n.to_string());
    }
}
