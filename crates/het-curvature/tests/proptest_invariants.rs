//! Property-based tests for curvature invariants.
//!
//! Checks normalization invariance, hypercube-automorphism invariance,
//! the edge-count formula, and the value range of the estimate.

use het_curvature::{StateGraph, estimate};
use proptest::prelude::*;

/// Generate non-negative weights over `2^n` states, n in 0..=5, with positive mass.
fn arb_weights() -> impl Strategy<Value = Vec<f64>> {
    (0_usize..=5)
        .prop_flat_map(|n| prop::collection::vec(0.0_f64..10.0, 1usize << n))
        .prop_filter("needs positive mass", |w| w.iter().sum::<f64>() > 1e-9)
}

/// Map a basis index through the hypercube automorphism (bit permutation, then xor mask).
fn relabel(index: usize, perm: &[usize], mask: usize) -> usize {
    let mut out = 0;
    for (bit, &target) in perm.iter().enumerate() {
        if index & (1 << bit) != 0 {
            out |= 1 << target;
        }
    }
    out ^ mask
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn scaling_is_invisible(weights in arb_weights(), c in 0.01_f64..1000.0, alpha in 0.0_f64..=1.0) {
        let base = estimate(&weights, alpha).unwrap();
        let scaled: Vec<f64> = weights.iter().map(|w| w * c).collect();
        let other = estimate(&scaled, alpha).unwrap();
        prop_assert!((base - other).abs() < 1e-9, "base={base} scaled={other}");
    }

    #[test]
    fn estimate_lies_between_alpha_and_one(weights in arb_weights(), alpha in 0.0_f64..=1.0) {
        let k = estimate(&weights, alpha).unwrap();
        if weights.len() == 1 {
            prop_assert_eq!(k, 0.0);
        } else {
            prop_assert!(k >= alpha - 1e-9 && k <= 1.0 + 1e-9, "k={k} alpha={alpha}");
        }
    }

    #[test]
    fn automorphisms_preserve_curvature(
        (n, weights, perm, mask) in (1_usize..=5).prop_flat_map(|n| (
            Just(n),
            prop::collection::vec(0.01_f64..10.0, 1usize << n),
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            0..(1usize << n),
        )),
        alpha in 0.0_f64..=1.0,
    ) {
        let mut relabeled = vec![0.0; 1 << n];
        for (i, w) in weights.iter().enumerate() {
            relabeled[relabel(i, &perm, mask)] = *w;
        }
        let a = estimate(&weights, alpha).unwrap();
        let b = estimate(&relabeled, alpha).unwrap();
        prop_assert!((a - b).abs() < 1e-9, "a={a} b={b}");
    }

    #[test]
    fn hypercube_has_n_times_half_vertices_edges(n in 1_usize..=7) {
        let g = StateGraph::hypercube(n);
        prop_assert_eq!(g.node_count(), 1 << n);
        prop_assert_eq!(g.edge_count(), n * (1 << (n - 1)));
    }
}
