use proptest::prelude::*;

use tfidf_weighting::{
    DenseMatrix, IdfModel, Normalization, TermDocMatrix, TfidfTransformer, Transformer,
    WeightingConfig,
};

/// Random small term-document count matrix (values 0..=4, so plenty of
/// structural zeros).
fn arb_counts() -> impl Strategy<Value = DenseMatrix> {
    (1usize..8, 1usize..8).prop_flat_map(|(terms, docs)| {
        prop::collection::vec(0u8..5, terms * docs).prop_map(move |counts| {
            DenseMatrix::from_vec(terms, docs, counts.into_iter().map(f64::from).collect())
                .unwrap()
        })
    })
}

/// 1 x `docs` matrix whose single term occurs in exactly `df` documents.
fn single_term_matrix(docs: usize, df: usize) -> DenseMatrix {
    let mut m = DenseMatrix::zeros(1, docs);
    for j in 0..df {
        m.set(0, j, 1.0);
    }
    m
}

fn fitted_weights(matrix: &DenseMatrix, padding: f64) -> Vec<f64> {
    let mut transformer = TfidfTransformer::with_config(WeightingConfig {
        weight_padding: padding,
        normalization: Normalization::None,
    });
    transformer.fit(matrix);
    transformer.model().unwrap().weights().to_vec()
}

// ── IDF formula ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn weights_are_finite_and_strictly_decreasing_in_df(docs in 1usize..40, df in 0usize..40) {
        let df = df % docs; // 0 <= df < docs, so df + 1 is still valid
        let lower = fitted_weights(&single_term_matrix(docs, df), 0.0)[0];
        let higher = fitted_weights(&single_term_matrix(docs, df + 1), 0.0)[0];

        prop_assert!(lower.is_finite());
        prop_assert!(higher.is_finite());
        prop_assert!(
            higher < lower,
            "w(df={}) = {} not below w(df={}) = {} for n = {}",
            df + 1, higher, df, lower, docs
        );
    }

    #[test]
    fn padding_shifts_every_weight_exactly(matrix in arb_counts(), padding in -2.0f64..2.0) {
        let plain = fitted_weights(&matrix, 0.0);
        let padded = fitted_weights(&matrix, padding);
        for (w0, wp) in plain.iter().zip(&padded) {
            prop_assert_eq!(w0 + padding, *wp);
        }
    }

    #[test]
    fn fast_and_scan_paths_agree_exactly(matrix in arb_counts()) {
        let from_dense = fitted_weights(&matrix, 0.0);
        let mut transformer = TfidfTransformer::new();
        transformer.fit(&matrix.to_csr());
        prop_assert_eq!(transformer.model().unwrap().weights(), from_dense.as_slice());
    }
}

// ── Transform & normalization ────────────────────────────────────────────

proptest! {
    #[test]
    fn fit_transform_matches_the_manual_sequence(matrix in arb_counts()) {
        let config = WeightingConfig {
            weight_padding: 0.1,
            normalization: Normalization::Row,
        };
        let mut manual = TfidfTransformer::with_config(config.clone());
        manual.fit(&matrix);
        let expected = manual.transform(&matrix).unwrap();

        let mut composed = TfidfTransformer::with_config(config);
        prop_assert_eq!(composed.fit_transform(&matrix).unwrap(), expected);
    }

    #[test]
    fn row_normalized_rows_are_unit_or_zero(matrix in arb_counts()) {
        let mut transformer = TfidfTransformer::with_config(WeightingConfig {
            weight_padding: 0.25, // every weight strictly positive
            normalization: Normalization::Row,
        });
        let weighted = transformer.fit_transform(&matrix).unwrap();

        for i in 0..weighted.rows() {
            let sum: f64 = weighted.row_values(i).iter().map(|v| v * v).sum();
            prop_assert!(
                sum == 0.0 || (sum - 1.0).abs() < 1e-9,
                "row {} norm² = {}", i, sum
            );
        }
    }

    #[test]
    fn column_normalized_columns_are_unit_or_zero(matrix in arb_counts()) {
        let mut transformer = TfidfTransformer::with_config(WeightingConfig {
            weight_padding: 0.25,
            normalization: Normalization::Column,
        });
        let weighted = transformer.fit_transform(&matrix).unwrap();

        let (terms, docs) = weighted.shape();
        for j in 0..docs {
            let sum: f64 = (0..terms).map(|i| weighted.value_at(i, j).powi(2)).sum();
            prop_assert!(
                sum == 0.0 || (sum - 1.0).abs() < 1e-9,
                "column {} norm² = {}", j, sum
            );
        }
    }

    #[test]
    fn unnormalized_transform_scales_by_the_formula(matrix in arb_counts()) {
        let mut transformer = TfidfTransformer::new();
        let weighted = transformer.fit_transform(&matrix).unwrap();

        let (terms, docs) = matrix.shape();
        for i in 0..terms {
            let df = (0..docs).filter(|&j| matrix.value_at(i, j) != 0.0).count();
            let w = ((1 + docs) as f64 / (1 + df) as f64).ln();
            for j in 0..docs {
                let expected = matrix.value_at(i, j) * w;
                prop_assert!((weighted.value_at(i, j) - expected).abs() < 1e-12);
            }
        }
    }
}

// ── Persistence ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn models_round_trip_bitwise(weights in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        let model = IdfModel::from_weights(weights);
        let mut bytes = Vec::new();
        model.save(&mut bytes).unwrap();
        let restored = IdfModel::load(&mut bytes.as_slice()).unwrap();
        prop_assert_eq!(restored, model);
    }

    #[test]
    fn any_truncation_fails_cleanly(weights in prop::collection::vec(-1e3f64..1e3, 1..16), cut in 0usize..1000) {
        let model = IdfModel::from_weights(weights);
        let mut bytes = Vec::new();
        model.save(&mut bytes).unwrap();

        let cut = cut % bytes.len(); // strictly shorter than the full stream
        prop_assert!(IdfModel::load(&mut &bytes[..cut]).is_err());
    }
}
