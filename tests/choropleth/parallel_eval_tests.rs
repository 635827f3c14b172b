#![cfg(feature = "cpu")]

use choropleth::internals::algorithms::ckmeans::{cluster_sorted, fill_row};
use choropleth::internals::engine::executor::{fill_row_parallel, ClassifierExecutor};
use choropleth::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn skewed_values(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen_range(0.0..1.0);
            (u * 8.0).exp().round()
        })
        .collect()
}

#[test]
fn test_parallel_fill_matches_sequential() {
    let mut values = skewed_values(1, 5000);
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());

    for k in [2, 5, 7] {
        let sequential = cluster_sorted(&values, k, fill_row::<f64>);
        let parallel = cluster_sorted(&values, k, fill_row_parallel::<f64>);
        assert_eq!(sequential, parallel, "groups differ for k = {}", k);
    }
}

#[test]
fn test_parallel_classification_matches_sequential() {
    let values = skewed_values(2, 6000);

    let sequential = ClassifierExecutor::new(5, false).classify(&values);
    let parallel = ClassifierExecutor::new(5, true).classify(&values);

    assert_eq!(sequential.breaks, parallel.breaks);
    assert_eq!(sequential.diagnostics, parallel.diagnostics);
}

#[test]
fn test_parallel_render_preserves_region_order() {
    let values = skewed_values(3, 3000);
    let regions: Vec<Region<f64>> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Region::new(i.to_string()).with_attribute("RENT", v))
        .collect();

    let parallel = Choropleth::new()
        .adapter(Batch)
        .parallel(true)
        .build()
        .unwrap()
        .render(&regions, "RENT");
    let sequential = Choropleth::new()
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .render(&regions, "RENT");

    assert_eq!(parallel, sequential);
    for (i, style) in parallel.regions.iter().enumerate() {
        assert_eq!(style.id, i.to_string());
    }
}

#[test]
fn test_parallel_handles_sparse_input() {
    let values = vec![0.0, -3.0, f64::NAN, 7.0, 7.0];
    let symbology = Choropleth::new()
        .adapter(Batch)
        .parallel(true)
        .build()
        .unwrap()
        .classify(&values)
        .unwrap();

    assert_eq!(symbology.breaks().effective_classes(), 1);
    assert_eq!(symbology.color_of(7.0), BLUES[4]);
    assert_eq!(symbology.color_of(0.0), NO_DATA);
}
