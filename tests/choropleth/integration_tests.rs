use approx::assert_abs_diff_eq;
use choropleth::prelude::*;

fn counties() -> Vec<Region<f64>> {
    vec![
        Region::new("1").with_name("Adams").with_attribute("RENT", 100.0),
        Region::new("2").with_name("Brown").with_attribute("RENT", 200.0),
        Region::new("3").with_name("Clark").with_attribute("RENT", 300.0),
        Region::new("4").with_name("Dane").with_attribute("RENT", 900.0),
        Region::new("5").with_name("Eau Claire").with_attribute("RENT", 950.0),
        Region::new("6").with_name("Florence").with_attribute("RENT", 1000.0),
        Region::new("7").with_name("Grant").with_attribute("RENT", 0.0),
        Region::new("8").with_name("Green"),
    ]
}

#[test]
fn test_end_to_end_rent_example() {
    let values = vec![100.0, 200.0, 300.0, 900.0, 950.0, 1000.0];

    let symbology = Choropleth::new()
        .classes(5)
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .classify(&values)
        .unwrap();

    let breaks = symbology.breaks();
    assert_eq!(breaks.len(), 5);

    let band = |v: f64| breaks.band_index(v).unwrap();
    // The two lowest values group apart from the two highest
    assert!(band(100.0) < band(950.0));
    assert!(band(200.0) < band(1000.0));
    assert_ne!(band(100.0), band(200.0));

    assert_eq!(symbology.color_of(1000.0), BLUES[4]);
    assert_eq!(symbology.color_of(0.0), NO_DATA);
    assert_eq!(symbology.color_for(None), NO_DATA);
}

#[test]
fn test_render_layer_styles_and_legend() {
    let regions = counties();

    let layer = Choropleth::new()
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .render(&regions, "RENT");

    assert_eq!(layer.attribute, "RENT");
    assert_eq!(layer.regions.len(), regions.len());

    // Order and identity follow the input
    for (style, region) in layer.regions.iter().zip(&regions) {
        assert_eq!(style.id, region.id);
        assert_eq!(style.name, region.name);
    }

    // Tooltip values are the raw attribute or missing
    assert_eq!(layer.regions[0].value, Some(100.0));
    assert_eq!(layer.regions[6].value, None);
    assert_eq!(layer.regions[7].value, None);

    assert_eq!(layer.regions[5].fill, BLUES[4]);
    assert_eq!(layer.regions[6].fill, NO_DATA);
    assert_eq!(layer.regions[6].band, Band::Missing);
    assert_eq!(layer.regions[7].fill, NO_DATA);

    // Missing entry first, then one entry per band ascending
    assert_eq!(layer.legend.len(), 6);
    assert!(layer.legend[0].is_missing());
    assert_eq!(layer.legend[0].color, NO_DATA);
    for pair in layer.legend[1..].windows(2) {
        assert!(pair[0].low.unwrap() <= pair[1].low.unwrap());
    }
    assert_eq!(layer.legend[1].low, Some(100.0));
    assert_eq!(layer.legend[5].high, Some(1000.0));
    assert_eq!(layer.legend[5].color, BLUES[4]);
}

#[test]
fn test_attribute_switch_uses_other_key() {
    let regions: Vec<Region<f64>> = (1..=10)
        .map(|i| {
            Region::new(i.to_string())
                .with_attribute("RENT", f64::from(i) * 100.0)
                .with_attribute("INCOME", f64::from(11 - i) * 1000.0)
        })
        .collect();

    let classifier = Choropleth::new().adapter(Batch).build().unwrap();
    let rent = classifier.classify_regions(&regions, "RENT");
    let income = classifier.classify_regions(&regions, "INCOME");

    assert_eq!(rent.breaks().range(), Some((100.0, 1000.0)));
    assert_eq!(income.breaks().range(), Some((1000.0, 10000.0)));

    let missing = classifier.classify_regions(&regions, "POPULATION");
    assert!(missing.breaks().is_empty());
}

#[test]
fn test_observation_set_from_regions_filters_and_keeps_order() {
    let mut regions = counties();
    regions.push(Region::new("9").with_attribute("RENT", 100.0));
    regions.push(Region::new("10").with_attribute("RENT", -5.0));
    regions.push(Region::new("11").with_attribute("RENT", f64::NAN));

    let set = ObservationSet::from_regions(&regions, "RENT");
    assert_eq!(
        set.as_slice(),
        &[100.0, 200.0, 300.0, 900.0, 950.0, 1000.0, 100.0]
    );
}

#[test]
fn test_custom_palette_and_class_count() {
    let values = vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0];

    let symbology = Choropleth::new()
        .classes(2)
        .palette_hex(&["#fee0d2", "#de2d26"], "#cccccc")
        .adapter(Batch)
        .build()
        .unwrap()
        .classify(&values)
        .unwrap();

    let breaks = symbology.breaks().as_slice();
    assert_eq!(breaks, &[Break::new(1.0, 3.0), Break::new(10.0, 12.0)]);
    assert_eq!(symbology.color_of(2.0).to_hex(), "#fee0d2");
    assert_eq!(symbology.color_of(11.0).to_hex(), "#de2d26");
    assert_eq!(symbology.color_of(-1.0).to_hex(), "#cccccc");

    let d = symbology.diagnostics();
    assert_abs_diff_eq!(d.sdcm, 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(d.sdam, 125.5, epsilon = 1e-9);
    assert_abs_diff_eq!(d.gvf, 1.0 - 4.0 / 125.5, epsilon = 1e-9);
    assert_eq!(d.counts, vec![3, 3]);
}

#[test]
fn test_builder_validation() {
    let zero = Choropleth::new().classes(0).adapter(Batch).build();
    assert_eq!(zero.unwrap_err(), ChoroplethError::InvalidClassCount(0));

    let mismatch = Choropleth::new().classes(3).adapter(Batch).build();
    assert_eq!(
        mismatch.unwrap_err(),
        ChoroplethError::PaletteMismatch {
            expected: 3,
            actual: 5
        }
    );

    let bad_color = Choropleth::new()
        .classes(1)
        .palette_hex(&["#zzzzzz"], "#cccccc")
        .adapter(Batch)
        .build();
    assert_eq!(
        bad_color.unwrap_err(),
        ChoroplethError::InvalidColor("#zzzzzz".to_string())
    );
}

#[test]
fn test_serializes_layer_to_json() {
    let layer = Choropleth::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .render(&counties(), "RENT");

    let json = serde_json::to_value(&layer).unwrap();
    assert_eq!(json["legend"][0]["color"], "#d3d3d3");
    assert!(json["legend"][0]["low"].is_null());
    assert_eq!(json["regions"][5]["fill"], "#08519c");
    assert_eq!(json["regions"][7]["value"], serde_json::Value::Null);
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_integration() {
    use ndarray::Array1;

    let values = Array1::from_vec(vec![100.0, 200.0, 300.0, 900.0, 950.0, 1000.0]);
    let symbology = Choropleth::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .classify(&values)
        .unwrap();

    assert_eq!(symbology.breaks().len(), 5);
    assert_eq!(symbology.color_of(1000.0), BLUES[4]);
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_non_contiguous_rejected() {
    use ndarray::{s, Array1};

    let values = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let strided = values.slice(s![..;2]);

    let result = Choropleth::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .classify(&strided);

    assert!(matches!(result, Err(ChoroplethError::InvalidInput(_))));
}
