use choropleth::internals::engine::executor::{ClassifierExecutor, Classification};
use choropleth::internals::evaluation::diagnostics::Diagnostics;
use choropleth::prelude::*;

fn blues_for(values: &[f64]) -> Symbology<f64> {
    Symbology::new(
        ClassifierExecutor::new(5, false).classify(values),
        ColorScale::blues(),
    )
}

/// Two bands sharing the boundary value 2.0.
fn shared_boundary() -> Symbology<f64> {
    let sorted = [1.0, 2.0, 2.0, 3.0];
    let groups = [(0, 1), (2, 3)];
    let breaks = BreakSet::from_groups(&sorted, &groups, 2);
    let diagnostics = Diagnostics::compute(&sorted, &groups, &breaks, 3);
    let classification = Classification {
        breaks,
        diagnostics,
    };
    let scale = ColorScale::from_hex(&["#ffffff", "#000000"], "#888888").unwrap();
    Symbology::new(classification, scale)
}

#[test]
fn test_boundary_value_takes_higher_band() {
    let symbology = shared_boundary();
    assert_eq!(symbology.breaks().as_slice()[0], Break::new(1.0, 2.0));
    assert_eq!(symbology.breaks().as_slice()[1], Break::new(2.0, 3.0));

    assert_eq!(symbology.band_for(Some(2.0)), Band::Class(1));
    assert_eq!(symbology.color_of(2.0).to_hex(), "#000000");
    assert_eq!(symbology.color_of(1.5).to_hex(), "#ffffff");

    // Both copies of the boundary value are counted where they are painted
    assert_eq!(symbology.diagnostics().counts, vec![1, 3]);
}

#[test]
fn test_value_at_band_low_uses_that_band() {
    let symbology = blues_for(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 50.0, 100.0, 500.0, 501.0]);
    for (index, band) in symbology.breaks().iter().enumerate() {
        assert_eq!(symbology.band_for(Some(band.low)), Band::Class(index));
        assert_eq!(symbology.color_of(band.low), BLUES[index]);
    }
}

#[test]
fn test_value_between_bands_uses_lower_band() {
    let symbology = blues_for(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 50.0, 100.0, 500.0, 501.0]);
    let breaks = symbology.breaks().as_slice();
    let gap = (breaks[0].high + breaks[1].low) / 2.0;
    assert_eq!(symbology.band_for(Some(gap)), Band::Class(0));
}

#[test]
fn test_values_outside_observed_range() {
    let symbology = blues_for(&[100.0, 200.0, 300.0, 900.0, 950.0, 1000.0]);

    // Below the lowest band still resolves to it
    assert_eq!(symbology.color_of(50.0), BLUES[0]);
    // Above the highest band resolves to the darkest color
    assert_eq!(symbology.color_of(5000.0), BLUES[4]);
}

#[test]
fn test_invalid_values_resolve_to_missing() {
    let symbology = blues_for(&[100.0, 200.0, 300.0, 900.0, 950.0, 1000.0]);

    for value in [0.0, -1.0, -500.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(symbology.band_for(Some(value)), Band::Missing);
        assert_eq!(symbology.color_of(value), NO_DATA);
    }
    assert_eq!(symbology.color_for(None), NO_DATA);
}

#[test]
fn test_empty_classification_is_all_missing() {
    let symbology = blues_for(&[]);

    assert_eq!(symbology.color_of(100.0), NO_DATA);
    assert_eq!(symbology.band_for(Some(100.0)), Band::Missing);

    let legend = symbology.legend_entries();
    assert_eq!(legend.len(), 1);
    assert!(legend[0].is_missing());
}

#[test]
fn test_constant_input_uses_darkest_color() {
    let symbology = blues_for(&[500.0, 500.0, 500.0]);

    assert_eq!(symbology.color_of(500.0), BLUES[4]);
    assert_eq!(symbology.color_of(10.0), BLUES[0]);

    let legend = symbology.legend_entries();
    assert_eq!(legend.len(), 6);
    for entry in &legend[1..] {
        assert_eq!(entry.low, Some(500.0));
        assert_eq!(entry.high, Some(500.0));
        assert_eq!(entry.color, BLUES[4]);
    }
}

#[test]
fn test_legend_order_and_colors() {
    let symbology = blues_for(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 50.0, 100.0, 500.0, 501.0]);
    let legend = symbology.legend_entries();

    assert_eq!(legend.len(), 6);
    assert_eq!(legend[0].color, NO_DATA);
    assert_eq!(legend[0].low, None);
    assert_eq!(legend[0].high, None);

    for (entry, (band, color)) in legend[1..]
        .iter()
        .zip(symbology.breaks().iter().zip(BLUES.iter()))
    {
        assert_eq!(entry.low, Some(band.low));
        assert_eq!(entry.high, Some(band.high));
        assert_eq!(entry.color, *color);
        assert!(!entry.is_missing());
    }
}

#[test]
fn test_region_style_without_name_uses_id() {
    let symbology = blues_for(&[1.0, 2.0, 3.0]);
    let style = symbology.style(&Region::new("06037"), "RENT");

    assert_eq!(style.id, "06037");
    assert_eq!(style.name, "06037");
    assert_eq!(style.band, Band::Missing);
    assert_eq!(style.fill, NO_DATA);
    assert_eq!(style.value, None);
}

#[test]
fn test_color_hex_parsing() {
    assert_eq!(Color::from_hex("#08519c").unwrap(), BLUES[4]);
    assert_eq!(Color::from_hex("08519C").unwrap(), BLUES[4]);
    assert_eq!(Color::from_hex("#fff").unwrap(), Color::rgb(255, 255, 255));
    assert_eq!(BLUES[4].to_hex(), "#08519c");
    assert_eq!(NO_DATA.to_string(), "#d3d3d3");
    assert_eq!("#d3d3d3".parse::<Color>().unwrap(), NO_DATA);

    for bad in [
        "", "#", "#12", "#12345", "#1234567", "#gggggg", "red", "#+f+f+f", "+ff", "#-1-1-1",
    ] {
        assert_eq!(
            Color::from_hex(bad),
            Err(ChoroplethError::InvalidColor(bad.to_string()))
        );
    }
}

#[test]
fn test_color_scale_validation() {
    assert_eq!(
        ColorScale::new(Vec::new(), NO_DATA),
        Err(ChoroplethError::EmptyPalette)
    );

    let scale = ColorScale::blues();
    assert_eq!(scale.len(), 5);
    assert_eq!(scale.classes(), &BLUES);
    assert_eq!(scale.missing(), NO_DATA);
    assert_eq!(scale.class_color(99), BLUES[4]);
    assert_eq!(ColorScale::default(), scale);
}
