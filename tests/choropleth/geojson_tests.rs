use choropleth::prelude::*;

const COUNTIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": "01001",
      "properties": { "NAME": "Autauga", "RENT": 850, "INCOME": 58731.5 },
      "geometry": { "type": "Point", "coordinates": [-86.6, 32.5] }
    },
    {
      "type": "Feature",
      "id": 1003,
      "properties": { "NAME": "Baldwin", "RENT": 1020, "INCOME": 61756 },
      "geometry": null
    },
    {
      "type": "Feature",
      "properties": { "NAME": "Barbour", "RENT": null, "INCOME": "N/A" },
      "geometry": null
    },
    {
      "type": "Feature",
      "properties": { "NAME": "Bibb", "RENT": 0, "INCOME": 48000 }
    },
    {
      "type": "Feature",
      "properties": null
    }
  ]
}"#;

#[test]
fn test_reads_regions_in_feature_order() {
    let regions = regions_from_str(COUNTIES, DEFAULT_NAME_KEY).unwrap();
    assert_eq!(regions.len(), 5);

    assert_eq!(regions[0].id, "01001");
    assert_eq!(regions[0].name, "Autauga");
    assert_eq!(regions[1].id, "1003");
    assert_eq!(regions[2].id, "2");
    assert_eq!(regions[2].name, "Barbour");
    assert_eq!(regions[4].id, "4");
    assert_eq!(regions[4].name, "4");
}

#[test]
fn test_numeric_properties_become_attributes() {
    let regions = regions_from_str(COUNTIES, DEFAULT_NAME_KEY).unwrap();

    assert_eq!(regions[0].attribute("RENT"), Some(850.0));
    assert_eq!(regions[0].attribute("INCOME"), Some(58731.5));
    assert_eq!(regions[0].attribute("NAME"), None);
    assert_eq!(regions[2].attribute("RENT"), None);
    assert_eq!(regions[2].attribute("INCOME"), None);
    assert_eq!(regions[3].attribute("RENT"), Some(0.0));
    assert!(regions[4].attributes.is_empty());
}

#[test]
fn test_custom_name_key() {
    let text = r#"{
      "type": "FeatureCollection",
      "features": [
        { "type": "Feature", "properties": { "county": "Cook", "NAME": "x", "RENT": 1 } }
      ]
    }"#;
    let regions = regions_from_str(text, "county").unwrap();
    assert_eq!(regions[0].name, "Cook");
}

#[test]
fn test_reader_matches_str() {
    let from_reader = regions_from_reader(COUNTIES.as_bytes(), DEFAULT_NAME_KEY).unwrap();
    let from_str = regions_from_str(COUNTIES, DEFAULT_NAME_KEY).unwrap();
    assert_eq!(from_reader, from_str);
}

#[test]
fn test_render_geojson_layer() {
    let regions = regions_from_str(COUNTIES, DEFAULT_NAME_KEY).unwrap();
    let layer = Choropleth::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .render(&regions, "RENT");

    let observations = ObservationSet::from_regions(&regions, "RENT");
    assert_eq!(observations.as_slice(), &[850.0, 1020.0]);

    assert_eq!(layer.regions[0].fill, BLUES[0]);
    assert_eq!(layer.regions[1].fill, BLUES[4]);
    for style in &layer.regions[2..] {
        assert_eq!(style.fill, NO_DATA);
        assert_eq!(style.band, Band::Missing);
    }
}

#[test]
fn test_empty_collection() {
    let regions =
        regions_from_str(r#"{ "type": "FeatureCollection", "features": [] }"#, "NAME").unwrap();
    assert!(regions.is_empty());

    let layer = Choropleth::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .render(&regions, "RENT");
    assert!(layer.regions.is_empty());
    assert_eq!(layer.legend.len(), 1);
}

#[test]
fn test_rejects_malformed_documents() {
    let not_json = regions_from_str("{ not json", "NAME");
    assert!(matches!(not_json, Err(ChoroplethError::InvalidGeoJson(_))));

    let wrong_type = regions_from_str(r#"{ "type": "Feature", "properties": {} }"#, "NAME");
    assert!(matches!(wrong_type, Err(ChoroplethError::InvalidGeoJson(_))));

    let missing_type = regions_from_str(r#"{ "features": [] }"#, "NAME");
    assert!(matches!(missing_type, Err(ChoroplethError::InvalidGeoJson(_))));
}
