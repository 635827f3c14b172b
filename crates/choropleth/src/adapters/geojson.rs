//! GeoJSON property intake.
//!
//! ## Purpose
//!
//! This module reads a GeoJSON `FeatureCollection` into `Region` records:
//! one region per feature, with its numeric properties as attributes.
//!
//! ## Design notes
//!
//! * **Properties only**: Geometry is skipped during deserialization.
//! * **Lenient values**: Non-numeric properties are not attributes, so they
//!   read as missing during extraction.
//! * **Identifiers**: The feature `id` when present, else the feature's
//!   position in the collection.
//!
//! ## Non-goals
//!
//! * This module does not fetch documents or validate geometry.

// External dependencies
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;
use tracing::{trace, warn};

// Internal dependencies
use crate::input::Region;
use crate::primitives::errors::ChoroplethError;

/// Property holding region display names in US Census boundary files.
pub const DEFAULT_NAME_KEY: &str = "NAME";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

/// Parse a FeatureCollection document into regions.
pub fn regions_from_str(text: &str, name_key: &str) -> Result<Vec<Region<f64>>, ChoroplethError> {
    let collection: FeatureCollection =
        serde_json::from_str(text).map_err(|e| ChoroplethError::InvalidGeoJson(e.to_string()))?;
    regions_from_collection(collection, name_key)
}

/// Parse a FeatureCollection from a reader into regions.
pub fn regions_from_reader<R: Read>(
    reader: R,
    name_key: &str,
) -> Result<Vec<Region<f64>>, ChoroplethError> {
    let collection: FeatureCollection = serde_json::from_reader(reader)
        .map_err(|e| ChoroplethError::InvalidGeoJson(e.to_string()))?;
    regions_from_collection(collection, name_key)
}

fn regions_from_collection(
    collection: FeatureCollection,
    name_key: &str,
) -> Result<Vec<Region<f64>>, ChoroplethError> {
    if collection.kind != "FeatureCollection" {
        return Err(ChoroplethError::InvalidGeoJson(format!(
            "expected a FeatureCollection, found `{}`",
            collection.kind
        )));
    }

    let regions: Vec<Region<f64>> = collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| feature_to_region(index, feature, name_key))
        .collect();

    trace!(regions = regions.len(), "read GeoJSON feature collection");
    Ok(regions)
}

fn feature_to_region(index: usize, feature: Feature, name_key: &str) -> Region<f64> {
    let id = match feature.id {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => index.to_string(),
    };
    let mut region = Region::new(id);

    let Some(properties) = feature.properties else {
        warn!(feature = index, "feature has no properties; every attribute is missing");
        return region;
    };

    if let Some(name) = properties.get(name_key).and_then(Value::as_str) {
        region.name = name.to_string();
    }
    for (key, value) in properties {
        if let Some(number) = value.as_f64() {
            region.attributes.insert(key, number);
        }
    }
    region
}
