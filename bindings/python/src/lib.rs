//! Python bindings for choropleth.
//!
//! Provides Python access to the choropleth Rust library via PyO3.

#![deny(missing_docs)]

use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::fmt::Display;

use ::choropleth::prelude::{
    regions_from_str, Batch, BatchChoropleth, Choropleth, Color, ColorScale, LegendEntry,
    RegionStyle, Symbology, BLUES, NO_DATA,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a ChoroplethError to a PyErr
fn to_py_error(e: impl Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Validate a class count coming from Python
fn parse_classes(classes: i64) -> PyResult<usize> {
    usize::try_from(classes).map_err(|_| {
        PyValueError::new_err(format!(
            "class count must be a non-negative integer, got {}",
            classes
        ))
    })
}

/// Build the palette from optional hex tokens
fn parse_palette(palette: Option<Vec<String>>, missing: Option<&str>) -> PyResult<ColorScale> {
    let missing = match missing {
        Some(token) => Color::from_hex(token).map_err(to_py_error)?,
        None => NO_DATA,
    };
    let classes = match palette {
        Some(tokens) => tokens
            .iter()
            .map(|token| Color::from_hex(token))
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_py_error)?,
        None => BLUES.to_vec(),
    };
    ColorScale::new(classes, missing).map_err(to_py_error)
}

/// Build a validated batch classifier
fn build_classifier(
    classes: i64,
    palette: Option<Vec<String>>,
    missing: Option<&str>,
    parallel: bool,
) -> PyResult<BatchChoropleth> {
    Choropleth::new()
        .classes(parse_classes(classes)?)
        .palette(parse_palette(palette, missing)?)
        .adapter(Batch)
        .parallel(parallel)
        .build()
        .map_err(to_py_error)
}

/// Legend entries as `(color, low, high)` tuples
fn legend_tuples(entries: &[LegendEntry<f64>]) -> Vec<(String, Option<f64>, Option<f64>)> {
    entries
        .iter()
        .map(|e| (e.color.to_hex(), e.low, e.high))
        .collect()
}

// ============================================================================
// Python Classes
// ============================================================================

/// Fit statistics of a classification.
#[pyclass(name = "Diagnostics")]
#[derive(Clone)]
pub struct PyDiagnostics {
    /// Number of observations classified
    #[pyo3(get)]
    pub observations: usize,

    /// Number of distinct observation values
    #[pyo3(get)]
    pub distinct: usize,

    /// Squared deviations about the array mean
    #[pyo3(get)]
    pub sdam: f64,

    /// Squared deviations about the class means
    #[pyo3(get)]
    pub sdcm: f64,

    /// Goodness of variance fit
    #[pyo3(get)]
    pub gvf: f64,

    /// Observations per band
    #[pyo3(get)]
    pub counts: Vec<usize>,
}

#[pymethods]
impl PyDiagnostics {
    fn __repr__(&self) -> String {
        format!(
            "Diagnostics(observations={}, distinct={}, gvf={:.6})",
            self.observations, self.distinct, self.gvf
        )
    }
}

/// Classification bands paired with a palette.
#[pyclass(name = "Symbology")]
pub struct PySymbology {
    inner: Symbology<f64>,
}

#[pymethods]
impl PySymbology {
    /// Bands as `(low, high)` tuples, ascending
    #[getter]
    fn breaks(&self) -> Vec<(f64, f64)> {
        self.inner.breaks().iter().map(|b| (b.low, b.high)).collect()
    }

    /// Hex color for a value; None, zero, negative and NaN map to the missing color
    #[pyo3(signature = (value=None))]
    fn color_for(&self, value: Option<f64>) -> String {
        self.inner.color_for(value).to_hex()
    }

    /// Hex colors for an array of values
    fn colors_for(&self, values: PyReadonlyArray1<'_, f64>) -> PyResult<Vec<String>> {
        let slice = values.as_slice().map_err(to_py_error)?;
        Ok(slice.iter().map(|&v| self.inner.color_of(v).to_hex()).collect())
    }

    /// Legend as `(color, low, high)` tuples, missing entry first
    fn legend(&self) -> Vec<(String, Option<f64>, Option<f64>)> {
        legend_tuples(&self.inner.legend_entries())
    }

    /// Fit statistics
    #[getter]
    fn diagnostics(&self) -> PyDiagnostics {
        let d = self.inner.diagnostics();
        PyDiagnostics {
            observations: d.observations,
            distinct: d.distinct,
            sdam: d.sdam,
            sdcm: d.sdcm,
            gvf: d.gvf,
            counts: d.counts.clone(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Symbology(classes={}, effective={})",
            self.inner.breaks().classes(),
            self.inner.breaks().effective_classes()
        )
    }
}

/// Styling of one region.
#[pyclass(name = "RegionStyle")]
#[derive(Clone)]
pub struct PyRegionStyle {
    /// Region identifier
    #[pyo3(get)]
    pub id: String,

    /// Region display name
    #[pyo3(get)]
    pub name: String,

    /// Hex fill color
    #[pyo3(get)]
    pub fill: String,

    /// Attribute value, None when missing
    #[pyo3(get)]
    pub value: Option<f64>,
}

impl From<RegionStyle<f64>> for PyRegionStyle {
    fn from(style: RegionStyle<f64>) -> Self {
        Self {
            id: style.id,
            name: style.name,
            fill: style.fill.to_hex(),
            value: style.value,
        }
    }
}

#[pymethods]
impl PyRegionStyle {
    fn __repr__(&self) -> String {
        format!("RegionStyle(id={:?}, fill={})", self.id, self.fill)
    }
}

/// A styled attribute layer.
#[pyclass(name = "ChoroplethLayer")]
pub struct PyChoroplethLayer {
    /// Attribute the layer was built from
    #[pyo3(get)]
    pub attribute: String,

    /// Per-region styles in feature order
    #[pyo3(get)]
    pub regions: Vec<PyRegionStyle>,

    /// Legend as `(color, low, high)` tuples, missing entry first
    #[pyo3(get)]
    pub legend: Vec<(String, Option<f64>, Option<f64>)>,

    /// Bands as `(low, high)` tuples, ascending
    #[pyo3(get)]
    pub breaks: Vec<(f64, f64)>,
}

// ============================================================================
// Python Functions
// ============================================================================

/// Classify values into natural-breaks bands.
///
/// Parameters
/// ----------
/// values : array_like
///     Attribute values; zero, negative and NaN are treated as missing.
/// classes : int, optional
///     Number of classes (default: 5).
/// palette : list of str, optional
///     Hex class colors, lightest first; must match `classes`.
/// missing : str, optional
///     Hex color for missing data (default: "#d3d3d3").
/// parallel : bool, optional
///     Enable parallel execution (default: True).
///
/// Returns
/// -------
/// Symbology
///     Bands, color lookup and legend.
#[pyfunction]
#[pyo3(signature = (values, classes=5, palette=None, missing=None, parallel=true))]
fn classify(
    values: PyReadonlyArray1<'_, f64>,
    classes: i64,
    palette: Option<Vec<String>>,
    missing: Option<&str>,
    parallel: bool,
) -> PyResult<PySymbology> {
    let classifier = build_classifier(classes, palette, missing, parallel)?;
    let slice = values.as_slice().map_err(to_py_error)?;
    let inner = classifier.classify(slice).map_err(to_py_error)?;
    Ok(PySymbology { inner })
}

/// Classify an attribute of a GeoJSON FeatureCollection and style its features.
///
/// Parameters
/// ----------
/// text : str
///     GeoJSON FeatureCollection document.
/// attribute : str
///     Property to classify.
/// name_key : str, optional
///     Property holding display names (default: "NAME").
/// classes, palette, missing, parallel
///     As for `classify`.
///
/// Returns
/// -------
/// ChoroplethLayer
///     Region styles, legend and bands.
#[pyfunction]
#[pyo3(signature = (text, attribute, name_key="NAME", classes=5, palette=None, missing=None, parallel=true))]
fn classify_geojson(
    text: &str,
    attribute: &str,
    name_key: &str,
    classes: i64,
    palette: Option<Vec<String>>,
    missing: Option<&str>,
    parallel: bool,
) -> PyResult<PyChoroplethLayer> {
    let classifier = build_classifier(classes, palette, missing, parallel)?;
    let regions = regions_from_str(text, name_key).map_err(to_py_error)?;
    let layer = classifier.render(&regions, attribute);

    Ok(PyChoroplethLayer {
        attribute: layer.attribute,
        breaks: layer
            .symbology
            .breaks()
            .iter()
            .map(|b| (b.low, b.high))
            .collect(),
        legend: legend_tuples(&layer.legend),
        regions: layer.regions.into_iter().map(PyRegionStyle::from).collect(),
    })
}

// ============================================================================
// Module Registration
// ============================================================================

/// pychoropleth: Natural-breaks classification for choropleth maps.
#[pymodule]
fn pychoropleth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySymbology>()?;
    m.add_class::<PyDiagnostics>()?;
    m.add_class::<PyRegionStyle>()?;
    m.add_class::<PyChoroplethLayer>()?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(classify_geojson, m)?)?;
    Ok(())
}
