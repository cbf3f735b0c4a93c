//! KML layer enumeration.
//!
//! A "layer" is any Document or Folder that directly contains placemarks,
//! named by its `<name>` element. Loose placemarks at the document root
//! form one unnamed layer.

use std::path::Path;

use kml::types::Placemark;
use kml::Kml;
use tracing::warn;

use crate::error::ImportResult;
use crate::geometry::flatten_geometry;

/// Fallback name for containers without a `<name>` element.
const UNTITLED: &str = "untitled";

/// One enumerated KML layer with its converted features.
#[derive(Debug, Clone)]
pub struct VectorLayer {
    pub name: String,
    pub features: Vec<LayerFeature>,
}

/// A feature before layer tagging.
#[derive(Debug, Clone)]
pub struct LayerFeature {
    pub name: Option<String>,
    pub description: Option<String>,
    pub geometry: geo_types::Geometry<f64>,
}

/// Read and enumerate all layers of a KML file.
pub fn read_layers(path: &Path) -> ImportResult<Vec<VectorLayer>> {
    let content = std::fs::read_to_string(path)?;
    read_layers_from_str(&content)
}

/// Enumerate all layers of a KML document string.
pub fn read_layers_from_str(content: &str) -> ImportResult<Vec<VectorLayer>> {
    let document: Kml<f64> = content.parse()?;

    let mut layers = Vec::new();
    let mut loose = Vec::new();
    walk(&document, &mut layers, &mut loose);

    if !loose.is_empty() {
        layers.insert(
            0,
            VectorLayer {
                name: UNTITLED.to_string(),
                features: loose,
            },
        );
    }

    Ok(layers)
}

/// Walk the KML tree in document order, collecting one layer per
/// container and converting placemark geometry along the way.
fn walk(node: &Kml<f64>, layers: &mut Vec<VectorLayer>, loose: &mut Vec<LayerFeature>) {
    match node {
        Kml::KmlDocument(doc) => {
            for element in doc.elements.iter() {
                walk(element, layers, loose);
            }
        }
        Kml::Document { elements, .. } | Kml::Folder { elements, .. } => {
            let name = container_name(elements).unwrap_or_else(|| UNTITLED.to_string());

            let mut features = Vec::new();
            for element in elements {
                if let Kml::Placemark(placemark) = element {
                    if let Some(feature) = convert_placemark(&name, placemark) {
                        features.push(feature);
                    }
                }
            }
            layers.push(VectorLayer { name, features });

            for element in elements {
                match element {
                    Kml::Document { .. } | Kml::Folder { .. } | Kml::KmlDocument(_) => {
                        walk(element, layers, loose);
                    }
                    _ => {}
                }
            }
        }
        Kml::Placemark(placemark) => {
            if let Some(feature) = convert_placemark(UNTITLED, placemark) {
                loose.push(feature);
            }
        }
        _ => {}
    }
}

/// Pull a container's `<name>` out of its child elements.
fn container_name(elements: &[Kml<f64>]) -> Option<String> {
    elements.iter().find_map(|el| match el {
        Kml::Element(e) if e.name == "name" => e.content.clone(),
        _ => None,
    })
}

/// Convert one placemark, skipping it with a warning when it has no
/// geometry or an unsupported one.
fn convert_placemark(layer: &str, placemark: &Placemark<f64>) -> Option<LayerFeature> {
    let Some(geometry) = placemark.geometry.as_ref() else {
        warn!(
            layer,
            placemark = placemark.name.as_deref().unwrap_or(""),
            "placemark has no geometry, skipping"
        );
        return None;
    };

    match flatten_geometry(geometry) {
        Ok(geometry) => Some(LayerFeature {
            name: placemark.name.clone(),
            description: placemark.description.clone(),
            geometry,
        }),
        Err(e) => {
            warn!(
                layer,
                placemark = placemark.name.as_deref().unwrap_or(""),
                error = %e,
                "failed to convert placemark geometry, skipping"
            );
            None
        }
    }
}
