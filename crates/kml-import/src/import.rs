//! Layer combination and the end-to-end import pipeline.

use std::path::Path;

use tracing::info;

use crate::error::{ImportError, ImportResult};
use crate::postgis::PostgisWriter;
use crate::read::{read_layers, VectorLayer};

/// A feature tagged with its source-layer name, ready for the database.
#[derive(Debug, Clone)]
pub struct Feature {
    pub layer_name: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub geometry: geo_types::Geometry<f64>,
}

/// Concatenate all non-empty layers into one flat feature table,
/// tagging each feature with its source-layer name and preserving
/// per-layer row order. Zero surviving features is fatal.
pub fn combine_layers(layers: Vec<VectorLayer>) -> ImportResult<Vec<Feature>> {
    let mut combined = Vec::new();

    for layer in layers {
        if layer.features.is_empty() {
            info!(layer = %layer.name, "skipping empty layer");
            continue;
        }

        info!(
            layer = %layer.name,
            features = layer.features.len(),
            "read layer"
        );

        for feature in layer.features {
            combined.push(Feature {
                layer_name: layer.name.clone(),
                name: feature.name,
                description: feature.description,
                geometry: feature.geometry,
            });
        }
    }

    if combined.is_empty() {
        return Err(ImportError::NoLayers);
    }

    Ok(combined)
}

/// Import every layer of a KML file into one PostGIS table, replacing
/// any prior table of the same name.
pub async fn import_kml(path: &Path, database_url: &str, table: &str) -> ImportResult<usize> {
    let layers = read_layers(path)?;
    let features = combine_layers(layers)?;

    info!(total = features.len(), "combined features from all layers");

    let writer = PostgisWriter::connect(database_url).await?;
    writer.replace_table(table, &features).await?;

    info!(table, total = features.len(), "imported features");
    Ok(features.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::read_layers_from_str;
    use test_utils::MULTI_LAYER_KML;

    #[test]
    fn test_combine_skips_empty_layers_and_tags_features() {
        let layers = read_layers_from_str(MULTI_LAYER_KML).unwrap();
        let features = combine_layers(layers).unwrap();

        assert_eq!(features.len(), 3);
        let tags: Vec<&str> = features.iter().map(|f| f.layer_name.as_str()).collect();
        assert_eq!(tags, vec!["Parcels", "Parcels", "Tracks"]);
    }

    #[test]
    fn test_combine_preserves_row_order() {
        let layers = read_layers_from_str(MULTI_LAYER_KML).unwrap();
        let features = combine_layers(layers).unwrap();
        assert_eq!(features[0].name.as_deref(), Some("north field"));
        assert_eq!(features[1].name.as_deref(), Some("well"));
        assert_eq!(features[2].name.as_deref(), Some("access road"));
    }

    #[test]
    fn test_combine_with_no_features_is_fatal() {
        let layers = vec![
            VectorLayer {
                name: "a".to_string(),
                features: vec![],
            },
            VectorLayer {
                name: "b".to_string(),
                features: vec![],
            },
        ];
        assert!(matches!(
            combine_layers(layers),
            Err(ImportError::NoLayers)
        ));
    }
}
