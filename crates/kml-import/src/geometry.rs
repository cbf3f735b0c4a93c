//! Conversion of KML geometry to 2D geo-types geometry.
//!
//! KML coordinates may carry an altitude; the target table is 2D, so the
//! Z coordinate is dropped during conversion.

use geo_types::{Coord, Geometry, GeometryCollection, LineString, Point, Polygon};
use kml::types::{Coord as KmlCoord, Geometry as KmlGeometry, LinearRing};

use crate::error::{ImportError, ImportResult};

/// Drop the altitude from a KML coordinate.
fn coord_2d(c: &KmlCoord<f64>) -> Coord<f64> {
    Coord { x: c.x, y: c.y }
}

fn line_2d(coords: &[KmlCoord<f64>]) -> LineString<f64> {
    LineString::from(coords.iter().map(coord_2d).collect::<Vec<_>>())
}

fn ring_2d(ring: &LinearRing<f64>) -> LineString<f64> {
    line_2d(&ring.coords)
}

/// Convert a KML geometry to its 2D geo-types counterpart.
///
/// Linear rings outside a polygon become closed line strings; a
/// MultiGeometry becomes a GeometryCollection, converted recursively.
pub fn flatten_geometry(geometry: &KmlGeometry<f64>) -> ImportResult<Geometry<f64>> {
    match geometry {
        KmlGeometry::Point(p) => Ok(Geometry::Point(Point::from(coord_2d(&p.coord)))),
        KmlGeometry::LineString(ls) => Ok(Geometry::LineString(line_2d(&ls.coords))),
        KmlGeometry::LinearRing(ring) => Ok(Geometry::LineString(ring_2d(ring))),
        KmlGeometry::Polygon(poly) => {
            let exterior = ring_2d(&poly.outer);
            let interiors = poly.inner.iter().map(ring_2d).collect();
            Ok(Geometry::Polygon(Polygon::new(exterior, interiors)))
        }
        KmlGeometry::MultiGeometry(multi) => {
            let geometries = multi
                .geometries
                .iter()
                .map(flatten_geometry)
                .collect::<ImportResult<Vec<_>>>()?;
            Ok(Geometry::GeometryCollection(GeometryCollection(
                geometries,
            )))
        }
        other => Err(ImportError::UnsupportedGeometry(format!("{other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kml::types::{LineString as KmlLineString, MultiGeometry, Point as KmlPoint};

    fn coord(x: f64, y: f64, z: Option<f64>) -> KmlCoord<f64> {
        KmlCoord { x, y, z }
    }

    fn point(x: f64, y: f64, z: Option<f64>) -> KmlPoint<f64> {
        KmlPoint {
            coord: coord(x, y, z),
            ..Default::default()
        }
    }

    #[test]
    fn test_point_z_dropped() {
        let flat =
            flatten_geometry(&KmlGeometry::Point(point(-99.0557, 20.1442, Some(118.5)))).unwrap();

        match flat {
            Geometry::Point(p) => {
                assert_eq!(p.x(), -99.0557);
                assert_eq!(p.y(), 20.1442);
            }
            other => panic!("expected point, got {other:?}"),
        }
    }

    #[test]
    fn test_line_string_z_dropped() {
        let kml_line = KmlLineString {
            coords: vec![
                coord(0.0, 0.0, Some(10.0)),
                coord(1.0, 1.0, Some(20.0)),
                coord(2.0, 1.5, None),
            ],
            ..Default::default()
        };
        let flat = flatten_geometry(&KmlGeometry::LineString(kml_line)).unwrap();

        match flat {
            Geometry::LineString(ls) => {
                assert_eq!(ls.0.len(), 3);
                assert_eq!(ls.0[1], Coord { x: 1.0, y: 1.0 });
            }
            other => panic!("expected line string, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_geometry_recurses() {
        let multi = MultiGeometry {
            geometries: vec![
                KmlGeometry::Point(point(1.0, 2.0, Some(3.0))),
                KmlGeometry::Point(point(4.0, 5.0, None)),
            ],
            ..Default::default()
        };
        let flat = flatten_geometry(&KmlGeometry::MultiGeometry(multi)).unwrap();

        match flat {
            Geometry::GeometryCollection(gc) => assert_eq!(gc.0.len(), 2),
            other => panic!("expected collection, got {other:?}"),
        }
    }
}
