//! KML document fixtures for import tests.

/// A KML document with two named folders and one empty folder.
///
/// Layout:
/// - "Parcels": one 3D polygon and one 3D point (Z coordinates present)
/// - "Tracks": one 2D line string
/// - "Empty": no placemarks, must be skipped by the importer
pub const MULTI_LAYER_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>farmlands</name>
    <Folder>
      <name>Parcels</name>
      <Placemark>
        <name>north field</name>
        <description>maize</description>
        <Polygon>
          <outerBoundaryIs>
            <LinearRing>
              <coordinates>
                -99.06,20.14,120 -99.05,20.14,121 -99.05,20.15,119 -99.06,20.15,120 -99.06,20.14,120
              </coordinates>
            </LinearRing>
          </outerBoundaryIs>
        </Polygon>
      </Placemark>
      <Placemark>
        <name>well</name>
        <Point>
          <coordinates>-99.0557,20.1442,118.5</coordinates>
        </Point>
      </Placemark>
    </Folder>
    <Folder>
      <name>Tracks</name>
      <Placemark>
        <name>access road</name>
        <LineString>
          <coordinates>
            -99.060,20.140 -99.058,20.142 -99.055,20.143
          </coordinates>
        </LineString>
      </Placemark>
    </Folder>
    <Folder>
      <name>Empty</name>
    </Folder>
  </Document>
</kml>
"#;

/// A KML document with a single anonymous placemark at the document root.
pub const LOOSE_PLACEMARK_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <Point>
        <coordinates>-99.0,20.1,10</coordinates>
      </Point>
    </Placemark>
  </Document>
</kml>
"#;
