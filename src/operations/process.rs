use super::cut::{LineCutter, PolygonCutter};
use crate::error::Result;
use crate::geometry::{Feature, FeatureCollection, GeoJson, Geometry, LineString, Polygon};
use crate::options::ProcessingOptions;

/// Walks a GeoJSON object graph and applies the RFC 7946 rules selected by
/// a [`ProcessingOptions`] value.
///
/// Every method consumes its input and returns the processed value. Polygons
/// get their winding fixed or validated, then lines and polygons that cross
/// the antimeridian are replaced by their multi-part equivalents. With every
/// option off the walk is the identity.
pub struct ComplianceProcessor<'a> {
    options: &'a ProcessingOptions,
}

impl<'a> ComplianceProcessor<'a> {
    /// Creates a new `ComplianceProcessor`.
    #[must_use]
    pub fn new(options: &'a ProcessingOptions) -> Self {
        Self { options }
    }

    /// Processes any top-level GeoJSON object.
    ///
    /// # Errors
    ///
    /// Returns the first ring or orientation error raised by a polygon when
    /// validation is on and auto-fixing is off.
    pub fn process(&self, object: GeoJson) -> Result<GeoJson> {
        Ok(match object {
            GeoJson::Geometry(geometry) => self.process_geometry(geometry)?.into(),
            GeoJson::Feature(feature) => self.process_feature(feature)?.into(),
            GeoJson::FeatureCollection(collection) => {
                self.process_feature_collection(collection)?.into()
            }
        })
    }

    /// Processes a single geometry. A legacy `crs` member is kept, also on
    /// the multi-part geometry a cut produces.
    ///
    /// # Errors
    ///
    /// See [`ComplianceProcessor::process`].
    pub fn process_geometry(&self, geometry: Geometry) -> Result<Geometry> {
        self.check_crs(geometry.type_name(), geometry.crs().is_some());
        match geometry {
            Geometry::Polygon(polygon) => self.process_polygon(polygon),
            Geometry::LineString(line) => Ok(self.process_line(line)),
            Geometry::GeometryCollection(mut collection) => {
                collection.geometries = std::mem::take(&mut collection.geometries)
                    .into_iter()
                    .map(|member| self.process_geometry(member))
                    .collect::<Result<_>>()?;
                Ok(collection.into())
            }
            Geometry::Point(_)
            | Geometry::MultiPoint(_)
            | Geometry::MultiLineString(_)
            | Geometry::MultiPolygon(_) => Ok(geometry),
        }
    }

    /// Processes the geometry of a feature. Properties, id and `crs` are
    /// left as they are.
    ///
    /// # Errors
    ///
    /// See [`ComplianceProcessor::process`].
    pub fn process_feature(&self, mut feature: Feature) -> Result<Feature> {
        self.check_crs("Feature", feature.crs.is_some());
        feature.geometry = feature
            .geometry
            .take()
            .map(|geometry| self.process_geometry(geometry))
            .transpose()?;
        Ok(feature)
    }

    /// Processes every feature of a collection, in order.
    ///
    /// # Errors
    ///
    /// See [`ComplianceProcessor::process`].
    pub fn process_feature_collection(
        &self,
        mut collection: FeatureCollection,
    ) -> Result<FeatureCollection> {
        self.check_crs("FeatureCollection", collection.crs.is_some());
        collection.features = std::mem::take(&mut collection.features)
            .into_iter()
            .map(|feature| self.process_feature(feature))
            .collect::<Result<_>>()?;
        Ok(collection)
    }

    fn process_polygon(&self, mut polygon: Polygon) -> Result<Geometry> {
        polygon.enforce_orientation(self.options)?;
        if !self.options.cut_antimeridian {
            return Ok(polygon.into());
        }
        let pieces = PolygonCutter::new(&polygon).execute().split();
        Ok(match pieces {
            Some(mut multi) => {
                multi.crs = polygon.crs;
                multi.into()
            }
            None => polygon.into(),
        })
    }

    fn process_line(&self, line: LineString) -> Geometry {
        if !self.options.cut_antimeridian {
            return line.into();
        }
        let pieces = LineCutter::new(&line.coordinates).execute().split();
        match pieces {
            Some(mut multi) => {
                multi.crs = line.crs;
                multi.into()
            }
            None => line.into(),
        }
    }

    fn check_crs(&self, object: &'static str, has_crs: bool) {
        if has_crs && self.options.warn_on_legacy_crs {
            tracing::warn!(
                object,
                "crs member is not part of RFC 7946; coordinates are assumed to be WGS84"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use approx::assert_abs_diff_eq;
    use serde_json::{json, Value};
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::error::{GeoJsonError, OrientationError};
    use crate::geometry::{GeometryCollection, MultiPolygon, Point, Position, Ring};
    use crate::math::orientation::is_counter_clockwise;

    fn ring(points: &[(f64, f64)]) -> Ring {
        points.iter().copied().map(Position::from).collect()
    }

    fn clockwise_square() -> Ring {
        ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)])
    }

    fn crossing_polygon() -> Geometry {
        Polygon::new(vec![ring(&[
            (170.0, 0.0),
            (170.0, 10.0),
            (-170.0, 10.0),
            (-170.0, 0.0),
            (170.0, 0.0),
        ])])
        .into()
    }

    fn crossing_line() -> Geometry {
        LineString::new(ring(&[(170.0, 45.0), (-170.0, 45.0)])).into()
    }

    fn cut_only() -> ProcessingOptions {
        ProcessingOptions::legacy().with_cut_antimeridian(true)
    }

    #[test]
    fn line_crossing_becomes_two_segments() {
        let options = cut_only();
        let processed = ComplianceProcessor::new(&options)
            .process_geometry(crossing_line())
            .unwrap();
        let Geometry::MultiLineString(multi) = &processed else {
            panic!("expected a MultiLineString, got {}", processed.type_name());
        };
        assert_eq!(multi.coordinates.len(), 2);
        let first = multi.coordinates[0].last().unwrap();
        let second = &multi.coordinates[1][0];
        assert_abs_diff_eq!(first.longitude, 180.0);
        assert_abs_diff_eq!(second.longitude, -180.0);
        assert_abs_diff_eq!(first.latitude, 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(second.latitude, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn polygon_crossing_becomes_two_closed_members() {
        let options = ProcessingOptions::rfc7946();
        let processed = ComplianceProcessor::new(&options)
            .process_geometry(crossing_polygon())
            .unwrap();
        let Geometry::MultiPolygon(multi) = &processed else {
            panic!("expected a MultiPolygon, got {}", processed.type_name());
        };
        assert_eq!(multi.coordinates.len(), 2);
        for member in &multi.coordinates {
            let exterior = &member[0];
            assert!(exterior.len() >= 4);
            assert!(exterior[0].same_location(&exterior[exterior.len() - 1]));
        }
    }

    #[test]
    fn auto_fix_makes_exterior_counter_clockwise() {
        let options = ProcessingOptions::legacy().with_auto_fix_orientation(true);
        let processed = ComplianceProcessor::new(&options)
            .process_geometry(Polygon::new(vec![clockwise_square()]).into())
            .unwrap();
        let Geometry::Polygon(polygon) = processed else {
            panic!("expected a Polygon");
        };
        assert!(is_counter_clockwise(polygon.exterior().unwrap()).unwrap());
    }

    #[test]
    fn validation_without_fix_rejects_clockwise_exterior() {
        let options = ProcessingOptions::legacy().with_validate_orientation(true);
        let err = ComplianceProcessor::new(&options)
            .process_geometry(Polygon::new(vec![clockwise_square()]).into())
            .unwrap_err();
        assert!(matches!(
            err,
            GeoJsonError::Orientation(OrientationError::Exterior)
        ));
        assert!(err.to_string().contains("counterclockwise"));
    }

    #[test]
    fn legacy_options_are_the_identity() {
        let options = ProcessingOptions::legacy();
        let processor = ComplianceProcessor::new(&options);
        for geometry in [
            crossing_line(),
            crossing_polygon(),
            Polygon::new(vec![clockwise_square()]).into(),
        ] {
            assert_eq!(processor.process_geometry(geometry.clone()).unwrap(), geometry);
        }
    }

    #[test]
    fn non_crossing_line_stays_a_line() {
        let options = cut_only();
        let line: Geometry = LineString::new(ring(&[(0.0, 0.0), (10.0, 10.0)])).into();
        let processed = ComplianceProcessor::new(&options)
            .process_geometry(line.clone())
            .unwrap();
        assert_eq!(processed, line);
    }

    #[test]
    fn multi_geometries_pass_through() {
        let options = ProcessingOptions::rfc7946();
        let multi: Geometry =
            MultiPolygon::from_polygons([Polygon::new(vec![clockwise_square()])]).into();
        let processed = ComplianceProcessor::new(&options)
            .process_geometry(multi.clone())
            .unwrap();
        assert_eq!(processed, multi);
    }

    #[test]
    fn geometry_collection_members_are_processed_in_order() {
        let options = cut_only();
        let point: Geometry = Point::new(Position::new(1.0, 2.0)).into();
        let collection =
            GeometryCollection::new(vec![crossing_line(), crossing_polygon(), point.clone()]);
        let processed = ComplianceProcessor::new(&options)
            .process_geometry(collection.into())
            .unwrap();
        let Geometry::GeometryCollection(collection) = processed else {
            panic!("expected a GeometryCollection");
        };
        let names: Vec<_> = collection.geometries.iter().map(Geometry::type_name).collect();
        assert_eq!(names, ["MultiLineString", "MultiPolygon", "Point"]);
        assert_eq!(collection.geometries[2], point);
    }

    #[test]
    fn feature_keeps_its_members() {
        let options = cut_only();
        let feature = Feature::new(crossing_line()).with_property("name", "route 1");
        let processed = ComplianceProcessor::new(&options)
            .process_feature(feature)
            .unwrap();
        assert_eq!(processed.property("name"), Some(&Value::from("route 1")));
        assert_eq!(
            processed.geometry.as_ref().map(Geometry::type_name),
            Some("MultiLineString")
        );
    }

    #[test]
    fn feature_without_geometry_is_fine() {
        let options = ProcessingOptions::rfc7946();
        let feature = Feature::new(None);
        let processed = ComplianceProcessor::new(&options)
            .process_feature(feature.clone())
            .unwrap();
        assert_eq!(processed, feature);
    }

    #[test]
    fn collection_error_stops_processing() {
        let options = ProcessingOptions::legacy().with_validate_orientation(true);
        let collection = FeatureCollection::new(vec![
            Feature::new(crossing_line()),
            Feature::new(Geometry::from(Polygon::new(vec![clockwise_square()]))),
        ]);
        let result = ComplianceProcessor::new(&options).process_feature_collection(collection);
        assert!(matches!(result, Err(GeoJsonError::Orientation(_))));
    }

    #[test]
    fn processes_json_end_to_end() {
        let text = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]]
                    },
                    "properties": {"name": "square"}
                },
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[170, 45], [-170, 45]]
                    },
                    "properties": null
                }
            ]
        })
        .to_string();
        let options = ProcessingOptions::rfc7946();
        let processed = ComplianceProcessor::new(&options)
            .process(text.parse().unwrap())
            .unwrap();
        let GeoJson::FeatureCollection(collection) = processed else {
            panic!("expected a FeatureCollection");
        };

        let Some(Geometry::Polygon(square)) = &collection.features[0].geometry else {
            panic!("expected a Polygon");
        };
        assert!(is_counter_clockwise(square.exterior().unwrap()).unwrap());
        assert_eq!(
            collection.features[1].geometry.as_ref().map(Geometry::type_name),
            Some("MultiLineString")
        );

        let encoded: Value =
            serde_json::from_str(&GeoJson::from(collection).to_json_string().unwrap()).unwrap();
        assert_eq!(encoded["features"][1]["geometry"]["coordinates"][0][1], json!([180.0, 45.0]));
        assert_eq!(encoded["features"][0]["properties"]["name"], "square");
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_captured_logs(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    fn feature_with_crs() -> Feature {
        let mut feature = Feature::new(crossing_line());
        feature.crs = Some(json!({"type": "name", "properties": {"name": "EPSG:4326"}}));
        feature
    }

    #[test]
    fn legacy_crs_is_reported_when_asked() {
        let options = ProcessingOptions::legacy().with_warn_on_legacy_crs(true);
        let mut processed = None;
        let logs = with_captured_logs(|| {
            processed = Some(
                ComplianceProcessor::new(&options)
                    .process_feature(feature_with_crs())
                    .unwrap(),
            );
        });
        assert!(logs.contains("crs member is not part of RFC 7946"));
        assert!(logs.contains("Feature"));
        assert_eq!(processed.unwrap(), feature_with_crs());
    }

    #[test]
    fn legacy_crs_on_a_geometry_is_reported_and_kept() {
        let options = cut_only().with_warn_on_legacy_crs(true);
        let crs = json!({"type": "link", "properties": {"href": "http://example.com/crs/42"}});
        let mut line = LineString::new(ring(&[(170.0, 45.0), (-170.0, 45.0)]));
        line.crs = Some(crs.clone());

        let mut processed = None;
        let logs = with_captured_logs(|| {
            processed = Some(
                ComplianceProcessor::new(&options)
                    .process_geometry(line.into())
                    .unwrap(),
            );
        });
        assert!(logs.contains("crs member is not part of RFC 7946"));
        assert!(logs.contains("LineString"));

        let processed = processed.unwrap();
        assert_eq!(processed.type_name(), "MultiLineString");
        assert_eq!(processed.crs(), Some(&crs));
    }

    #[test]
    fn legacy_crs_is_silent_by_default() {
        let options = ProcessingOptions::legacy();
        let logs = with_captured_logs(|| {
            ComplianceProcessor::new(&options)
                .process_feature(feature_with_crs())
                .unwrap();
        });
        assert!(logs.is_empty());
    }
}
