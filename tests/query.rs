#[cfg(test)]
mod tests {
    use rasterer::{
        BoundingBox, MapConfig, RasterCache, RasterError, RasterQuery, Rasterer,
    };
    use std::collections::HashMap;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn params(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn berkeley_params() -> HashMap<String, f64> {
        params(&[
            ("ullon", -122.24),
            ("ullat", 37.87),
            ("lrlon", -122.22),
            ("lrlat", 37.85),
            ("w", 300.0),
            ("h", 200.0),
        ])
    }

    #[test]
    fn test_bounding_box_validation() {
        assert!(BoundingBox::new(-122.3, 37.9, -122.2, 37.8).is_ok());
        assert!(matches!(
            BoundingBox::new(-122.2, 37.9, -122.3, 37.8),
            Err(RasterError::InvalidQuery(_))
        ));
        assert!(BoundingBox::new(-122.3, 37.8, -122.2, 37.9).is_err());
        assert!(BoundingBox::new(-122.3, 37.9, -122.3, 37.8).is_err());
        assert!(BoundingBox::new(f64::NAN, 37.9, -122.2, 37.8).is_err());
    }

    #[test]
    fn test_bounding_box_relations() {
        let outer = BoundingBox::new(-1.0, 1.0, 1.0, -1.0).unwrap();
        let inner = BoundingBox::new(-0.5, 0.5, 0.5, -0.5).unwrap();
        let apart = BoundingBox::new(2.0, 1.0, 3.0, -1.0).unwrap();

        assert!(outer.contains_box(&inner));
        assert!(!inner.contains_box(&outer));
        assert!(outer.contains_box(&outer));
        assert!(outer.intersects(&inner));
        assert!(!outer.intersects(&apart));
        assert!(outer.contains(0.0, 0.0));
        assert!(!outer.contains(0.0, 1.5));
    }

    #[test]
    fn test_query_from_params() {
        let query = RasterQuery::from_params(&berkeley_params()).unwrap();
        assert_eq!(query.bounds().west, -122.24);
        assert_eq!(query.bounds().north, 37.87);
        assert_eq!(query.bounds().east, -122.22);
        assert_eq!(query.bounds().south, 37.85);
        assert_eq!(query.width(), 300.0);
        assert_eq!(query.height(), 200.0);
    }

    #[test]
    fn test_query_missing_field() {
        for key in ["ullon", "ullat", "lrlon", "lrlat", "w", "h"] {
            let mut p = berkeley_params();
            p.remove(key);
            match RasterQuery::from_params(&p) {
                Err(RasterError::InvalidQuery(message)) => assert!(message.contains(key)),
                other => panic!("expected InvalidQuery for missing {}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_query_degenerate_viewport() {
        let bounds = BoundingBox::new(-122.24, 37.87, -122.22, 37.85).unwrap();
        assert!(RasterQuery::new(bounds, 0.0, 100.0).is_err());
        assert!(RasterQuery::new(bounds, -10.0, 100.0).is_err());
        assert!(RasterQuery::new(bounds, f64::INFINITY, 100.0).is_err());
        assert!(RasterQuery::new(bounds, 100.0, -1.0).is_err());
        assert!(RasterQuery::new(bounds, 100.0, 0.0).is_ok());
    }

    #[test]
    fn test_inverted_zero_width_query_is_rejected() {
        let inverted = BoundingBox {
            west: -122.22,
            north: 37.85,
            east: -122.24,
            south: 37.87,
        };
        assert!(matches!(
            RasterQuery::new(inverted, 0.0, 100.0),
            Err(RasterError::InvalidQuery(_))
        ));

        let valid = BoundingBox::new(-122.24, 37.87, -122.22, 37.85).unwrap();
        assert!(matches!(
            RasterQuery::new(valid, 0.0, 100.0),
            Err(RasterError::InvalidQuery(_))
        ));

        let rasterer = Rasterer::new(MapConfig::default());
        let result = rasterer.get_map_raster(&params(&[
            ("ullon", -122.22),
            ("ullat", 37.85),
            ("lrlon", -122.24),
            ("lrlat", 37.87),
            ("w", 0.0),
            ("h", 100.0),
        ]));
        assert!(!result.query_success);
        assert!(result.is_empty());
    }

    #[test]
    fn test_config_validation() {
        let root = *MapConfig::default().root();
        assert!(matches!(
            MapConfig::new(root, 0),
            Err(RasterError::Configuration(_))
        ));
        let empty = BoundingBox {
            east: root.west,
            ..root
        };
        assert!(matches!(
            MapConfig::new(empty, 256),
            Err(RasterError::Configuration(_))
        ));
        assert_eq!(MapConfig::new(root, 256).unwrap(), MapConfig::default());
    }

    #[test]
    fn test_cache_reuses_results() {
        init();
        let rasterer = Rasterer::new(MapConfig::default());
        let direct = rasterer.get_map_raster(&berkeley_params());
        let mut cache = RasterCache::new(rasterer, 2);

        assert_eq!(cache.rasterer().config(), &MapConfig::default());
        assert_eq!(cache.rasterer().geometry().root(), MapConfig::default().root());
        assert!(cache.is_empty());
        assert_eq!(cache.get_map_raster(&berkeley_params()), direct);
        assert_eq!(cache.len(), 1);

        let mut taller = berkeley_params();
        taller.insert("h".to_string(), 900.0);
        assert_eq!(cache.get_map_raster(&taller), direct);
        assert_eq!(cache.len(), 1);

        let mut missing = berkeley_params();
        missing.remove("w");
        assert!(!cache.get_map_raster(&missing).query_success);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_evicts_least_recent() {
        let mut cache = RasterCache::new(Rasterer::new(MapConfig::default()), 2);
        for w in [100.0, 200.0, 300.0] {
            let mut p = berkeley_params();
            p.insert("w".to_string(), w);
            assert!(cache.get_map_raster(&p).query_success);
        }
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_cache() {
        let mut cache = RasterCache::new(Rasterer::new(MapConfig::default()), 0);
        assert!(cache.get_map_raster(&berkeley_params()).query_success);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_result_display() {
        let rasterer = Rasterer::new(MapConfig::default());
        let result = rasterer.get_map_raster(&HashMap::new());
        assert!(!result.query_success);
        assert_eq!(result.rows(), 0);
        let text = result.to_string();
        assert!(text.contains("query_success: false"));
        assert!(text.contains("render_grid: 0x0"));
    }
}
