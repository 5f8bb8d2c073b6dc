//! Tests for the configuration layer

use super::*;
use crate::error::FoldingError;
use crate::folding::FoldingEngine;

mod parsing_tests {
    use super::*;

    #[test]
    fn test_load_config_from_toml() {
        let toml = r#"
[folding]
range_limit = 100
region_start = '^\s*@fold\b'
region_end = '^\s*@endfold\b'

[embedded]
enabled = true
languages = ["css"]
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.folding.range_limit, Some(100));
        assert_eq!(settings.folding.region_start, r"^\s*@fold\b");
        assert_eq!(settings.embedded.languages, vec!["css".to_string()]);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.folding.range_limit, None);
        assert_eq!(settings.folding.region_start, DEFAULT_REGION_START);
        assert_eq!(settings.folding.region_end, DEFAULT_REGION_END);
        assert!(settings.embedded.is_enabled_for("css"));
        assert!(settings.embedded.is_enabled_for("javascript"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[folding]
range_limit = 7
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.folding.range_limit, Some(7));
        assert_eq!(settings.folding.region_start, DEFAULT_REGION_START);
        assert!(settings.embedded.enabled);
    }

    #[test]
    fn test_empty_config_uses_all_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = Settings::from_toml_str("[folding\nrange_limit = ");
        assert!(matches!(result, Err(FoldingError::Config(_))));
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let result = Settings::from_toml_str("[folding]\nrange_limit = \"many\"");
        assert!(matches!(result, Err(FoldingError::Config(_))));
    }
}

mod engine_integration_tests {
    use super::*;
    use crate::range::{FoldingRange, FoldingRangeKind};

    #[test]
    fn test_custom_region_markers() {
        let toml = r#"
[folding]
region_start = '^\s*@fold\b'
region_end = '^\s*@endfold\b'
"#;
        let settings = Settings::from_toml_str(toml).unwrap();
        let engine = FoldingEngine::new(settings).unwrap();

        let text = "<!-- @fold -->\ncontent\n<!-- @endfold -->\n<!-- #region -->\nx\n<!-- #endregion -->";
        let ranges = engine.compute(text, None);

        assert_eq!(
            ranges,
            vec![FoldingRange::new(0, 2, FoldingRangeKind::Region)]
        );
    }

    #[test]
    fn test_invalid_marker_is_rejected() {
        let mut settings = Settings::default();
        settings.folding.region_start = "(unclosed".to_string();

        let result = FoldingEngine::new(settings);
        assert!(matches!(result, Err(FoldingError::InvalidMarker(_))));
    }

    #[test]
    fn test_settings_range_limit_is_the_fallback() {
        let mut settings = Settings::default();
        settings.folding.range_limit = Some(1);
        let engine = FoldingEngine::new(settings).unwrap();

        let text = "<html>\n<body>\n<p>\n</p>\n</body>\n</html>";
        assert_eq!(engine.compute(text, None).len(), 1);
        assert_eq!(engine.compute(text, Some(10)).len(), 2);
    }

    #[test]
    fn test_disabled_embedded_folding() {
        let toml = "[embedded]\nenabled = false\n";
        let engine = FoldingEngine::new(Settings::from_toml_str(toml).unwrap()).unwrap();

        let text = "<style>\na {\n  color: red;\n}\n</style>";
        let ranges = engine.compute(text, None);

        assert_eq!(ranges, vec![FoldingRange::new(0, 3, FoldingRangeKind::Tag)]);
    }
}
