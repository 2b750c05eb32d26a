#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8050");
        assert!(config.server.debug);
    }

    #[test]
    fn test_default_ui_matches_initial_widgets() {
        let ui = UiConfig::default();
        assert_eq!(ui.default_x, Attribute::SepalLength);
        assert_eq!(ui.default_y, Attribute::SepalWidth);
        assert_eq!(ui.default_clusters, 3);
        assert_eq!(ui.page_size, 10);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 9000

            [clustering]
            seed = 42

            [ui]
            default_y = "Petal width (cm)"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.clustering.seed, Some(42));
        assert_eq!(config.clustering.n_runs, 10);
        assert_eq!(config.ui.default_x, Attribute::SepalLength);
        assert_eq!(config.ui.default_y, Attribute::PetalWidth);
    }

    #[test]
    fn test_unknown_attribute_is_rejected() {
        let err = Config::from_toml("[ui]\ndefault_x = \"sepal_length\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = Config::from_toml("[ui]\npage_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_invalid_clustering_settings_are_rejected() {
        assert!(Config::from_toml("[clustering]\ntolerance = -1.0\n").is_err());
        assert!(Config::from_toml("[clustering]\nn_runs = 0\n").is_err());
    }

    #[test]
    fn test_load_from_reads_toml_file() {
        let path = std::env::temp_dir().join(format!("irisboard-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[ui]\ndefault_clusters = 5\npage_size = 25\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.ui.default_clusters, 5);
        assert_eq!(config.ui.page_size, 25);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("irisboard-config-does-not-exist.toml");
        assert!(Config::load_from(&path).is_err());
    }
}
