//! Unit tests for configuration.

#[cfg(test)]
mod path_expansion_tests {
    use super::super::Config;
    use std::path::PathBuf;

    #[test]
    fn expand_path_handles_tilde() {
        let result = Config::expand_path("~/test");
        // Should not start with ~ after expansion
        assert!(!result.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn expand_path_handles_absolute_path() {
        let result = Config::expand_path("/absolute/path");
        assert_eq!(result, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn expand_path_handles_relative_path() {
        let result = Config::expand_path("relative/path");
        assert_eq!(result, PathBuf::from("relative/path"));
    }
}

#[cfg(test)]
mod default_config_tests {
    use super::super::Config;

    #[test]
    fn default_has_database_path() {
        let config = Config::default();
        assert!(config.database.to_string_lossy().contains("tally"));
        assert!(config.database.to_string_lossy().ends_with(".db"));
    }

    #[test]
    fn default_server_binds_loopback() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
    }
}

#[cfg(test)]
mod config_serialization_tests {
    use super::super::Config;
    use std::path::PathBuf;

    #[test]
    fn toml_roundtrip() {
        let mut config = Config::default();
        config.database = PathBuf::from("/test/db.db");
        config.server.port = 8080;

        let toml_str = toml::to_string(&config).expect("serialize");
        let parsed: Config = toml::from_str(&toml_str).expect("deserialize");

        assert_eq!(parsed.database, config.database);
        assert_eq!(parsed.server.port, config.server.port);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("database = \"/tmp/t.db\"").expect("deserialize");
        assert_eq!(parsed.database, PathBuf::from("/tmp/t.db"));
        assert_eq!(parsed.server.port, 5000);
    }
}
