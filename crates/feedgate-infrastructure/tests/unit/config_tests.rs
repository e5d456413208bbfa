//! Configuration loading tests
//!
//! Every test that reads the environment or the working directory runs
//! inside a `figment::Jail`, which serialises them and restores both.

use feedgate_infrastructure::config::{AppConfig, ConfigLoader, EvaluationConfig};
use feedgate_infrastructure::constants::DEFAULT_LOG_LEVEL;
use figment::Jail;

#[test]
fn test_defaults_without_file_or_env() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().expect("defaults load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(config.evaluation.brand_profiles_enabled);
        assert!(config.evaluation.cache_enabled);
        assert_eq!(config.evaluation.audit_id_prefix, "audit");
        Ok(())
    });
}

#[test]
fn test_default_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "feedgate.toml",
            r#"
                [logging]
                level = "debug"
                json_format = true

                [evaluation]
                brand_profiles_enabled = false
            "#,
        )?;

        let config = ConfigLoader::new().load().expect("file loads");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        assert!(!config.evaluation.brand_profiles_enabled);
        // Untouched keys keep their defaults
        assert!(config.evaluation.cache_enabled);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[evaluation]\naudit_id_prefix = \"file\"\n")?;
        jail.set_env("FEEDGATE__EVALUATION__AUDIT_ID_PREFIX", "env");
        jail.set_env("FEEDGATE__EVALUATION__CACHE_ENABLED", "false");

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .expect("config loads");
        assert_eq!(config.evaluation.audit_id_prefix, "env");
        assert!(!config.evaluation.cache_enabled);
        Ok(())
    });
}

#[test]
fn test_single_underscore_prefix_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("FEEDGATE_EVALUATION_CACHE_ENABLED", "false");
        let config = ConfigLoader::new().load().expect("config loads");
        assert!(config.evaluation.cache_enabled);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("GATE__LOGGING__LEVEL", "warn");
        let config = ConfigLoader::new()
            .with_env_prefix("GATE")
            .load()
            .expect("config loads");
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = ConfigLoader::new().with_config_path("absent.toml").load();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("feedgate.toml", "[logging]\nlevel = \"loud\"\n")?;
        assert!(ConfigLoader::new().load().is_err());

        jail.create_file(
            "feedgate.toml",
            "[evaluation]\naudit_id_prefix = \"has space\"\n",
        )?;
        assert!(ConfigLoader::new().load().is_err());

        jail.create_file("feedgate.toml", "[evaluation]\naudit_id_prefix = \"\"\n")?;
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_save_then_load_round_trip() {
    Jail::expect_with(|_jail| {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("saved.toml");
        let config = AppConfig {
            evaluation: EvaluationConfig {
                cache_enabled: false,
                audit_id_prefix: "gate".into(),
                ..Default::default()
            },
            ..Default::default()
        };

        let loader = ConfigLoader::new().with_config_path(&path);
        loader.save_to_file(&config, &path).expect("saves");
        assert_eq!(loader.load().expect("reloads"), config);
        assert_eq!(loader.config_path(), Some(path.as_path()));
        Ok(())
    });
}
