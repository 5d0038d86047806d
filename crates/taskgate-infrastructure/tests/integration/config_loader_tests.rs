//! Configuration loader tests

use figment::Jail;
use taskgate_domain::{HttpMethod, Requirement, Role};
use taskgate_infrastructure::config::{ConfigBuilder, ConfigLoader, PasswordAlgorithm};
use taskgate_infrastructure::constants::{
    DEFAULT_API_BASE_PATH, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_PORT, JWT_DEFAULT_EXPIRATION_SECS,
};
use tempfile::TempDir;

const SECRET: &str = "config-tests-secret-0123456789abcdef";

#[test]
fn test_defaults_with_secret_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("TASKGATE__AUTH__JWT__SECRET", SECRET);

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.server.base_path, DEFAULT_API_BASE_PATH);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.auth.jwt.secret, SECRET);
        assert_eq!(config.auth.jwt.expiration_secs, JWT_DEFAULT_EXPIRATION_SECS);
        assert_eq!(config.auth.password_algorithm, PasswordAlgorithm::Bcrypt);
        assert!(config.auth.rules.is_empty());
        Ok(())
    });
}

#[test]
fn test_missing_secret_is_rejected() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new().load().expect_err("secret required");
        assert!(err.to_string().contains("JWT secret"));
        Ok(())
    });
}

#[test]
fn test_toml_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "taskgate.toml",
            &format!(
                r#"
                [server]
                port = 9090
                base_path = "/v1"

                [auth]
                password_algorithm = "argon2"
                bcrypt_cost = 6

                [auth.jwt]
                secret = "{SECRET}"
                expiration_secs = 600

                [[auth.rules]]
                method = "DELETE"
                path = "/v1/labels/*"
                requirement = {{ type = "role_at_least", role = "admin" }}
                "#
            ),
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.base_path, "/v1");
        assert_eq!(config.auth.password_algorithm, PasswordAlgorithm::Argon2);
        assert_eq!(config.auth.bcrypt_cost, 6);
        assert_eq!(config.auth.jwt.expiration_secs, 600);
        assert_eq!(config.auth.rules.len(), 1);
        let rule = &config.auth.rules[0];
        assert_eq!(rule.method, Some(HttpMethod::Delete));
        assert_eq!(rule.requirement, Requirement::RoleAtLeast { role: Role::Admin });
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "taskgate.toml",
            &format!("[server]\nport = 9090\n\n[auth.jwt]\nsecret = \"{SECRET}\"\n"),
        )?;
        jail.set_env("TASKGATE__SERVER__PORT", "7070");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 7070);
        Ok(())
    });
}

#[test]
fn test_validation_failures() {
    let secret = format!("[auth.jwt]\nsecret = \"{SECRET}\"\n");
    let cases = [
        (format!("[server]\nport = 0\n\n{secret}"), "port"),
        (format!("[server]\nbase_path = \"api\"\n\n{secret}"), "base path"),
        ("[auth.jwt]\nsecret = \"short\"\n".to_string(), "at least 32"),
        (format!("{secret}expiration_secs = 0\n"), "expiration"),
        (format!("[auth]\nbcrypt_cost = 3\n\n{secret}"), "bcrypt cost"),
    ];

    for (toml, expected) in cases {
        Jail::expect_with(|jail| {
            jail.create_file("taskgate.toml", &toml)?;

            let err = ConfigLoader::new().load().expect_err(expected);
            assert!(err.to_string().contains(expected), "{expected}: {err}");
            Ok(())
        });
    }
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let result = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load();
    assert!(result.is_err());
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_jwt_secret(SECRET)
        .with_bcrypt_cost(5)
        .build();
    let loader = ConfigLoader::new().with_config_path(&config_path);
    loader.save_to_file(&original, &config_path).expect("save");

    let loaded = loader.load().expect("load");
    assert_eq!(loaded.auth.jwt.secret, SECRET);
    assert_eq!(loaded.auth.bcrypt_cost, 5);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}

#[test]
fn test_builder_validation() {
    assert!(ConfigBuilder::new().try_build().is_err());
    assert!(ConfigBuilder::new().with_jwt_secret(SECRET).try_build().is_ok());
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("TASKGATE__AUTH__JWT__SECRET", "ignored-because-prefix-differs-000");
        jail.set_env("STAGING__AUTH__JWT__SECRET", SECRET);
        jail.set_env("STAGING__SERVER__PORT", "7070");

        let config = ConfigLoader::new()
            .with_env_prefix("STAGING")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.auth.jwt.secret, SECRET);
        assert_eq!(config.server.port, 7070);
        Ok(())
    });
}

#[test]
fn test_builder_sections() {
    use std::path::PathBuf;
    use taskgate_domain::{AccessRule, PathPattern};
    use taskgate_infrastructure::config::{LoggingConfig, ServerConfig};

    let rule = AccessRule::any_method(
        PathPattern::parse("/internal/*").expect("pattern"),
        Requirement::RoleAtLeast { role: Role::Admin },
    );
    let config = ConfigBuilder::new()
        .with_server(ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            base_path: "/v2".to_string(),
        })
        .with_logging(LoggingConfig {
            level: "debug".to_string(),
            json_format: true,
            file_output: Some(PathBuf::from("logs/taskgate.log")),
        })
        .with_jwt_secret(SECRET)
        .with_rule(rule.clone())
        .try_build()
        .expect("valid");

    assert_eq!(config.server.base_path, "/v2");
    assert!(config.logging.json_format);
    assert_eq!(config.auth.rules, vec![rule]);
}
