use config::{Config, Environment, File, FileFormat};
use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";
const LIST_SEPARATOR: &str = ",";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    pub log_level: String,
    #[serde(deserialize_with = "deserialize_list")]
    pub observers: Vec<String>,
    #[serde(deserialize_with = "deserialize_list")]
    #[validate(length(min = 1))]
    pub states: Vec<String>,
}

/// Lists come either from the TOML file as arrays or from env vars as a
/// single comma separated string. Values are kept as plain strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringList {
    Joined(String),
    Items(Vec<String>),
}

fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringList::deserialize(deserializer)? {
        StringList::Joined(joined) => split_list(&joined),
        StringList::Items(items) => items,
    })
}

fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(LIST_SEPARATOR)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, AppError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use validator::Validate;

    use crate::AppError;

    use super::{split_list, AppConfig};

    #[test]
    fn test_new() {
        let result = AppConfig::new();
        assert!(
            matches!(result, Ok(ref x) if x.observers == ["Observer A", "Observer B"] && x.states == ["ACTIVE"]),
            "By default, it should return a valid config"
        );

        temp_env::with_var("APP_LOG_LEVEL", Some("debug"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.log_level == "debug"),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_OBSERVERS", Some("X,Y,Z"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.observers == ["X", "Y", "Z"]),
                "Should split list env vars"
            )
        });

        temp_env::with_var("APP_STATES", Some("X,Y"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.states == ["X", "Y"]),
                "Should split states env var"
            )
        });

        temp_env::with_var("APP_STATES", Some("42"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.states == ["42"]),
                "Should keep numeric looking states as strings"
            )
        });

        temp_env::with_var("APP_STATES", Some("true"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.states == ["true"]),
                "Should keep boolean looking states as strings"
            )
        });

        temp_env::with_var("APP_OBSERVERS", Some(""), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.observers.is_empty()),
                "Should read an empty env var as no observers"
            )
        });

        temp_env::with_var("APP_STATES", Some(""), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::InvalidConfig(_))),
                "Should reject an empty states env var"
            )
        });
    }

    #[test]
    fn test_split_list() {
        assert_eq!(vec!["A", "B"], split_list("A,B"));
        assert_eq!(vec!["A", "B"], split_list("A,,B,"));
        assert!(split_list("").is_empty());
        assert_eq!(vec!["42"], split_list("42"));
    }

    #[test]
    fn test_validate() {
        // Given
        let config = AppConfig {
            log_level: "info".to_string(),
            observers: vec![],
            states: vec![],
        };

        // When
        let result = config.validate();

        // Then
        assert!(result.is_err(), "Should require at least one state");

        // Given
        let config = AppConfig {
            states: vec!["ACTIVE".to_string()],
            ..config
        };

        // When
        let result = config.validate();

        // Then
        assert!(result.is_ok(), "Should accept a config without observers");
    }

    #[test]
    fn test_level_filter() {
        let mut config = AppConfig {
            log_level: "warn".to_string(),
            observers: vec![],
            states: vec!["ACTIVE".to_string()],
        };
        assert!(matches!(config.level_filter(), Ok(LevelFilter::Warn)));

        config.log_level = "loud".to_string();
        assert!(
            config.level_filter().is_err(),
            "Should reject unknown log levels"
        );
    }
}
