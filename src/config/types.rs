// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_PLACEHOLDER: &str = "Type to search...";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MAX_VISIBLE: usize = 10;
pub const DEFAULT_FIXTURE_DELAY_MS: u64 = 500;

pub const DEFAULT_FIXTURE_ITEMS: [&str; 7] = [
    "apple",
    "strawberry",
    "banana",
    "grapes",
    "orange",
    "pear",
    "pineapple",
];

/// Suggestion widget configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub placeholder: String,
    pub debounce_ms: u64,
    pub max_visible: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Fixture lookup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub delay_ms: u64,
    pub items: Vec<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            delay_ms: DEFAULT_FIXTURE_DELAY_MS,
            items: DEFAULT_FIXTURE_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub fixture: FixtureConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.widget.placeholder, "Type to search...");
        assert_eq!(config.widget.debounce_ms, 300);
        assert_eq!(config.fixture.delay_ms, 500);
        assert_eq!(config.fixture.items.len(), 7);
    }

    #[test]
    fn test_fixture_items_override() {
        let config: Config = toml::from_str(
            r#"
[fixture]
items = ["kiwi", "mango"]
"#,
        )
        .unwrap();
        assert_eq!(config.fixture.items, vec!["kiwi", "mango"]);
        assert_eq!(config.fixture.delay_ms, DEFAULT_FIXTURE_DELAY_MS);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[widget]
debounce_ms = "fast"
"#,
        );
        assert!(result.is_err());
    }

    // For any debounce delay written in the [widget] section, parsing keeps that
    // value and fills every other field with its default.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_partial_widget_section_keeps_defaults(debounce_ms in 0u64..10_000) {
            let toml_content = format!("[widget]\ndebounce_ms = {}\n", debounce_ms);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse debounce_ms = {}", debounce_ms);

            let config = config.unwrap();
            prop_assert_eq!(config.widget.debounce_ms, debounce_ms);
            prop_assert_eq!(config.widget.placeholder, DEFAULT_PLACEHOLDER);
            prop_assert_eq!(config.widget.max_visible, DEFAULT_MAX_VISIBLE);
            prop_assert_eq!(config.fixture, FixtureConfig::default());
        }
    }

    // Missing sections never fail to parse.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_missing_sections_use_defaults(
            include_widget in prop::bool::ANY,
            include_fixture in prop::bool::ANY
        ) {
            let mut toml_content = String::new();
            if include_widget {
                toml_content.push_str("[widget]\n");
            }
            if include_fixture {
                toml_content.push_str("[fixture]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok());
            prop_assert_eq!(config.unwrap(), Config::default());
        }
    }
}
