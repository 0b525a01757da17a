//! YAML configuration file parsing.
use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

use crate::error::ConfigError;

/// Load and deserialize a YAML document.
///
/// An empty (or whitespace-only) document yields `T::default()` rather than
/// a parse error, matching how an empty mapping would deserialize.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist,
/// [`ConfigError::Io`] if it cannot be read, and [`ConfigError::Parse`] if
/// the YAML is malformed or does not match `T`.
pub fn load_yaml<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_yaml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize a YAML string, treating an empty document as `T::default()`.
///
/// # Errors
///
/// Returns the underlying [`serde_yaml::Error`] if the YAML is malformed.
pub fn parse_yaml<T: DeserializeOwned + Default>(content: &str) -> Result<T, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(content)
}

/// `deserialize_with` helper that maps an explicit YAML `null` to the
/// field's default value.
///
/// Needed because `languages:` with no value parses as `null`, which a plain
/// `Vec` refuses.
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` helper for flags: accepts YAML booleans plus the
/// YAML 1.1 spellings `yes`/`no`, `on`/`off` and `y`/`n` in any case.
/// `null` is `false`.
pub(super) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean (true/false, yes/no, on/off, y/n)")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "y" => Ok(true),
                "false" | "no" | "off" | "n" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}
