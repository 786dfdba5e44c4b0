//! Framing options read from TOML.

mod framing;

use std::path::Path;

pub use framing::FramingConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::TransitionTemplate;
use crate::error::FramingError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[framing]`) work correctly.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct FramingOptions {
    /// Framing and idle-recentering parameters.
    pub framing: FramingConfig,
    /// Easing and sampling shared by every transition.
    pub transition: TransitionTemplate,
}

impl FramingOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(FramingOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::OptionsParse`] for malformed TOML or
    /// unknown enum values.
    pub fn from_toml(text: &str) -> Result<Self, FramingError> {
        toml::from_str(text).map_err(|e| FramingError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::Io`] if the file cannot be read, or
    /// [`FramingError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, FramingError> {
        let content = std::fs::read_to_string(path).map_err(FramingError::Io)?;
        Self::from_toml(&content)
    }

    /// Copy of these options with one `section.field` replaced by `value`,
    /// as sent by a schema-driven settings panel.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::OptionsParse`] if `section` does not exist
    /// or the patched options no longer deserialize.
    pub fn with_field(
        &self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<Self, FramingError> {
        let mut root = serde_json::to_value(self)
            .map_err(|e| FramingError::OptionsParse(e.to_string()))?;
        let Some(target) = root.get_mut(section).and_then(|s| s.as_object_mut())
        else {
            return Err(FramingError::OptionsParse(format!(
                "unknown options section '{section}'"
            )));
        };
        let _ = target.insert(field.to_owned(), value);
        serde_json::from_value(root)
            .map_err(|e| FramingError::OptionsParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::FramingMode;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = FramingOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: FramingOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[framing]
mode = "ignore_bounds_size"
elevation_return_time = -1.0
"#;
        let opts = FramingOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.framing.mode, FramingMode::IgnoreBoundsSize);
        assert!(!opts.framing.returns_to_default_elevation());
        assert_eq!(opts.framing.framing_time, 1500.0);
        assert_eq!(opts.transition, TransitionTemplate::DEFAULT);
    }

    #[test]
    fn transition_easing_is_configurable() {
        let toml_str = r#"
[transition.easing]
kind = "linear"
"#;
        let opts = FramingOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.transition.easing, EasingFunction::Linear);
        assert_eq!(opts.transition.frame_rate, 60.0);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let err = FramingOptions::from_toml("[framing]\nmode = \"zoom\"\n")
            .unwrap_err();
        assert!(matches!(err, FramingError::OptionsParse(_)));
    }

    #[test]
    fn with_field_patches_one_value() {
        let opts = FramingOptions::default();
        let patched = opts
            .with_field("framing", "position_y", serde_json::json!(0.25))
            .unwrap();
        assert_eq!(patched.framing.position_y, 0.25);
        assert_eq!(patched.transition, opts.transition);

        let err = opts
            .with_field("framing", "mode", serde_json::json!("sideways"))
            .unwrap_err();
        assert!(matches!(err, FramingError::OptionsParse(_)));
        assert!(opts
            .with_field("lighting", "x", serde_json::json!(1))
            .is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FramingOptions::load(Path::new("/nonexistent/framing.toml"))
            .unwrap_err();
        assert!(matches!(err, FramingError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(FramingOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("framing"));
        assert!(props.contains_key("transition"));

        let framing = &props["framing"]["properties"];
        assert!(framing.get("radius_offset").is_some());
        assert!(framing.get("framing_time").is_some());
        assert!(framing.get("elevation").is_none());
    }
}
