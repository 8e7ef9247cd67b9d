use thiserror::Error;

/// Error type for template operations.
#[derive(Debug, Error)]
pub enum TemplateError {
  /// The requested configuration format is not supported.
  #[error("Unsupported config format: {0}")]
  UnsupportedFormat(String),
}

/// Default configuration template in TOML, commented so a new user can find
/// their way around.
pub const DEFAULT_TOML_TEMPLATE: &str = r##"# wxmd configuration file

# Accent color for layout components, as #rrggbb.
# Leave unset to take the color from the template preset.
# primary_color = "#1890ff"

# Template preset: simple, business, lively, academic or magazine
# template = "business"

# Run the platform styling pass, inlining font, color and spacing rules on
# every plain Markdown element
platform_styles = true

# Base font size in pixels for the styling pass
font_size = 16

# Base line height for the styling pass
line_height = 1.75

# Output directory when rendering several files or a directory
output_dir = "build"

# Number of threads to use for batch rendering (defaults to number of CPU cores)
# jobs = 4
"##;

/// Default configuration template in JSON format.
pub const DEFAULT_JSON_TEMPLATE: &str = r##"{
  "template": "business",
  "platform_styles": true,
  "font_size": 16,
  "line_height": 1.75,
  "output_dir": "build"
}
"##;

/// Get the correct configuration template based on the requested format.
///
/// # Errors
///
/// Returns an error if the requested format is not supported.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Config;

  #[test]
  fn test_templates_parse_as_config() {
    let from_toml: Result<Config, _> = toml::from_str(DEFAULT_TOML_TEMPLATE);
    assert!(from_toml.is_ok_and(|c| c.font_size == 16));

    let from_json: Result<Config, _> =
      serde_json::from_str(DEFAULT_JSON_TEMPLATE);
    assert!(from_json.is_ok_and(|c| c.template.as_deref() == Some("business")));
  }

  #[test]
  fn test_unsupported_format() {
    assert!(get_template("TOML").is_ok());
    assert!(matches!(
      get_template("yaml"),
      Err(TemplateError::UnsupportedFormat(f)) if f == "yaml"
    ));
  }
}
