use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use serde::{Deserialize, Serialize};
use wxmd_layout::{
  LayoutOptions,
  PrimaryColor,
  TemplateId,
  color::is_hex6,
};

use crate::error::ConfigError;

/// Configuration for the wxmd renderer.
///
/// [`Config`] controls the accent color, template preset, the platform
/// styling pass and batch rendering. Fields are typically loaded from a TOML
/// or JSON config file, but can also be set via CLI arguments and
/// `--config KEY=VALUE` overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Accent color for layout components, as `#rrggbb`.
  pub primary_color: Option<String>,

  /// Template preset id. Supplies the accent color when `primary_color` is
  /// unset.
  pub template: Option<String>,

  /// Base font size in pixels for the platform styling pass.
  pub font_size: u32,

  /// Base line height for the platform styling pass.
  pub line_height: f32,

  /// Whether to run the platform styling pass.
  pub platform_styles: bool,

  /// Output directory for batch rendering.
  pub output_dir: PathBuf,

  /// Number of threads to use for batch rendering.
  pub jobs: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      primary_color:   None,
      template:        None,
      font_size:       16,
      line_height:     1.75,
      platform_styles: true,
      output_dir:      PathBuf::from("build"),
      jobs:            None,
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  #[allow(
    clippy::option_if_let_else,
    reason = "Clearer with explicit match on extension"
  )]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) => {
        match ext.to_lowercase().as_str() {
          "json" => {
            serde_json::from_str(&content).map_err(|e| {
              ConfigError::Config(format!(
                "Failed to parse JSON config from {}: {}",
                path.display(),
                e
              ))
            })
          },
          "toml" => {
            toml::from_str(&content).map_err(|e| {
              ConfigError::Config(format!(
                "Failed to parse TOML config from {}: {}",
                path.display(),
                e
              ))
            })
          },
          _ => {
            Err(ConfigError::Config(format!(
              "Unsupported config file format: {}",
              path.display()
            )))
          },
        }
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from files and overrides, merging them.
  ///
  /// Explicit `config_files` are merged in order. Without any, a config file
  /// in a standard location is used if one exists, otherwise the defaults.
  /// `config_overrides` are applied last and the result is validated.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is malformed,
  /// or the merged configuration is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load config from {}: {}",
          first.display(),
          e
        ))
      })?;

      for config_path in rest {
        let additional_config = Self::from_file(config_path).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to load config from {}: {}",
            config_path.display(),
            e
          ))
        })?;
        merged_config.merge(additional_config);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged_config
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load discovered config from {}: {}",
          discovered_config.display(),
          e
        ))
      })?
    } else {
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  ///
  /// # Example
  ///
  /// ```rust
  /// use wxmd_config::Config;
  ///
  /// let mut config = Config::default();
  /// config
  ///   .apply_overrides(&[
  ///     "template=lively".to_string(),
  ///     "platform_styles=no".to_string(),
  ///   ])
  ///   .unwrap();
  /// assert!(!config.platform_styles);
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
      "primary_color" => self.primary_color = non_empty(value),
      "template" => self.template = non_empty(value),
      "font_size" => self.font_size = parse_value(key, value)?,
      "line_height" => self.line_height = parse_value(key, value)?,
      "platform_styles" => self.platform_styles = parse_bool(key, value)?,
      "output_dir" => self.output_dir = PathBuf::from(value),
      "jobs" => {
        self.jobs = if value.is_empty() {
          None
        } else {
          Some(parse_value(key, value)?)
        };
      },
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'. See documentation for \
           supported keys."
        )));
      },
    }

    log::debug!("Applied config override: {key}={value}");
    Ok(())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - Plain fields: Other's value always replaces
  pub fn merge(&mut self, other: Self) {
    if other.primary_color.is_some() {
      self.primary_color = other.primary_color;
    }
    if other.template.is_some() {
      self.template = other.template;
    }
    if other.jobs.is_some() {
      self.jobs = other.jobs;
    }
    self.font_size = other.font_size;
    self.line_height = other.line_height;
    self.platform_styles = other.platform_styles;
    self.output_dir = other.output_dir;
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let config_filenames = [
          "wxmd.toml",
          "wxmd.json",
          ".wxmd.toml",
          ".wxmd.json",
          ".config/wxmd.toml",
          ".config/wxmd.json",
        ];

        let current_dir = std::env::current_dir().ok()?;
        for filename in &config_filenames {
          let config_path = current_dir.join(filename);
          if config_path.exists() {
            return Some(config_path);
          }
        }

        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
          let xdg_config_dir = PathBuf::from(xdg_config_home);
          for filename in &["wxmd.toml", "wxmd.json"] {
            let config_path = xdg_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        if let Ok(home) = std::env::var("HOME") {
          let home_config_dir = PathBuf::from(home).join(".config").join("wxmd");
          for filename in &["config.toml", "config.json"] {
            let config_path = home_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        None
      })
      .clone()
  }

  /// Validate value ranges and identifiers.
  ///
  /// # Errors
  ///
  /// Returns an error listing every invalid field.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if let Some(ref color) = self.primary_color
      && !is_hex6(color)
    {
      errors.push(format!(
        "Invalid primary color '{color}': expected #rrggbb"
      ));
    }

    if let Some(ref template) = self.template
      && template.parse::<TemplateId>().is_err()
    {
      let known = TemplateId::ALL
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ");
      errors.push(format!(
        "Unknown template '{template}'. Available templates: {known}"
      ));
    }

    if !(8..=72).contains(&self.font_size) {
      errors.push(format!(
        "Font size {} is out of range (8-72)",
        self.font_size
      ));
    }

    if !self.line_height.is_finite() || self.line_height <= 0.0 {
      errors.push(format!(
        "Line height must be a positive number, got {}",
        self.line_height
      ));
    }

    if self.jobs == Some(0) {
      errors.push("Number of jobs must be at least 1".to_string());
    }

    if !errors.is_empty() {
      let error_message = errors.join("\n");
      return Err(ConfigError::Config(format!(
        "Configuration validation errors:\n{error_message}"
      )));
    }

    Ok(())
  }

  /// The selected template preset, `simple` when unset or unknown.
  #[must_use]
  pub fn template_id(&self) -> TemplateId {
    self
      .template
      .as_deref()
      .map_or_else(TemplateId::default, TemplateId::parse_or_default)
  }

  /// Accent color: explicit `primary_color`, else the template's, else the
  /// default.
  #[must_use]
  pub fn resolved_primary_color(&self) -> PrimaryColor {
    match (&self.primary_color, &self.template) {
      (Some(color), _) => PrimaryColor::or_default(Some(color.as_str())),
      (None, Some(_)) => self.template_id().preset().primary_color(),
      (None, None) => PrimaryColor::default(),
    }
  }

  /// Renderer options derived from this configuration.
  #[must_use]
  pub fn layout_options(&self) -> LayoutOptions {
    LayoutOptions {
      primary_color:   self.resolved_primary_color(),
      platform_styles: self.platform_styles,
      font_size:       self.font_size,
      line_height:     self.line_height,
    }
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

fn non_empty(value: &str) -> Option<String> {
  (!value.is_empty()).then(|| value.to_string())
}

fn parse_value<T: std::str::FromStr>(
  key: &str,
  value: &str,
) -> Result<T, ConfigError> {
  value.parse().map_err(|_| {
    ConfigError::Config(format!("Invalid value for '{key}': '{value}'"))
  })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "1" => Ok(true),
    "false" | "no" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'. Expected true/false, \
         yes/no, or 1/0"
      )))
    },
  }
}
