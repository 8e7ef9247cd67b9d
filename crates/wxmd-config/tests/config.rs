#![allow(clippy::unwrap_used, reason = "Fine in tests")]
use std::fs;

use tempfile::TempDir;
use wxmd_config::{Config, ConfigError};

#[test]
fn test_from_file_toml_and_json() {
  let dir = TempDir::new().unwrap();

  let toml_path = dir.path().join("wxmd.toml");
  fs::write(
    &toml_path,
    "template = \"academic\"\nfont_size = 15\nplatform_styles = false\n",
  )
  .unwrap();
  let config = Config::from_file(&toml_path).unwrap();
  assert_eq!(config.template.as_deref(), Some("academic"));
  assert_eq!(config.font_size, 15);
  assert!(!config.platform_styles);
  assert!((config.line_height - 1.75).abs() < f32::EPSILON);

  let json_path = dir.path().join("wxmd.json");
  fs::write(&json_path, r##"{"primary_color": "#e91e63", "jobs": 2}"##)
    .unwrap();
  let config = Config::from_file(&json_path).unwrap();
  assert_eq!(config.primary_color.as_deref(), Some("#e91e63"));
  assert_eq!(config.jobs, Some(2));
}

#[test]
fn test_from_file_rejects_unknown_format() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("wxmd.yaml");
  fs::write(&path, "template: simple").unwrap();

  let err = Config::from_file(&path).unwrap_err();
  assert!(err.to_string().contains("Unsupported config file format"));

  let missing = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
  assert!(missing.to_string().contains("Failed to read config file"));
}

#[test]
fn test_parse_errors_name_the_file() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("broken.toml");
  fs::write(&path, "font_size = \"big\"").unwrap();

  let err = Config::from_file(&path).unwrap_err();
  assert!(matches!(
    err,
    ConfigError::Config(ref msg)
      if msg.contains("Failed to parse TOML") && msg.contains("broken.toml")
  ));
}

#[test]
fn test_load_merges_files_then_overrides() {
  let dir = TempDir::new().unwrap();
  let base = dir.path().join("base.toml");
  let extra = dir.path().join("extra.json");
  fs::write(&base, "template = \"business\"\nprimary_color = \"#123456\"\n")
    .unwrap();
  fs::write(&extra, r#"{"template": "magazine", "font_size": 18}"#).unwrap();

  let config = Config::load(&[base, extra], &["jobs=3".to_string()]).unwrap();

  assert_eq!(config.template.as_deref(), Some("magazine"));
  assert_eq!(config.primary_color.as_deref(), Some("#123456"));
  assert_eq!(config.font_size, 18);
  assert_eq!(config.jobs, Some(3));
  assert_eq!(config.layout_options().primary_color.as_str(), "#123456");
}

#[test]
fn test_load_validates_result() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("bad.toml");
  fs::write(&path, "primary_color = \"blue\"\n").unwrap();

  let err = Config::load(&[path], &[]).unwrap_err();
  assert!(err.to_string().contains("Invalid primary color"));
}

#[test]
fn test_generate_default_config_round_trips() {
  let dir = TempDir::new().unwrap();

  for format in ["toml", "json"] {
    let path = dir.path().join(format!("wxmd.{format}"));
    Config::generate_default_config(format, &path).unwrap();
    let config = Config::from_file(&path).unwrap();
    assert!(config.validate().is_ok(), "{format}");
    assert!(config.platform_styles);
  }

  let err =
    Config::generate_default_config("ini", &dir.path().join("wxmd.ini"))
      .unwrap_err();
  assert!(err.to_string().contains("Unsupported config format"));
}
