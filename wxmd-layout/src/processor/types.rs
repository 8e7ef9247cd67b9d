//! Type definitions for the layout processor.
//!
//! # Examples
//!
//! ```
//! use wxmd_layout::{LayoutOptions, LayoutProcessor};
//!
//! let options = LayoutOptions::builder()
//!   .primary_color(Some("#e91e63"))
//!   .platform_styles(false)
//!   .build();
//!
//! let processor = LayoutProcessor::new(options);
//! let result = processor.render(":::tip\nHello\n:::");
//! assert_eq!(result.components, 1);
//! ```
use crate::{
  color::PrimaryColor,
  platform::PlatformStyle,
  templates::TemplateId,
};

/// Options for a [`LayoutProcessor`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
  /// Accent color for components and the styling pass.
  pub primary_color:   PrimaryColor,

  /// Run the global platform styling pass after sanitizing.
  pub platform_styles: bool,

  /// Base font size in pixels for the styling pass.
  pub font_size:       u32,

  /// Base line height for the styling pass.
  pub line_height:     f32,
}

impl Default for LayoutOptions {
  fn default() -> Self {
    let platform = PlatformStyle::default();
    Self {
      primary_color:   platform.primary_color,
      platform_styles: true,
      font_size:       platform.font_size,
      line_height:     platform.line_height,
    }
  }
}

impl LayoutOptions {
  #[must_use]
  pub fn builder() -> LayoutOptionsBuilder {
    LayoutOptionsBuilder::new()
  }

  #[must_use]
  pub fn platform_style(&self) -> PlatformStyle {
    PlatformStyle {
      font_size:     self.font_size,
      line_height:   self.line_height,
      primary_color: self.primary_color.clone(),
    }
  }
}

/// Builder for constructing [`LayoutOptions`] with method chaining.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptionsBuilder {
  options: LayoutOptions,
}

impl LayoutOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self {
      options: LayoutOptions::default(),
    }
  }

  /// Start from a template preset.
  #[must_use]
  pub fn template(mut self, id: TemplateId) -> Self {
    self.options.primary_color = id.preset().primary_color();
    self
  }

  /// Set the accent color. `None` or an invalid color selects the default.
  #[must_use]
  pub fn primary_color(mut self, color: Option<&str>) -> Self {
    self.options.primary_color = PrimaryColor::or_default(color);
    self
  }

  #[must_use]
  pub const fn platform_styles(mut self, enabled: bool) -> Self {
    self.options.platform_styles = enabled;
    self
  }

  #[must_use]
  pub const fn font_size(mut self, size: u32) -> Self {
    self.options.font_size = size;
    self
  }

  #[must_use]
  pub const fn line_height(mut self, height: f32) -> Self {
    self.options.line_height = height;
    self
  }

  #[must_use]
  pub fn build(self) -> LayoutOptions {
    self.options
  }
}

/// Renders layout-extended Markdown to platform HTML.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LayoutProcessor {
  pub(crate) options: LayoutOptions,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builder_defaults() {
    let options = LayoutOptions::builder().build();
    assert_eq!(options, LayoutOptions::default());
    assert_eq!(options.primary_color.as_str(), "#1890ff");
    assert!(options.platform_styles);
  }

  #[test]
  fn test_builder_overrides() {
    let options = LayoutOptions::builder()
      .template(TemplateId::Academic)
      .font_size(15)
      .platform_styles(false)
      .build();
    assert_eq!(options.primary_color.as_str(), "#5c4b8a");
    assert_eq!(options.platform_style().font_size, 15);
    assert!(!options.platform_styles);
  }

  #[test]
  fn test_invalid_color_falls_back() {
    let options = LayoutOptions::builder().primary_color(Some("blue")).build();
    assert_eq!(options.primary_color.as_str(), "#1890ff");
  }
}
