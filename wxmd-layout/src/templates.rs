//! Template presets: accent colors and preferred components per visual style.
use std::{fmt, str::FromStr};

use log::warn;

use crate::{
  color::PrimaryColor,
  components::{CardVariant, ComponentType, DividerStyle},
};

/// Identifier of a built-in template preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateId {
  #[default]
  Simple,
  Business,
  Lively,
  Academic,
  Magazine,
}

impl TemplateId {
  pub const ALL: [Self; 5] = [
    Self::Simple,
    Self::Business,
    Self::Lively,
    Self::Academic,
    Self::Magazine,
  ];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Simple => "simple",
      Self::Business => "business",
      Self::Lively => "lively",
      Self::Academic => "academic",
      Self::Magazine => "magazine",
    }
  }

  /// Resolve a template id, falling back to `simple` for unknown names.
  #[must_use]
  pub fn parse_or_default(name: &str) -> Self {
    name.parse().unwrap_or_else(|()| {
      warn!("Unknown template '{name}', using 'simple'");
      Self::Simple
    })
  }

  #[must_use]
  pub const fn preset(self) -> &'static TemplatePreset {
    match self {
      Self::Simple => &SIMPLE,
      Self::Business => &BUSINESS,
      Self::Lively => &LIVELY,
      Self::Academic => &ACADEMIC,
      Self::Magazine => &MAGAZINE,
    }
  }
}

impl FromStr for TemplateId {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_ascii_lowercase();
    Self::ALL
      .into_iter()
      .find(|t| t.name() == wanted)
      .ok_or(())
  }
}

impl fmt::Display for TemplateId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Static description of a template's look.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePreset {
  pub id:              TemplateId,
  pub label:           &'static str,
  pub primary_color:   &'static str,
  pub card_variants:   &'static [CardVariant],
  /// Info-box component types, most preferred first.
  pub info_boxes:      &'static [ComponentType],
  pub highlights:      &'static [ComponentType],
  pub divider_styles:  &'static [DividerStyle],
  pub use_emoji:       bool,
  pub use_gradients:   bool,
}

impl TemplatePreset {
  #[must_use]
  pub fn primary_color(&self) -> PrimaryColor {
    PrimaryColor::or_default(Some(self.primary_color))
  }
}

static SIMPLE: TemplatePreset = TemplatePreset {
  id:             TemplateId::Simple,
  label:          "Simple",
  primary_color:  "#333333",
  card_variants:  &[CardVariant::Default],
  info_boxes:     &[ComponentType::Note, ComponentType::Tip],
  highlights:     &[ComponentType::Numbered],
  divider_styles: &[DividerStyle::Solid],
  use_emoji:      false,
  use_gradients:  false,
};

static BUSINESS: TemplatePreset = TemplatePreset {
  id:             TemplateId::Business,
  label:          "Business",
  primary_color:  "#1890ff",
  card_variants:  &[CardVariant::Bordered, CardVariant::Primary],
  info_boxes:     &[ComponentType::Tip, ComponentType::Note, ComponentType::Quote],
  highlights:     &[
    ComponentType::Numbered,
    ComponentType::Process,
    ComponentType::Comparison,
  ],
  divider_styles: &[DividerStyle::Solid, DividerStyle::Dashed],
  use_emoji:      false,
  use_gradients:  false,
};

static LIVELY: TemplatePreset = TemplatePreset {
  id:             TemplateId::Lively,
  label:          "Lively",
  primary_color:  "#ff6b6b",
  card_variants:  &[CardVariant::Gradient, CardVariant::Shadow, CardVariant::Primary],
  info_boxes:     &[ComponentType::Tip, ComponentType::Warning, ComponentType::Success],
  highlights:     &[ComponentType::Callout, ComponentType::Numbered],
  divider_styles: &[DividerStyle::Dashed, DividerStyle::Gradient],
  use_emoji:      true,
  use_gradients:  true,
};

static ACADEMIC: TemplatePreset = TemplatePreset {
  id:             TemplateId::Academic,
  label:          "Academic",
  primary_color:  "#5c4b8a",
  card_variants:  &[CardVariant::Bordered, CardVariant::Default],
  info_boxes:     &[ComponentType::Note, ComponentType::Quote],
  highlights:     &[ComponentType::Timeline, ComponentType::Comparison],
  divider_styles: &[DividerStyle::Solid],
  use_emoji:      false,
  use_gradients:  false,
};

static MAGAZINE: TemplatePreset = TemplatePreset {
  id:             TemplateId::Magazine,
  label:          "Magazine",
  primary_color:  "#e91e63",
  card_variants:  &[CardVariant::Shadow, CardVariant::Glass, CardVariant::Gradient],
  info_boxes:     &[ComponentType::Quote, ComponentType::Tip],
  highlights:     &[ComponentType::Callout, ComponentType::Timeline],
  divider_styles: &[DividerStyle::Gradient, DividerStyle::Solid],
  use_emoji:      true,
  use_gradients:  true,
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_presets_have_valid_colors() {
    for id in TemplateId::ALL {
      let preset = id.preset();
      assert_eq!(preset.id, id);
      assert_eq!(preset.primary_color().as_str(), preset.primary_color);
      assert!(!preset.card_variants.is_empty());
    }
  }

  #[test]
  fn test_parse_template_ids() {
    assert_eq!("Lively".parse::<TemplateId>(), Ok(TemplateId::Lively));
    assert_eq!(TemplateId::parse_or_default("nope"), TemplateId::Simple);
    assert_eq!(TemplateId::Magazine.to_string(), "magazine");
  }

  #[test]
  fn test_info_boxes_are_info_box_types() {
    use crate::components::Family;
    for id in TemplateId::ALL {
      for ty in id.preset().info_boxes {
        assert_eq!(ty.family(), Family::InfoBox);
      }
    }
  }
}
