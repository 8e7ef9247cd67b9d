//! Catalog of component types, their families and variants.
//!
//! The renderer dispatches on [`ComponentType::family`], and the guide
//! generator walks [`ComponentType::ALL`] so both stay in sync.
use log::debug;

/// Rendering strategy group a component type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
  Card,
  InfoBox,
  /// Line-oriented highlights, plus the single-block callout.
  HighlightList,
  HighlightTable,
  Spacer,
  Badge,
  Button,
  Progress,
}

/// Every recognized `:::type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
  Card,
  Tip,
  Warning,
  Success,
  Error,
  Note,
  Quote,
  Numbered,
  Process,
  Timeline,
  Callout,
  Comparison,
  Spacer,
  Badge,
  Button,
  Progress,
}

impl ComponentType {
  pub const ALL: [Self; 16] = [
    Self::Card,
    Self::Tip,
    Self::Warning,
    Self::Success,
    Self::Error,
    Self::Note,
    Self::Quote,
    Self::Numbered,
    Self::Process,
    Self::Timeline,
    Self::Callout,
    Self::Comparison,
    Self::Spacer,
    Self::Badge,
    Self::Button,
    Self::Progress,
  ];

  /// Resolve a lower-cased tag.
  #[must_use]
  pub fn from_tag(tag: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|t| t.tag() == tag)
  }

  #[must_use]
  pub const fn tag(self) -> &'static str {
    match self {
      Self::Card => "card",
      Self::Tip => "tip",
      Self::Warning => "warning",
      Self::Success => "success",
      Self::Error => "error",
      Self::Note => "note",
      Self::Quote => "quote",
      Self::Numbered => "numbered",
      Self::Process => "process",
      Self::Timeline => "timeline",
      Self::Callout => "callout",
      Self::Comparison => "comparison",
      Self::Spacer => "spacer",
      Self::Badge => "badge",
      Self::Button => "button",
      Self::Progress => "progress",
    }
  }

  #[must_use]
  pub const fn family(self) -> Family {
    match self {
      Self::Card => Family::Card,
      Self::Tip
      | Self::Warning
      | Self::Success
      | Self::Error
      | Self::Note
      | Self::Quote => Family::InfoBox,
      Self::Numbered | Self::Process | Self::Timeline | Self::Callout => {
        Family::HighlightList
      },
      Self::Comparison => Family::HighlightTable,
      Self::Spacer => Family::Spacer,
      Self::Badge => Family::Badge,
      Self::Button => Family::Button,
      Self::Progress => Family::Progress,
    }
  }

  /// One-line description used by the syntax guide.
  #[must_use]
  pub const fn description(self) -> &'static str {
    match self {
      Self::Card => "Bordered content card with optional title and icon",
      Self::Tip => "Tip box, accent colored",
      Self::Warning => "Warning box, orange",
      Self::Success => "Success box, green",
      Self::Error => "Error box, red",
      Self::Note => "Note box, gray",
      Self::Quote => "Quotation box, purple",
      Self::Numbered => "Numbered list with circular badges",
      Self::Process => "Step-by-step process with arrows between steps",
      Self::Timeline => "Vertical timeline of events",
      Self::Callout => "Emphasized callout block",
      Self::Comparison => "Comparison table, first line is the header",
      Self::Spacer => "Vertical whitespace",
      Self::Badge => "Inline label",
      Self::Button => "Call-to-action button, optionally linked",
      Self::Progress => "Progress bar",
    }
  }

  /// Parameters understood by this type, as `(name, meaning)`.
  #[must_use]
  pub const fn params(self) -> &'static [(&'static str, &'static str)] {
    match self {
      Self::Card => &[
        ("variant", "default|primary|gradient|shadow|bordered|glass"),
        ("title", "optional header text"),
        ("icon", "optional header icon"),
      ],
      Self::Tip
      | Self::Warning
      | Self::Success
      | Self::Error
      | Self::Note
      | Self::Quote => &[
        ("title", "optional header text"),
        ("icon", "overrides the default icon"),
      ],
      Self::Callout => &[("title", "optional header text")],
      Self::Numbered | Self::Process | Self::Timeline | Self::Comparison => &[],
      Self::Spacer => &[("height", "pixels, default 20")],
      Self::Badge => &[
        ("text", "label, defaults to the block content"),
        ("variant", "filled|outlined|soft"),
        ("color", "overrides the accent color"),
      ],
      Self::Button => &[
        ("text", "label, defaults to the block content"),
        ("url", "link target"),
        ("variant", "primary|secondary|outline"),
      ],
      Self::Progress => &[
        ("percent", "0-100, default 50"),
        ("height", "pixels, default 8"),
        ("color", "overrides the accent color"),
      ],
    }
  }

  /// A minimal, valid usage example.
  #[must_use]
  pub const fn example(self) -> &'static str {
    match self {
      Self::Card => {
        ":::card variant=\"primary\" title=\"Key points\" icon=\"📌\"\nCard \
         content with **markdown**.\n:::"
      },
      Self::Tip => ":::tip title=\"Tip\"\nA helpful hint.\n:::",
      Self::Warning => ":::warning\nBe careful here.\n:::",
      Self::Success => ":::success\nIt worked.\n:::",
      Self::Error => ":::error\nSomething went wrong.\n:::",
      Self::Note => ":::note\nA side note.\n:::",
      Self::Quote => ":::quote\nSimplicity is prerequisite for reliability.\n:::",
      Self::Numbered => ":::numbered\n- First\n- Second\n- Third\n:::",
      Self::Process => ":::process\n- Plan\n- Build\n- Ship\n:::",
      Self::Timeline => {
        ":::timeline\n- 2023: Idea\n- 2024: Prototype\n- 2025: Launch\n:::"
      },
      Self::Callout => ":::callout title=\"Remember\"\nThe one thing to keep.\n:::",
      Self::Comparison => {
        ":::comparison\nFeature | Before | After\nSpeed | Slow | Fast\n:::"
      },
      Self::Spacer => ":::spacer height=\"30\"\n:::",
      Self::Badge => ":::badge variant=\"filled\"\nNew\n:::",
      Self::Button => {
        ":::button url=\"https://example.com\" variant=\"primary\"\nRead \
         more\n:::"
      },
      Self::Progress => ":::progress percent=\"75\"\n:::",
    }
  }
}

/// Card appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardVariant {
  #[default]
  Default,
  Primary,
  Gradient,
  Shadow,
  Bordered,
  Glass,
}

impl CardVariant {
  pub const ALL: [Self; 6] = [
    Self::Default,
    Self::Primary,
    Self::Gradient,
    Self::Shadow,
    Self::Bordered,
    Self::Glass,
  ];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Default => "default",
      Self::Primary => "primary",
      Self::Gradient => "gradient",
      Self::Shadow => "shadow",
      Self::Bordered => "bordered",
      Self::Glass => "glass",
    }
  }

  /// Parse a variant name; unknown names fall back to the default.
  #[must_use]
  pub fn parse(name: Option<&str>) -> Self {
    parse_named(name, &Self::ALL, Self::name)
  }
}

/// Semantic flavor of an info box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoBoxKind {
  Tip,
  Warning,
  Success,
  Error,
  Note,
  Quote,
}

impl InfoBoxKind {
  #[must_use]
  pub const fn from_component(ty: ComponentType) -> Option<Self> {
    match ty {
      ComponentType::Tip => Some(Self::Tip),
      ComponentType::Warning => Some(Self::Warning),
      ComponentType::Success => Some(Self::Success),
      ComponentType::Error => Some(Self::Error),
      ComponentType::Note => Some(Self::Note),
      ComponentType::Quote => Some(Self::Quote),
      _ => None,
    }
  }
}

/// Divider line style. Also used as the divider block's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DividerStyle {
  #[default]
  Solid,
  Dashed,
  Dotted,
  Gradient,
}

impl DividerStyle {
  pub const ALL: [Self; 4] =
    [Self::Solid, Self::Dashed, Self::Dotted, Self::Gradient];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Solid => "solid",
      Self::Dashed => "dashed",
      Self::Dotted => "dotted",
      Self::Gradient => "gradient",
    }
  }

  /// Parse a style name; unknown or absent names become `solid`.
  #[must_use]
  pub fn parse(name: Option<&str>) -> Self {
    parse_named(name, &Self::ALL, Self::name)
  }
}

/// Badge appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeVariant {
  Filled,
  Outlined,
  #[default]
  Soft,
}

impl BadgeVariant {
  pub const ALL: [Self; 3] = [Self::Filled, Self::Outlined, Self::Soft];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Filled => "filled",
      Self::Outlined => "outlined",
      Self::Soft => "soft",
    }
  }

  #[must_use]
  pub fn parse(name: Option<&str>) -> Self {
    parse_named(name, &Self::ALL, Self::name)
  }
}

/// Button appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
  #[default]
  Primary,
  Secondary,
  Outline,
}

impl ButtonVariant {
  pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Outline];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Primary => "primary",
      Self::Secondary => "secondary",
      Self::Outline => "outline",
    }
  }

  #[must_use]
  pub fn parse(name: Option<&str>) -> Self {
    parse_named(name, &Self::ALL, Self::name)
  }
}

fn parse_named<T: Copy + Default>(
  name: Option<&str>,
  all: &[T],
  name_of: fn(T) -> &'static str,
) -> T {
  let Some(name) = name else {
    return T::default();
  };
  let wanted = name.trim().to_ascii_lowercase();
  all
    .iter()
    .copied()
    .find(|v| name_of(*v) == wanted)
    .unwrap_or_else(|| {
      debug!("Unknown variant '{name}', using default");
      T::default()
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_every_tag_round_trips() {
    for ty in ComponentType::ALL {
      assert_eq!(ComponentType::from_tag(ty.tag()), Some(ty));
    }
    assert_eq!(ComponentType::from_tag("divider"), None);
    assert_eq!(ComponentType::from_tag("Card"), None);
  }

  #[test]
  fn test_examples_scan_as_one_block() {
    for ty in ComponentType::ALL {
      let blocks = crate::scanner::scan(ty.example());
      assert_eq!(blocks.len(), 1, "example for {}", ty.tag());
      assert_eq!(blocks[0].block_type, ty.tag());
    }
  }

  #[test]
  fn test_families() {
    assert_eq!(ComponentType::Quote.family(), Family::InfoBox);
    assert_eq!(ComponentType::Callout.family(), Family::HighlightList);
    assert_eq!(ComponentType::Comparison.family(), Family::HighlightTable);
  }

  #[test]
  fn test_variant_fallbacks() {
    assert_eq!(CardVariant::parse(Some("neon")), CardVariant::Default);
    assert_eq!(CardVariant::parse(Some("Glass")), CardVariant::Glass);
    assert_eq!(DividerStyle::parse(Some("wavy")), DividerStyle::Solid);
    assert_eq!(DividerStyle::parse(None), DividerStyle::Solid);
    assert_eq!(BadgeVariant::parse(None), BadgeVariant::Soft);
    assert_eq!(ButtonVariant::parse(Some("ghost")), ButtonVariant::Primary);
  }
}
