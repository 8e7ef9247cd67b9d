//! Human-readable documentation of the layout syntax, suitable as an AI
//! prompt. Generated from the same catalog the renderer dispatches on.
use std::fmt::Write;

use crate::{
  components::{CardVariant, ComponentType, DividerStyle, Family},
  templates::TemplateId,
};

/// Section headings, in output order.
const SECTIONS: &[(Family, &str)] = &[
  (Family::Card, "Cards"),
  (Family::InfoBox, "Info boxes"),
  (Family::HighlightList, "Highlights"),
  (Family::HighlightTable, "Comparison tables"),
  (Family::Spacer, "Spacing"),
  (Family::Badge, "Badges"),
  (Family::Button, "Buttons"),
  (Family::Progress, "Progress bars"),
];

/// Full reference of every component type and the divider syntax.
#[must_use]
pub fn syntax_guide() -> String {
  let mut out = String::from(
    "# Layout component syntax\n\nBlocks are written as \
     `:::type key=\"value\"` on their own line, followed by the content and \
     a closing `:::` line. Parameter values are always double-quoted. \
     Blocks cannot be nested.\n",
  );

  for (family, heading) in SECTIONS {
    let _ = write!(out, "\n## {heading}\n");
    for ty in ComponentType::ALL.into_iter().filter(|t| t.family() == *family)
    {
      let _ = write!(out, "\n### `{}`: {}\n", ty.tag(), ty.description());
      if !ty.params().is_empty() {
        out.push('\n');
        for (name, meaning) in ty.params() {
          let _ = writeln!(out, "- `{name}`: {meaning}");
        }
      }
      let _ = write!(out, "\n```markdown\n{}\n```\n", ty.example());
    }
  }

  out.push_str(&divider_section());
  out
}

fn divider_section() -> String {
  let mut out = String::from(
    "\n## Dividers\n\nDividers fit on one line: \
     `---style=<style>---`, optionally with `text=\"...\"` and \
     `color=#rrggbb`.\n\n```markdown\n",
  );
  for style in DividerStyle::ALL {
    let _ = writeln!(out, "---style={}---", style.name());
  }
  out.push_str("---style=dashed text=\"Section\"---\n```\n");
  out
}

/// Example snippets tailored to a template's preferred components.
#[must_use]
pub fn template_examples(id: TemplateId) -> String {
  let preset = id.preset();
  let mut out = String::new();

  if let Some(variant) = preset.card_variants.first() {
    let _ = write!(
      out,
      ":::card variant=\"{}\" title=\"Card title\"\nCard content\n:::\n\n",
      variant.name()
    );
  }

  if let Some(ty) = preset.info_boxes.first() {
    let _ = write!(out, ":::{}\nA short {} message\n:::\n\n", ty.tag(), ty.tag());
  }

  for ty in preset.highlights {
    match ty {
      ComponentType::Numbered => {
        out.push_str(":::numbered\n- First point\n- Second point\n- Third point\n:::\n\n");
      },
      ComponentType::Process => {
        out.push_str(":::process\n- Step one\n- Step two\n- Step three\n:::\n\n");
      },
      _ => {},
    }
  }

  if let Some(style) = preset.divider_styles.first() {
    let _ = write!(out, "---style={}---\n\n", style.name());
  }

  out
}

/// Complete prompt: syntax reference, template examples and usage notes.
#[must_use]
pub fn layout_prompt(id: TemplateId) -> String {
  let preset = id.preset();
  let examples = template_examples(id);
  let card_variants = CardVariant::ALL
    .iter()
    .map(|v| v.name())
    .collect::<Vec<_>>()
    .join("|");

  let mut out = String::from(
    "Restructure the content using the layout components below where they \
     help the reader.\n\n",
  );
  let _ = write!(
    out,
    "Card variants: {card_variants}. Accent color: {}.\n\n",
    preset.primary_color
  );
  out.push_str(&syntax_guide());
  let _ = write!(out, "\n## {} style examples\n\n", preset.label);
  if examples.is_empty() {
    out.push_str("Keep to plain, clean Markdown.\n");
  } else {
    out.push_str(&examples);
  }

  out.push_str("\n## Notes\n\n");
  out.push_str("1. Pick components that match the kind of content.\n");
  out.push_str("2. Do not overuse components; keep the text concise.\n");
  out.push_str("3. Components should serve the content, not decorate it.\n");
  out.push_str(if preset.use_emoji {
    "4. Emoji may be used sparingly for emphasis.\n"
  } else {
    "4. Avoid emoji and keep a professional tone.\n"
  });
  out.push_str(if preset.use_gradients {
    "5. Gradient-style cards and dividers are welcome.\n"
  } else {
    "5. Keep the color scheme plain.\n"
  });
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scanner::scan;

  #[test]
  fn test_guide_mentions_every_type() {
    let guide = syntax_guide();
    for ty in ComponentType::ALL {
      assert!(guide.contains(&format!(":::{}", ty.tag())), "{}", ty.tag());
    }
    for style in DividerStyle::ALL {
      assert!(guide.contains(&format!("---style={}---", style.name())));
    }
  }

  #[test]
  fn test_template_examples_follow_preferences() {
    let business = template_examples(TemplateId::Business);
    assert!(business.contains(":::card variant=\"bordered\""));
    assert!(business.contains(":::process"));
    assert!(business.contains("---style=solid---"));

    let lively = template_examples(TemplateId::Lively);
    assert!(lively.contains(":::card variant=\"gradient\""));
    assert!(!lively.contains(":::process"));
  }

  #[test]
  fn test_examples_scan_cleanly() {
    for id in TemplateId::ALL {
      let blocks = scan(&template_examples(id));
      assert!(blocks.len() >= 3, "{id}: {blocks:?}");
    }
  }

  #[test]
  fn test_prompt_notes_follow_preset() {
    assert!(layout_prompt(TemplateId::Lively).contains("Emoji may be used"));
    assert!(layout_prompt(TemplateId::Academic).contains("Avoid emoji"));
  }
}
