//! Small standalone widgets: spacer, badge, button and progress bar.
use log::debug;

use crate::{
  color::{PrimaryColor, is_hex_color},
  components::{BadgeVariant, ButtonVariant},
  html::Element,
  markdown::render_inline,
  styles,
  types::ParsedBlock,
  utils::clamped_int,
};

const SPACER_DEFAULT: u32 = 20;
const SPACER_MAX: u32 = 500;
const PROGRESS_DEFAULT: u32 = 50;
const PROGRESS_HEIGHT_DEFAULT: u32 = 8;
const PROGRESS_HEIGHT_MAX: u32 = 64;

/// `color` param if it is a hex color, otherwise the primary color.
fn accent<'a>(block: &'a ParsedBlock, primary: &'a PrimaryColor) -> &'a str {
  match block.param("color") {
    Some(c) if is_hex_color(c) => c,
    Some(c) => {
      debug!("Ignoring invalid color '{c}'");
      primary.as_str()
    },
    None => primary.as_str(),
  }
}

/// `text` param, falling back to the block content.
fn label(block: &ParsedBlock) -> &str {
  block.param("text").unwrap_or(block.content.as_str())
}

pub fn spacer(block: &ParsedBlock) -> Element {
  let height =
    clamped_int(block.param("height"), SPACER_DEFAULT, 0, SPACER_MAX);
  Element::new("div").style(styles::spacer(height))
}

pub fn badge(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let variant = BadgeVariant::parse(block.param("variant"));
  Element::new("span")
    .style(styles::badge(variant, accent(block, primary)))
    .text(label(block))
}

/// A link when `url` is set, otherwise a styled block.
pub fn button(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let variant = ButtonVariant::parse(block.param("variant"));
  let element = match block.param("url") {
    Some(url) => Element::new("a").attr("href", url),
    None => Element::new("div"),
  };
  element
    .style(styles::button(variant, primary))
    .raw(render_inline(label(block)))
}

pub fn progress(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let percent = clamped_int(block.param("percent"), PROGRESS_DEFAULT, 0, 100);
  let height = clamped_int(
    block.param("height"),
    PROGRESS_HEIGHT_DEFAULT,
    1,
    PROGRESS_HEIGHT_MAX,
  );

  Element::new("div").style(styles::progress_track(height)).child(
    Element::new("div").style(styles::progress_fill(
      percent,
      height,
      accent(block, primary),
    )),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{render::render_block, scanner::scan};

  fn widget(src: &str) -> String {
    render_block(&scan(src)[0], &PrimaryColor::default())
  }

  #[test]
  fn test_spacer_default_and_clamp() {
    assert!(widget(":::spacer\n:::").contains("height: 20px"));
    assert!(widget(":::spacer height=\"9999\"\n:::").contains("height: 500px"));
    assert!(widget(":::spacer height=\"abc\"\n:::").contains("height: 20px"));
  }

  #[test]
  fn test_badge_text_param_wins_over_content() {
    let html = widget(":::badge text=\"Hot\" variant=\"outlined\"\nignored\n:::");
    assert!(html.contains(">Hot</span>"));
    assert!(html.contains("border: 1px solid #1890ff"));
  }

  #[test]
  fn test_soft_badge_custom_color() {
    let html = widget(":::badge color=\"#000000\"\nNew\n:::");
    assert!(html.contains("background-color: #e6e6e6"));
    assert!(html.contains("color: #000000"));
  }

  #[test]
  fn test_button_link_and_plain() {
    let link = widget(":::button url=\"https://a.test\"\nGo\n:::");
    assert!(link.starts_with("<a "));
    assert!(link.contains("href=\"https://a.test\""));
    assert!(link.contains(">Go</a>"));

    let plain = widget(":::button variant=\"secondary\"\nStay\n:::");
    assert!(plain.starts_with("<div "));
    assert!(plain.contains("background-color: #f0f0f0"));
  }

  #[test]
  fn test_progress_clamps_percent() {
    assert!(
      widget(":::progress percent=\"150\"\n:::")
        .contains("height: 100%; width: 100%")
    );
    assert!(widget(":::progress percent=\"-20\"\n:::").contains("width: 0%"));
    assert!(widget(":::progress\n:::").contains("width: 50%"));
  }

  #[test]
  fn test_progress_height_and_radius() {
    let html = widget(":::progress percent=\"30\" height=\"10\"\n:::");
    assert!(html.contains("height: 10px"));
    assert!(html.contains("border-radius: 5px"));
    assert!(!html.contains("transition"));
  }
}
