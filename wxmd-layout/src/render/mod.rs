//! Component renderer.
//!
//! Turns one [`ParsedBlock`] into a self-contained, inline-styled HTML
//! fragment. Prose inside a block goes through the base Markdown renderer,
//! never through the block scanner again, so custom syntax does not nest.
mod card;
mod divider;
mod highlight;
mod info_box;
mod widgets;

use log::debug;

use crate::{
  color::PrimaryColor,
  components::{ComponentType, Family, InfoBoxKind},
  html::Element,
  types::ParsedBlock,
};

/// Render a scanned block to HTML.
///
/// Unknown component types yield their raw inner content unchanged.
///
/// ```
/// use wxmd_layout::{color::PrimaryColor, render::render_block, scanner::scan};
///
/// let block = &scan(":::badge variant=\"filled\"\nNew\n:::")[0];
/// let html = render_block(block, &PrimaryColor::default());
/// assert!(html.starts_with("<span data-wechat-layout=\"true\""));
/// assert!(html.contains(">New</span>"));
/// ```
#[must_use]
pub fn render_block(block: &ParsedBlock, primary: &PrimaryColor) -> String {
  render_element(block, primary).map_or_else(
    || {
      debug!(
        "Unknown component type '{}', emitting raw content",
        block.block_type
      );
      block.content.clone()
    },
    |element| element.to_html(),
  )
}

/// Build the element tree for `block`, or `None` for an unknown type.
#[must_use]
pub fn render_element(
  block: &ParsedBlock,
  primary: &PrimaryColor,
) -> Option<Element> {
  if block.is_divider() {
    return Some(divider::render(block, primary));
  }

  let ty = ComponentType::from_tag(&block.block_type)?;
  let element = match ty.family() {
    Family::Card => card::render(block, primary),
    Family::InfoBox => {
      info_box::render(InfoBoxKind::from_component(ty)?, block, primary)
    },
    Family::HighlightList | Family::HighlightTable => {
      highlight::render(ty, block, primary)?
    },
    Family::Spacer => widgets::spacer(block),
    Family::Badge => widgets::badge(block, primary),
    Family::Button => widgets::button(block, primary),
    Family::Progress => widgets::progress(block, primary),
  };
  Some(element)
}
