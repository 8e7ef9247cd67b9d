use crate::{
  color::PrimaryColor,
  components::InfoBoxKind,
  html::Element,
  markdown::render_markdown,
  styles,
  types::ParsedBlock,
};

/// Left-accented box. With a title the header reads `icon title`, otherwise
/// the icon alone leads the content.
pub fn render(
  kind: InfoBoxKind,
  block: &ParsedBlock,
  primary: &PrimaryColor,
) -> Element {
  let palette = styles::info_box_palette(kind, primary);
  let icon = block.param("icon").unwrap_or(palette.icon);

  let header = match block.param("title") {
    Some(title) => {
      Element::new("div")
        .style(styles::info_box_title(&palette))
        .text(format!("{icon} {title}"))
    },
    None => {
      Element::new("div")
        .style(styles::info_box_icon(&palette))
        .text(icon)
    },
  };

  Element::new("div")
    .style(styles::info_box(&palette))
    .child(header)
    .raw(render_markdown(&block.content))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scanner::scan;

  fn info(src: &str, kind: InfoBoxKind) -> String {
    render(kind, &scan(src)[0], &PrimaryColor::default()).to_html()
  }

  #[test]
  fn test_tip_uses_primary_palette() {
    let html = info(":::tip\n**Important**\n:::", InfoBoxKind::Tip);
    assert!(html.contains("border-left: 4px solid #1890ff"));
    assert!(html.contains(">💡</div>"));
    assert!(html.contains("<strong>Important</strong>"));
  }

  #[test]
  fn test_title_and_icon_override() {
    let html = info(
      ":::warning title=\"Careful\" icon=\"🔥\"\nhot\n:::",
      InfoBoxKind::Warning,
    );
    assert!(html.contains(">🔥 Careful</div>"));
    assert!(html.contains("#fa8c16"));
    assert!(html.contains("#fff7e6"));
  }

  #[test]
  fn test_quote_palette() {
    let html = info(":::quote\nwords\n:::", InfoBoxKind::Quote);
    assert!(html.contains(">\"</div>"));
    assert!(html.contains("#722ed1"));
  }
}
