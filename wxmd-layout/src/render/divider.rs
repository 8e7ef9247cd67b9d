use crate::{
  color::PrimaryColor,
  components::DividerStyle,
  html::Element,
  styles,
  types::ParsedBlock,
};

/// A plain rule, or a rule / text / rule table row when `text` is given.
pub fn render(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let style = DividerStyle::parse(
    block.param("style").or(Some(block.block_type.as_str())),
  );
  let color = block.param("color").unwrap_or_else(|| primary.as_str());
  let line = styles::divider_line(style, color);

  match block.param("text") {
    Some(text) => {
      let row = Element::new("tr")
        .child(Element::new("td").style(line.clone()))
        .child(Element::new("td").style(styles::divider_text()).text(text))
        .child(Element::new("td").style(line));
      Element::new("table")
        .style(styles::layout_table("24px 0"))
        .child(Element::new("tbody").child(row))
    },
    None => Element::new("div").style(line.with("margin", "24px 0")),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scanner::scan;

  fn divider(src: &str) -> String {
    render(&scan(src)[0], &PrimaryColor::default()).to_html()
  }

  #[test]
  fn test_text_divider_has_three_cells() {
    let html = divider("---style=dashed text=\"Section\"---");
    assert_eq!(html.matches("<td").count(), 3);
    assert_eq!(html.matches("1px dashed #1890ff").count(), 2);
    assert!(html.contains(">Section</td>"));
  }

  #[test]
  fn test_plain_divider() {
    let html = divider("---style=solid---");
    assert!(html.starts_with("<div"));
    assert!(html.contains("background-color: #e8e8e8"));
    assert!(html.contains("margin: 24px 0"));
  }

  #[test]
  fn test_custom_color() {
    let html = divider("---style=dotted color=#abc---");
    assert!(html.contains("1px dotted #abc"));
  }
}
