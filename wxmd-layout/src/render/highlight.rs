//! Highlight family: numbered lists, process steps, timelines, callouts and
//! comparison tables.
//!
//! List-like highlights lay out with tables and solid colors because the
//! target platform drops flexbox and absolute positioning.
use crate::{
  color::PrimaryColor,
  components::ComponentType,
  html::Element,
  markdown::{render_inline, render_markdown},
  styles,
  types::ParsedBlock,
  utils::{strip_bullet, without_bullet},
};

pub fn render(
  ty: ComponentType,
  block: &ParsedBlock,
  primary: &PrimaryColor,
) -> Option<Element> {
  let element = match ty {
    ComponentType::Numbered => numbered(block, primary),
    ComponentType::Process => process(block, primary),
    ComponentType::Timeline => timeline(block, primary),
    ComponentType::Callout => callout(block, primary),
    ComponentType::Comparison => comparison(block, primary),
    _ => return None,
  };
  Some(element)
}

/// Non-empty lines of the block content, trimmed.
fn lines(block: &ParsedBlock) -> Vec<&str> {
  block
    .content
    .lines()
    .map(str::trim)
    .filter(|l| !l.is_empty())
    .collect()
}

/// Bullet lines get a numbered badge. Other lines span both columns and do
/// not advance the counter.
fn numbered(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let mut rows = Vec::new();
  let mut number = 0_usize;

  for line in lines(block) {
    let row = if let Some(item) = strip_bullet(line) {
      number += 1;
      Element::new("tr")
        .child(
          Element::new("td").style(styles::numbered_badge_cell()).child(
            Element::new("span")
              .style(styles::numbered_badge(primary))
              .text(number.to_string()),
          ),
        )
        .child(
          Element::new("td")
            .style(styles::numbered_text_cell())
            .raw(render_inline(item)),
        )
    } else {
      Element::new("tr").child(
        Element::new("td")
          .attr("colspan", "2")
          .style(styles::numbered_text_cell())
          .raw(render_inline(line)),
      )
    };
    rows.push(row);
  }

  Element::new("table")
    .style(styles::layout_table("12px 0"))
    .child(Element::new("tbody").children_from(rows))
}

fn process(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let items = lines(block);
  let last = items.len().saturating_sub(1);
  let mut wrapper = Element::new("div").style(styles::highlight_wrapper());

  for (index, line) in items.into_iter().enumerate() {
    wrapper = wrapper.child(
      Element::new("div")
        .style(styles::process_step(primary))
        .child(
          Element::new("span")
            .style(styles::process_badge(primary))
            .text((index + 1).to_string()),
        )
        .child(
          Element::new("span")
            .style(styles::process_text())
            .raw(render_inline(without_bullet(line))),
        ),
    );
    if index < last {
      wrapper = wrapper.child(
        Element::new("div")
          .style(styles::process_arrow(primary))
          .text("↓"),
      );
    }
  }

  wrapper
}

fn timeline(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let items = lines(block);
  let last = items.len().saturating_sub(1);
  let mut rows = Vec::with_capacity(items.len());

  for (index, line) in items.into_iter().enumerate() {
    let mut dot_cell = Element::new("td")
      .style(styles::timeline_dot_cell())
      .child(Element::new("span").style(styles::timeline_dot(primary)));
    if index < last {
      dot_cell =
        dot_cell.child(Element::new("div").style(styles::timeline_connector()));
    }

    rows.push(
      Element::new("tr").child(dot_cell).child(
        Element::new("td")
          .style(styles::timeline_text_cell())
          .raw(render_inline(without_bullet(line))),
      ),
    );
  }

  Element::new("table")
    .style(styles::layout_table("8px 0"))
    .child(Element::new("tbody").children_from(rows))
}

fn callout(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let mut element = Element::new("div").style(styles::callout(primary));
  if let Some(title) = block.param("title") {
    element = element.child(
      Element::new("div")
        .style(styles::callout_title(primary))
        .text(title),
    );
  }
  element.raw(render_markdown(&block.content))
}

/// First line is the header row; each cell renders independently.
fn comparison(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let mut table =
    Element::new("table").style(styles::layout_table("16px 0"));
  let mut body = Vec::new();

  for (index, line) in lines(block).into_iter().enumerate() {
    let cells = line.split('|').map(str::trim).filter(|c| !c.is_empty());

    if index == 0 {
      let header = Element::new("tr").children_from(cells.map(|cell| {
        Element::new("th")
          .style(styles::comparison_header(primary))
          .raw(render_inline(cell))
      }));
      table = table.child(Element::new("thead").child(header));
    } else {
      body.push(Element::new("tr").children_from(cells.map(|cell| {
        Element::new("td")
          .style(styles::comparison_cell())
          .raw(render_inline(cell))
      })));
    }
  }

  if !body.is_empty() {
    table = table.child(Element::new("tbody").children_from(body));
  }
  table
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scanner::scan;

  fn highlight(src: &str) -> String {
    let block = &scan(src)[0];
    let ty = ComponentType::from_tag(&block.block_type);
    assert!(ty.is_some());
    ty.and_then(|ty| render(ty, block, &PrimaryColor::default()))
      .map(|e| e.to_html())
      .unwrap_or_default()
  }

  #[test]
  fn test_numbered_skips_plain_lines_when_counting() {
    let html = highlight(":::numbered\n- one\nnote line\n- two\n:::");
    assert_eq!(html.matches("<tr").count(), 3);
    assert!(html.contains(">1</span>"));
    assert!(html.contains(">2</span>"));
    assert!(!html.contains(">3</span>"));
    assert!(html.contains("colspan=\"2\""));

    let one = html.find("one").unwrap_or(usize::MAX);
    let note = html.find("note line").unwrap_or(usize::MAX);
    let two = html.find("two").unwrap_or(usize::MAX);
    assert!(one < note && note < two);
  }

  #[test]
  fn test_numbered_renders_inline_markdown() {
    let html = highlight(":::numbered\n* **bold** item\n:::");
    assert!(html.contains("<strong>bold</strong> item"));
    assert!(!html.contains("<p>"));
  }

  #[test]
  fn test_process_arrows_between_steps_only() {
    let html = highlight(":::process\n- a\n- b\n- c\n:::");
    assert_eq!(html.matches('↓').count(), 2);
    assert!(html.contains(">3</span>"));
    assert!(html.trim_end().ends_with("</div>"));
  }

  #[test]
  fn test_timeline_connector_omitted_on_last_row() {
    let html = highlight(":::timeline\n- a\n- b\n:::");
    assert_eq!(html.matches("width: 2px").count(), 1);
    assert_eq!(html.matches("border-radius: 50%").count(), 2);
  }

  #[test]
  fn test_callout_title() {
    let html = highlight(":::callout title=\"Heads up\"\nBody\n:::");
    assert!(html.contains("font-size: 18px"));
    assert!(html.contains(">Heads up</div>"));
    assert!(html.contains("<p>Body</p>"));
  }

  #[test]
  fn test_comparison_header_differs_from_body() {
    let html = highlight(":::comparison\nA|B\n1|2\n:::");
    assert!(html.contains("<thead"));
    assert_eq!(html.matches("<th ").count(), 2);
    assert_eq!(html.matches("<td ").count(), 2);
    assert!(html.contains("color: #fff"));
    assert!(html.contains("border: 1px solid #e8e8e8"));
  }

  #[test]
  fn test_comparison_ignores_empty_cells() {
    let html = highlight(":::comparison\n| A | B |\n| 1 | 2 |\n:::");
    assert_eq!(html.matches("<th ").count(), 2);
    assert_eq!(html.matches("<td ").count(), 2);
  }
}
