use crate::{
  color::PrimaryColor,
  components::CardVariant,
  html::Element,
  markdown::render_markdown,
  styles,
  types::ParsedBlock,
};

pub fn render(block: &ParsedBlock, primary: &PrimaryColor) -> Element {
  let variant = CardVariant::parse(block.param("variant"));
  let mut card = Element::new("div").style(styles::card(variant, primary));

  if let Some(title) = block.param("title") {
    let heading = match block.param("icon") {
      Some(icon) => format!("{icon} {title}"),
      None => title.to_string(),
    };
    card = card.child(
      Element::new("div")
        .style(styles::card_title(variant, primary))
        .text(heading),
    );
  }

  card.raw(render_markdown(&block.content))
}
