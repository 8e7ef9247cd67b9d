//! # wxmd-layout - Layout components for WeChat-style Markdown articles
//!
//! Extends Markdown with fenced layout blocks and one-line dividers that
//! render to fully inline-styled HTML, so the output survives editors that
//! strip stylesheets and class names.
//!
//! ## Quick Start
//!
//! ```rust
//! use wxmd_layout::{LayoutOptions, LayoutProcessor};
//!
//! let processor = LayoutProcessor::new(LayoutOptions::default());
//! let result = processor.render(
//!   "# Release notes\n\n:::tip title=\"Heads up\"\nUpgrade soon.\n:::\n",
//! );
//!
//! println!("HTML: {}", result.html);
//! println!("Title: {:?}", result.title);
//! assert_eq!(result.components, 1);
//! ```
//!
//! ## Syntax
//!
//! - **Components**: `:::type key="value"` on its own line, the content, then
//!   a closing `:::`. Sixteen types are supported, from cards and info boxes
//!   to timelines, comparison tables and progress bars.
//! - **Dividers**: `---style=dashed text="Part two" color=#ff6b6b---` on a
//!   single line.
//!
//! Unknown component types pass their content through unchanged; unknown
//! variants fall back to the default look.
//!
//! ## Lower-level API
//!
//! ```rust
//! use wxmd_layout::{PrimaryColor, assemble, scan};
//!
//! let doc = ":::badge color=\"#ff0000\"\nNew\n:::";
//! assert_eq!(scan(doc).len(), 1);
//!
//! let html = assemble(doc, &PrimaryColor::default());
//! assert!(html.contains("data-wechat-layout"));
//! ```

pub mod assemble;
pub mod color;
pub mod components;
pub mod guide;
pub mod html;
pub mod markdown;
pub mod platform;
pub mod processor;
pub mod render;
pub mod sanitize;
pub mod scanner;
pub mod styles;
pub mod templates;
mod types;
pub mod utils;

pub use crate::{
  assemble::assemble,
  color::PrimaryColor,
  components::ComponentType,
  guide::{layout_prompt, syntax_guide, template_examples},
  processor::{
    LayoutOptions,
    LayoutOptionsBuilder,
    LayoutProcessor,
    collect_markdown_files,
    process_with_recovery,
  },
  sanitize::sanitize,
  scanner::scan,
  templates::{TemplateId, TemplatePreset},
  types::{BlockKind, LayoutResult, Params, ParsedBlock},
};
