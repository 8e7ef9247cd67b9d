//! Layout processing pipeline.
//!
//! - [`types`]: options, builder and the processor struct
//! - [`core`]: the rendering pipeline
//! - [`process`]: error-recovering wrappers
pub mod core;
pub mod process;
pub mod types;

pub use core::collect_markdown_files;

pub use process::{process_safe, process_with_recovery};
pub use types::{LayoutOptions, LayoutOptionsBuilder, LayoutProcessor};
