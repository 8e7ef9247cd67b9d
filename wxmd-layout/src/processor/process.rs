//! Processing functions with error recovery.
use log::error;

use super::types::LayoutProcessor;
use crate::types::LayoutResult;

/// Render with panic recovery.
///
/// A panic anywhere in the pipeline is logged and replaced by an error
/// paragraph instead of tearing down the caller.
#[must_use]
pub fn process_with_recovery(
  processor: &LayoutProcessor,
  content: &str,
) -> LayoutResult {
  match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor.render(content)
  })) {
    Ok(result) => result,
    Err(panic_err) => {
      error!("Panic during layout rendering: {panic_err:?}");
      LayoutResult {
        html: "<p>Critical error rendering layout content</p>".to_string(),
        ..LayoutResult::default()
      }
    },
  }
}

/// Safely apply a string transformation with error recovery.
///
/// Empty input short-circuits to an empty string. If `processor_fn` panics
/// the panic message is logged and `fallback` is returned, or the original
/// `content` when `fallback` is empty.
pub fn process_safe<F>(content: &str, processor_fn: F, fallback: &str) -> String
where
  F: FnOnce(&str) -> String,
{
  if content.is_empty() {
    return String::new();
  }

  let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor_fn(content)
  }));

  match result {
    Ok(processed_text) => processed_text,
    Err(e) => {
      if let Some(error_msg) = e.downcast_ref::<String>() {
        error!("Error processing markup: {error_msg}");
      } else if let Some(error_msg) = e.downcast_ref::<&str>() {
        error!("Error processing markup: {error_msg}");
      } else {
        error!("Unknown error occurred while processing markup");
      }

      if fallback.is_empty() {
        content.to_string()
      } else {
        fallback.to_string()
      }
    },
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::panic, reason = "Fine in tests")]
  use super::*;

  #[test]
  fn test_process_safe_recovers_from_panic() {
    let out = process_safe("input", |_| panic!("boom"), "fallback");
    assert_eq!(out, "fallback");

    let out = process_safe("input", |_| panic!("boom"), "");
    assert_eq!(out, "input");
  }

  #[test]
  fn test_process_safe_empty_input() {
    assert_eq!(process_safe("", str::to_uppercase, "x"), "");
    assert_eq!(process_safe("ab", str::to_uppercase, "x"), "AB");
  }
}
