//! Subcommand implementations.
use std::{
  collections::HashSet,
  fmt::Write as _,
  fs,
  io::{self, Read},
  path::{Path, PathBuf},
};

use log::{debug, info, warn};
use rayon::prelude::*;
use wxmd_config::Config;
use wxmd_layout::{
  LayoutProcessor,
  TemplateId,
  collect_markdown_files,
  layout_prompt,
  markdown::UNTITLED,
  process_with_recovery,
  scan,
  syntax_guide,
};

use crate::error::{Result, WxmdError};

/// Path that stands for standard input.
pub const STDIN: &str = "-";

/// Render-specific CLI flags layered over the loaded [`Config`].
#[derive(Debug, Default, Clone)]
pub struct RenderArgs {
  pub color:              Option<String>,
  pub template:           Option<String>,
  pub no_platform_styles: bool,
  pub jobs:               Option<usize>,
}

impl RenderArgs {
  /// Apply the flags on top of `config` and re-validate.
  ///
  /// # Errors
  ///
  /// Returns an error if the merged configuration is invalid.
  pub fn apply(&self, config: &mut Config) -> Result<()> {
    if let Some(ref template) = self.template {
      config.template = Some(template.clone());
      if self.color.is_none() {
        config.primary_color = None;
      }
    }
    if let Some(ref color) = self.color {
      config.primary_color = Some(color.clone());
    }
    if self.no_platform_styles {
      config.platform_styles = false;
    }
    if self.jobs.is_some() {
      config.jobs = self.jobs;
    }
    config.validate()?;
    Ok(())
  }
}

/// One source document and where its HTML goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
  pub source: PathBuf,
  pub target: PathBuf,
}

fn is_stdin(path: &Path) -> bool {
  path.as_os_str() == STDIN
}

/// Read a document from a file or standard input.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
  if is_stdin(path) {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    return Ok(content);
  }

  fs::read_to_string(path).map_err(|e| {
    WxmdError::Input(format!("Failed to read {}: {e}", path.display()))
  })
}

/// Work out the output path of every document under `inputs`.
///
/// Files map to `<output_dir>/<stem>.html`. Directories are walked
/// recursively and keep their relative layout.
///
/// # Errors
///
/// Returns an error if an input does not exist, is standard input, or two
/// inputs would write the same output file.
pub fn plan_jobs(inputs: &[PathBuf], output_dir: &Path) -> Result<Vec<RenderJob>> {
  let mut jobs = Vec::new();

  for input in inputs {
    if is_stdin(input) {
      return Err(WxmdError::Input(
        "Standard input can only be rendered on its own".to_string(),
      ));
    }

    if input.is_dir() {
      for source in collect_markdown_files(input) {
        let relative = source.strip_prefix(input).unwrap_or(&source);
        let target = output_dir.join(relative).with_extension("html");
        jobs.push(RenderJob { source, target });
      }
    } else if input.is_file() {
      let name = input.file_stem().unwrap_or(input.as_os_str());
      let target = output_dir.join(name).with_extension("html");
      jobs.push(RenderJob {
        source: input.clone(),
        target,
      });
    } else {
      return Err(WxmdError::Input(format!(
        "Input does not exist: {}",
        input.display()
      )));
    }
  }

  let mut seen = HashSet::new();
  for job in &jobs {
    if !seen.insert(job.target.as_path()) {
      return Err(WxmdError::Input(format!(
        "Several inputs render to {}",
        job.target.display()
      )));
    }
  }

  Ok(jobs)
}

/// Render every job in parallel on a pool of `threads` workers.
///
/// # Errors
///
/// Returns the first read or write failure.
pub fn render_jobs(
  processor: &LayoutProcessor,
  jobs: &[RenderJob],
  threads: usize,
) -> Result<usize> {
  let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

  pool.install(|| {
    jobs.par_iter().try_for_each(|job| {
      let content = read_input(&job.source)?;
      let result = process_with_recovery(processor, &content);
      debug!(
        "{} ({}): {} components, {} dividers",
        job.source.display(),
        result.title.as_deref().unwrap_or(UNTITLED),
        result.components,
        result.dividers
      );

      if let Some(parent) = job.target.parent() {
        fs::create_dir_all(parent)?;
      }
      fs::write(&job.target, result.html).map_err(|e| WxmdError::Render {
        path:    job.target.display().to_string(),
        message: e.to_string(),
      })
    })
  })?;

  Ok(jobs.len())
}

/// Run the `render` subcommand.
///
/// A single file or standard input goes to `output` or standard output.
/// Anything else renders into `output`, or the configured output directory.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any input fails.
#[allow(clippy::print_stdout, reason = "Single documents stream to stdout")]
pub fn render(
  inputs: &[PathBuf],
  output: Option<&Path>,
  args: &RenderArgs,
  mut config: Config,
) -> Result<()> {
  args.apply(&mut config)?;
  let processor = LayoutProcessor::new(config.layout_options());

  if let [single] = inputs
    && (is_stdin(single) || single.is_file())
  {
    let content = read_input(single)?;
    let result = process_with_recovery(&processor, &content);
    match output {
      Some(path) => {
        if let Some(parent) = path.parent()
          && !parent.as_os_str().is_empty()
        {
          fs::create_dir_all(parent)?;
        }
        fs::write(path, &result.html)?;
        info!("Wrote {}", path.display());
      },
      None => println!("{}", result.html),
    }
    return Ok(());
  }

  let output_dir = output.unwrap_or(config.output_dir.as_path());
  let jobs = plan_jobs(inputs, output_dir)?;
  if jobs.is_empty() {
    warn!("No markdown files found");
    return Ok(());
  }

  let threads = config.jobs.unwrap_or_else(num_cpus::get);
  info!("Rendering {} files with {threads} threads", jobs.len());
  let count = render_jobs(&processor, &jobs, threads)?;
  info!("Rendered {count} files into {}", output_dir.display());
  Ok(())
}

/// Scan a document and return its blocks as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn scan_json(input: &Path) -> Result<String> {
  let content = read_input(input)?;
  Ok(serde_json::to_string_pretty(&scan(&content))?)
}

/// The syntax guide, or the full prompt when a template is named.
#[must_use]
pub fn guide(template: Option<&str>) -> String {
  template.map_or_else(syntax_guide, |name| {
    layout_prompt(TemplateId::parse_or_default(name))
  })
}

/// One line per template preset: id, label and accent color.
#[must_use]
pub fn templates_table() -> String {
  let mut out = String::new();
  for id in TemplateId::ALL {
    let preset = id.preset();
    let _ = writeln!(
      out,
      "{:<10} {:<10} {}",
      id.name(),
      preset.label,
      preset.primary_color
    );
  }
  out
}

/// Run the `init` subcommand.
///
/// # Errors
///
/// Returns an error if the file exists without `force`, or cannot be written.
pub fn init(output: &Path, format: &str, force: bool) -> Result<()> {
  if output.exists() && !force {
    return Err(WxmdError::Input(format!(
      "Configuration file already exists: {}. Use --force to overwrite.",
      output.display()
    )));
  }

  if let Some(parent) = output.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent)?;
    info!("Created directory: {}", parent.display());
  }

  Config::generate_default_config(format, output)?;
  info!(
    "Configuration file created successfully. Edit it to customize your \
     rendering."
  );
  Ok(())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use super::*;

  #[test]
  fn test_template_flag_clears_config_color() {
    let mut config = Config {
      primary_color: Some("#000000".to_string()),
      ..Config::default()
    };
    let args = RenderArgs {
      template: Some("magazine".to_string()),
      ..RenderArgs::default()
    };
    args.apply(&mut config).unwrap();
    assert_eq!(config.resolved_primary_color().as_str(), "#e91e63");
  }

  #[test]
  fn test_invalid_color_flag_is_rejected() {
    let mut config = Config::default();
    let args = RenderArgs {
      color: Some("teal".to_string()),
      ..RenderArgs::default()
    };
    assert!(args.apply(&mut config).is_err());
  }

  #[test]
  fn test_templates_table_lists_all() {
    let table = templates_table();
    assert_eq!(table.lines().count(), TemplateId::ALL.len());
    assert!(table.contains("lively"));
    assert!(table.contains("#ff6b6b"));
  }

  #[test]
  fn test_guide_selection() {
    assert!(guide(None).starts_with("# Layout component syntax"));
    assert!(guide(Some("academic")).contains("Academic style examples"));
  }

  #[test]
  fn test_stdin_cannot_be_batched() {
    let err = plan_jobs(
      &[PathBuf::from("-"), PathBuf::from("x.md")],
      Path::new("out"),
    );
    assert!(matches!(err, Err(WxmdError::Input(_))));
  }
}
