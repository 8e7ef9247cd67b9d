use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for wxmd
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "wxmd: layout-component Markdown for WeChat articles"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(
    short = 'c',
    long = "config-file",
    global = true,
    action = clap::ArgAction::Append
  )]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the wxmd CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Render Markdown files or directories to HTML.
  Render {
    /// Markdown files, directories, or `-` for standard input.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file for a single input, or output directory otherwise.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Accent color for layout components (#rrggbb).
    #[arg(long)]
    color: Option<String>,

    /// Template preset supplying the accent color.
    #[arg(short, long)]
    template: Option<String>,

    /// Skip the platform styling pass.
    #[arg(long = "no-platform-styles")]
    no_platform_styles: bool,

    /// Number of threads to use for parallel processing.
    #[arg(short = 'p', long = "jobs")]
    jobs: Option<usize>,
  },

  /// Print the layout blocks found in a document as JSON.
  Scan {
    /// Markdown file, or `-` for standard input.
    input: PathBuf,
  },

  /// Print the component syntax guide, or a full AI prompt for a template.
  Guide {
    /// Template preset to tailor the prompt to.
    #[arg(short, long)]
    template: Option<String>,
  },

  /// List the built-in template presets.
  Templates,

  /// Initialize a new wxmd configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "wxmd.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::panic, reason = "Fine in tests")]
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_render_flags() {
    let cli = match Cli::try_parse_from([
      "wxmd",
      "--config",
      "font_size=15",
      "render",
      "a.md",
      "docs",
      "--color",
      "#ff0000",
      "--no-platform-styles",
      "-v",
    ]) {
      Ok(cli) => cli,
      Err(e) => panic!("failed to parse: {e}"),
    };

    assert!(cli.verbose);
    assert_eq!(cli.config_overrides, vec!["font_size=15".to_string()]);
    match cli.command {
      Commands::Render {
        inputs,
        color,
        no_platform_styles,
        ..
      } => {
        assert_eq!(inputs.len(), 2);
        assert_eq!(color.as_deref(), Some("#ff0000"));
        assert!(no_platform_styles);
      },
      other => panic!("unexpected command: {other:?}"),
    }
  }

  #[test]
  fn test_init_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["wxmd", "init", "-F", "yaml"]).is_err());
  }
}
