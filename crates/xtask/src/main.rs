use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, shells};
use clap_mangen::Man;
use wxmd_layout::{TemplateId, layout_prompt, syntax_guide};

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the wxmd CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist", value_parser = clap::value_parser!(std::path::PathBuf))]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with_all = ["manpage_only", "guide_only"])]
    completions_only: bool,

    /// Only generate manpage.
    #[arg(long, conflicts_with_all = ["completions_only", "guide_only"])]
    manpage_only: bool,

    /// Only export the syntax guide and template prompts.
    #[arg(long, conflicts_with_all = ["completions_only", "manpage_only"])]
    guide_only: bool,
  },
}

fn main() -> Result<()> {
  let xtask = Xtask::parse();

  match xtask.command {
    Commands::Dist {
      output_dir,
      completions_only,
      manpage_only,
      guide_only,
    } => {
      if completions_only {
        generate_completions(&output_dir)?;
      } else if manpage_only {
        generate_manpage(&output_dir)?;
      } else if guide_only {
        export_guides(&output_dir)?;
      } else {
        generate_completions(&output_dir)?;
        generate_manpage(&output_dir)?;
        export_guides(&output_dir)?;
      }
    },
  }

  Ok(())
}

/// Generate shell completions for various shells.
#[allow(clippy::print_stdout, reason = "Task progress output")]
fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;
  let mut cmd = wxmd::cli::Cli::command();
  generate_to(shells::Bash, &mut cmd, "wxmd", &completions_dir)?;
  generate_to(shells::Zsh, &mut cmd, "wxmd", &completions_dir)?;
  generate_to(shells::Fish, &mut cmd, "wxmd", &completions_dir)?;
  generate_to(shells::PowerShell, &mut cmd, "wxmd", &completions_dir)?;
  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

/// Generate manpage for the wxmd CLI.
#[allow(clippy::print_stdout, reason = "Task progress output")]
fn generate_manpage(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;
  let cmd = wxmd::cli::Cli::command();
  let man = Man::new(cmd);
  let file_path = man_dir.join("wxmd.1");
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  man
    .render(&mut file)
    .with_context(|| "Failed to render manpage")?;
  println!("Manpage generated in {}", man_dir.display());
  Ok(())
}

/// Write the syntax guide and one prompt per template preset as Markdown.
#[allow(clippy::print_stdout, reason = "Task progress output")]
fn export_guides(output_dir: &Path) -> Result<()> {
  let guide_dir = output_dir.join("guide");
  fs::create_dir_all(&guide_dir)?;

  let syntax_path = guide_dir.join("syntax.md");
  fs::write(&syntax_path, syntax_guide()).with_context(|| {
    format!("Failed to write guide to {}", syntax_path.display())
  })?;

  for id in TemplateId::ALL {
    let path = guide_dir.join(format!("prompt-{}.md", id.name()));
    fs::write(&path, layout_prompt(id))
      .with_context(|| format!("Failed to write prompt to {}", path.display()))?;
  }

  println!("Guides exported to {}", guide_dir.display());
  Ok(())
}
