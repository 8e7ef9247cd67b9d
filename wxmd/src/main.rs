use color_eyre::eyre::{Context, Result};
use log::LevelFilter;
use wxmd::{
  cli::{Cli, Commands},
  commands::{self, RenderArgs},
};
use wxmd_config::Config;

#[allow(clippy::print_stdout, reason = "Command output goes to stdout")]
fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match cli.command {
    Commands::Init {
      ref output,
      ref format,
      force,
    } => {
      commands::init(output, format, force).wrap_err_with(|| {
        format!("Failed to generate configuration file: {}", output.display())
      })?;
    },

    Commands::Guide { ref template } => {
      print!("{}", commands::guide(template.as_deref()));
    },

    Commands::Templates => print!("{}", commands::templates_table()),

    Commands::Scan { ref input } => {
      let json = commands::scan_json(input)
        .wrap_err_with(|| format!("Failed to scan {}", input.display()))?;
      println!("{json}");
    },

    Commands::Render {
      ref inputs,
      ref output,
      ref color,
      ref template,
      no_platform_styles,
      jobs,
    } => {
      let config = Config::load(&cli.config_files, &cli.config_overrides)
        .wrap_err("Failed to load configuration")?;
      let args = RenderArgs {
        color: color.clone(),
        template: template.clone(),
        no_platform_styles,
        jobs,
      };
      commands::render(inputs, output.as_deref(), &args, config)
        .wrap_err("Rendering failed")?;
    },
  }

  Ok(())
}
