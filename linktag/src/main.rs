use std::{
  fs,
  io::{self, Write},
};

use clap::CommandFactory;
use clap_complete::generate;
use color_eyre::eyre::{Context, Result, bail};
use linktag::{
  cli::{Cli, Commands},
  render::render,
};
use linktag_config::Config;
use log::{LevelFilter, info};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
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

  if let Commands::Init {
    output,
    format,
    force,
  } = &cli.command
  {
    // Check if file already exists and that we're not forcing overwrite
    if output.exists() && !force {
      bail!(
        "Configuration file already exists: {}. Use --force to overwrite.",
        output.display()
      );
    }

    // Create parent directories if needed
    if let Some(parent) = output.parent()
      && !parent.as_os_str().is_empty()
      && !parent.exists()
    {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
      info!("Created directory: {}", parent.display());
    }

    Config::generate_default_config(format, output).wrap_err_with(|| {
      format!("Failed to generate configuration file: {}", output.display())
    })?;

    info!(
      "Configuration file created successfully. Edit it to describe the \
       request your links are rendered for."
    );
    return Ok(());
  }

  if let Commands::Completions { shell } = &cli.command {
    let mut cmd = Cli::command();
    generate(*shell, &mut cmd, "linktag", &mut io::stdout().lock());
    return Ok(());
  }

  let config = Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")?;

  let output = render(&cli.command, &config)?;

  let mut stdout = io::stdout().lock();
  writeln!(stdout, "{output}")?;
  Ok(())
}
