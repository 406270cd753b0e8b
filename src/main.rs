use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ramilang_installer::{InstallConfig, InstallerError, SystemHost};

/// Install and run prebuilt ramilang binaries.
///
/// Set RUST_LOG=debug for detailed progress output.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory the binary is installed into (defaults to ~/.ramilang/bin)
    #[arg(
        long,
        env = "RAMILANG_INSTALL_DIR",
        value_name = "DIR",
        global = true
    )]
    install_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download and install the binary for this machine
    Install(LocateArgs),

    /// Print the release archive URL for this machine without downloading
    Locate(LocateArgs),

    /// Run the installed binary
    Run {
        /// Arguments passed through to ramilang
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Remove the installed binary
    Uninstall,
}

#[derive(clap::Args, Debug)]
struct LocateArgs {
    /// package.json to read the version from (defaults to this installer's version)
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Release repository URL
    #[arg(long, env = "RAMILANG_RELEASE_URL", value_name = "URL")]
    release_url: Option<String>,
}

fn config(
    cli_dir: Option<PathBuf>,
    release_url: Option<String>,
) -> Result<InstallConfig, InstallerError> {
    let mut config = match cli_dir {
        Some(dir) => InstallConfig::with_install_dir(dir),
        None => InstallConfig::new()?,
    };
    if let Some(url) = release_url {
        config.release_base = url;
    }
    Ok(config)
}

fn execute(cli: Cli) -> Result<ExitCode, InstallerError> {
    match cli.command {
        Commands::Install(args) => {
            let config = config(cli.install_dir, args.release_url)?;
            let version = ramilang_installer::resolve_version(args.manifest.as_deref())?;
            let path = ramilang_installer::install(&config, &version)?;
            println!("{}", path.display());
        }
        Commands::Locate(args) => {
            let config = config(cli.install_dir, args.release_url)?;
            let version = ramilang_installer::resolve_version(args.manifest.as_deref())?;
            let artifact = ramilang_installer::locate_from(
                &SystemHost,
                &config.release_base,
                &config.tool_name,
                &version,
            )?;
            println!("{}", artifact.url);
        }
        Commands::Run { args } => {
            let config = config(cli.install_dir, None)?;
            let code = ramilang_installer::run(&config, &args)?;
            return Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)));
        }
        Commands::Uninstall => {
            let config = config(cli.install_dir, None)?;
            if !ramilang_installer::uninstall(&config)? {
                eprintln!("{} is not installed", config.tool_name);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match execute(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
