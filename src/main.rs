use anyhow::Result;
use clap::{Parser, Subcommand};

use addon_version::cli::{self, BumpArgs, CompareArgs, ShowArgs};
use addon_version::config::{self, OutputFormat};
use addon_version::ui;
use addon_version::VersionBump;

#[derive(clap::Parser)]
#[command(
    name = "addon-version",
    version,
    about = "Parse, convert, compare and bump addon version strings"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a version and print it in another encoding
    Show {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(short, long, help = "Output format: dotted, semver or tuple")]
        format: Option<OutputFormat>,
    },
    /// Bump a version along one axis
    Bump {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(long, help = "Increment the release number")]
        release: bool,

        #[arg(long, help = "Increment the feature number")]
        feature: bool,

        #[arg(long, help = "Increment the patch number")]
        patch: bool,

        #[arg(long, help = "Advance the release state")]
        state: bool,

        #[arg(long, help = "Increment the release state increment")]
        increment: bool,

        #[arg(long, help = "Set the build number")]
        build: Option<u32>,

        #[arg(long, value_parser = cli::parse_host, help = "Set the host version floor, e.g. 2.93.0")]
        host: Option<(u32, u32, u32)>,

        #[arg(short, long, help = "Output format: dotted, semver or tuple")]
        format: Option<OutputFormat>,
    },
    /// Compare two versions
    Compare { left: String, right: String },
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("addon_version=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let outcome = match args.command {
        Command::Show { input, format } => cli::run_show(
            &ShowArgs {
                version: input,
                format,
            },
            &config,
        ),
        Command::Bump {
            input,
            release,
            feature,
            patch,
            state,
            increment,
            build,
            host,
            format,
        } => {
            let request = VersionBump {
                release,
                feature,
                patch,
                state,
                increment,
                build,
                host,
            };
            cli::run_bump(
                &BumpArgs {
                    version: input,
                    request,
                    format,
                },
                &config,
            )
            .map(|bumped| {
                ui::display_bump(&bumped.from, &bumped.to);
                bumped.to
            })
        }
        Command::Compare { left, right } => cli::run_compare(&CompareArgs { left, right }),
    };

    match outcome {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}
