#![cfg(all(feature = "cli", feature = "json", feature = "csv", feature = "yaml"))]

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use confgen::{ErrorPolicy, GeneratorBuilder, InventoryFormat, JobConfig, RunReport};

#[derive(Parser)]
#[command(name = "confgen", version, about = "Generate network device configurations from an inventory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate configurations from an inventory file
    Generate {
        /// Inventory file path, or "-" for stdin
        inventory: String,

        /// Directory receiving one <hostname>.cfg file per device
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Explicit inventory format (overrides extension inference)
        #[arg(long, value_parser = parse_format)]
        format: Option<InventoryFormat>,

        /// Abort at the first per-device error instead of skipping
        #[arg(long)]
        fail_fast: bool,
    },

    /// Run a declarative job file
    Run {
        /// Job configuration file (YAML or JSON)
        #[arg(long)]
        job: PathBuf,
    },
}

fn parse_format(s: &str) -> Result<InventoryFormat, String> {
    InventoryFormat::from_str(s).ok_or_else(|| format!("unknown format: {s} (expected json|csv)"))
}

fn run() -> Result<RunReport, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let generator = match cli.command {
        Command::Generate {
            inventory,
            out_dir,
            format,
            fail_fast,
        } => {
            let mut builder = GeneratorBuilder::new().input(inventory).out_dir(out_dir);
            if let Some(format) = format {
                builder = builder.format(format);
            }
            if fail_fast {
                builder = builder.with_policy(ErrorPolicy::FailFast);
            }
            builder.build()?
        }
        Command::Run { job } => {
            let file = File::open(&job)?;
            let reader = BufReader::new(file);
            let config = if job.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
                JobConfig::from_json_reader(reader)?
            } else {
                JobConfig::from_yaml_reader(reader)?
            };
            GeneratorBuilder::from_job_config(config).build()?
        }
    };

    Ok(generator.execute()?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confgen=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(report) => {
            println!("{report}");
        }
        Err(e) => {
            eprintln!("confgen error: {e}");
            std::process::exit(1);
        }
    }
}
