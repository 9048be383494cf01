mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "swagger-diff")]
#[command(about = "Compare Swagger 2.0 API descriptions and show differences")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare two spec documents")]
    Diff {
        #[arg(help = "Path to the old/base spec document")]
        old: String,
        #[arg(help = "Path to the new/changed spec document")]
        new: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(
            long,
            value_name = "CODE",
            help = "Status code whose response schema is compared (default 200)"
        )]
        response_code: Option<String>,
    },
    #[command(about = "Show information about a spec document")]
    Info {
        #[arg(help = "Path to the spec document")]
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff {
            old,
            new,
            format,
            response_code,
        } => commands::diff::run(&old, &new, format, response_code.as_deref()),
        Commands::Info { path } => commands::info::run(&path),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
