mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use signup_form::Field;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signup-form")]
#[command(version, about = "Validate signup form records against the rule catalog", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, env = "SIGNUP_FORM_CONFIG", default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON form record; exits with status 1 when it has errors
    Validate {
        /// JSON object of field name to value
        record: PathBuf,
    },

    /// Add or remove one member of a multi-select field
    Toggle {
        /// JSON object of field name to value
        record: PathBuf,

        /// Multi-select field to update (e.g. interests)
        #[arg(short, long)]
        field: Field,

        /// Member to add or remove
        #[arg(short, long)]
        member: String,

        /// Remove the member instead of adding it
        #[arg(long)]
        exclude: bool,

        /// Write the updated record back instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// List every field with its kind and ordered rules
    Catalog {
        /// Print the catalog as a JSON schema instead
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Validate { record } => {
            if !commands::validate::execute(&config, &record)? {
                std::process::exit(1);
            }
        }
        Commands::Toggle {
            record,
            field,
            member,
            exclude,
            write,
        } => {
            commands::toggle::execute(&record, field, &member, !exclude, write)?;
        }
        Commands::Catalog { json } => {
            commands::catalog::execute(&config, json)?;
        }
    }

    Ok(())
}
