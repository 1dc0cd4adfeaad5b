use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use dotyaml::config::Config;
use dotyaml::document::node::{YamlNode, YamlValue};
use dotyaml::document::parser::parse_value_str;
use dotyaml::file::loader::load_from_stdin;
use dotyaml::file::saver::to_yaml_string;
use dotyaml::file::{delete_in_file, get_from_file, set_in_file, transfer};

/// dotyaml - read and write nested YAML/JSON values with dotted paths
#[derive(Parser)]
#[command(name = "dotyaml")]
#[command(version)]
#[command(about = "Read and write nested YAML/JSON values with dotted paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Copy the file to <file>.bak before writing (overrides the config file)
    #[arg(long, global = true)]
    backup: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at a path
    Get {
        /// YAML or JSON file to read ("-" reads YAML from stdin)
        #[arg(short, long)]
        file: String,
        /// Path expression, e.g. mapArray.foo:bar.zoo
        #[arg(short, long)]
        path: String,
    },
    /// Write a value at a path, creating missing structure
    Set {
        /// YAML or JSON file to update
        #[arg(short, long)]
        file: String,
        /// Path expression, e.g. array.+
        #[arg(short, long)]
        path: String,
        /// Value to write
        #[arg(short, long)]
        value: String,
        /// Parse the value as YAML (numbers, booleans, maps) instead of a literal string
        #[arg(long)]
        yaml: bool,
    },
    /// Remove the value at a path
    Delete {
        /// YAML or JSON file to update
        #[arg(short, long)]
        file: String,
        /// Path expression
        #[arg(short, long)]
        path: String,
    },
    /// Copy the value at a path in one file to a path in another
    Transfer {
        /// Source file
        #[arg(short, long)]
        file: String,
        /// Path expression in the source file
        #[arg(short, long)]
        path: String,
        /// Destination file
        #[arg(short, long)]
        to: String,
        /// Path expression in the destination file (defaults to --path)
        #[arg(short, long)]
        dest_path: Option<String>,
    },
}

/// Renders a node for printing: scalars as bare text, containers as YAML.
fn render(node: &YamlNode) -> Result<String> {
    match node.value() {
        YamlValue::Null => Ok("null".to_string()),
        value => match value.scalar_text() {
            Some(text) => Ok(text),
            None => Ok(to_yaml_string(node)?.trim_end().to_string()),
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load();
    if cli.backup {
        config.create_backup = true;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match cli.command {
        Command::Get { file, path } => {
            let node = if file == "-" {
                let tree = load_from_stdin()?;
                tree.get(&path)
                    .with_context(|| format!("Failed to read '{}'", path))?
                    .clone()
            } else {
                get_from_file(&file, &path)?
            };
            println!("{}", render(&node)?);
        }
        Command::Set {
            file,
            path,
            value,
            yaml,
        } => {
            let value = if yaml {
                parse_value_str(&value)?
            } else {
                YamlValue::from(value)
            };
            set_in_file(&file, &path, value, &config)?;
        }
        Command::Delete { file, path } => {
            delete_in_file(&file, &path, &config)?;
        }
        Command::Transfer {
            file,
            path,
            to,
            dest_path,
        } => {
            let dest_path = dest_path.as_deref().unwrap_or(&path);
            transfer(&file, &path, &to, dest_path, &config)
                .with_context(|| format!("Failed to transfer '{}' from {} to {}", path, file, to))?;
        }
    }

    Ok(())
}
