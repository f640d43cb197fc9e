//! Pairwise collision-stub generator.
//!
//! Prints nested C++ collision-check loops for every unordered pair of the
//! configured entity types. The entity list comes from the command line,
//! `stubgen.toml`, or the built-in `mirror`/`portal` default, in that order.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use stubgen::exit_codes;
use stubgen::generate::{
    CheckOutcome, check_entities, collision_pairs, generate_stubs, generate_stubs_strict,
    resolve_inputs,
};
use stubgen::io::config::{CONFIG_FILE_NAME, GeneratorConfig, write_config};
use stubgen::io::render::StubStyle;
use stubgen::logging;

#[derive(Parser)]
#[command(
    name = "stubgen",
    version,
    about = "Generate pairwise collision-check loop stubs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print collision loops for every unordered pair of entities.
    Generate {
        /// Entity names in nesting order (overrides the config list).
        names: Vec<String>,

        /// Config file to read.
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,

        /// Indent with this many spaces instead of the configured unit.
        #[arg(long)]
        indent_spaces: Option<usize>,

        /// Reject invalid, duplicate, or too few entity names.
        #[arg(long)]
        strict: bool,
    },
    /// Print the entity pairs as JSON, in emission order.
    Pairs {
        names: Vec<String>,

        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,
    },
    /// Validate the entity list without generating anything.
    Check {
        names: Vec<String>,

        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,
    },
    /// Write a default `stubgen.toml`.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,

        #[arg(long, default_value = CONFIG_FILE_NAME)]
        path: PathBuf,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            names,
            config,
            indent_spaces,
            strict,
        } => cmd_generate(&names, &config, indent_spaces, strict),
        Command::Pairs { names, config } => cmd_pairs(&names, &config),
        Command::Check { names, config } => cmd_check(&names, &config),
        Command::Init { force, path } => cmd_init(&path, force),
    }
}

fn cmd_generate(
    names: &[String],
    config: &Path,
    indent_spaces: Option<usize>,
    strict: bool,
) -> Result<i32> {
    let (cfg, entities) = resolve_inputs(config, names)?;
    let mut style = StubStyle::from_config(&cfg);
    if let Some(width) = indent_spaces {
        style.indent = " ".repeat(width);
    }
    let text = if strict {
        generate_stubs_strict(&entities, &style)?
    } else {
        generate_stubs(&entities, &style)?
    };
    write_stdout(&text)?;
    Ok(exit_codes::OK)
}

fn cmd_pairs(names: &[String], config: &Path) -> Result<i32> {
    let (_, entities) = resolve_inputs(config, names)?;
    let mut payload =
        serde_json::to_string_pretty(&collision_pairs(&entities)).context("serialize pairs")?;
    payload.push('\n');
    write_stdout(&payload)?;
    Ok(exit_codes::OK)
}

fn cmd_check(names: &[String], config: &Path) -> Result<i32> {
    let (_, entities) = resolve_inputs(config, names)?;
    match check_entities(&entities) {
        CheckOutcome::Ok => {
            println!("ok");
            Ok(exit_codes::OK)
        }
        CheckOutcome::Degenerate(errors) => {
            println!("degenerate:\n- {}", errors.join("\n- "));
            Ok(exit_codes::DEGENERATE)
        }
        CheckOutcome::Invalid(errors) => {
            println!("invalid:\n- {}", errors.join("\n- "));
            Ok(exit_codes::INVALID)
        }
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &GeneratorConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote default config");
    Ok(exit_codes::OK)
}

/// Single write of the generated text; no trailing newline is added.
fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("write to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_generate_with_names() {
        let cli = Cli::parse_from(["stubgen", "generate", "mirror", "portal"]);
        match cli.command {
            Command::Generate {
                names,
                config,
                indent_spaces,
                strict,
            } => {
                assert_eq!(names, vec!["mirror", "portal"]);
                assert_eq!(config, PathBuf::from(CONFIG_FILE_NAME));
                assert_eq!(indent_spaces, None);
                assert!(!strict);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn parse_generate_flags() {
        let cli = Cli::parse_from([
            "stubgen",
            "generate",
            "--strict",
            "--indent-spaces",
            "4",
            "--config",
            "other.toml",
        ]);
        assert!(matches!(
            cli.command,
            Command::Generate {
                strict: true,
                indent_spaces: Some(4),
                ..
            }
        ));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["stubgen", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }
}
