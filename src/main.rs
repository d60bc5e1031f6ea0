//! Binary entrypoint for the cluebound CLI.
//!
//! Commands:
//! - `play [--world <file>]` - run a world in the console
//! - `init` - create a starter `cluebound.toml` and sample world file
//!
//! See the library crate docs for module-level details: `cluebound::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use cluebound::config::Config;
use cluebound::engine::{demo_world, load_world_from_json, Command, Outcome, TextAdventure};

const SAMPLE_WORLD_FILE: &str = "maple_house.json";
const SAMPLE_WORLD: &str = include_str!("../data/worlds/maple_house.json");

#[derive(Parser)]
#[command(name = "cluebound")]
#[command(about = "A clue-driven interactive fiction engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "cluebound.toml", global = true)]
    config: String,

    /// Verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world in the console
    Play {
        /// World seed document (JSON); overrides the config file
        #[arg(short, long)]
        world: Option<String>,
    },
    /// Create a starter configuration and sample world
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init runs before a config exists; everything else loads it, falling
    // back to defaults when the file is absent.
    let config = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(&cli.config).unwrap_or_default(),
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Play { world } => play(&config, world),
        Commands::Init => init(&cli.config),
    }
}

fn init_logging(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn play(config: &Config, world_arg: Option<String>) -> Result<()> {
    let source = world_arg.or_else(|| config.game.world_file.clone());
    let mut world = match &source {
        Some(path) => load_world_from_json(path)
            .with_context(|| format!("loading world from {}", path))?,
        None => demo_world().context("building the demo world")?,
    };
    info!("starting session for \"{}\"", world.title());

    println!("=== {} ===", world.title());
    println!("Type help for a list of commands.\n");

    let mut editor = DefaultEditor::new().context("initialising line editor")?;
    loop {
        match editor.readline(&config.game.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                if !run_turn(&mut world, config, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", config.game.farewell);
                break;
            }
            Err(e) => return Err(e).context("reading input"),
        }
    }
    Ok(())
}

/// Dispatch one input line. Returns false when the session should end.
fn run_turn(world: &mut TextAdventure, config: &Config, line: &str) -> bool {
    match world.dispatch(&Command::parse(line)) {
        Ok(Outcome::Reply(text)) => println!("{}\n", text),
        Ok(Outcome::NotRecognized) => println!("{}\n", config.game.invalid_command),
        Ok(Outcome::Quit) => {
            println!("{}", config.game.farewell);
            return false;
        }
        // Author-time content defects (dangling action targets and the
        // like): reported, but the session carries on.
        Err(e) => {
            error!("content error: {}", e);
            println!("[world content error] {}\n", e);
        }
    }
    true
}

fn init(config_path: &str) -> Result<()> {
    Config::create_default(config_path)?;
    println!("Wrote {}", config_path);

    if std::path::Path::new(SAMPLE_WORLD_FILE).exists() {
        println!("{} already exists, leaving it alone", SAMPLE_WORLD_FILE);
    } else {
        std::fs::write(SAMPLE_WORLD_FILE, SAMPLE_WORLD)
            .with_context(|| format!("writing {}", SAMPLE_WORLD_FILE))?;
        println!("Wrote {}", SAMPLE_WORLD_FILE);
    }

    println!("Play it with: cluebound play --world {}", SAMPLE_WORLD_FILE);
    Ok(())
}
