use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use match_arena::config::{ArenaConfig, MatchSettings, Overrides};
use match_arena::json_output;
use match_arena::provider::RosterProvider;
use match_arena::report::TextReporter;
use match_arena::series::SeriesRunner;
use match_core::Side;
use match_engine::rules::WinCondition;
use match_engine::RngSource;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "match-arena")]
#[command(about = "Round-based team match simulator")]
struct Cli {
    /// Configuration file (defaults to ./arena.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a match between two teams
    Match {
        /// First team (side A)
        team_a: String,
        /// Second team (side B)
        team_b: String,
        /// Preset configuration to use
        #[arg(short, long)]
        preset: Option<String>,
        /// Number of matches to simulate
        #[arg(short = 'n', long)]
        runs: Option<u32>,
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Player ranking in the report: kills, deaths, assists, alive or name
        #[arg(long)]
        sort: Option<String>,
        /// Rules: competitive or first-to-N
        #[arg(long)]
        rules: Option<String>,
        /// Abort a match after this many rounds without a winner
        #[arg(long)]
        max_rounds: Option<u32>,
        /// Roster file to look teams up in
        #[arg(long)]
        roster_file: Option<PathBuf>,
        /// Write the finished matches to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// List the teams available from the config and roster file
    Teams {
        /// Roster file to look teams up in
        #[arg(long)]
        roster_file: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => ArenaConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ArenaConfig::load().context("loading arena.toml")?,
    };

    match cli.command {
        Commands::Match {
            team_a,
            team_b,
            preset,
            runs,
            seed,
            sort,
            rules,
            max_rounds,
            roster_file,
            json,
        } => {
            let provider = RosterProvider::from_config(&config, roster_file.as_deref())?;
            let a = provider.roster(&team_a)?;
            let b = provider.roster(&team_b)?;

            let preset = match &preset {
                Some(name) => {
                    tracing::info!("Using preset: {}", name);
                    Some(config.get_preset(name)?)
                }
                None => None,
            };
            let overrides = Overrides {
                runs,
                rules,
                sort,
                seed,
                max_rounds,
            };
            let settings = MatchSettings::resolve(preset, &overrides)?;

            let mut rng = match settings.seed {
                Some(seed) => RngSource::seeded(seed),
                None => RngSource::from_entropy(),
            };
            let mut reporter = TextReporter::new(std::io::stdout().lock(), settings.sort);
            let runner =
                SeriesRunner::new(settings.rules, settings.runs).with_round_limit(settings.max_rounds);

            let result = runner
                .run(&a, &b, &mut rng, &mut reporter)
                .with_context(|| format!("simulating {} vs {}", a.name, b.name))?;

            if settings.runs > 1 {
                println!(
                    "\nSeries Results ({} matches, {}): {} {} - {} {}",
                    settings.runs,
                    settings.rules.name(),
                    a.name,
                    result.wins(Side::A),
                    result.wins(Side::B),
                    b.name
                );
            }

            if let Some(path) = json {
                json_output::write_json(&path, &result.matches, &settings.rules.name(), settings.seed)
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::info!("Wrote {} match(es) to {}", result.matches.len(), path.display());
            }
        }
        Commands::Teams { roster_file } => {
            let provider = RosterProvider::from_config(&config, roster_file.as_deref())?;
            let teams = provider.available();
            if teams.is_empty() {
                println!("No teams configured. Add [teams.<name>] to arena.toml or pass --roster-file.");
            }
            for (name, players) in teams {
                println!("{} ({} players)", name, players);
            }
        }
    }

    Ok(())
}
