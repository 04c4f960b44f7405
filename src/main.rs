//! hex-raider - Entry Point
//!
//! Command-line front end for the navigation and raid engine. Each command
//! loads one JSON world snapshot (as produced by the data layer), answers a
//! single question and prints the answer, JSON unless noted otherwise.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use hex_raider::core::config::{load_config, EngineConfig};
use hex_raider::core::error::{HexError, Result};
use hex_raider::core::types::Tick;
use hex_raider::hex::{Direction, HexCoord};
use hex_raider::navigation::{find_path, nearest_occupants_capped, parse_directions, trace_directions};
use hex_raider::planner::suggest_action;
use hex_raider::raid::plan_raid;
use hex_raider::render::AsciiRenderer;
use hex_raider::snapshot::{synthetic, WorldSnapshot};
use hex_raider::troops::StaminaModel;

/// Hex-grid navigation and raid planner for an autonomous explorer
#[derive(Parser, Debug)]
#[command(name = "hex-raider")]
#[command(about = "Plan explorer moves, attacks and raids from a world snapshot")]
struct Cli {
    /// Engine config (TOML); built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    /// World snapshot (JSON)
    #[arg(long)]
    snapshot: PathBuf,
}

#[derive(Args, Debug)]
struct TickArgs {
    /// Current armies tick
    #[arg(long, conflicts_with = "timestamp")]
    tick: Option<Tick>,

    /// Current unix time; needs stamina.tick_interval_secs in the config
    #[arg(long)]
    timestamp: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest route through explored, unoccupied tiles
    Path {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Goal coordinate as "x,y"
        #[arg(long)]
        to: HexCoord,
        /// Step budget for the search
        #[arg(long, default_value_t = 20)]
        max_steps: u32,
    },
    /// Nearest occupied tiles with routes to each
    Nearest {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Search radius (defaults to navigation.scan_radius)
        #[arg(long)]
        radius: Option<u32>,
        /// How many results (defaults to navigation.nearest_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Explorer stamina resolved at a tick
    Stamina {
        #[command(flatten)]
        input: SnapshotArgs,
        #[command(flatten)]
        time: TickArgs,
        /// Price travel by the neighbor in this direction (0-5) instead of
        /// the flat base cost
        #[arg(long)]
        toward: Option<u8>,
    },
    /// Loot the explorer can carry off from the defender
    Loot {
        #[command(flatten)]
        input: SnapshotArgs,
    },
    /// Check a direction sequence before submitting it
    CheckMove {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Comma-separated direction indices, e.g. "0,0,1"
        #[arg(long, value_delimiter = ',')]
        directions: Vec<u8>,
    },
    /// ASCII view of the explored map (plain text)
    Render {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Window radius around the explorer
        #[arg(long, default_value_t = 6)]
        radius: u32,
    },
    /// Suggest the next action
    Suggest {
        #[command(flatten)]
        input: SnapshotArgs,
        #[command(flatten)]
        time: TickArgs,
    },
    /// Render and plan over a seeded synthetic world
    Demo {
        /// Random seed for reproducible worlds
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Scan radius of the generated world
        #[arg(long, default_value_t = 8)]
        radius: u32,
        /// Write the generated snapshot here as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hex_raider=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            let config = load_config(path)?;
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        None => EngineConfig::default(),
    };

    run(cli.command, &config)
}

fn load_snapshot(input: &SnapshotArgs) -> Result<WorldSnapshot> {
    let snapshot = WorldSnapshot::load(&input.snapshot)?;
    tracing::info!(
        explorer = %snapshot.explorer.id,
        position = %snapshot.position(),
        tiles = snapshot.tiles.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

fn resolve_tick(time: &TickArgs, model: &StaminaModel, snapshot: &WorldSnapshot) -> Result<Tick> {
    match (time.tick, time.timestamp) {
        (Some(tick), _) => Ok(tick),
        (None, Some(ts)) => model.tick_at(ts),
        // Nothing given: judge the stamina as last stored
        (None, None) => Ok(snapshot.explorer.troops.stamina.updated_tick),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct PathOutput {
    from: HexCoord,
    to: HexCoord,
    reached: bool,
    directions: Vec<u8>,
    steps: hex_raider::navigation::Path,
}

#[derive(Serialize)]
struct LootOutput {
    plan: hex_raider::raid::RaidPlan,
    chain_amounts: Vec<(u16, String)>,
}

fn run(command: Command, config: &EngineConfig) -> Result<()> {
    let model = StaminaModel::new(config.stamina.clone());

    match command {
        Command::Path {
            input,
            to,
            max_steps,
        } => {
            let snapshot = load_snapshot(&input)?;
            let map = snapshot.knowledge_map()?;
            let from = snapshot.position();
            let path = find_path(from, to, &map, max_steps);
            let reached = from == to || !path.is_empty();
            if !reached {
                tracing::warn!(%from, %to, max_steps, "no route through explored tiles");
            }
            print_json(&PathOutput {
                from,
                to,
                reached,
                directions: path.direction_indices(),
                steps: path,
            })
        }
        Command::Nearest {
            input,
            radius,
            limit,
        } => {
            let snapshot = load_snapshot(&input)?;
            let map = snapshot.knowledge_map()?;
            let nav = &config.navigation;
            let scan = nearest_occupants_capped(
                snapshot.position(),
                &map,
                u64::from(radius.unwrap_or(nav.scan_radius)),
                limit.unwrap_or(nav.nearest_limit),
                nav.scan_path_cap,
            );
            print_json(&scan)
        }
        Command::Stamina {
            input,
            time,
            toward,
        } => {
            let snapshot = load_snapshot(&input)?;
            let tick = resolve_tick(&time, &model, &snapshot)?;
            let troops = &snapshot.explorer.troops;
            let report = match toward {
                Some(index) => {
                    let map = snapshot.knowledge_map()?;
                    model.resolve_toward(
                        troops.stamina,
                        troops.category,
                        tick,
                        snapshot.position(),
                        Direction::try_from(index)?,
                        &map,
                    )
                }
                None => model.resolve(troops.stamina, troops.category, tick),
            };
            print_json(&report)
        }
        Command::Loot { input } => {
            let snapshot = load_snapshot(&input)?;
            let attacker = snapshot.attacker_resources.as_ref().ok_or_else(|| {
                HexError::MalformedSnapshot("attacker_resources missing".into())
            })?;
            let defender = snapshot.defender_resources.as_ref().ok_or_else(|| {
                HexError::MalformedSnapshot("defender_resources missing".into())
            })?;
            let plan = plan_raid(&attacker.weight, &defender.balances, &config.raid);
            tracing::info!(
                remaining_kg = plan.remaining_kg,
                picked = plan.loot.len(),
                "raid planned"
            );
            let chain_amounts = plan
                .chain_amounts(config.raid.resource_precision)
                .into_iter()
                .map(|(id, amount)| (id.0, amount.to_string()))
                .collect();
            print_json(&LootOutput {
                plan,
                chain_amounts,
            })
        }
        Command::CheckMove { input, directions } => {
            let snapshot = load_snapshot(&input)?;
            let map = snapshot.knowledge_map()?;
            let directions = parse_directions(&directions)?;
            match trace_directions(snapshot.position(), &directions, &map) {
                Ok(visited) => print_json(&visited),
                Err(rejection) => {
                    tracing::warn!(%rejection, "move rejected");
                    print_json(&rejection)
                }
            }
        }
        Command::Render { input, radius } => {
            let snapshot = load_snapshot(&input)?;
            let map = snapshot.knowledge_map()?;
            print!("{}", AsciiRenderer::new(radius).render(&map, snapshot.position()));
            Ok(())
        }
        Command::Suggest { input, time } => {
            let snapshot = load_snapshot(&input)?;
            let tick = resolve_tick(&time, &model, &snapshot)?;
            let map = snapshot.knowledge_map()?;
            let decision = suggest_action(
                snapshot.position(),
                &snapshot.explorer.troops,
                &map,
                &model,
                tick,
                &config.navigation,
            );
            tracing::info!(action = ?decision.action, "decision");
            print_json(&decision)
        }
        Command::Demo { seed, radius, save } => {
            let snapshot = synthetic::generate_world(HexCoord::new(0, 0), radius, seed);
            if let Some(path) = save {
                std::fs::write(&path, snapshot.to_json()?)?;
                tracing::info!(path = %path.display(), "saved synthetic snapshot");
            }
            let map = snapshot.knowledge_map()?;
            print!("{}", AsciiRenderer::new(radius).render(&map, snapshot.position()));

            let decision = suggest_action(
                snapshot.position(),
                &snapshot.explorer.troops,
                &map,
                &model,
                snapshot.explorer.troops.stamina.updated_tick,
                &config.navigation,
            );
            print_json(&decision)
        }
    }
}
