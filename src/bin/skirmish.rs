//! Skirmish runner - a scripted turn loop driving the simulation core
//!
//! Plays a simple strategy: muster a starting army, expand into the weakest
//! frontier territory each day, and weather autonomous attacks and random
//! events. Writes a JSON report of the run.

use clap::Parser;
use serde::Serialize;

use warmarch::catalog::{Difficulty, Race, UnitKind};
use warmarch::core::types::TerritoryId;
use warmarch::session::{Session, SessionConfig, Verbosity};

#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run a scripted conquest campaign against the simulation core")]
struct Args {
    /// Random seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum number of simulated days
    #[arg(long, default_value_t = 40)]
    days: u32,

    /// Difficulty: easy, normal or hard
    #[arg(long, default_value = "normal")]
    difficulty: String,

    /// Player race: human, elf or orc
    #[arg(long, default_value = "human")]
    race: String,

    /// Log combat internals
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

#[derive(Serialize)]
struct DayReport {
    day: u32,
    event: String,
    enemy_attack: Option<u32>,
    defense_held: Option<bool>,
    assault_target: Option<u32>,
    assault_won: Option<bool>,
    territories_held: usize,
    units_at_home: u32,
    gold: u32,
}

fn parse_difficulty(value: &str) -> Difficulty {
    match value.to_ascii_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Normal,
    }
}

fn parse_race(value: &str) -> Race {
    match value.to_ascii_lowercase().as_str() {
        "elf" => Race::Elf,
        "orc" => Race::Orc,
        _ => Race::Human,
    }
}

/// Weakest-garrison frontier territory, if any
fn pick_target(session: &Session) -> Option<TerritoryId> {
    let player = session.player().id;
    session
        .map()
        .frontier_neutrals(player)
        .into_iter()
        .min_by_key(|id| {
            session
                .map()
                .get(*id)
                .map(|t| t.garrison.total())
                .unwrap_or(u32::MAX)
        })
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let difficulty = parse_difficulty(&args.difficulty);
    let race = parse_race(&args.race);

    let mut session = Session::new(SessionConfig {
        race,
        difficulty,
        seed: args.seed,
        verbosity: if args.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        },
    });

    // Starting army, as the external economy would provide.
    let [basic, medium, advanced] = UnitKind::roster(race);
    session.player_mut().units_mut().add(basic, 20);
    session.player_mut().units_mut().add(medium, 10);
    session.player_mut().units_mut().add(advanced, 5);

    let income = difficulty.params().resource_multiplier;
    let player_id = session.player().id;

    println!("Skirmish: {} on {} (seed {})", race, difficulty, args.seed);
    println!("Map: {}x{}", session.map().width(), session.map().height());
    println!();

    let mut reports = Vec::new();

    for day in 1..=args.days {
        // Daily income, scaled by difficulty.
        let (stone, wood, gold) = ((20.0 * income) as u32, (20.0 * income) as u32, (10.0 * income) as u32);
        session.player_mut().stockpile.add_with_limit(stone, wood, gold);

        // The frontier may strike first.
        let mut enemy_attack = None;
        let mut defense_held = None;
        if let Some(attacker) = session.maybe_trigger_enemy_attack() {
            enemy_attack = Some(attacker.0);
            let outcome = session
                .resolve_autonomous_attack(attacker)
                .expect("targeting only yields neutral territories");
            defense_held = Some(outcome.victory);
            if !outcome.victory {
                println!("Day {day}: territory {attacker} razed our home ground");
            }
        }

        // Something always happens in the village.
        let event = session.apply_random_event().name.clone();

        // Expand into the weakest frontier territory, half the army at a time.
        let mut assault_target = None;
        let mut assault_won = None;
        if session.player().has_units() {
            if let Some(target) = pick_target(&session) {
                for kind in session.player().units().kinds() {
                    let count = session.player().units().count(kind);
                    session.player_mut().commit_to_attack(kind, count / 2);
                }
                if !session.player().attacking_units().is_empty() {
                    let outcome = session
                        .resolve_player_attack(target)
                        .expect("target is a validated frontier neutral");
                    assault_target = Some(target.0);
                    assault_won = Some(outcome.victory);
                    if outcome.victory {
                        println!("Day {day}: captured territory {target}");
                    }
                }
            }
        }

        reports.push(DayReport {
            day,
            event,
            enemy_attack,
            defense_held,
            assault_target,
            assault_won,
            territories_held: session.map().player_territory_count(player_id),
            units_at_home: session.player().units().total(),
            gold: session.player().stockpile.gold,
        });

        if session.map().is_conquered(player_id) {
            println!("\nThe whole map fell by day {day}.");
            break;
        }
        if session.map().player_territory_count(player_id) == 0 {
            println!("\nEvery territory was lost by day {day}.");
            break;
        }
    }

    let held = session.map().player_territory_count(player_id);
    println!();
    println!(
        "Campaign over: {held}/{} territories held, {} units at home",
        session.map().territory_count(),
        session.player().units().total()
    );

    let json = serde_json::to_string_pretty(&reports).expect("report serializes");
    std::fs::write("skirmish_report.json", &json).expect("failed to write report");
    println!("Full report written to skirmish_report.json");
}
