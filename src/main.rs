use anyhow::{Context, Result, anyhow};
use rusty_golf_handicap::args::{self, Mode, load_round};
use rusty_golf_handicap::config::{AppConfig, load_config};
use rusty_golf_handicap::course_lookup::{CourseLookup, GolfCourseApiClient, bundled_courses};
use rusty_golf_handicap::handicap::{handicap_calculation, match_play_strokes};
use rusty_golf_handicap::model::{GameCatalog, LeaderboardEntry, Player, ScoringFormat};
use rusty_golf_handicap::round::Round;
use rusty_golf_handicap::storage::{DirKv, KvStore, PlayerProfiles};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = args::args_checks();
    let config = load_config(args)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let round = match config.round.as_deref() {
        Some(path) => {
            let round =
                load_round(path).with_context(|| format!("load round {}", path.display()))?;
            Some(round)
        }
        None => None,
    };

    if config.save_players {
        let round = require_round(round.as_ref())?;
        let profiles = PlayerProfiles::new(open_store(&config)?);
        for player in &round.players {
            profiles
                .save_player(player)
                .with_context(|| format!("save player {}", player.id))?;
        }
        tracing::info!(count = round.players.len(), "saved player profiles");
    }

    match config.mode {
        Mode::Handicaps => {
            let round = require_round(round.as_ref())?;
            let mut out = Vec::with_capacity(round.players.len());
            for player in &round.players {
                let calc = handicap_calculation(player, &round.tee, config.handicap_allowance)?;
                out.push((player.name.clone(), calc));
            }
            if config.json {
                print_json(&out)?;
            } else {
                for (name, calc) in &out {
                    let strokes: Vec<String> =
                        calc.strokes_per_hole.values().map(u32::to_string).collect();
                    println!(
                        "{name}: index {:.1}, course {}, playing {} | {}",
                        calc.handicap_index,
                        calc.course_handicap,
                        calc.playing_handicap,
                        strokes.join(" ")
                    );
                }
            }
        }
        Mode::Leaderboard => {
            let round = require_round(round.as_ref())?;
            print_leaderboard(&round.leaderboard(), config.json)?;
        }
        Mode::NetLeaderboard => {
            let round = require_round(round.as_ref())?;
            print_leaderboard(&round.net_leaderboard()?, config.json)?;
        }
        Mode::MatchPlay => {
            let round = require_round(round.as_ref())?;
            let a = find_player(round, config.player_a.as_deref(), "player-a")?;
            let b = find_player(round, config.player_b.as_deref(), "player-b")?;
            let strokes = match_play_strokes(a, b, &round.tee)?;
            if config.json {
                print_json(&strokes)?;
            } else {
                let given: u32 = strokes.iter().sum();
                println!("{} receives {given} strokes from {}", a.name, b.name);
                for (i, s) in strokes.iter().enumerate().filter(|(_, s)| **s > 0) {
                    println!("  hole {:>2}: {s}", round.tee.hole_number_at(i));
                }
            }
        }
        Mode::Games => {
            let catalog = GameCatalog::bundled()?;
            if !config.json {
                for format in [
                    ScoringFormat::StrokePlay,
                    ScoringFormat::MatchPlay,
                    ScoringFormat::PointsBased,
                ] {
                    println!("{format}: {}", format.description());
                }
                println!();
            }
            let games = match config.player_count {
                Some(count) => catalog.for_player_count(count),
                None => catalog.games().iter().collect(),
            };
            if config.json {
                print_json(&games)?;
            } else {
                for game in games {
                    let scoring: Vec<String> =
                        game.scoring_formats.iter().map(ToString::to_string).collect();
                    println!(
                        "{:<18} {}-{} players  {:<24} {}",
                        game.id,
                        game.min_players,
                        game.max_players,
                        scoring.join("/"),
                        game.name
                    );
                    for format in &game.gameplay_formats {
                        println!("    {format:?}: {}", format.description());
                    }
                }
            }
        }
        Mode::Course => {
            let name = config
                .course_name
                .as_deref()
                .ok_or_else(|| anyhow!("missing --course-name"))?;
            let mut lookup = CourseLookup::new(open_store(&config)?, bundled_courses()?);
            if let Some(api) = &config.course_api {
                lookup = lookup.with_remote(Box::new(GolfCourseApiClient::new(
                    api.base_url.clone(),
                    api.api_key.clone(),
                )?));
            }
            match lookup.find_by_name(name).await {
                Some(course) if config.json => print_json(&course)?,
                Some(course) => {
                    println!("{} ({})", course.name, course.id);
                    for tee in &course.tees {
                        println!(
                            "  {:<14} rating {:.1} slope {:.0} par {}",
                            tee.name, tee.course_rating, tee.slope_rating, tee.par_total
                        );
                    }
                }
                None => println!("no course matching '{name}'"),
            }
        }
        Mode::Players => {
            let players = PlayerProfiles::new(open_store(&config)?).all_players()?;
            if config.json {
                print_json(&players)?;
            } else {
                for p in players {
                    println!("{:<12} {:<24} {:.1}", p.id, p.name, p.handicap_index);
                }
            }
        }
    }
    Ok(())
}

fn require_round(round: Option<&Round>) -> Result<&Round> {
    round.ok_or_else(|| anyhow!("missing --round"))
}

fn find_player<'a>(round: &'a Round, id: Option<&str>, flag: &str) -> Result<&'a Player> {
    let id = id.ok_or_else(|| anyhow!("missing --{flag}"))?;
    Ok(round.player(id)?)
}

fn open_store(config: &AppConfig) -> Result<Arc<dyn KvStore>> {
    let store = DirKv::open(&config.store_dir)
        .with_context(|| format!("open store {}", config.store_dir.display()))?;
    Ok(Arc::new(store))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_leaderboard(entries: &[LeaderboardEntry], json: bool) -> Result<()> {
    if json {
        return print_json(entries);
    }
    for e in entries {
        let net = e.net_total.map(|n| format!("  net {n}")).unwrap_or_default();
        let to_par = match e.to_par {
            Some(0) => "  E".to_string(),
            Some(p) => format!("  {p:+}"),
            None => String::new(),
        };
        println!(
            "{:>2}. {:<24} {:>3}  thru {}{net}{to_par}",
            e.rank, e.player_name, e.total, e.thru_hole
        );
    }
    Ok(())
}
