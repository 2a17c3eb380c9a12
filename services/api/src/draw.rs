use crate::infra::{parse_pool_count, parse_sport_match};
use clap::Args;
use pool_draw::config::AppConfig;
use pool_draw::error::AppError;
use pool_draw::pools::{
    load_index, pool_views, DrawSettings, FileRosterSource, Pool, PoolCount, PoolService,
    SportMatch,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DrawArgs {
    /// Roster CSV export (Name, Sex, Age, Sports Interested)
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Past results text file (defaults to APP_HISTORY_PATH or finalists.txt)
    #[arg(long)]
    pub(crate) history: Option<PathBuf>,
    /// Number of pools to draw (defaults to APP_POOL_COUNT or 4)
    #[arg(long, value_parser = parse_pool_count)]
    pub(crate) pool_count: Option<PoolCount>,
    /// Only list players registered for this sport
    #[arg(long)]
    pub(crate) sport: Option<String>,
    /// Sport matching mode: substring or token
    #[arg(long = "match", value_parser = parse_sport_match)]
    pub(crate) sport_match: Option<SportMatch>,
    /// Print the same JSON the HTTP endpoints return
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_draw(args: DrawArgs) -> Result<(), AppError> {
    let DrawArgs {
        roster,
        history,
        pool_count,
        sport,
        sport_match,
        json,
    } = args;

    let config = AppConfig::load()?;
    let settings = DrawSettings {
        pool_count: pool_count.unwrap_or(config.draw.settings.pool_count),
        sport_match: sport_match.unwrap_or(config.draw.settings.sport_match),
    };
    let history = history.unwrap_or(config.draw.history_path);

    let index = load_index(&history)?;
    let service = PoolService::new(
        Arc::new(FileRosterSource::new(roster)),
        Arc::new(index),
        settings,
    );

    let (sport, pools) = match sport {
        Some(sport) => {
            let view = service.pools_for_sport(&sport).await?;
            (Some(view.sport), view.pools)
        }
        None => (None, service.pools().await?),
    };

    if json {
        render_json(sport.as_deref(), &pools);
    } else {
        render_pools(sport.as_deref(), &pools, settings);
    }

    Ok(())
}

fn render_json(sport: Option<&str>, pools: &[Pool]) {
    let payload = match sport {
        Some(game) => json!({ "game": game, "pools": pool_views(pools) }),
        None => json!({ "pools": pool_views(pools) }),
    };
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Pool payload unavailable: {err}"),
    }
}

fn render_pools(sport: Option<&str>, pools: &[Pool], settings: DrawSettings) {
    let players: usize = pools.iter().map(Pool::len).sum();
    let finalists: usize = pools.iter().map(Pool::finalists).sum();

    println!(
        "Pool draw: {} pools, {} players, {} finalists",
        settings.pool_count, players, finalists
    );
    if let Some(sport) = sport {
        println!(
            "Sport filter: {} ({} match)",
            sport,
            settings.sport_match.label()
        );
    }

    for pool in pools {
        println!(
            "\nPool {} ({} players, {} finalists)",
            pool.number,
            pool.len(),
            pool.finalists()
        );
        if pool.is_empty() {
            println!("- none");
            continue;
        }
        for member in &pool.members {
            let age = member
                .player
                .age
                .map_or_else(|| "?".to_string(), |age| age.to_string());
            let marker = if member.finalist { " | finalist" } else { "" };
            println!(
                "- {} | {} | {} | {}{}",
                member.player.name, member.player.sex, age, member.player.sports_interested, marker
            );
        }
    }
}
