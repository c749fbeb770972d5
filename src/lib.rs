#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

use std::path::PathBuf;

use envconfig::Envconfig;

pub mod data;
pub mod render;
pub mod ui;

use data::{HiddenRows, Leaderboard, Metric, RankOptions};
use ui::Theme;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "FANTASY_ENV", default = "dev")]
    pub env: String,

    #[envconfig(from = "FANTASY_ROWS_PATH", default = "var/leaderboard.json")]
    pub rows_path: PathBuf,

    #[envconfig(from = "FANTASY_METRIC", default = "points")]
    pub metric: Metric,

    #[envconfig(from = "FANTASY_HIDDEN_ROWS", default = "compact")]
    pub hidden_rows: HiddenRows,

    #[envconfig(from = "FANTASY_THEME", default = "light")]
    pub theme: Theme,

    #[envconfig(from = "FANTASY_TITLE", default = "Leaderboard")]
    pub title: String,
}

impl Config {
    pub fn is_dev(&self) -> bool {
        self.env == "dev"
    }

    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            hidden_rows: self.hidden_rows,
        }
    }
}

pub fn init_env() -> anyhow::Result<Config> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "fantasy_stats=info");
    }
    pretty_env_logger::init();

    let config = Config::init_from_env()?;
    if config.is_dev() {
        debug!("config: {:?}", config);
    }
    Ok(config)
}

/// Loads the configured rows and renders them ranked by the configured metric.
pub fn render_from_config(config: &Config) -> anyhow::Result<String> {
    let rows = data::load_rows(&config.rows_path)?;
    let board = Leaderboard::new(rows, config.metric.clone(), config.rank_options());
    info!(
        "ranked {} rows by {}, {} visible",
        board.rows().len(),
        board.metric(),
        board.visible_rows().count()
    );
    render::render_leaderboard(&config.title, &board, config.theme)
}
