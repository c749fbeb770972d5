use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{Metric, PlayerRow};

/// What happens to rows that the active metric filters out (only the saves
/// tab filters anything).
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum HiddenRows {
    /// Filtered rows are hidden and take no rank.
    #[default]
    Compact,
    /// The filter is ignored; every row is ranked and shown.
    ShowAll,
}

impl fmt::Display for HiddenRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HiddenRows::Compact => "compact",
            HiddenRows::ShowAll => "show-all",
        })
    }
}

impl FromStr for HiddenRows {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(HiddenRows::Compact),
            "show-all" | "show_all" => Ok(HiddenRows::ShowAll),
            _ => Err(format!("unknown hidden rows mode {}", s)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct RankOptions {
    pub hidden_rows: HiddenRows,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

pub const CROWN: &str = "👑";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub row: PlayerRow,
    pub display_rank: Option<usize>,
    pub visible: bool,
    pub medal: Option<Medal>,
    pub crown: bool,
}

impl RankedRow {
    /// Text for the rank column: the rank followed by its medal, if any.
    pub fn rank_text(&self) -> String {
        match self.display_rank {
            Some(rank) => format!("{} {}", rank, self.medal.map_or("", Medal::emoji)),
            None => String::new(),
        }
    }
}

fn compare(a: &PlayerRow, b: &PlayerRow, metric: &Metric) -> Ordering {
    b.metric(metric).cmp(&a.metric(metric)).then_with(|| {
        if metric.is_points() {
            Ordering::Equal
        } else {
            b.points().cmp(&a.points())
        }
    })
}

fn is_visible(row: &PlayerRow, metric: &Metric, options: RankOptions) -> bool {
    options.hidden_rows == HiddenRows::ShowAll
        || !metric.filters_hidden_rows()
        || row.metric(&Metric::Saves) > 0
        || row.metric(&Metric::CleanSheets) > 0
}

/// Orders `rows` by `metric`, highest first, and assigns contiguous display
/// ranks to the visible rows. Ties on a metric other than points fall back
/// to points; anything still tied keeps its incoming order.
pub fn rank(rows: &[PlayerRow], metric: &Metric, options: RankOptions) -> Vec<RankedRow> {
    let mut next_rank = 1;
    let ranked: Vec<RankedRow> = rows
        .iter()
        .sorted_by(|a, b| compare(a, b, metric))
        .map(|row| {
            let visible = is_visible(row, metric, options);
            let display_rank = if visible {
                next_rank += 1;
                Some(next_rank - 1)
            } else {
                None
            };
            RankedRow {
                row: row.clone(),
                display_rank,
                visible,
                medal: display_rank.and_then(Medal::for_rank),
                crown: display_rank == Some(1) && metric.is_points(),
            }
        })
        .collect();

    debug!(
        "ranked {} rows by {} ({} visible, {})",
        ranked.len(),
        metric,
        next_rank - 1,
        options.hidden_rows
    );
    ranked
}

/// The fixed row set of one leaderboard table, re-ranked whenever a metric
/// tab is selected. Each pass starts from the previous pass's order.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    options: RankOptions,
    metric: Metric,
    ranked: Vec<RankedRow>,
}

impl Leaderboard {
    pub fn new(rows: Vec<PlayerRow>, metric: Metric, options: RankOptions) -> Self {
        let ranked = rank(&rows, &metric, options);
        Self {
            options,
            metric,
            ranked,
        }
    }

    pub fn select(&mut self, metric: Metric) -> &[RankedRow] {
        let rows: Vec<PlayerRow> = self.ranked.drain(..).map(|r| r.row).collect();
        self.ranked = rank(&rows, &metric, self.options);
        self.metric = metric;
        &self.ranked
    }

    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    pub fn options(&self) -> RankOptions {
        self.options
    }

    pub fn rows(&self) -> &[RankedRow] {
        &self.ranked
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &RankedRow> {
        self.ranked.iter().filter(|r| r.visible)
    }

    pub fn crowned(&self) -> Option<&RankedRow> {
        self.ranked.iter().find(|r| r.crown)
    }
}
