use anyhow::Context;
use askama::Template;

use crate::data::leaders::CROWN;
use crate::data::{Leaderboard, Metric, RankedRow};
use crate::ui::Theme;

const TABS: [Metric; 5] = [
    Metric::Points,
    Metric::Goals,
    Metric::Assists,
    Metric::Saves,
    Metric::CleanSheets,
];

pub struct Tab {
    pub key: String,
    /// Row attribute the tab sorts on, without the `data-` prefix.
    pub attribute: String,
    pub active: bool,
}

pub struct Attribute {
    pub name: String,
    pub value: u32,
}

pub struct RowView {
    pub name: String,
    pub rank_text: String,
    pub crown: bool,
    pub visible: bool,
    pub value: u32,
    pub attributes: Vec<Attribute>,
}

impl RowView {
    fn new(ranked: &RankedRow, metric: &Metric) -> Self {
        Self {
            name: ranked.row.player_name.clone(),
            rank_text: ranked.rank_text(),
            crown: ranked.crown,
            visible: ranked.visible,
            value: ranked.row.metric(metric),
            attributes: ranked
                .row
                .metrics
                .iter()
                .map(|(key, value)| Attribute {
                    name: Metric::from(key.as_str()).attribute(),
                    value: *value,
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "leaderboard.html")]
pub struct LeaderboardTemplate {
    title: String,
    theme: Theme,
    crown: &'static str,
    tabs: Vec<Tab>,
    rows: Vec<RowView>,
}

impl LeaderboardTemplate {
    pub fn new(title: &str, board: &Leaderboard, theme: Theme) -> Self {
        let metric = board.metric();
        let mut tabs: Vec<Tab> = TABS
            .iter()
            .map(|tab| Tab {
                key: tab.key().to_string(),
                attribute: tab.attribute(),
                active: tab == metric,
            })
            .collect();
        if !TABS.contains(metric) {
            tabs.push(Tab {
                key: metric.key().to_string(),
                attribute: metric.attribute(),
                active: true,
            });
        }
        Self {
            title: title.to_string(),
            theme,
            crown: CROWN,
            tabs,
            rows: board
                .rows()
                .iter()
                .map(|ranked| RowView::new(ranked, metric))
                .collect(),
        }
    }
}

pub fn render_leaderboard(title: &str, board: &Leaderboard, theme: Theme) -> anyhow::Result<String> {
    LeaderboardTemplate::new(title, board, theme)
        .render()
        .context("rendering leaderboard template")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PlayerRow, RankOptions};

    fn board(metric: Metric) -> Leaderboard {
        let rows = vec![
            PlayerRow::new("A").with(Metric::Points, 10),
            PlayerRow::new("B")
                .with(Metric::Points, 10)
                .with(Metric::Saves, 2),
            PlayerRow::new("C")
                .with(Metric::Points, 8)
                .with(Metric::CleanSheets, 1),
        ];
        Leaderboard::new(rows, metric, RankOptions::default())
    }

    #[test]
    fn crown_under_points() {
        let html = render_leaderboard("League", &board(Metric::Points), Theme::Light).unwrap();
        assert_eq!(1, html.matches("class=\"crown\"").count());
        assert!(html.contains("1 🥇"));
        assert!(html.contains("3 🥉"));
        assert!(!html.contains("display: none"));
        assert!(html.contains("data-clean-sheets=\"1\""));
    }

    #[test]
    fn hidden_rows_under_saves() {
        let html = render_leaderboard("League", &board(Metric::Saves), Theme::Dark).unwrap();
        assert!(!html.contains("class=\"crown\""));
        assert_eq!(1, html.matches("display: none").count());
        assert!(html.contains("class=\"dark-mode\""));
        assert!(html.contains("#121212"));
    }

    #[test]
    fn tabs_sort_on_row_attributes() {
        let html = render_leaderboard("League", &board(Metric::Points), Theme::Light).unwrap();
        assert!(html.contains("data-sort=\"clean-sheets\""));
        assert!(!html.contains("data-sort=\"cleanSheets\""));
        assert!(html.contains(">cleanSheets</button>"));
        assert!(html.contains("data-clean-sheets=\"1\""));
    }

    #[test]
    fn active_tab() {
        let template = LeaderboardTemplate::new("League", &board(Metric::Saves), Theme::Light);
        let active: Vec<&str> = template
            .tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.key.as_str())
            .collect();
        assert_eq!(vec!["saves"], active);

        let other = LeaderboardTemplate::new(
            "League",
            &board(Metric::Other("mvps".to_string())),
            Theme::Light,
        );
        assert_eq!(6, other.tabs.len());
        assert!(other.tabs.last().unwrap().active);
    }
}
