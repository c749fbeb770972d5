use std::collections::{BTreeMap, HashMap};

use super::Metric;

/// Aggregate stats for one player within a league season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub player_name: String,
    pub metrics: BTreeMap<String, u32>,
}

impl PlayerRow {
    pub fn new(player_name: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn with(mut self, metric: Metric, value: u32) -> Self {
        self.metrics.insert(metric.key().to_string(), value);
        self
    }

    pub fn metric(&self, metric: &Metric) -> u32 {
        self.metrics.get(metric.key()).copied().unwrap_or(0)
    }

    pub fn points(&self) -> u32 {
        self.metric(&Metric::Points)
    }

    /// Builds a row from the string attributes the server renders on each
    /// leaderboard row. Keys may be canonical (`cleanSheets`) or attribute
    /// style (`clean-sheets`). Identity attributes (`id`, `slug`, ...) and
    /// values with no leading integer are skipped, so they read as 0. A
    /// leading integer is taken as is (`"12abc"` is 12, `"3.0"` is 3) and
    /// negative values clamp to 0.
    pub fn from_attributes(player_name: &str, attributes: &HashMap<String, String>) -> Self {
        let mut row = Self::new(player_name);
        for (name, value) in attributes {
            if NON_METRIC_ATTRIBUTES.contains(&name.as_str()) {
                continue;
            }
            let metric = Metric::from(name.as_str());
            match parse_leading_int(value) {
                Some(n) => {
                    row.metrics.insert(metric.key().to_string(), n);
                }
                None => debug!("skipping non-numeric {} value {:?}", metric, value),
            }
        }
        row
    }
}

const NON_METRIC_ATTRIBUTES: [&str; 9] = [
    "id",
    "playerId",
    "player-id",
    "name",
    "playerName",
    "player-name",
    "slug",
    "team",
    "position",
];

fn parse_leading_int(value: &str) -> Option<u32> {
    let s = value.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits[..end].parse().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn absent_metric_is_zero() {
        let row = PlayerRow::new("Salem").with(Metric::Goals, 4);
        assert_eq!(4, row.metric(&Metric::Goals));
        assert_eq!(0, row.metric(&Metric::Saves));
        assert_eq!(0, row.points());
    }

    #[test]
    fn from_attributes() {
        let row = PlayerRow::from_attributes(
            "Omar",
            &attrs(&[("points", "21"), ("clean-sheets", "3"), ("saves", " 7 ")]),
        );
        assert_eq!("Omar", row.player_name);
        assert_eq!(21, row.points());
        assert_eq!(3, row.metric(&Metric::CleanSheets));
        assert_eq!(7, row.metric(&Metric::Saves));
    }

    #[test]
    fn unparseable_values_default_to_zero() {
        let row = PlayerRow::from_attributes(
            "Omar",
            &attrs(&[("points", "abc"), ("goals", ""), ("assists", "-3")]),
        );
        assert_eq!(0, row.points());
        assert_eq!(0, row.metric(&Metric::Goals));
        assert_eq!(0, row.metric(&Metric::Assists));
        assert!(!row.metrics.contains_key("goals"));
    }

    #[test]
    fn leading_integer_values() {
        let row = PlayerRow::from_attributes(
            "Omar",
            &attrs(&[("points", "12abc"), ("goals", "3.0"), ("saves", "99999999999")]),
        );
        assert_eq!(12, row.points());
        assert_eq!(3, row.metric(&Metric::Goals));
        assert_eq!(u32::MAX, row.metric(&Metric::Saves));
    }

    #[test]
    fn skips_non_metric_attributes() {
        let row = PlayerRow::from_attributes(
            "Omar",
            &attrs(&[("id", "17"), ("team", "Reds"), ("points", "3")]),
        );
        assert_eq!(3, row.points());
        assert_eq!(1, row.metrics.len());
        assert!(!row.metrics.contains_key("id"));
        assert!(!row.metrics.contains_key("team"));
    }

    #[test]
    fn deserialize() {
        let row: PlayerRow = serde_json::from_str(
            r#"{"playerName": "Hadi", "metrics": {"points": 10, "cleanSheets": 1}}"#,
        )
        .unwrap();
        assert_eq!("Hadi", row.player_name);
        assert_eq!(10, row.points());
        assert_eq!(1, row.metric(&Metric::CleanSheets));
    }
}
