use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A named integer statistic that a leaderboard can be sorted by.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub enum Metric {
    #[default]
    Points,
    Goals,
    Assists,
    Saves,
    CleanSheets,
    Other(String),
}

impl Metric {
    /// Canonical key, as used in `PlayerRow::metrics`.
    pub fn key(&self) -> &str {
        match self {
            Metric::Points => "points",
            Metric::Goals => "goals",
            Metric::Assists => "assists",
            Metric::Saves => "saves",
            Metric::CleanSheets => "cleanSheets",
            Metric::Other(key) => key,
        }
    }

    /// Name of the `data-*` attribute carrying this metric on a table row.
    pub fn attribute(&self) -> String {
        match self {
            Metric::CleanSheets => "clean-sheets".to_string(),
            _ => self.key().to_string(),
        }
    }

    /// Only the saves tab hides rows: outfield players with no saves and no
    /// clean sheets have nothing to show there.
    pub fn filters_hidden_rows(&self) -> bool {
        *self == Metric::Saves
    }

    pub fn is_points(&self) -> bool {
        *self == Metric::Points
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.trim() {
            "points" => Metric::Points,
            "goals" => Metric::Goals,
            "assists" => Metric::Assists,
            "saves" => Metric::Saves,
            "cleanSheets" | "clean_sheets" | "clean-sheets" => Metric::CleanSheets,
            other => Metric::Other(other.to_string()),
        })
    }
}

impl From<&str> for Metric {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(metric) => metric,
            Err(never) => match never {},
        }
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Metric::from(s.as_str()))
    }
}

impl Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.key().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known() {
        assert_eq!(Metric::Points, Metric::from("points"));
        assert_eq!(Metric::Goals, Metric::from("goals"));
        assert_eq!(Metric::Assists, Metric::from("assists"));
        assert_eq!(Metric::Saves, Metric::from("saves"));
        assert_eq!(Metric::CleanSheets, Metric::from("cleanSheets"));
        assert_eq!(Metric::CleanSheets, Metric::from("clean_sheets"));
        assert_eq!(Metric::CleanSheets, Metric::from("clean-sheets"));
    }

    #[test]
    fn parse_unknown_keeps_key() {
        let metric = Metric::from("mvps");
        assert_eq!(Metric::Other("mvps".to_string()), metric);
        assert_eq!("mvps", metric.key());
        assert_eq!("mvps", metric.to_string());
    }

    #[test]
    fn attribute_names() {
        assert_eq!("clean-sheets", Metric::CleanSheets.attribute());
        assert_eq!("saves", Metric::Saves.attribute());
    }

    #[test]
    fn only_saves_filters() {
        assert!(Metric::Saves.filters_hidden_rows());
        assert!(!Metric::Points.filters_hidden_rows());
        assert!(!Metric::CleanSheets.filters_hidden_rows());
        assert!(!Metric::Other("saves2".to_string()).filters_hidden_rows());
    }

    #[test]
    fn serde() {
        let metric: Metric = serde_json::from_str("\"clean_sheets\"").unwrap();
        assert_eq!(Metric::CleanSheets, metric);
        assert_eq!("\"cleanSheets\"", serde_json::to_string(&metric).unwrap());
    }
}
