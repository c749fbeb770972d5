use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

mod metric;
pub use metric::Metric;

mod player;
pub use player::PlayerRow;

pub mod leaders;
pub use leaders::{HiddenRows, Leaderboard, RankOptions, RankedRow};

/// Rows arrive either in `PlayerRow` shape or as the flat attribute map a
/// rendered table row carries (`{"name": "...", "points": "12", ...}`). A
/// row with a `metrics` key is always read as a `PlayerRow`, and a bad
/// value in it fails the load.
fn row_from_value(index: usize, value: Value) -> anyhow::Result<PlayerRow> {
    let mut object = match value {
        Value::Object(object) => object,
        other => anyhow::bail!("row {} is not an object: {}", index, other),
    };
    if object.contains_key("metrics") {
        return serde_json::from_value(Value::Object(object))
            .with_context(|| format!("row {} has invalid metrics", index));
    }

    let name = ["playerName", "name"]
        .iter()
        .find_map(|key| object.remove(*key))
        .map(|v| attribute_string(&v))
        .unwrap_or_default();
    let attributes: HashMap<String, String> = object
        .iter()
        .map(|(k, v)| (k.clone(), attribute_string(v)))
        .collect();
    Ok(PlayerRow::from_attributes(&name, &attributes))
}

fn attribute_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

pub fn parse_rows(json: &str) -> anyhow::Result<Vec<PlayerRow>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| row_from_value(index, value))
        .collect()
}

pub fn load_rows(path: &Path) -> anyhow::Result<Vec<PlayerRow>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading leaderboard rows from {}", path.display()))?;
    let rows = parse_rows(&json)
        .with_context(|| format!("parsing leaderboard rows in {}", path.display()))?;
    info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
