use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::BotError;

/// Engine constants sent on the first line of the game.
#[derive(Debug, Clone)]
pub struct Constants {
    pub max_turns: usize,
    pub ship_cost: usize,
    pub dropoff_cost: usize,
    pub max_halite: usize,
}

impl Constants {
    pub fn from_json(constant_json: &Value) -> Result<Constants, BotError> {
        Ok(Constants {
            max_turns: read_constant(constant_json, "MAX_TURNS")?,
            ship_cost: read_constant(constant_json, "NEW_ENTITY_ENERGY_COST")?,
            dropoff_cost: read_constant(constant_json, "DROPOFF_COST")?,
            max_halite: read_constant(constant_json, "MAX_ENERGY")?,
        })
    }
}

fn read_constant(constant_json: &Value, key: &'static str) -> Result<usize, BotError> {
    constant_json[key].as_u64()
        .map(|v| v as usize)
        .ok_or(BotError::MissingConstant(key))
}

/// Strategy thresholds. The defaults are the tuned values; a JSON file may override any subset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub bot_name: String,
    /// cargo above this share of capacity sends a collector home
    pub full_ratio: f64,
    /// cargo below this share of the cell's halite is not worth moving for
    pub cargo_ratio: f64,
    /// cells richer than this are always mined in place
    pub rich_cell: usize,
    pub alarm_turns_left: usize,
    pub spawn_until: f64,
    pub dropoff_until: f64,
    pub dropoff_distance_ratio: f64,
    pub dropoff_width_divisor: usize,
}

impl Default for Tuning {
    fn default() -> Tuning {
        Tuning {
            bot_name: "GoldBot".to_owned(),
            full_ratio: 0.9,
            cargo_ratio: 0.1,
            rich_cell: 80,
            alarm_turns_left: 20,
            spawn_until: 0.5,
            dropoff_until: 0.8,
            dropoff_distance_ratio: 0.4,
            dropoff_width_divisor: 12,
        }
    }
}

impl Tuning {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Tuning, BotError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(text: &str) -> Result<Tuning, BotError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_nearly_full(&self, halite: usize, capacity: usize) -> bool {
        halite as f64 > capacity as f64 * self.full_ratio
    }

    /// True when `halite` is under the `cargo_ratio` share of `cell_halite`.
    pub fn is_light_cargo(&self, halite: usize, cell_halite: usize) -> bool {
        (halite as f64) < cell_halite as f64 * self.cargo_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let tuning = Tuning::from_json_str(r#"{"rich_cell": 120, "bot_name": "Tuned"}"#).unwrap();
        assert_eq!(tuning.rich_cell, 120);
        assert_eq!(tuning.bot_name, "Tuned");
        assert_eq!(tuning.alarm_turns_left, 20);
        assert_eq!(tuning.dropoff_width_divisor, 12);
    }

    #[test]
    fn constants_are_read_from_engine_json() {
        let json: Value = serde_json::from_str(
            r#"{"MAX_TURNS": 400, "NEW_ENTITY_ENERGY_COST": 1000, "DROPOFF_COST": 4000, "MAX_ENERGY": 1000, "EXTRA": true}"#
        ).unwrap();
        let constants = Constants::from_json(&json).unwrap();
        assert_eq!(constants.max_turns, 400);
        assert_eq!(constants.ship_cost, 1000);
        assert_eq!(constants.dropoff_cost, 4000);
        assert_eq!(constants.max_halite, 1000);
    }

    #[test]
    fn missing_constant_is_reported_by_name() {
        let json: Value = serde_json::from_str(r#"{"MAX_TURNS": 400}"#).unwrap();
        match Constants::from_json(&json) {
            Err(BotError::MissingConstant(key)) => assert_eq!(key, "NEW_ENTITY_ENERGY_COST"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn fullness_is_strictly_above_the_ratio() {
        let tuning = Tuning::default();
        assert!(!tuning.is_nearly_full(900, 1000));
        assert!(tuning.is_nearly_full(901, 1000));
        assert!(tuning.is_light_cargo(9, 100));
        assert!(!tuning.is_light_cargo(10, 100));
    }
}
