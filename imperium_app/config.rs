use dotenvy::dotenv;
use std::{env, str::FromStr, time::Duration};
use tracing::warn;

use imperium_game::models::ledger::STARTING_RESOURCES;
use imperium_types::common::ResourceGroup;

const DEFAULT_TICK_MILLIS: u64 = 2000;
const MIN_TICK_MILLIS: u64 = 100;
const DEFAULT_SPEED: u8 = 1;
const MAX_SPEED: u8 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_millis: u64,
    pub speed: u8,
    pub starting_resources: ResourceGroup,
}

impl Config {
    /// Loads `.env` if present, then reads the `IMPERIUM_*` variables.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source. Missing or unparseable
    /// values fall back to their defaults.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let tick_millis = parse_or(&lookup, "IMPERIUM_TICK_MILLIS", DEFAULT_TICK_MILLIS)
            .max(MIN_TICK_MILLIS);
        let speed = parse_or(&lookup, "IMPERIUM_SPEED", DEFAULT_SPEED).clamp(1, MAX_SPEED);

        let starting_resources = ResourceGroup::new(
            parse_or(&lookup, "IMPERIUM_START_GOLD", STARTING_RESOURCES.gold()),
            parse_or(&lookup, "IMPERIUM_START_WOOD", STARTING_RESOURCES.wood()),
            parse_or(&lookup, "IMPERIUM_START_STONE", STARTING_RESOURCES.stone()),
        );

        Self {
            tick_millis,
            speed,
            starting_resources,
        }
    }

    /// Time between two production ticks, shortened by the game speed.
    pub fn production_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis / self.speed.max(1) as u64)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_millis: DEFAULT_TICK_MILLIS,
            speed: DEFAULT_SPEED,
            starting_resources: STARTING_RESOURCES,
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            warn!(key, value = %val, "Invalid config value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_interval() {
        let config = Config::default();
        assert_eq!(config.production_interval(), Duration::from_secs(2));
        assert_eq!(config.starting_resources, ResourceGroup::new(200, 150, 100));
    }

    #[test]
    fn test_speed_shortens_interval() {
        let config = Config {
            speed: 4,
            ..Default::default()
        };
        assert_eq!(config.production_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_missing_values_use_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.tick_millis, 2000);
        assert_eq!(config.speed, 1);
        assert_eq!(config.starting_resources, ResourceGroup::new(200, 150, 100));
    }

    #[test]
    fn test_values_are_read() {
        let config = config_from(&[
            ("IMPERIUM_TICK_MILLIS", "1500"),
            ("IMPERIUM_SPEED", "3"),
            ("IMPERIUM_START_GOLD", "600"),
            ("IMPERIUM_START_WOOD", "0"),
            ("IMPERIUM_START_STONE", " 42 "),
        ]);
        assert_eq!(config.tick_millis, 1500);
        assert_eq!(config.speed, 3);
        assert_eq!(config.production_interval(), Duration::from_millis(500));
        assert_eq!(config.starting_resources, ResourceGroup::new(600, 0, 42));
    }

    #[test]
    fn test_short_tick_is_raised_to_minimum() {
        assert_eq!(config_from(&[("IMPERIUM_TICK_MILLIS", "10")]).tick_millis, 100);
        assert_eq!(config_from(&[("IMPERIUM_TICK_MILLIS", "0")]).tick_millis, 100);
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(config_from(&[("IMPERIUM_SPEED", "0")]).speed, 1);
        assert_eq!(config_from(&[("IMPERIUM_SPEED", "9")]).speed, 5);
        assert_eq!(config_from(&[("IMPERIUM_SPEED", "200")]).speed, 5);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config_from(&[
            ("IMPERIUM_TICK_MILLIS", "soon"),
            ("IMPERIUM_SPEED", "-2"),
            ("IMPERIUM_START_GOLD", "lots"),
            ("IMPERIUM_START_WOOD", "1.5"),
        ]);
        assert_eq!(config.tick_millis, 2000);
        assert_eq!(config.speed, 1);
        assert_eq!(config.starting_resources, ResourceGroup::new(200, 150, 100));
    }
}
