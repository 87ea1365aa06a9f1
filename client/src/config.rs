//! Command line and config file handling.
//!
//! Values come from three layers, each overriding the previous one: built-in
//! defaults, the JSON file passed with `--config`, then the other command
//! line flags.

use crate::clock::Clock;
use clap::{App, Arg, ArgMatches};
use game::{prelude::*, Result};
use serde::{Deserialize, Serialize};
use std::{error, ffi::OsString, fmt, fs, path::Path, time::Duration};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Board size in cells, width first.
    pub grid_size: (usize, usize),

    /// Side of one cell in pixels.
    pub cell_size: f32,

    /// Delay between game ticks, e.g. `"100ms"`.
    #[serde(with = "delay")]
    pub tick_delay: Duration,

    /// Game rules.
    pub game: Settings,
}

impl Config {
    /// Default side of one cell in pixels.
    pub const CELL_SIZE: f32 = 20.0;

    /// Read a [`Config`] from a JSON file. Missing keys keep default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.display().to_string(), e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Parse a [`Config`] from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the configuration out of parsed command line arguments.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.value_of("config") {
            Some(path) => {
                log::debug!("Loading config from {}", path);
                Self::load(path)?
            }
            None => Self::default(),
        };
        config.apply_matches(matches)?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields with values given on the command line.
    fn apply_matches(&mut self, matches: &ArgMatches) -> Result<()> {
        if let Some(val) = matches.value_of("grid_size") {
            self.grid_size = parse_grid_size(val)?;
        }
        if let Some(val) = matches.value_of("cell_size") {
            self.cell_size = val
                .parse()
                .map_err(|_| ConfigError::CellSize(val.to_string()))?;
        }
        if let Some(val) = matches.value_of("delay") {
            self.tick_delay = val.parse::<humantime::Duration>()?.into();
        }
        if let Some(val) = matches.value_of("direction") {
            self.game.snake_direction = match val {
                "random" => None,
                dir => Some(dir.parse()?),
            };
        }
        if matches.is_present("allow_reverse") {
            self.game.allow_reverse = true;
        }
        if let Some(val) = matches.value_of("seed") {
            let seed = val.parse().map_err(|_| ConfigError::Seed(val.to_string()))?;
            self.game.seed = Some(seed);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(self.cell_size.is_finite() && self.cell_size >= 1.0) {
            return Err(Box::new(ConfigError::CellSize(self.cell_size.to_string())));
        }
        Grid::new(self.grid_size)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: GameData::GRID_SIZE,
            cell_size: Self::CELL_SIZE,
            tick_delay: Clock::DELAY,
            game: Settings::default(),
        }
    }
}

/// Parse `WxH` grid size.
fn parse_grid_size(val: &str) -> Result<(usize, usize)> {
    let invalid = || ConfigError::GridSize(val.to_string());
    let (w, h) = val.split_once(|c| c == 'x' || c == 'X').ok_or_else(invalid)?;
    let w = w.trim().parse().map_err(|_| invalid())?;
    let h = h.trim().parse().map_err(|_| invalid())?;
    Ok((w, h))
}

/// Describe and parse command line arguments.
pub fn init_cli<I, T>(args: I) -> clap::Result<ArgMatches<'static>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    App::new("Snake")
        .about("Classic snake game on a wrapping board")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("JSON config file. Other flags override its values"),
        )
        .arg(
            Arg::with_name("grid_size")
                .short("g")
                .long("grid-size")
                .value_name("SIZE")
                .takes_value(true)
                .help(&format!(
                    "Specifies game grid size in cells. Default is {}x{}",
                    GameData::GRID_SIZE.0,
                    GameData::GRID_SIZE.1
                )),
        )
        .arg(
            Arg::with_name("cell_size")
                .short("s")
                .long("cell-size")
                .value_name("PIXELS")
                .takes_value(true)
                .help(&format!(
                    "Specifies side of one cell in pixels. Default is {}",
                    Config::CELL_SIZE
                )),
        )
        .arg(
            Arg::with_name("delay")
                .short("d")
                .long("delay")
                .value_name("DURATION")
                .takes_value(true)
                .help(&format!(
                    "Specifies delay between game ticks. Default is {}",
                    humantime::format_duration(Clock::DELAY)
                )),
        )
        .arg(
            Arg::with_name("direction")
                .long("direction")
                .value_name("DIRECTION")
                .takes_value(true)
                .possible_values(&["up", "down", "left", "right", "random"])
                .help("Direction of the snake after every reset. Default is random"),
        )
        .arg(
            Arg::with_name("allow_reverse")
                .long("allow-reverse")
                .help("Let the snake turn back into itself"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("NUMBER")
                .takes_value(true)
                .help("Seed for apple positions and directions"),
        )
        .arg(
            Arg::with_name("log_level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .takes_value(true)
                .help("Log level, overridden by the LOG_LEVEL variable"),
        )
        .get_matches_from_safe(args)
}

/// Error returned if configuration values are invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Config file with path specified in the first argument can't be read.
    Read(String, String),

    /// Grid size isn't in `WxH` form.
    GridSize(String),

    /// Cell size isn't a number of pixels.
    CellSize(String),

    /// Seed isn't an unsigned integer.
    Seed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path, e) => write!(f, "can't read config file {}: {}", path, e),
            Self::GridSize(val) => write!(f, "grid size {:?} is not like 32x24", val),
            Self::CellSize(val) => write!(f, "cell size {:?} is not a positive number of pixels", val),
            Self::Seed(val) => write!(f, "seed {:?} is not an unsigned integer", val),
        }
    }
}

impl error::Error for ConfigError {}

/// (De)serialize [`Duration`] in [`humantime`] format.
mod delay {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(delay: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&humantime::format_duration(*delay))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(d)?;
        humantime::parse_duration(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn matches(args: &[&str]) -> ArgMatches<'static> {
        let mut argv = vec!["snake"];
        argv.extend_from_slice(args);
        init_cli(argv).unwrap()
    }

    #[test]
    fn defaults() -> Result<()> {
        let config = Config::from_matches(&matches(&[]))?;
        assert_eq!(config, Config::default());
        assert_eq!(config.grid_size, (32, 24));
        assert_eq!(config.tick_delay, Duration::from_millis(100));
        assert_eq!(config.game.snake_direction, None);
        Ok(())
    }

    #[test]
    fn cli_overrides() -> Result<()> {
        let config = Config::from_matches(&matches(&[
            "-g", "10x12", "-s", "8", "-d", "50ms", "--direction", "left", "--allow-reverse",
            "--seed", "4",
        ]))?;
        assert_eq!(config.grid_size, (10, 12));
        assert_eq!(config.cell_size, 8.0);
        assert_eq!(config.tick_delay, Duration::from_millis(50));
        assert_eq!(config.game.snake_direction, Some(Direction::Left));
        assert!(config.game.allow_reverse);
        assert_eq!(config.game.seed, Some(4));
        Ok(())
    }

    #[test]
    fn bad_cli_values() {
        assert!(Config::from_matches(&matches(&["-g", "10"])).is_err());
        assert!(Config::from_matches(&matches(&["-g", "0x5"])).is_err());
        assert!(Config::from_matches(&matches(&["-g", "100000x100000"])).is_err());
        assert!(Config::from_matches(&matches(&["-s", "tiny"])).is_err());
        assert!(Config::from_matches(&matches(&["-d", "soon"])).is_err());
        assert!(Config::from_matches(&matches(&["--seed", "many"])).is_err());
        assert!(init_cli(vec!["snake", "--direction", "north"]).is_err());
    }

    #[test]
    fn grid_size_forms() {
        assert_eq!(parse_grid_size("32x24").unwrap(), (32, 24));
        assert_eq!(parse_grid_size("5X7").unwrap(), (5, 7));
        assert!(parse_grid_size("5x").is_err());
        assert!(parse_grid_size("axb").is_err());
    }

    #[test]
    fn partial_json() -> Result<()> {
        let config = Config::from_json(
            r#"{"tick_delay": "50ms", "game": {"snake_direction": "up", "snake_increment_size": 2}}"#,
        )?;
        assert_eq!(config.tick_delay, Duration::from_millis(50));
        assert_eq!(config.grid_size, GameData::GRID_SIZE);
        assert_eq!(config.game.snake_direction, Some(Direction::Up));
        assert_eq!(config.game.snake_increment_size, 2);
        assert!(!config.game.allow_reverse);
        Ok(())
    }

    #[test]
    fn json_round_trip() -> Result<()> {
        let config = Config {
            grid_size: (7, 9),
            tick_delay: Duration::from_millis(250),
            ..Default::default()
        };
        let json = serde_json::to_string(&config)?;
        assert!(json.contains("\"250ms\""));
        assert_eq!(Config::from_json(&json)?, config);
        Ok(())
    }

    #[test]
    fn invalid_json() {
        assert!(Config::from_json(r#"{"tick_delay": "never"}"#).is_err());
        assert!(Config::from_json(r#"{"grid_size": [0, 3]}"#).is_err());
        assert!(Config::from_json(r#"{"cell_size": 0}"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn file_then_cli() -> Result<()> {
        let path = std::env::temp_dir().join(format!("snake-config-{}.json", std::process::id()));
        let mut file = fs::File::create(&path)?;
        write!(file, r#"{{"grid_size": [20, 20], "cell_size": 10}}"#)?;
        drop(file);

        let path_arg = path.to_str().unwrap();
        let config = Config::from_matches(&matches(&["-c", path_arg, "-s", "15"]));
        fs::remove_file(&path)?;
        let config = config?;

        assert_eq!(config.grid_size, (20, 20));
        assert_eq!(config.cell_size, 15.0);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
