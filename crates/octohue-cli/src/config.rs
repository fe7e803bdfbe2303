//! Event-to-light configuration.
//!
//! Loaded from YAML:
//!
//! ```yaml
//! default_brightness: 200
//! transition_time: 5
//! events:
//!   - event: PrintDone
//!     colour: "#33FF36"
//!     delay: 10
//!   - event: Disconnected
//!     turnoff: true
//! ```
//!
//! Missing keys fall back to [`Config::default`].

use std::path::Path;

use anyhow::{Context, Result};
use octohue_color::light::{DEFAULT_BRIGHTNESS, DEFAULT_TRANSITION_TIME};
use octohue_color::{ConversionEngine, LightState, StateRequest, build_state};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brightness for events that give none.
    pub default_brightness: u8,
    /// Transition time in tenths of a second.
    pub transition_time: u16,
    /// Event mappings, first match wins.
    pub events: Vec<EventMapping>,
}

/// What a printer event does to the light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMapping {
    /// Printer event name, e.g. `PrintDone`.
    pub event: String,
    /// `#RRGGBB`; empty means no colour change.
    #[serde(default)]
    pub colour: Option<String>,
    /// Overrides the default brightness. A blank string means none.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub brightness: Option<u8>,
    /// Seconds to wait before applying.
    #[serde(default)]
    pub delay: u32,
    /// Turn the light off instead of on.
    #[serde(default)]
    pub turnoff: bool,
}

/// Reads an optional brightness written either as a number or as a
/// string, where `""` stands for "not set".
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u8),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Num(n)) => Ok(Some(n)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse().map(Some).map_err(|_| {
                serde::de::Error::custom(format!("invalid brightness '{text}', expected 0-255"))
            })
        }
    }
}

impl EventMapping {
    fn lit(event: &str, colour: &str) -> Self {
        Self {
            event: event.to_string(),
            colour: Some(colour.to_string()),
            brightness: Some(DEFAULT_BRIGHTNESS),
            delay: 0,
            turnoff: false,
        }
    }

    fn off(event: &str) -> Self {
        Self {
            event: event.to_string(),
            colour: None,
            brightness: None,
            delay: 0,
            turnoff: true,
        }
    }

    /// Colour with blank strings treated as absent.
    pub fn colour(&self) -> Option<&str> {
        self.colour.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// Light state this mapping produces.
    pub fn state(&self, engine: &ConversionEngine, config: &Config) -> Result<LightState> {
        let request = StateRequest {
            colour: self.colour(),
            bri: self.brightness,
            default_brightness: config.default_brightness,
            transitiontime: config.transition_time,
            illuminate: !self.turnoff,
        };
        build_state(engine, &request)
            .with_context(|| format!("Invalid colour for event {}", self.event))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_brightness: DEFAULT_BRIGHTNESS,
            transition_time: DEFAULT_TRANSITION_TIME,
            events: vec![
                EventMapping::lit("Connected", "#FFFFFF"),
                EventMapping::off("Disconnected"),
                EventMapping::lit("PrintStarted", "#FFFFFF"),
                EventMapping::lit("PrintResumed", "#FFFFFF"),
                EventMapping::lit("PrintDone", "#33FF36"),
                EventMapping::lit("PrintFailed", "#FF0000"),
            ],
        }
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), events = config.events.len(), "Loaded config");
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads `path` when given, the built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Mapping for `event`, matched case-sensitively.
    pub fn event(&self, event: &str) -> Option<&EventMapping> {
        self.events.iter().find(|m| m.event == event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_mirror_first_run() {
        let config = Config::default();
        assert_eq!(config.default_brightness, 255);
        assert_eq!(config.events.len(), 6);
        assert_eq!(config.event("PrintDone").unwrap().colour(), Some("#33FF36"));
        assert!(config.event("Disconnected").unwrap().turnoff);
        assert!(config.event("printdone").is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml_str("default_brightness: 100\n").unwrap();
        assert_eq!(config.default_brightness, 100);
        assert_eq!(config.transition_time, 5);
        assert_eq!(config.events, Config::default().events);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "events:\n  - event: PrintPaused\n    colour: '#0000FF'\n    delay: 30\n  - event: Shutdown\n    colour: ''\n    turnoff: true\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.events.len(), 2);
        let paused = config.event("PrintPaused").unwrap();
        assert_eq!(paused.delay, 30);
        assert_eq!(paused.brightness, None);
        assert_eq!(config.event("Shutdown").unwrap().colour(), None);
    }

    #[test]
    fn test_blank_brightness_is_unset() {
        let yaml = "events:\n  - event: Disconnected\n    colour: ''\n    brightness: \"\"\n    turnoff: true\n  - event: PrintDone\n    brightness: '120'\n  - event: PrintFailed\n    brightness: 90\n  - event: PrintStarted\n    brightness: null\n";
        let config = Config::from_yaml_str(yaml).unwrap();

        let off = config.event("Disconnected").unwrap();
        assert_eq!(off.brightness, None);
        assert_eq!(off.colour(), None);
        assert_eq!(off.state(&ConversionEngine::default(), &config).unwrap(), LightState::off(5));
        assert_eq!(config.event("PrintDone").unwrap().brightness, Some(120));
        assert_eq!(config.event("PrintFailed").unwrap().brightness, Some(90));
        assert_eq!(config.event("PrintStarted").unwrap().brightness, None);

        let err = Config::from_yaml_str("events:\n  - event: X\n    brightness: bright\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_mapping_state() {
        let engine = ConversionEngine::default();
        let config = Config {
            default_brightness: 180,
            ..Config::default()
        };

        let done = config.event("PrintDone").unwrap().state(&engine, &config).unwrap();
        assert!(done.on);
        assert_eq!(done.bri, Some(255));
        assert!(done.xy.is_some());

        let off = config.event("Disconnected").unwrap().state(&engine, &config).unwrap();
        assert_eq!(off, LightState::off(5));

        let custom = EventMapping {
            event: "Custom".into(),
            colour: Some(String::new()),
            brightness: None,
            delay: 0,
            turnoff: false,
        };
        let state = custom.state(&engine, &config).unwrap();
        assert_eq!(state.bri, Some(180));
        assert_eq!(state.xy, None);
    }
}
