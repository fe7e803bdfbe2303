//! State payload for a networked light.
//!
//! A [`LightState`] serializes to the JSON body a bridge expects on a state
//! update, e.g. `{"on":true,"bri":255,"xy":[0.3005,0.5764],"transitiontime":5}`.
//! Fields that do not apply are omitted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use octohue_core::ColorResult;

use crate::device::hex_to_xy;
use crate::engine::ConversionEngine;

/// Brightness used when an illuminating request gives none.
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Transition time in tenths of a second.
pub const DEFAULT_TRANSITION_TIME: u16 = 5;

/// Desired light state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    /// Power.
    pub on: bool,
    /// Brightness, 0-255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    /// CIE xy chromaticity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xy: Option<[f64; 2]>,
    /// Transition time in tenths of a second.
    pub transitiontime: u16,
}

impl LightState {
    /// Power-off state.
    pub fn off(transitiontime: u16) -> Self {
        Self {
            on: false,
            bri: None,
            xy: None,
            transitiontime,
        }
    }
}

/// Parameters for [`build_state`].
#[derive(Debug, Clone, PartialEq)]
pub struct StateRequest<'a> {
    /// `#RRGGBB` colour, if the colour should change.
    pub colour: Option<&'a str>,
    /// Brightness; falls back to `default_brightness`.
    pub bri: Option<u8>,
    /// Brightness used when `bri` is not given.
    pub default_brightness: u8,
    /// Transition time in tenths of a second.
    pub transitiontime: u16,
    /// Turn the light on (true) or off (false).
    pub illuminate: bool,
}

impl Default for StateRequest<'_> {
    fn default() -> Self {
        Self {
            colour: None,
            bri: None,
            default_brightness: DEFAULT_BRIGHTNESS,
            transitiontime: DEFAULT_TRANSITION_TIME,
            illuminate: true,
        }
    }
}

/// Builds the state payload for a request.
///
/// Illuminating requests carry a brightness and, when a colour is given,
/// its xy chromaticity. Non-illuminating requests carry only power and
/// transition time.
///
/// ```rust
/// use octohue_color::{build_state, ConversionEngine, StateRequest};
///
/// let engine = ConversionEngine::default();
/// let state = build_state(
///     &engine,
///     &StateRequest { colour: Some("#FF0000"), ..Default::default() },
/// )
/// .unwrap();
/// assert_eq!(state.bri, Some(255));
/// assert!((state.xy.unwrap()[0] - 0.64).abs() < 1e-9);
/// ```
pub fn build_state(engine: &ConversionEngine, request: &StateRequest<'_>) -> ColorResult<LightState> {
    if !request.illuminate {
        return Ok(LightState::off(request.transitiontime));
    }
    let xy = match request.colour {
        Some(hex) => Some(hex_to_xy(engine, hex)?.to_array()),
        None => None,
    };
    let state = LightState {
        on: true,
        bri: Some(request.bri.unwrap_or(request.default_brightness)),
        xy,
        transitiontime: request.transitiontime,
    };
    debug!(?state, "Built light state");
    Ok(state)
}

/// State that flips a light: off when it is on, on at `default_brightness`
/// when it is off.
pub fn toggle_state(is_on: bool, default_brightness: u8) -> LightState {
    if is_on {
        LightState::off(DEFAULT_TRANSITION_TIME)
    } else {
        LightState {
            on: true,
            bri: Some(default_brightness),
            xy: None,
            transitiontime: DEFAULT_TRANSITION_TIME,
        }
    }
}
