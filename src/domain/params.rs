//! Run parameters, loadable from JSON.
//!
//! Every field has a default matching the shipped demo scene, so `{}` is a
//! valid params document and partial documents override selectively.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("resolution must be at least 1 (got {0})")]
    ResolutionTooSmall(u32),
    #[error("width must be positive and finite (got {0})")]
    InvalidWidth(f32),
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f32 },
    #[error("ramp height bounds must be finite and distinct (got {min}..{max})")]
    InvalidRamp { min: f32, max: f32 },
    #[error("params document must be a JSON object")]
    NotAnObject,
    #[error("invalid params JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// RGB triple from a `0xRRGGBB` literal.
pub fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Linear height-to-color mapping bounds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRamp {
    pub height_min: f32,
    pub height_max: f32,
    pub color_min: Vec3,
    pub color_max: Vec3,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            height_min: -1.0,
            height_max: 3.0,
            color_min: Vec3::new(0.06, 0.25, 0.60),
            color_max: Vec3::new(0.80, 0.88, 0.95),
        }
    }
}

impl ColorRamp {
    #[inline]
    pub fn height_range(&self) -> f32 {
        self.height_max - self.height_min
    }

    /// Map a height offset to a color, per channel:
    /// `(h / range) * (max - min) + min`.
    ///
    /// The raw height is divided by the range, so `h = 0` lands on
    /// `color_min` rather than the ramp midpoint, and heights outside the
    /// bounds extrapolate without clamping.
    #[inline]
    pub fn color_for(&self, h: f32) -> Vec3 {
        let t = h / self.height_range();
        self.color_min + (self.color_max - self.color_min) * t
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Physical extent of the lattice.
    pub width: f32,
    /// Cells per side; the lattice has `resolution + 1` points per side.
    pub resolution: u32,
    /// Strength of the pressure-gradient response in the velocity update.
    pub gravity: f32,
    /// Linear velocity decay rate.
    pub damping: f32,
    /// Fixed integration step.
    pub time_step: f32,
    /// Height written to a poked cell and its linked neighbors.
    pub poke_power: f32,
    /// Uniform rest depth of the water column.
    pub rest_depth: f32,
    /// Interior cell color at construction, before the first recolor pass.
    pub surface_color: Vec3,
    /// Border cell color at construction.
    pub border_color: Vec3,
    pub ramp: ColorRamp,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            width: 50.0,
            resolution: 22,
            gravity: 0.1,
            damping: 1.0,
            time_step: 0.1,
            poke_power: 5.0,
            rest_depth: 0.0,
            surface_color: rgb(0xC53232),
            border_color: rgb(0xE9D55E),
            ramp: ColorRamp::default(),
        }
    }
}

impl SimParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.resolution < 1 {
            return Err(ParamsError::ResolutionTooSmall(self.resolution));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ParamsError::InvalidWidth(self.width));
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("time_step", self.time_step),
            ("poke_power", self.poke_power),
            ("rest_depth", self.rest_depth),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { name, value });
            }
        }
        let (min, max) = (self.ramp.height_min, self.ramp.height_max);
        if !min.is_finite() || !max.is_finite() || min == max {
            return Err(ParamsError::InvalidRamp { min, max });
        }
        Ok(())
    }

    /// Parse and validate a params document. Only JSON objects are
    /// accepted; sequences and scalars are rejected before any field
    /// decoding happens.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        let doc: serde_json::Value = serde_json::from_str(json)?;
        if !doc.is_object() {
            return Err(ParamsError::NotAnObject);
        }
        let params: SimParams = serde_json::from_value(doc)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
