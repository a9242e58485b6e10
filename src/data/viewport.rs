//! Axis-limit bookkeeping: pan the view so a point stays inside a margin.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    #[error("Dimension '{0}' not supported")]
    UnsupportedAxis(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

impl FromStr for Axis {
    type Err = ViewportError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            other => Err(ViewportError::UnsupportedAxis(other.to_string())),
        }
    }
}

/// Visible range along one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// How close a followed point may get to the edge of the view.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanPolicy {
    /// Fraction of the axis span kept free between the point and each edge.
    pub margin: f64,
    /// Keep the point centered (margin of one half).
    pub centered: bool,
}

impl Default for PanPolicy {
    fn default() -> Self {
        Self {
            margin: 0.1,
            centered: false,
        }
    }
}

impl PanPolicy {
    pub fn centered() -> Self {
        Self {
            centered: true,
            ..Self::default()
        }
    }

    /// Margin fraction in use, at most one half.
    pub fn effective_margin(&self) -> f64 {
        if self.centered {
            0.5
        } else {
            self.margin.clamp(0.0, 0.5)
        }
    }
}

/// Relative slack absorbing the rounding of a previous shift.
const SHIFT_TOLERANCE: f64 = 16.0 * f64::EPSILON;

/// Shift `limits` so `value` is at least the policy margin away from both
/// edges. The span is preserved.
///
/// Limits produced by an earlier shift for the same value are left alone, so
/// repeated calls settle after the first one.
pub fn adjust_axis(limits: AxisLimits, value: f64, policy: &PanPolicy) -> AxisLimits {
    let AxisLimits { min, max } = limits;
    let w = limits.span();
    let margin = policy.effective_margin() * w;
    let tol = SHIFT_TOLERANCE * min.abs().max(max.abs()).max(value.abs());
    let mut out = limits;
    if value - margin < min - tol {
        out = AxisLimits::new(value - margin, value - margin + w);
    }
    if value + margin > max + tol {
        out = AxisLimits::new(value + margin - w, value + margin);
    }
    out
}

/// Visible data rectangle of a plot.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    pub x: AxisLimits,
    pub y: AxisLimits,
}

impl Viewport {
    pub fn new(x: AxisLimits, y: AxisLimits) -> Self {
        Self { x, y }
    }

    pub fn from_min_max(min: [f64; 2], max: [f64; 2]) -> Self {
        Self {
            x: AxisLimits::new(min[0], max[0]),
            y: AxisLimits::new(min[1], max[1]),
        }
    }

    pub fn min(&self) -> [f64; 2] {
        [self.x.min, self.y.min]
    }

    pub fn max(&self) -> [f64; 2] {
        [self.x.max, self.y.max]
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisLimits {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// Pan a single axis. Returns whether the limits changed.
    pub fn adjust(&mut self, axis: Axis, value: f64, policy: &PanPolicy) -> bool {
        let limits = self.axis_mut(axis);
        let adjusted = adjust_axis(*limits, value, policy);
        let changed = adjusted != *limits;
        *limits = adjusted;
        changed
    }

    /// Like [`Viewport::adjust`] with the axis given by name (`"x"` or `"y"`).
    pub fn adjust_named(
        &mut self,
        dim: &str,
        value: f64,
        policy: &PanPolicy,
    ) -> Result<bool, ViewportError> {
        let axis: Axis = dim.parse()?;
        Ok(self.adjust(axis, value, policy))
    }

    /// Pan both axes independently to keep `point` in view without zooming.
    pub fn keep_in_view(&mut self, point: [f64; 2], policy: &PanPolicy) -> bool {
        let moved_x = self.adjust(Axis::X, point[0], policy);
        let moved_y = self.adjust(Axis::Y, point[1], policy);
        moved_x || moved_y
    }
}
