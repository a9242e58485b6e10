//! pointbrowse crate root: re-exports and module wiring.
//!
//! Two interactive widgets for exploring scatter plots built on egui/egui_plot:
//! - [`LassoSelector`]: draw a polygon to select the points inside it
//! - [`PointNavigator`]: click or use the arrow keys to browse single points
//!
//! The widget state machines in [`data`] are independent of egui; the
//! [`panels`] adapters turn plot responses into their input events.
//! - `data`: widget state, point set, viewport bookkeeping, hotkeys
//! - `config`: user configuration and YAML persistence
//! - `panels`: egui adapters (scatter plot, record and selection panels)
//! - `app`: standalone eframe application

pub mod app;
pub mod config;
pub mod data;
pub mod panels;

pub use app::{run_browser, BrowserApp};
pub use config::{BrowserConfig, ConfigError, FeatureFlags};
pub use data::arbiter::{GestureArbiter, OwnerId};
pub use data::input::{Direction, EventResponse};
pub use data::lasso::{LassoSelector, LassoStyle};
pub use data::navigator::{FocusCircle, NavState, NavigatorSettings, PointNavigator};
pub use data::points::{ColumnConfig, DataPoint, PointSet, PointsError};
pub use data::viewport::{adjust_axis, Axis, AxisLimits, PanPolicy, Viewport, ViewportError};
pub use panels::ScatterPanel;
