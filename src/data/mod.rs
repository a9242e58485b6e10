pub mod arbiter;
pub mod export;
pub mod hotkeys;
pub mod input;
pub mod lasso;
pub mod navigator;
pub mod picking;
pub mod points;
pub mod polygon;
pub mod viewport;
