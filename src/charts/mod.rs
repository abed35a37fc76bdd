//! Charts module - Chart rendering and PNG export

mod renderer;

pub use renderer::{ChartRenderer, RenderOptions, PALETTE};
