pub mod colormap;
pub use colormap::*;

pub mod font;
pub use font::*;

pub mod heatmap;
pub use heatmap::*;

pub mod matrix;
pub use matrix::*;
