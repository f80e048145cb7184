pub mod config;
pub mod error;
pub mod feature;
pub mod glyph;
pub mod resource;
pub mod selection;
pub mod support;

pub use config::*;
pub use error::*;
pub use feature::*;
pub use glyph::*;
pub use resource::*;
pub use selection::*;
pub use support::*;
