mod content;
mod grid;
mod header;
mod nav_button;
mod sidebar;

pub use content::*;
pub use grid::*;
pub use header::*;
pub use nav_button::*;
pub use sidebar::*;
