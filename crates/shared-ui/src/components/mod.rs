pub mod badge;
pub mod button;
pub mod card;
pub mod modal;
pub mod page_header;
pub mod search_input;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use modal::*;
pub use page_header::*;
pub use search_input::*;
