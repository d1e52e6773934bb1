pub mod badge;
pub mod card;
pub mod progress;

pub use badge::*;
pub use card::*;
pub use progress::*;
