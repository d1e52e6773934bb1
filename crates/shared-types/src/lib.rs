pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod requests;

pub use analysis::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use requests::*;
