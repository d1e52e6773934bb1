//! Components that render the results of a legal document analysis.

mod compliance_flags;
mod dashboard;
mod extracted_clauses;
mod precedent_cases;
mod recommended_actions;
mod risk_score_card;

pub use compliance_flags::*;
pub use dashboard::*;
pub use extracted_clauses::*;
pub use precedent_cases::*;
pub use recommended_actions::*;
pub use risk_score_card::*;
