pub mod extract;
pub mod input;
pub mod policy;
pub mod reconstruct;
pub mod summarize;

pub use policy::ShiftPolicy;
pub use reconstruct::{organized_rows, reconstruct};
pub use summarize::{SummaryMode, summarize, summarize_window};
