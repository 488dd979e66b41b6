pub mod lead_times;
pub mod submit;

pub use lead_times::run_lead_times;
pub use submit::run_submission;
