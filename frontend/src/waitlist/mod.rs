pub mod counter;
pub mod form;
pub mod service;

pub use form::{Field, FormAction, SignupFlow, SubmissionStatus, WaitlistFormModel};
pub use service::{SupabaseWaitlist, WaitlistService};
