pub mod form;
pub mod mailer;
pub mod submission;

pub use form::{FormState, Ticket};
pub use mailer::{submit, EmailJs, EmailJsConfig, SubmitError};
pub use submission::Field;
