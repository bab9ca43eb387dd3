// Contact module - form state, validation and submission backends
mod controller;
mod error;
mod handlers;
mod submitter;
mod types;
mod validation;

pub use controller::{CompletionCallback, ContactForm, FormView};
pub use error::{SubmitError, ValidationError};
pub use handlers::{ContactResponse, api_contact_handler, contact_form_handler};
pub use submitter::{ContactSubmitter, DynContactSubmitter, EmailContactSubmitter};
pub use types::*;
pub use validation::{is_valid_email, validate};

#[cfg(test)]
mod tests;
