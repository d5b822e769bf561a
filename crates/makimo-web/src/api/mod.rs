mod submit;

pub use submit::{SubmitError, submit_address};
