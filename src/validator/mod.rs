pub use result::{ValidationErr, ValidationErrKind, ValidationResult};
pub use validator::{is_blank, is_valid, validate};

mod result;
mod validator;
