pub use builder::build_tree;
pub use result::{BuildErr, BuildErrKind, BuildResult, Malformed};

mod builder;
mod result;
