mod args;
mod batch;
mod docstring;
mod readme;

pub use args::{Args, Command};
pub use batch::run_batch;
pub use docstring::run_docstring;
pub use readme::run_readme;
