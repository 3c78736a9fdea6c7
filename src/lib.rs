pub use crate::errors::{print_error, ErrorClass, ErrorKind, SourceContext, SyntaxError};
pub use crate::parser::{parse_expression, Outcome};

pub mod cli;
pub mod errors;
pub mod parser;
pub mod repl;
pub mod scanner;
