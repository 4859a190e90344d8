//! Extract the plain text of a PDF document, page by page, and write it to a
//! text (or JSON) file.

pub mod driver;
pub mod error;
pub mod extract;
pub mod output;

pub use driver::{run, Config, Outcome, Report};
pub use error::{ErrorKind, ExtractError, Result};
pub use extract::{extract, extract_text, Backend, Extraction, PageText};
pub use output::OutputFormat;
