//! Convert CSV into ordered records, reading from a local file, a URL or an
//! in-memory string.
//!
//! ```no_run
//! # async fn run() -> csvtojson::Result<()> {
//! let rows = csvtojson::convert("Date,Value\n3,4\n5,6").await?;
//! assert_eq!(rows[0].get("Value"), Some("4"));
//! println!("{}", rows.to_json_pretty().unwrap());
//! # Ok(())
//! # }
//! ```

mod application;
mod domain;
mod infrastructure;

pub use crate::application::use_cases::csv_converter::{
    convert, convert_file, convert_string, convert_url,
};
pub use crate::application::use_cases::source_resolver::classify;
pub use crate::application::{CsvConverter, SourceResolver};
pub use crate::domain::error::{AppError, Result};
pub use crate::domain::record::{Record, ResultSet};
pub use crate::domain::source::{Scheme, SourceKind, UrlTarget};
pub use crate::infrastructure::config::{ConverterConfig, ENV_PREFIX};
pub use crate::infrastructure::csv::{parse, tokenize_row};
pub use crate::infrastructure::encoding::decode_text;
pub use crate::infrastructure::storage::{FileStore, LocalFileStore};
pub use crate::infrastructure::transport::{HttpTransport, ReqwestTransport};
