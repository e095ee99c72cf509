//! Inline yUML diagram blocks for text documents.
//!
//! This crate rewrites `[yuml` blocks embedded in a document into image
//! references to a yUML rendering service:
//! - `YumlFilter` scans the document and splices in the generated markup
//! - Header options are validated against a static schema with defaults
//! - Recoverable problems are reported to a `ProblemSink` instead of failing
//!
//! No network I/O happens here. The service is only referenced by URL.
//!
//! # Architecture
//!
//! The crate is organized into modules:
//! - [`schema`]: Option table (allowed values, required flag, defaults)
//! - `options`: Header tokenizing and validation (`OptionSet`, `Validated`)
//! - `block`: Locating `[yuml` ... `]` regions
//! - `content`: Body line collection
//! - `render`: URL and `<img>` markup generation
//! - `processor`: The scan loop (`YumlFilter`)
//! - [`help`]: Reference text generated from the schema
//!
//! # Example
//!
//! ```
//! use yuml_filter::YumlFilter;
//!
//! let text = "Model:\n[yuml diagram:class dir:TD\n[Customer]->[Order]\n]\n";
//! let output = YumlFilter::new("http://yuml.me").filter(text);
//!
//! assert_eq!(
//!     output.text,
//!     "Model:\n<img src=\"http://yuml.me/diagram/plain;dir:TD;scale:100/class/[Customer]->[Order]\" />\n"
//! );
//! ```

mod block;
mod consts;
mod content;
pub mod help;
mod options;
mod problem;
mod processor;
mod render;
pub mod schema;

pub use consts::DEFAULT_SERVICE_URL;
pub use options::{OptionSet, Validated};
pub use problem::{Problem, ProblemKind, ProblemSink, TracingSink};
pub use processor::{FilterOutput, InvalidBlocks, YumlFilter};
pub use render::{diagram_url, render_markup};
