//! Output formats for parsed KIF
//!
//! Serializers over the top-level node list, resolved by name through [FormatRegistry]:
//! - kif: canonical S-expression reprint
//! - treeviz: tree view with kinds and ranges
//! - json: the AST as JSON

pub mod json;
pub mod kif;
pub mod registry;
pub mod treeviz;

pub use json::JsonFormatter;
pub use kif::{to_kif, to_kif_str, KifFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
