//! DEF Cell Index Library
//!
//! This library reads DEF files and indexes their placed cells by instance
//! name, together with the die size and design unit scale.

pub mod config;
pub mod def;
pub mod export;

// Re-export commonly used types
pub use config::{OpenFailurePolicy, ReaderConfig};
pub use def::parser::{parse_def, ParseError};
pub use def::patch::{GridError, PatchGrid};
pub use def::reader::DefReader;
pub use def::{CellKind, Def, DefCell, DefDieInfo, DIE_INFO_LABEL};
