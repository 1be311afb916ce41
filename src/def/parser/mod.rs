// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Line-oriented DEF scanner
//!
//! Each input line is tokenized on whitespace and handled on its own: header
//! lines (`DESIGN`, `DIEAREA`, `UNITS`) update the die record, and lines
//! between `COMPONENTS` and `END COMPONENTS` become cell records.

pub mod common;
pub mod component;

use std::collections::HashMap;
use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use self::common::{header_token, is_section_end, number_field, tokenize};
use super::{Def, DefCell, DefDieInfo};

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that abort a DEF parse
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: read failed: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed component record with {found} tokens, expected 10 or 13")]
    MalformedRecord { line: usize, found: usize },

    #[error("line {line}: malformed {keyword} header, needs {needed} tokens but found {found}")]
    MalformedHeader {
        line: usize,
        keyword: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("line {line}: invalid number '{text}' in {field} field")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        text: String,
    },
}

/// Running state of a single parse.
///
/// A scanner is created per parse and consumed by [`SectionScanner::finish`],
/// so nothing carries over from one file to the next.
#[derive(Debug, Default)]
pub struct SectionScanner {
    in_components: bool,
    design_captured: bool,
    line: usize,
    die_info: DefDieInfo,
    cells: HashMap<String, DefCell>,
}

impl SectionScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_components(&self) -> bool {
        self.in_components
    }

    /// Feed the next input line.
    pub fn scan_line(&mut self, line: &str) -> ParseResult<()> {
        self.line += 1;

        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(());
        }

        self.scan_header(&tokens)?;

        // Every line inside the section is a record, header keywords included
        if self.in_components && tokens[0] != "COMPONENTS" {
            let cell = component::extract_cell(&tokens, self.line)?;
            self.cells.insert(cell.id.clone(), cell);
        }

        Ok(())
    }

    /// Header capture and section delimiters.
    fn scan_header(&mut self, tokens: &[&str]) -> ParseResult<()> {
        match tokens[0] {
            "DESIGN" if !self.design_captured => {
                let name = header_token(tokens, 1, "DESIGN", self.line)?;
                debug!("Design name: {name}");
                self.die_info.design = name.to_string();
                self.design_captured = true;
            }
            "DIEAREA" => {
                let x = header_token(tokens, 6, "DIEAREA", self.line)?;
                let y = header_token(tokens, 7, "DIEAREA", self.line)?;
                self.die_info.die_x = number_field(x, "die x", self.line)?;
                self.die_info.die_y = number_field(y, "die y", self.line)?;
                debug!(
                    "Die size: {} x {}",
                    self.die_info.die_x, self.die_info.die_y
                );
            }
            "UNITS" => {
                let scale = header_token(tokens, 3, "UNITS", self.line)?;
                self.die_info.design_units = number_field(scale, "units", self.line)?;
                debug!("Design units: {}", self.die_info.design_units);
            }
            "COMPONENTS" if tokens.len() > 1 => {
                debug!("Entering COMPONENTS section at line {}", self.line);
                self.in_components = true;
            }
            "END" if is_section_end(tokens, "COMPONENTS") => {
                debug!("Leaving COMPONENTS section at line {}", self.line);
                self.in_components = false;
            }
            _ => {}
        }

        Ok(())
    }

    /// Freeze the accumulated state into a parse result.
    pub fn finish(self) -> Def {
        info!(
            "DEF scanned: {} lines, {} cells, design '{}'",
            self.line,
            self.cells.len(),
            self.die_info.design
        );
        Def {
            cells: self.cells,
            die_info: Some(self.die_info),
        }
    }
}

/// Parse DEF text held in memory.
pub fn parse_def(input: &str) -> ParseResult<Def> {
    let mut scanner = SectionScanner::new();
    for line in input.lines() {
        scanner.scan_line(line)?;
    }
    Ok(scanner.finish())
}
