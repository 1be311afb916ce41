// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! COMPONENT line classifier for DEF files
//!
//! A component line is recognised purely by its token count:
//!
//! ```text
//! - u1 INVX1 + PLACED ( 100 200 ) N                       10 tokens, logic
//! - FILLER_1 FILL1 + SOURCE DIST + PLACED ( 100 200 ) N   13 tokens, misc
//! ```

use super::common::number_field;
use super::{ParseError, ParseResult};
use crate::def::{CellKind, DefCell};

/// Infer the record shape of a component line from its token count.
pub fn classify(tokens: &[&str]) -> Option<CellKind> {
    match tokens.len() {
        13 => Some(CellKind::Misc),
        10 => Some(CellKind::Logic),
        _ => None,
    }
}

/// Build a cell record from one COMPONENTS line.
pub fn extract_cell(tokens: &[&str], line: usize) -> ParseResult<DefCell> {
    let kind = classify(tokens).ok_or(ParseError::MalformedRecord {
        line,
        found: tokens.len(),
    })?;
    let offset = kind.offset();

    Ok(DefCell {
        id: tokens[1].to_string(),
        cell_type: tokens[2].to_string(),
        x: number_field(tokens[6 + offset], "x", line)?,
        y: number_field(tokens[7 + offset], "y", line)?,
        orient: tokens[9 + offset].to_string(),
        kind,
    })
}
