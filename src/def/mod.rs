// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Label under which the die record is exposed next to the cell index.
pub const DIE_INFO_LABEL: &str = "INFO";

/// Record shape of a COMPONENTS line, inferred from its token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Standard logic cell: `- id type + PLACED ( x y ) orient`
    Logic,
    /// Filler, endcap or tapcell carrying three extra placement qualifiers
    Misc,
}

impl CellKind {
    /// Shift applied to the coordinate and orientation token indices.
    pub fn offset(self) -> usize {
        match self {
            CellKind::Logic => 0,
            CellKind::Misc => 3,
        }
    }

    pub fn token_count(self) -> usize {
        10 + self.offset()
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellKind::Logic => write!(f, "LOGIC"),
            CellKind::Misc => write!(f, "MISC"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefCell {
    pub id: String,
    pub cell_type: String,
    pub x: f64, // design units
    pub y: f64,
    pub orient: String, // N, S, E, W, FN, FS, FE, FW
    pub kind: CellKind,
}

impl DefCell {
    /// Location in microns for the given design unit scale.
    pub fn location_microns(&self, design_units: f64) -> Option<(f64, f64)> {
        if design_units > 0.0 {
            Some((self.x / design_units, self.y / design_units))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefDieInfo {
    pub design: String,
    pub die_x: f64,
    pub die_y: f64,
    pub design_units: f64, // database units per micron
}

impl DefDieInfo {
    /// Die size in microns, if the unit scale is known.
    pub fn size_microns(&self) -> Option<(f64, f64)> {
        if self.design_units > 0.0 {
            Some((
                self.die_x / self.design_units,
                self.die_y / self.design_units,
            ))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Def {
    pub cells: HashMap<String, DefCell>,
    pub die_info: Option<DefDieInfo>,
}

impl Def {
    /// Result used when the input could not be opened: no cells, no die entry.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.die_info.is_none()
    }

    pub fn cell(&self, id: &str) -> Option<&DefCell> {
        self.cells.get(id)
    }

    /// The die record paired with its fixed label.
    pub fn die_entry(&self) -> Option<(&'static str, &DefDieInfo)> {
        self.die_info.as_ref().map(|die| (DIE_INFO_LABEL, die))
    }

    /// Distinct cell type names, sorted.
    pub fn cell_types(&self) -> Vec<&str> {
        self.cells
            .values()
            .map(|cell| cell.cell_type.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn cells_of_kind(&self, kind: CellKind) -> impl Iterator<Item = &DefCell> {
        self.cells.values().filter(move |cell| cell.kind == kind)
    }
}

pub mod parser;
pub mod patch;
pub mod reader;
