// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Square placement patches over the die
//!
//! Cells are binned by their location in microns so that a region of the die
//! can be inspected or benchmarked on its own.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Def, DefCell};

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("no die information available")]
    MissingDieInfo,
    #[error("design units must be positive, got {0}")]
    InvalidDesignUnits(f64),
    #[error("patch size must be positive, got {0}")]
    InvalidPatchSize(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchCell {
    pub id: String,
    pub x: f64, // microns
    pub y: f64,
    pub orient: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Patch {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Cells in this patch grouped by cell type
    pub cells: BTreeMap<String, Vec<PatchCell>>,
}

impl Patch {
    pub fn cell_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchGrid {
    pub patch_size: f64,
    pub columns: usize,
    pub rows: usize,
    /// Non-empty patches keyed by (row, column)
    pub patches: BTreeMap<(usize, usize), Patch>,
    pub out_of_bounds: usize,
}

impl PatchGrid {
    pub fn build(def: &Def, patch_size: f64) -> Result<Self, GridError> {
        if patch_size.is_nan() || patch_size <= 0.0 {
            return Err(GridError::InvalidPatchSize(patch_size));
        }
        let die = def.die_info.as_ref().ok_or(GridError::MissingDieInfo)?;
        let (die_x, die_y) = die
            .size_microns()
            .ok_or(GridError::InvalidDesignUnits(die.design_units))?;

        let columns = (die_x / patch_size).floor() as usize + 1;
        let rows = (die_y / patch_size).floor() as usize + 1;
        debug!("Patch grid: {columns} x {rows} patches of {patch_size} um");

        let mut grid = PatchGrid {
            patch_size,
            columns,
            rows,
            patches: BTreeMap::new(),
            out_of_bounds: 0,
        };

        for cell in def.cells.values() {
            // design_units > 0 was checked through size_microns()
            let Some((x, y)) = cell.location_microns(die.design_units) else {
                continue;
            };
            match grid.index_of(x, y) {
                Some(key) => grid.insert(key, cell, x, y),
                None => {
                    debug!("Cell {} at ({x}, {y}) um is outside the die", cell.id);
                    grid.out_of_bounds += 1;
                }
            }
        }

        if grid.out_of_bounds > 0 {
            warn!("{} cells fall outside the patch grid", grid.out_of_bounds);
        }

        Ok(grid)
    }

    /// (row, column) of the patch containing a point in microns.
    pub fn index_of(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if x.is_nan() || y.is_nan() || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.patch_size).floor() as usize;
        let row = (y / self.patch_size).floor() as usize;
        (row < self.rows && col < self.columns).then_some((row, col))
    }

    pub fn patch(&self, row: usize, col: usize) -> Option<&Patch> {
        self.patches.get(&(row, col))
    }

    pub fn cell_count(&self) -> usize {
        self.patches.values().map(Patch::cell_count).sum()
    }

    fn insert(&mut self, (row, col): (usize, usize), cell: &DefCell, x: f64, y: f64) {
        let size = self.patch_size;
        let patch = self.patches.entry((row, col)).or_insert_with(|| Patch {
            origin_x: col as f64 * size,
            origin_y: row as f64 * size,
            cells: BTreeMap::new(),
        });
        patch
            .cells
            .entry(cell.cell_type.clone())
            .or_default()
            .push(PatchCell {
                id: cell.id.clone(),
                x,
                y,
                orient: cell.orient.clone(),
            });
    }
}
