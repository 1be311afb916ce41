// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::def::{Def, DefCell};

#[derive(Debug, Serialize)]
pub struct CellCsvRecord<'a> {
    #[serde(rename = "Instance")]
    pub id: &'a str,
    #[serde(rename = "Cell")]
    pub cell_type: &'a str,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Orientation")]
    pub orient: &'a str,
    #[serde(rename = "Kind")]
    pub kind: String,
}

fn cell_to_csv_record(cell: &DefCell) -> CellCsvRecord<'_> {
    CellCsvRecord {
        id: &cell.id,
        cell_type: &cell.cell_type,
        x: cell.x,
        y: cell.y,
        orient: &cell.orient,
        kind: cell.kind.to_string(),
    }
}

/// Export the cell index to a CSV file, one row per cell sorted by instance name
pub fn export_cells_to_csv<P: AsRef<Path>>(
    def: &Def,
    file_path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(file_path)?;
    let mut writer = Writer::from_writer(file);

    let mut cells: Vec<&DefCell> = def.cells.values().collect();
    cells.sort_by(|a, b| a.id.cmp(&b.id));

    for cell in cells {
        writer.serialize(cell_to_csv_record(cell))?;
    }

    writer.flush()?;
    Ok(())
}
