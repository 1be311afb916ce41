// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::PathBuf;
use std::process;

use clap::Parser;
use def_cell_index::{
    export::export_cells_to_csv, CellKind, Def, DefReader, OpenFailurePolicy, PatchGrid,
    ReaderConfig,
};

#[derive(Parser)]
#[command(name = "def-cell-index")]
#[command(about = "Index placed cells and die metadata from a DEF file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the DEF file
    #[arg(value_name = "FILE", default_value = "design.def")]
    file: PathBuf,

    /// Fail when the file cannot be opened instead of reporting an empty design
    #[arg(long)]
    strict: bool,

    /// Write the cell index to a CSV file
    #[arg(long, value_name = "CSV")]
    csv: Option<PathBuf>,

    /// Patch side length in microns
    #[arg(long, value_name = "UM", default_value_t = 5.0)]
    patch_size: f64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let policy = if cli.strict {
        OpenFailurePolicy::Fail
    } else {
        OpenFailurePolicy::EmptyResult
    };
    let config = ReaderConfig::default()
        .with_open_failure(policy)
        .with_patch_size(cli.patch_size);
    let reader = DefReader::with_config(config);

    let def = match reader.read(&cli.file) {
        Ok(def) => def,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    print_summary(&def);

    if let Some((_, die)) = def.die_entry() {
        if die.design_units > 0.0 {
            match PatchGrid::build(&def, reader.config().patch_size) {
                Ok(grid) => print_patches(&grid),
                Err(e) => eprintln!("Skipping patch grid: {e}"),
            }
        }
    }

    if let Some(csv_path) = &cli.csv {
        if let Err(e) = export_cells_to_csv(&def, csv_path) {
            eprintln!("Error: failed to write {}: {e}", csv_path.display());
            process::exit(1);
        }
        println!("Cells written to {}", csv_path.display());
    }
}

fn print_summary(def: &Def) {
    match def.die_entry() {
        Some((label, die)) => {
            println!("{label}:");
            println!("  Design:       {}", die.design);
            println!("  Die size:     {} x {}", die.die_x, die.die_y);
            println!("  Design units: {}", die.design_units);
        }
        None => println!("No design information"),
    }

    println!("Cells: {}", def.cells.len());
    println!("  Logic: {}", def.cells_of_kind(CellKind::Logic).count());
    println!("  Misc:  {}", def.cells_of_kind(CellKind::Misc).count());

    let types = def.cell_types();
    if !types.is_empty() {
        println!("Cell types ({}): {}", types.len(), types.join(", "));
    }
}

fn print_patches(grid: &PatchGrid) {
    println!(
        "Patches: {} x {} of {} um, {} occupied",
        grid.columns,
        grid.rows,
        grid.patch_size,
        grid.patches.len()
    );
    for ((row, col), patch) in &grid.patches {
        println!(
            "  [{row},{col}] at ({}, {}) um: {} cells",
            patch.origin_x,
            patch.origin_y,
            patch.cell_count()
        );
    }
    if grid.out_of_bounds > 0 {
        println!("  {} cells outside the die", grid.out_of_bounds);
    }
}
