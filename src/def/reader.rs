// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use super::parser::{ParseError, ParseResult, SectionScanner};
use super::Def;
use crate::config::{OpenFailurePolicy, ReaderConfig};

pub struct DefReader {
    config: ReaderConfig,
}

impl DefReader {
    pub fn new() -> Self {
        Self::with_config(ReaderConfig::default())
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> ParseResult<Def> {
        let path = path.as_ref();
        info!("Loading DEF file: {}", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                return match self.config.on_open_failure {
                    OpenFailurePolicy::EmptyResult => {
                        warn!(
                            "Cannot open {}: {source}; returning empty result",
                            path.display()
                        );
                        Ok(Def::empty())
                    }
                    OpenFailurePolicy::Fail => Err(ParseError::Open {
                        path: path.to_path_buf(),
                        source,
                    }),
                };
            }
        };

        let mut scanner = SectionScanner::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| ParseError::Read {
                line: index + 1,
                source,
            })?;
            scanner.scan_line(&line)?;
        }

        let def = scanner.finish();
        info!(
            "Parsed {}: {} cells, {} cell types",
            path.display(),
            def.cells.len(),
            def.cell_types().len()
        );
        Ok(def)
    }
}

impl Default for DefReader {
    fn default() -> Self {
        Self::new()
    }
}
