// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::collections::BTreeMap;

/// One row of cells as delivered by the tabular data source
pub type SheetRow = Vec<String>;

/// 地点记录
///
/// 以表头字段名为键的单行数据，键集合始终与表头一致
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    /// Position of the row in the source table (the header is row 0)
    #[serde(skip)]
    pub row: usize,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl LocationRecord {
    /// Zips a row against the header: short rows are padded with `""`,
    /// cells past the header length are dropped.
    pub fn from_row(row: usize, header: &[String], cells: SheetRow) -> Self {
        let mut cells = cells.into_iter();
        let fields = header
            .iter()
            .map(|name| (name.clone(), cells.next().unwrap_or_default()))
            .collect();

        Self { row, fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// Converts a raw table into records keyed by its header row.
///
/// Returns `None` when the table has no rows at all (not even a header).
pub fn records_from_rows(rows: Vec<SheetRow>) -> Option<Vec<LocationRecord>> {
    let mut rows = rows.into_iter();
    let header = rows.next()?;

    Some(
        rows.enumerate()
            .map(|(index, cells)| LocationRecord::from_row(index + 1, &header, cells))
            .collect(),
    )
}
