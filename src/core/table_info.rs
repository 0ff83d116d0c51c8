//! Table metadata helper
//!
//! Queries information-schema views through a host-provided
//! [`MetadataSource`], shapes the rows into a [`TableInfo`] and logs it
//! expanded.

use super::error::Result;
use super::logger::DebugLogger;
use super::payload::MessagePayload;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One result row; `None` is SQL NULL.
pub type MetadataRow = HashMap<String, Option<String>>;

/// Runs a metadata query for the logger.
pub trait MetadataSource {
    fn query(&self, sql: &str) -> Result<Vec<MetadataRow>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    /// `"N/A"` when the column has no character length
    pub max_length: String,
    pub nullable: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub name: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub table_name: String,
    pub schema: String,
    pub columns: Vec<ColumnInfo>,
    pub indexes: Vec<IndexInfo>,
    pub row_count: Option<String>,
}

const SYSTEM_SCHEMAS: &str = "('information_schema', 'mysql', 'performance_schema')";

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn table_filter(table: &str, schema: &str) -> String {
    format!(
        "WHERE TABLE_NAME = {}\n  AND TABLE_SCHEMA NOT IN {} AND TABLE_SCHEMA = {}",
        quote(table),
        SYSTEM_SCHEMAS,
        quote(schema)
    )
}

fn column(row: &MetadataRow, name: &str) -> Option<String> {
    row.get(name).cloned().flatten()
}

impl TableInfo {
    /// Run the metadata queries and shape the results
    pub fn fetch(
        source: &dyn MetadataSource,
        table: &str,
        schema: &str,
        include_row_count: bool,
    ) -> Result<Self> {
        let filter = table_filter(table, schema);
        let mut info = TableInfo {
            table_name: table.to_string(),
            schema: schema.to_string(),
            ..TableInfo::default()
        };

        let columns_sql = format!(
            "SELECT COLUMN_NAME, DATA_TYPE, CHARACTER_MAXIMUM_LENGTH, IS_NULLABLE, COLUMN_KEY\n\
             FROM INFORMATION_SCHEMA.COLUMNS\n{}\nORDER BY ORDINAL_POSITION",
            filter
        );
        for row in source.query(&columns_sql)? {
            info.columns.push(ColumnInfo {
                name: column(&row, "COLUMN_NAME").unwrap_or_default(),
                data_type: column(&row, "DATA_TYPE").unwrap_or_default(),
                max_length: column(&row, "CHARACTER_MAXIMUM_LENGTH")
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| "N/A".to_string()),
                nullable: column(&row, "IS_NULLABLE").unwrap_or_default(),
                key: column(&row, "COLUMN_KEY").unwrap_or_default(),
            });
        }

        let indexes_sql = format!(
            "SELECT INDEX_NAME, COLUMN_NAME, SEQ_IN_INDEX\n\
             FROM INFORMATION_SCHEMA.STATISTICS\n{}\nORDER BY INDEX_NAME, SEQ_IN_INDEX",
            filter
        );
        for row in source.query(&indexes_sql)? {
            let name = column(&row, "INDEX_NAME").unwrap_or_default();
            let column_name = column(&row, "COLUMN_NAME").unwrap_or_default();
            match info.indexes.last_mut() {
                Some(index) if index.name == name => index.columns.push(column_name),
                _ => info.indexes.push(IndexInfo {
                    name,
                    columns: vec![column_name],
                }),
            }
        }

        if include_row_count {
            let count_sql = format!(
                "SELECT TABLE_ROWS AS rowCount\nFROM INFORMATION_SCHEMA.TABLES\n{}",
                filter
            );
            info.row_count = source
                .query(&count_sql)?
                .first()
                .and_then(|row| column(row, "rowCount"));
        }

        Ok(info)
    }

    pub fn to_payload(&self) -> MessagePayload {
        match serde_json::to_value(self) {
            Ok(value) => value.into(),
            Err(e) => MessagePayload::scalar(format!("{:?} ({})", self, e)),
        }
    }
}

impl DebugLogger {
    /// Fetch and log table metadata; `None` (after logging why) on failure
    ///
    /// Both outcomes are logged forced, whatever the minimum level.
    pub fn describe_table(
        &self,
        source: &dyn MetadataSource,
        table: &str,
        schema: &str,
        include_row_count: bool,
    ) -> Option<TableInfo> {
        match TableInfo::fetch(source, table, schema, include_row_count) {
            Ok(info) => {
                self.message(info.to_payload())
                    .label(format!("Database table info: {}.{}", schema, table))
                    .expand()
                    .force()
                    .hide_caller()
                    .log();
                Some(info)
            }
            Err(e) => {
                self.message(format!("Failed to fetch info for {}.{}: {}", schema, table, e))
                    .label("describe_table")
                    .force()
                    .hide_caller()
                    .log();
                None
            }
        }
    }
}
