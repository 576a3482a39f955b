//! Raw table viewing API with pagination and sorting

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::data::model::CellValue;
use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::AppState;

/// Query parameters for table viewing
#[derive(Debug, Deserialize)]
pub struct TableQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Column to sort by (optional)
    pub sort: Option<String>,

    /// Sort order: "asc" or "desc"
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_page() -> i64 {
    1
}

fn default_order() -> String {
    "asc".to_string()
}

/// Table data response
#[derive(Debug, Serialize)]
pub struct TableDataResponse {
    pub table_name: String,
    pub total_rows: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// GET /api/table/:name
///
/// Returns paginated raw table data with optional sorting.
/// Known tables are `winners` and `shortlist`.
pub async fn get_table_data(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
    Query(query): Query<TableQuery>,
) -> Result<Json<TableDataResponse>, TableError> {
    let table = state
        .dataset
        .table(&table_name)
        .ok_or_else(|| TableError::UnknownTable(table_name.clone()))?;

    let mut rows = table.rows;

    if let Some(sort_column) = &query.sort {
        let col_idx = table
            .columns
            .iter()
            .position(|c| c == sort_column)
            .ok_or_else(|| TableError::InvalidColumn(sort_column.clone()))?;

        if query.order.to_lowercase() == "desc" {
            rows.sort_by(|a, b| b[col_idx].cmp(&a[col_idx]));
        } else {
            rows.sort_by(|a, b| a[col_idx].cmp(&b[col_idx]));
        }
    }

    let total_rows = rows.len() as i64;
    let p = calculate_pagination(total_rows, query.page);

    let page_rows: Vec<Vec<CellValue>> = rows
        .into_iter()
        .skip(p.offset as usize)
        .take(PAGE_SIZE as usize)
        .collect();

    Ok(Json(TableDataResponse {
        table_name,
        total_rows,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        columns: table.columns,
        rows: page_rows,
    }))
}

/// Table API errors
#[derive(Debug)]
pub enum TableError {
    UnknownTable(String),
    InvalidColumn(String),
}

impl IntoResponse for TableError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            TableError::UnknownTable(name) => {
                (StatusCode::NOT_FOUND, format!("Unknown table: {}", name))
            }
            TableError::InvalidColumn(col) => {
                (StatusCode::BAD_REQUEST, format!("Invalid column: {}", col))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
