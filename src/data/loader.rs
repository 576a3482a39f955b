//! Table loading with extension dispatch
//!
//! Supported formats:
//! * `.csv`  – header row with column names (headers are trimmed before
//!   matching, since published data drops carry stray whitespace)
//! * `.json` – records-oriented array of objects, the default
//!   `DataFrame.to_json(orient='records')` layout

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{Error, Result};

/// Load a table from a file, dispatching on the file extension.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "Data file not found: {}",
            path.display()
        )));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(Error::InvalidInput(format!(
            "Unsupported file extension: .{other} ({})",
            path.display()
        ))),
    }
}

fn load_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;

    // Normalize header whitespace so column lookup never fails on
    // accidentally padded names.
    let mut headers = reader.headers()?.clone();
    headers.trim();
    reader.set_headers(headers);

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let row: T = result.map_err(|e| {
            Error::InvalidInput(format!("{}: row {}: {}", path.display(), row_no + 1, e))
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path)?;
    let rows: Vec<T> = serde_json::from_str(&text)
        .map_err(|e| Error::InvalidInput(format!("{}: {}", path.display(), e)))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ShortlistEntry, WinnerRecord};
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_winners_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "winners.csv",
            "Year,Player,Club,Major Club Trophies,Individual Awards\n\
             2015,Lionel Messi,Barcelona,\"La Liga, Copa del Rey, UEFA Champions League\",\"FIFA World Player, Pichichi\"\n\
             2020,Not awarded,,—,—\n",
        );

        let rows: Vec<WinnerRecord> = load_table(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2015);
        assert_eq!(rows[0].player, "Lionel Messi");
        assert_eq!(rows[1].major_club_trophies.as_deref(), Some("—"));
    }

    #[test]
    fn test_load_csv_trims_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "winners.csv",
            " Year , Player ,Club,Major Club Trophies,Individual Awards\n\
             2023,Lionel Messi,Inter Miami,Leagues Cup,\"FIFA Best, World Cup Golden Ball\"\n",
        );

        let rows: Vec<WinnerRecord> = load_table(&path).unwrap();
        assert_eq!(rows[0].year, 2023);
        assert_eq!(rows[0].player, "Lionel Messi");
    }

    #[test]
    fn test_load_shortlist_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "shortlist.json",
            r#"[
              {"Player": "Ousmane Dembélé", "Club": "Paris Saint-Germain (Ligue 1)",
               "Avg. Rating": "7.9", "Major Trophies (2024–25)": "Ligue 1, UEFA Champions League",
               "Individual Awards (2024–25)": "Ligue 1 Player of the Year"}
            ]"#,
        );

        let rows: Vec<ShortlistEntry> = load_table(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player, "Ousmane Dembélé");
        assert_eq!(rows[0].avg_rating.as_deref(), Some("7.9"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<WinnerRecord>> = load_table(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "winners.xlsx", "not a spreadsheet");
        let result: Result<Vec<WinnerRecord>> = load_table(&path);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_row_names_row_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "winners.csv",
            "Year,Player,Club,Major Club Trophies,Individual Awards\n\
             not-a-year,Someone,Club,,\n",
        );

        let result: Result<Vec<WinnerRecord>> = load_table(&path);
        match result {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("row 1")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
