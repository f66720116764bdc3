use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_manifest() {
    let manifest = BatchManifest::from_toml(
        r#"
            version = "3.0"
            batch_id = "B-042"
            sheets = ["general", "monomers"]
        "#,
    )
    .unwrap();

    assert_eq!(manifest.version.as_deref(), Some("3.0"));
    assert_eq!(manifest.batch_id.as_deref(), Some("B-042"));
    assert_eq!(manifest.sheets.unwrap(), vec!["general", "monomers"]);
}

#[test]
fn test_empty_manifest() {
    let manifest = BatchManifest::from_toml("").unwrap();
    assert_eq!(manifest, BatchManifest::default());
}

#[test]
fn test_bad_manifest() {
    let err = BatchManifest::from_toml("version = ").unwrap_err();
    assert!(matches!(err, WorkbookError::Manifest(_)));
}

#[test]
fn test_read_sheet_ragged_rows() {
    let csv = "Name,SMILES,Measured mass (g)\nDCPD,C1C=CC2C1C3CC2C=C3,870\nPROCEDURE\nDegassed?,YES\n";
    let sheet = read_sheet("monomers", csv.as_bytes()).unwrap();

    assert_eq!(sheet.title, "monomers");
    assert_eq!(sheet.rows.len(), 4);
    assert_eq!(sheet.rows[1][2], CellValue::Number(870.0));
    assert_eq!(sheet.rows[2], vec![CellValue::Text("PROCEDURE".to_string())]);
}

#[test]
fn test_load_batch_dir_discovers_sheets() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(MANIFEST_FILE), "version = \"3.0\"\n").unwrap();
    fs::write(dir.path().join("monomers.csv"), "Name,SMILES\n").unwrap();
    fs::write(dir.path().join("general.csv"), "Initiation method,THERMAL\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let workbook = load_batch_dir(dir.path()).unwrap();
    let titles: Vec<&str> = workbook.sheets.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["general", "monomers"]);
    assert_eq!(workbook.properties.version.as_deref(), Some("3.0"));
    assert_eq!(workbook.properties.batch_id, None);
}

#[test]
fn test_load_batch_dir_missing_listed_sheet() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(MANIFEST_FILE),
        "version = \"3.0\"\nsheets = [\"general\"]\n",
    )
    .unwrap();

    let err = load_batch_dir(dir.path()).unwrap_err();
    assert!(matches!(err, WorkbookError::MissingSheetFile { ref sheet, .. } if sheet == "general"));
}

#[test]
fn test_load_batch_dir_without_manifest() {
    let dir = tempdir().unwrap();
    let err = load_batch_dir(dir.path()).unwrap_err();
    assert!(matches!(err, WorkbookError::Io { .. }));
}
