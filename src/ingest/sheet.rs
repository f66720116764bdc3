use crate::report::{ReportSink, SheetTally, ValidationCheck};
use crate::schema::PROCEDURE_MARKER;

use super::classify::{classify_row, RowClass, SkipReason};
use super::{CellValue, IngestError, ProcedureMap, Row};

/// A sheet as handed over by the workbook reader: header row first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    /// Sheet title
    pub title: String,
    /// All rows, including the header row
    pub rows: Vec<Vec<CellValue>>,
}

impl RawSheet {
    /// Create a sheet from its title and rows
    pub fn new(title: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// Validated data rows of an input sheet plus its procedure block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSheet {
    /// Sheet title
    pub title: String,
    /// Kept data rows, in sheet order
    pub rows: Vec<Row>,
    /// Key/value pairs below the `PROCEDURE` marker
    pub procedure: ProcedureMap,
}

fn is_procedure_marker(row: &[CellValue]) -> bool {
    row.first()
        .and_then(CellValue::as_text)
        .is_some_and(|s| s.trim() == PROCEDURE_MARKER)
}

/// Key/value pair of a procedure row; rows with a blank key are ignored
fn procedure_entry(row: &[CellValue]) -> Option<(String, CellValue)> {
    let key = row.first()?.to_key()?;
    let value = row.get(1).cloned().unwrap_or_default();
    Some((key, value))
}

/// Turns raw sheets into validated rows, reporting every skipped row to the
/// injected sink.
pub struct SheetIngestor<S: ReportSink> {
    report: S,
}

impl<S: ReportSink> SheetIngestor<S> {
    /// Create an ingestor reporting to `report`
    pub fn new(report: S) -> Self {
        Self { report }
    }

    /// Give back the sink
    pub fn into_report(self) -> S {
        self.report
    }

    /// Split an input sheet into validated data rows and its procedure block.
    ///
    /// The first malformed data row aborts ingestion of the sheet.
    pub fn read_inputs(&mut self, sheet: &RawSheet) -> Result<InputSheet, IngestError> {
        let mut input = InputSheet {
            title: sheet.title.clone(),
            ..Default::default()
        };

        let Some((header_row, body)) = sheet.rows.split_first() else {
            self.report.record(ValidationCheck::warning(
                format!("{} tab", sheet.title),
                "sheet is empty",
            ));
            return Ok(input);
        };
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_key().unwrap_or_default())
            .collect();

        let mut inside_procedure_block = false;
        let mut skipped = 0usize;

        for cells in body {
            if is_procedure_marker(cells) {
                inside_procedure_block = true;
                continue;
            }

            if inside_procedure_block {
                if let Some((key, value)) = procedure_entry(cells) {
                    input.procedure.insert(key, value);
                }
                continue;
            }

            let row: Row = headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), cells.get(i).cloned().unwrap_or_default()))
                .collect();

            match classify_row(&row) {
                RowClass::Keep => input.rows.push(row),
                RowClass::Skip(reason) => {
                    if reason == SkipReason::Blank {
                        log::debug!("On {} tab: skipping blank row", sheet.title);
                    }
                    skipped += 1;
                }
                RowClass::Reject(defect) => {
                    self.report.record(ValidationCheck::failed(
                        format!("{} tab rows", sheet.title),
                        format!("{} in {}", defect, row),
                    ));
                    return Err(IngestError::RowValidation {
                        sheet: sheet.title.clone(),
                        defect,
                        row,
                    });
                }
            }
        }

        self.report.record_sheet(SheetTally {
            sheet: sheet.title.clone(),
            kept: input.rows.len(),
            skipped,
            procedure_entries: input.procedure.len(),
        });

        Ok(input)
    }

    /// Read a sheet made only of key/value rows
    pub fn read_procedure(&mut self, sheet: &RawSheet) -> ProcedureMap {
        let procedure: ProcedureMap = sheet
            .rows
            .iter()
            .filter_map(|cells| procedure_entry(cells))
            .collect();

        self.report.record(ValidationCheck::ok(format!(
            "{} tab: {} procedure entries",
            sheet.title,
            procedure.len()
        )));
        procedure
    }
}
