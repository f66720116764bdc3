use serde::{Deserialize, Serialize};

use crate::ingest::{CellValue, OrderedMap, ProcedureMap, RawSheet, SheetIngestor};
use crate::report::{ReportSink, ValidationCheck};
use crate::schema::{
    columns, sheets, INITIATION_CHEMICAL, PHOTOCONTROL_NO, POLYMERIZATION_FROMP,
    POLYMERIZATION_NONE, SUPPORTED_WORKBOOK_VERSION,
};

use super::records::{CategoryOutput, DerivedInputs, InitiatorRecord};
use super::{BatchAssembler, BatchError, BatchInputs, Category};

/// Workbook-level properties handed over with the sheets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkbookProperties {
    /// Workbook version tag
    pub version: Option<String>,
    /// Batch identifier
    pub batch_id: Option<String>,
}

/// A whole formulation workbook, already read into sheets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    /// Version tag and batch id
    pub properties: WorkbookProperties,
    /// Sheets in workbook order
    pub sheets: Vec<RawSheet>,
}

/// One entry of the procedure tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcedureSection {
    /// Key/value procedure sheet
    Sheet(ProcedureMap),
    /// Chemical initiation records, moved here for chemically initiated batches
    ChemicalInitiation(CategoryOutput<InitiatorRecord>),
}

impl From<ProcedureMap> for ProcedureSection {
    fn from(map: ProcedureMap) -> Self {
        ProcedureSection::Sheet(map)
    }
}

impl From<CategoryOutput<InitiatorRecord>> for ProcedureSection {
    fn from(output: CategoryOutput<InitiatorRecord>) -> Self {
        ProcedureSection::ChemicalInitiation(output)
    }
}

impl ProcedureSection {
    fn as_sheet(&self) -> Option<&ProcedureMap> {
        match self {
            ProcedureSection::Sheet(map) => Some(map),
            ProcedureSection::ChemicalInitiation(_) => None,
        }
    }

    fn as_sheet_mut(&mut self) -> Option<&mut ProcedureMap> {
        match self {
            ProcedureSection::Sheet(map) => Some(map),
            ProcedureSection::ChemicalInitiation(_) => None,
        }
    }
}

/// Derived-metadata tree of one experiment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experiment {
    /// Batch identifier
    #[serde(rename = "Batch ID")]
    pub batch_id: Option<String>,
    /// Procedure sheets by title
    pub procedure: OrderedMap<ProcedureSection>,
    /// Derived input records
    pub inputs: DerivedInputs,
    /// Frontal polymerization measurements, for FROMP batches
    #[serde(rename = "FROMP Measurements", skip_serializing_if = "Option::is_none")]
    pub fromp_measurements: Option<ProcedureMap>,
}

/// Reject any workbook whose version tag is not the supported one
pub fn check_version(version: Option<&str>) -> Result<(), BatchError> {
    match version.map(str::trim) {
        Some(SUPPORTED_WORKBOOK_VERSION) => Ok(()),
        Some(found) => Err(BatchError::UnsupportedVersion {
            found: found.to_string(),
        }),
        None => Err(BatchError::MissingVersion),
    }
}

fn general_value<'a>(general: &'a ProcedureMap, key: &str) -> Option<&'a str> {
    general.get(key).and_then(CellValue::as_text).map(str::trim)
}

impl<'db, S: ReportSink> BatchAssembler<'db, S> {
    /// Ingest every input sheet of a workbook after the version gate.
    ///
    /// Procedure-only sheets are left alone; [`BatchAssembler::assemble`]
    /// reads them after this returns.
    pub fn ingest(&mut self, workbook: &Workbook) -> Result<BatchInputs, BatchError> {
        self.gate_version(workbook)?;

        let mut ingestor = SheetIngestor::new(&mut self.report);
        let mut inputs = BatchInputs::new();
        for sheet in &workbook.sheets {
            if let Some(category) = Category::from_sheet_name(&sheet.title) {
                inputs.insert(category, ingestor.read_inputs(sheet)?);
            }
        }
        Ok(inputs)
    }

    fn gate_version(&mut self, workbook: &Workbook) -> Result<(), BatchError> {
        let version = workbook.properties.version.as_deref();
        match check_version(version) {
            Ok(()) => {
                self.report.record(ValidationCheck::ok(format!(
                    "Spreadsheet version {}",
                    SUPPORTED_WORKBOOK_VERSION
                )));
                Ok(())
            }
            Err(e) => {
                self.report
                    .record(ValidationCheck::failed("Spreadsheet version", e.to_string()));
                Err(e)
            }
        }
    }

    /// Turn a whole workbook into the experiment tree.
    ///
    /// The version gate and input ingestion run first, through
    /// [`BatchAssembler::ingest`]; any failure after it aborts the whole
    /// experiment.
    pub fn assemble(&mut self, workbook: &Workbook) -> Result<Experiment, BatchError> {
        let inputs = self.ingest(workbook)?;

        let mut procedure: OrderedMap<ProcedureSection> = OrderedMap::new();
        let mut fromp_measurements = ProcedureMap::new();

        {
            let mut ingestor = SheetIngestor::new(&mut self.report);
            for sheet in &workbook.sheets {
                let title = sheet.title.as_str();
                if title == sheets::GEOMETRIES || Category::from_sheet_name(title).is_some() {
                    continue;
                } else if sheets::PROCEDURE_SHEETS.contains(&title) {
                    procedure.insert(title, ingestor.read_procedure(sheet));
                } else if title == sheets::FROMP_MEASUREMENTS {
                    fromp_measurements = ingestor.read_procedure(sheet);
                } else {
                    log::warn!("Ignoring unrecognised sheet: {}", title);
                }
            }
        }

        let mut derived = self.compute_values(&inputs)?;

        let general = procedure
            .get(sheets::GENERAL)
            .and_then(ProcedureSection::as_sheet)
            .cloned()
            .ok_or_else(|| BatchError::MissingSheet(sheets::GENERAL.to_string()))?;

        if general_value(&general, columns::PHOTOCONTROL) == Some(PHOTOCONTROL_NO) {
            procedure.remove(sheets::PHOTO_CONTROL);
        }

        let method = general_value(&general, columns::INITIATION_METHOD);
        for (tab_method, tab) in sheets::INITIATION_TABS {
            if method != Some(*tab_method) {
                procedure.remove(tab);
            }
        }

        let chemical_initiation = derived.chemical_initiation.take();
        if method == Some(INITIATION_CHEMICAL) {
            if let Some(initiation) = chemical_initiation {
                procedure.insert(sheets::CHEMICAL_INITIATION, initiation);
            }
        }

        let polymerization = general_value(&general, columns::POLYMERIZATION_TYPE);
        if polymerization == Some(POLYMERIZATION_NONE) {
            if let Some(general) = procedure
                .get_mut(sheets::GENERAL)
                .and_then(ProcedureSection::as_sheet_mut)
            {
                for property in columns::FROMP_PROPERTIES {
                    general.remove(property);
                }
            }
        }

        let fromp_measurements =
            (polymerization == Some(POLYMERIZATION_FROMP)).then_some(fromp_measurements);

        log::info!(
            "Assembled experiment {}",
            workbook.properties.batch_id.as_deref().unwrap_or("<no batch id>")
        );

        Ok(Experiment {
            batch_id: workbook.properties.batch_id.clone(),
            procedure,
            inputs: derived,
            fromp_measurements,
        })
    }
}
