// export_csv.rs
use crate::dataset::Dataset;
use crate::errors::ExportError;
use serde_json::Value;
use std::path::Path;

pub fn export_csv(dataset: &Dataset, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| ExportError::Csv(e.to_string()))?;

    writer
        .write_record(dataset.columns())
        .map_err(|e| ExportError::Csv(e.to_string()))?;

    for row in dataset.rows() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        writer
            .write_record(&cells)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    writer.flush().map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(())
}

/// Null renders as an empty cell; strings keep their text; anything nested
/// that passed straight through renders as compact JSON.
fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
