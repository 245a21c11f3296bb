// table.rs
use crate::normalize::NormalizedRecord;
use serde_json::Value;
use std::collections::HashSet;

/// Union-of-columns table over records with no fixed schema.
///
/// Columns appear in first-seen order; rows keep insertion order. A column a
/// record never set renders as null, never as a missing cell.
pub struct Dataset {
    columns: Vec<String>,
    seen: HashSet<String>,
    records: Vec<NormalizedRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            seen: HashSet::new(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: NormalizedRecord) {
        for key in record.keys() {
            if self.seen.insert(key.clone()) {
                self.columns.push(key.clone());
            }
        }
        self.records.push(record);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One row per record, cells aligned to `columns()`.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        self.records.iter().map(move |record| {
            self.columns
                .iter()
                .map(|col| scrub(record.get(col)))
                .collect()
        })
    }
}

/// Final safety net: absent cells, empty strings and the literal "None" all
/// come out as null.
fn scrub(cell: Option<&Value>) -> Value {
    match cell {
        None => Value::Null,
        Some(v) => match v.as_str() {
            Some("") | Some("None") => Value::Null,
            _ => v.clone(),
        },
    }
}
