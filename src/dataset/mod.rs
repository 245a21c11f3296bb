mod export_csv;
mod table;

pub use export_csv::export_csv;
pub use table::Dataset;
