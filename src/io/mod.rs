pub mod csv;
pub mod output;

pub use output::{CsvWriter, JsonWriter, OutputWriter, TerminalWriter};
