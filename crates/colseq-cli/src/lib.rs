//! CLI library components for colseq.

pub mod commands;
pub mod logging;
pub mod types;

pub use commands::{
    load_mapping, read_list, run_column_index, run_column_name, run_compress, run_expand,
    run_list, run_remap, run_wave,
};
pub use types::{ColumnRow, ListOperation, RemapRow};
