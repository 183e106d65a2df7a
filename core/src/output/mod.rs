pub mod csv;

pub use csv::{
    format_value, output_filename, save_to_csv, write_series, DEFAULT_PREFIX, EXTENSION,
};
