mod output;

pub use output::{write_output, OutputConfig};
