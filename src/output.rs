// src/output.rs
use crate::paths::PricePaths;
use std::fs::File;
use std::io::{self, Write};

/// Write a path matrix as CSV, one column per path, one row per time point.
pub fn write_paths_csv(filename: &str, paths: &PricePaths) -> io::Result<()> {
    let mut file = File::create(filename)?;
    write!(file, "t")?;
    for path in 0..paths.num_paths() {
        write!(file, ",path_{}", path)?;
    }
    writeln!(file)?;

    let time_grid = paths.time_grid();
    for (step, t) in time_grid.iter().enumerate() {
        write!(file, "{}", t)?;
        for path in 0..paths.num_paths() {
            write!(file, ",{}", paths.matrix()[[path, step]])?;
        }
        writeln!(file)?;
    }
    Ok(())
}

pub fn write_summary_csv(filename: &str, summary_data: &[(&str, String)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
