//! Input and output plumbing.

use crate::error::CliResult;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read all of `path`, or standard input when no path is given.
pub fn read_input(path: Option<&Path>) -> CliResult<Vec<u8>> {
    let mut data = Vec::new();
    match path {
        Some(path) => {
            BufReader::new(File::open(path)?).read_to_end(&mut data)?;
        }
        None => {
            io::stdin().lock().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

/// Write `data` to `path`, or standard output when no path is given.
pub fn write_output(path: Option<&Path>, data: &[u8]) -> CliResult<()> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(data)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
