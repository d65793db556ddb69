//! Reading the request document and writing the rendered response.

use std::io::{Read, Write};
use std::path::Path;

use reqtext_core::Error;

/// Read the whole document from `file`, or from stdin when `None`.
pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>, Error> {
    match file {
        Some(path) => Ok(std::fs::read(path)?),
        None => read_all(std::io::stdin().lock()),
    }
}

/// Write the rendered response to stdout and flush it.
pub fn write_output(output: &[u8]) -> Result<(), Error> {
    write_all(std::io::stdout().lock(), output)
}

fn read_all(mut reader: impl Read) -> Result<Vec<u8>, Error> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(input)
}

fn write_all(mut writer: impl Write, output: &[u8]) -> Result<(), Error> {
    writer.write_all(output)?;
    writer.flush()?;
    Ok(())
}
