//! Expand command implementation.

use super::{Operation, Summary};
use crate::error::CliResult;
use crate::io::{read_input, write_output};
use adalzw::{LzwDecoder, peek_policy};
use std::path::Path;
use tracing::info;

pub fn cmd_expand(input: Option<&Path>, output: Option<&Path>) -> CliResult<Summary> {
    let data = read_input(input)?;
    let policy = peek_policy(&data)?;

    let mut decoder = LzwDecoder::new();
    let expanded = decoder.decode(&data)?;
    let stats = decoder.stats();

    info!(
        policy = %policy,
        input_bytes = data.len(),
        output_bytes = expanded.len(),
        resets = stats.resets,
        "expanded"
    );

    write_output(output, &expanded)?;
    Ok(Summary::new(
        Operation::Expand,
        policy,
        data.len(),
        expanded.len(),
        stats,
    ))
}
