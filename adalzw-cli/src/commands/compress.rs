//! Compress command implementation.

use super::{Operation, Summary};
use crate::error::CliResult;
use crate::io::{read_input, write_output};
use adalzw::{LzwEncoder, ResetPolicy};
use std::path::Path;
use tracing::info;

pub fn cmd_compress(
    input: Option<&Path>,
    output: Option<&Path>,
    policy: ResetPolicy,
) -> CliResult<Summary> {
    let data = read_input(input)?;

    let mut encoder = LzwEncoder::new(policy);
    let compressed = encoder.encode(&data)?;
    let stats = encoder.stats();

    info!(
        policy = %policy,
        input_bytes = data.len(),
        output_bytes = compressed.len(),
        resets = stats.resets,
        "compressed"
    );

    write_output(output, &compressed)?;
    Ok(Summary::new(
        Operation::Compress,
        policy,
        data.len(),
        compressed.len(),
        stats,
    ))
}
