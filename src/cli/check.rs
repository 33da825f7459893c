use anyhow::{Result, bail};

use crate::cli::{self, CheckArgs};
use crate::codec;

/// Round-trip the input in memory: compress, decompress, compare against the
/// whitespace-normalized original. Nothing is written to disk.
pub fn check(args: &CheckArgs) -> Result<()> {
    let input_path = &args.input;

    let text = cli::read_source(input_path)?;
    let (table, bits) = codec::compress_text(&text)?;
    let decoded = codec::decompress_stream(&table, &bits)?;

    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if decoded != normalized {
        bail!(
            "round trip mismatch for {}: {} tokens in, {} tokens out",
            input_path.display(),
            normalized.split_whitespace().count(),
            decoded.split_whitespace().count()
        );
    }

    if_tracing! {
        tracing::info!(event = "check_complete", input = %input_path.display(), symbols = table.len(), tokens = table.total(), stream_bits = bits.len(), "round trip verified");
    }

    println!(
        "round trip ok: {} ({} symbols, {} tokens, {} bits)",
        input_path.display(),
        table.len(),
        table.total(),
        bits.len()
    );
    Ok(())
}
