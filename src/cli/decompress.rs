use crate::artifact;
use crate::cli::{self, DecompressArgs, Result};
use crate::codec;

pub fn decompress(args: &DecompressArgs) -> Result<()> {
    let input_path = &args.input;
    let output_path = &args.output;

    let raw = cli::read_source(input_path)?;
    let (table, bits) = artifact::parse(&raw)?;
    let text = codec::decompress_stream(&table, bits)?;

    if_tracing! {
        tracing::info!(event = "decompress_complete", input = %input_path.display(), output = %output_path.display(), symbols = table.len(), stream_bits = bits.len(), "decompress finished");
    }

    cli::write_output(output_path, &text)?;
    println!("decompressed {} -> {}", input_path.display(), output_path.display());
    Ok(())
}
