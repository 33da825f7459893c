use crate::artifact;
use crate::cli::{self, CompressArgs, Result};
use crate::codec;

pub fn compress(args: &CompressArgs) -> Result<()> {
    let input_path = &args.input;
    let output_path = &args.output;

    let text = cli::read_source(input_path)?;
    let (table, bits) = codec::compress_text(&text)?;
    let rendered = artifact::render(&table, &bits)?;

    if_tracing! {
        tracing::info!(event = "compress_complete", input = %input_path.display(), output = %output_path.display(), symbols = table.len(), tokens = table.total(), stream_bits = bits.len(), "compress finished");
    }

    cli::write_output(output_path, &rendered)?;
    println!("compressed {} -> {}", input_path.display(), output_path.display());
    Ok(())
}
