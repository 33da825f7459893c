//! cli component of the huffword project.
//!
//! the valid invocations are small enough to list exhaustively. `$exename`
//! stands for the executable name, which is `huffword` on linux or
//! `huffword.exe` on windows, or whatever the user renamed the file to.
//!
//! > `$exename compress <input> <output>`
//!
//! reads the input text, builds the frequency table and code tree, and writes
//! a two-line artifact: the frequency table header on line 1 (a JSON array of
//! symbol/count records, in first-occurrence order) and the encoded bit
//! stream on line 2 (literal `0`/`1` characters, one per bit).
//!
//! > `$exename decompress <input> <output>`
//!
//! parses the artifact header back into an ordered frequency table, rebuilds
//! the tree from it, and walks the bit stream back into text. the header
//! order matters: the tree builder breaks weight ties by entry order, so the
//! decoder only reproduces the encoder's tree if the header preserves it.
//!
//! > `$exename check <input>`
//!
//! compresses and decompresses the input in memory and verifies the round
//! trip against the whitespace-normalized original. exits nonzero on
//! mismatch.
//!
//! every error is reported as a single message on stderr with a nonzero exit
//! code. output files are only written after the whole operation has
//! succeeded, so a failed run leaves no partial output behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::artifact::ArtifactError;
use crate::codec::CodecError;

pub mod check;
pub mod compress;
pub mod decompress;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("input file {path:?} not found")]
    SourceNotFound { path: PathBuf },

    #[error("could not read {path:?}: {source}")]
    SourceRead { path: PathBuf, source: io::Error },

    #[error("could not write {path:?}: {source}")]
    OutputWrite { path: PathBuf, source: io::Error },

    #[error("malformed frequency table: {0}")]
    MalformedTable(#[from] ArtifactError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// CLI arguments for the huffword application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffword
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a text file into a two-line artifact
    #[command(alias = "c")]
    Compress(CompressArgs),

    /// Decompress a two-line artifact back into text
    #[command(alias = "d")]
    Decompress(DecompressArgs),

    /// Compress and decompress in memory, verifying the round trip
    Check(CheckArgs),
}

/// Arguments specific to the compress command
#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Path to the input text file
    pub input: PathBuf,

    /// Path for the compressed artifact
    pub output: PathBuf,
}

/// Arguments specific to the decompress command
#[derive(Args, Debug)]
pub struct DecompressArgs {
    /// Path to the compressed artifact
    pub input: PathBuf,

    /// Path for the recovered text
    pub output: PathBuf,
}

/// Arguments specific to the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the text file to round-trip
    pub input: PathBuf,
}

/// Read a source file as UTF-8, stripping a leading BOM if present.
pub fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CliError::SourceNotFound { path: path.to_path_buf() }
        } else {
            CliError::SourceRead { path: path.to_path_buf(), source }
        }
    })?;

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| CliError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
