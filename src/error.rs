//! Error types for the fallible boundaries outside the interpreter core.
//!
//! The interpreter's own per-cycle outcome is [`crate::interpreter::ExecutionStatus`],
//! a closed tagged outcome with no other error channel (spec.md §7). Everything
//! that touches the host — the ELF loader, the command-line front-end — uses
//! these `thiserror`-derived types instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read executable file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse ELF header: {0}")]
    Parse(#[from] elf::ParseError),
    #[error("executable has no PT_LOAD segments")]
    NoLoadableSegments,
    #[error("program argument list exceeds the reserved stack area")]
    ArgumentsTooLarge,
}
