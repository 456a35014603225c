pub mod args;
pub mod commands;
pub mod console;
pub mod logging;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::cvm::asm::AsmError;
use crate::cvm::errors::{CodecError, Trap};
use crate::cvm::instruction::Word;

/// Successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Any assembly, codec, runtime, or I/O failure.
pub const EXIT_ERROR: u8 = 1;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Assemble {
        path: PathBuf,
        #[source]
        source: AsmError,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("{trap} (ip {ip})")]
    Trap { trap: Trap, ip: Word },

    #[error("could not read '{}': {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The line printed on stderr for a failed command.
pub fn diagnostic(error: &CliError) -> String {
    format!("ERROR: {error}")
}

/// Prints the diagnostic for a failed command and picks the exit code.
pub fn finish(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", diagnostic(&e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvm::asm::AsmErrorKind;

    fn assemble_error() -> CliError {
        CliError::Assemble {
            path: PathBuf::from("loop.cvmasm"),
            source: AsmError::new(2, AsmErrorKind::UnresolvedLabel("nowhere".into())),
        }
    }

    fn codec_error() -> CliError {
        CliError::Codec(CodecError::Misaligned { len: 17, record: 16 })
    }

    fn trap_error() -> CliError {
        CliError::Trap {
            trap: Trap::DivisionByZero,
            ip: 2,
        }
    }

    #[test]
    fn success_exits_zero() {
        assert_eq!(finish(Ok(())), ExitCode::from(EXIT_SUCCESS));
    }

    #[test]
    fn every_failure_exits_one() {
        for err in [assemble_error(), codec_error(), trap_error()] {
            assert_eq!(finish(Err(err)), ExitCode::from(EXIT_ERROR));
        }
        let io = CliError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(finish(Err(io)), ExitCode::from(EXIT_ERROR));
    }

    #[test]
    fn diagnostics_are_prefixed() {
        assert_eq!(
            diagnostic(&assemble_error()),
            "ERROR: loop.cvmasm: line 3: unresolved label 'nowhere'"
        );
        assert_eq!(
            diagnostic(&codec_error()),
            "ERROR: image length 17 is not a multiple of the 16-byte record size"
        );
        assert_eq!(diagnostic(&trap_error()), "ERROR: Division by zero (ip 2)");
    }
}
