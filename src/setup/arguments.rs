use crate::app::NoteService;
use crate::backends::{MemoryBackend, SqliteBackend};
use crate::{NoteBackend, Result};

use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP server listens on
    #[arg(short, long, env = "NOTES_BIND", default_value = "0.0.0.0:8080")]
    pub bind: String,
    /// Where notes are kept (defaults to memory)
    #[command(subcommand)]
    pub backend: Option<Backend>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Keep notes in process memory; they are lost on exit
    Memory,
    /// Keep notes in an `SQLite` database file
    Sqlite {
        #[arg(short, long, env = "NOTES_DB", default_value = "./notes.db")]
        path: PathBuf,
    },
}

impl Args {
    /// Constructs the backend selected on the command line and wraps it in a `NoteService`
    ///
    /// # Errors
    ///
    /// Forwards any error from creating the backend, e.g. an unopenable database file
    pub fn build_service(&self) -> Result<NoteService> {
        // Allow any struct that implements NoteBackend, and store on heap because size is unknown at compile time
        let repo: Box<dyn NoteBackend> = match self.backend.as_ref().unwrap_or(&Backend::Memory) {
            Backend::Memory => {
                info!("Using in-memory note store");
                Box::new(MemoryBackend::new())
            }
            Backend::Sqlite { path } => {
                info!("Using SQLite note store at '{}'", path.display());
                Box::new(SqliteBackend::new(path)?)
            }
        };

        Ok(NoteService::new(repo))
    }
}

/// Parses command-line arguments and initializes a `NoteService` based on the provided arguments.
///
/// # Returns
///
/// The parsed arguments together with a `NoteService` instance initialized from them.
///
/// # Errors
///
/// Tries creating a `NoteBackend` instance based on the specified backend type. Any errors are forwarded
pub fn handle_args() -> Result<(Args, NoteService)> {
    let args = Args::parse();
    let service = args.build_service()?;
    Ok((args, service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn backend_defaults_to_memory() {
        let args = Args::try_parse_from(["noters-api"]).unwrap();
        assert_eq!(args.backend, None);
        assert!(args.build_service().is_ok());
    }

    #[test]
    fn sqlite_backend_takes_a_path() {
        let args =
            Args::try_parse_from(["noters-api", "--bind", "127.0.0.1:9000", "sqlite", "--path", "x.db"])
                .unwrap();
        assert_eq!(args.bind, "127.0.0.1:9000");
        assert_eq!(
            args.backend,
            Some(Backend::Sqlite {
                path: PathBuf::from("x.db")
            })
        );
    }
}
