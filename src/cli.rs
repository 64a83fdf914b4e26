//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::ComponentKind;

/// Top-level CLI parser for `odoscope`.
#[derive(Debug, Parser)]
#[command(name = "odoscope", version, about = "Inspect odo components as typed models")]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// odo executable to run (overrides `ODOSCOPE_ODO`).
    #[arg(long, global = true, value_name = "PATH")]
    pub odo: Option<String>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Where to take the odo document from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Component directory to run odo in.
    #[arg(long, value_name = "DIR", conflicts_with = "input")]
    pub context: Option<PathBuf>,

    /// Read a captured JSON document instead of running odo.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Devfile metadata, supported features, forwarded ports and running state.
    Describe {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Project type and environment of a component.
    Info {
        /// Which odo view produced the document.
        #[arg(long, value_enum, default_value_t = ComponentKind::Odo)]
        kind: ComponentKind,
        /// Describe this named component.
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Forwarded ports of the running dev session.
    Urls {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Features the component is currently running under.
    State {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Whether a debugger is attached.
    Debug {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Registry details and starter projects of a devfile.
    Registry {
        /// Devfile (component type) name.
        devfile: String,
        /// Read a captured JSON document instead of running odo.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Dereferenced request-body schema of an OpenAPI POST operation.
    Schema {
        /// Operation path, e.g. `/apis/example.com/v1/namespaces/{namespace}/widgets`.
        operation: String,
        /// Read a captured OpenAPI document instead of running oc.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}
