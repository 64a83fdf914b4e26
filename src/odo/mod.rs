//! Obtaining odo documents and decoding them.
//!
//! [`OdoClient`] either runs the odo (or oc) CLI through the shell port,
//! or reads a previously captured document through the filesystem port,
//! then hands the JSON to the [`parser`](crate::parser).

mod command;

pub use command::{quote, OdoCommand};

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::OdoError;
use crate::model::{
    ComponentDescription, ComponentInfo, ComponentKind, ComponentTypeInfo, DebugStatus,
};
use crate::parser;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Run the CLI, optionally from a component directory.
    Live {
        /// Component directory odo should run in.
        context: Option<PathBuf>,
    },
    /// Read a document captured earlier (e.g. `odo ... -o json > file`).
    File(PathBuf),
}

impl Source {
    /// `File` when `input` is given, otherwise `Live` in `context`.
    #[must_use]
    pub fn from_args(input: Option<&Path>, context: Option<&Path>) -> Self {
        match input {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Live { context: context.map(Path::to_path_buf) },
        }
    }
}

/// Fetches and decodes odo documents.
pub struct OdoClient<'a> {
    ctx: &'a ServiceContext,
    config: &'a Config,
}

impl<'a> OdoClient<'a> {
    /// Creates a client over the given ports and configuration.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, config: &'a Config) -> Self {
        Self { ctx, config }
    }

    /// Devfile metadata, forwarded ports and running state from
    /// `odo describe component`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be obtained or is not JSON.
    pub fn describe_component(&self, source: &Source) -> Result<ComponentDescription, OdoError> {
        let root = self.document(source, &OdoCommand::DescribeComponent { name: None })?;
        Ok(parser::parse_component_description(&root, ComponentKind::Odo))
    }

    /// Project type and environment of a component.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be obtained or is not JSON.
    pub fn component_info(
        &self,
        source: &Source,
        kind: ComponentKind,
        name: Option<&str>,
    ) -> Result<ComponentInfo, OdoError> {
        let command = OdoCommand::DescribeComponent { name: name.map(str::to_string) };
        let root = self.document(source, &command)?;
        Ok(parser::parse_component_info(&root, kind))
    }

    /// Whether a debug session is running.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be obtained or is not JSON.
    pub fn debug_status(&self, source: &Source) -> Result<DebugStatus, OdoError> {
        let root = self.document(source, &OdoCommand::DebugInfo)?;
        Ok(parser::parse_debug_status(&root))
    }

    /// Registry details and starter projects for a devfile.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be obtained or is not JSON.
    pub fn component_type(
        &self,
        source: &Source,
        devfile: &str,
    ) -> Result<ComponentTypeInfo, OdoError> {
        let command = OdoCommand::RegistryDetails { devfile: devfile.to_string() };
        let root = self.document(source, &command)?;
        Ok(parser::parse_component_type_info(&root))
    }

    /// Fully dereferenced POST body schema for an OpenAPI operation path.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be obtained, is not JSON,
    /// or has no resolvable schema for `operation`.
    pub fn schema(&self, source: &Source, operation: &str) -> Result<Map<String, Value>, OdoError> {
        let root = self.document(source, &OdoCommand::OpenApi)?;
        Ok(parser::find_schema(&root, operation)?)
    }

    /// Loads and parses the JSON document for `command` from `source`.
    fn document(&self, source: &Source, command: &OdoCommand) -> Result<Value, OdoError> {
        match source {
            Source::File(path) => self.read_document(path),
            Source::Live { context } => self.run_document(command, context.as_deref()),
        }
    }

    fn read_document(&self, path: &Path) -> Result<Value, OdoError> {
        tracing::debug!(path = %path.display(), "reading captured document");
        let content = self.ctx.fs.read_to_string(path).map_err(|e| OdoError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        parse_json(&content, &path.display().to_string())
    }

    fn run_document(&self, command: &OdoCommand, context: Option<&Path>) -> Result<Value, OdoError> {
        let line = command.render(self.config, context);
        tracing::debug!(command = %line, "running");
        let output = self
            .ctx
            .shell
            .run(&line)
            .map_err(|e| OdoError::Spawn { command: line.clone(), message: e.to_string() })?;
        if !output.success() {
            tracing::warn!(command = %line, code = output.exit_code, "command failed");
            return Err(OdoError::ExitStatus {
                command: line,
                code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }
        parse_json(&output.stdout, &format!("`{line}`"))
    }
}

fn parse_json(content: &str, origin: &str) -> Result<Value, OdoError> {
    serde_json::from_str(content)
        .map_err(|source| OdoError::InvalidJson { origin: origin.to_string(), source })
}
