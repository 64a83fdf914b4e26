//! Wire field names. Matched exactly and case-sensitively.

pub(crate) const METADATA: &str = "metadata";
pub(crate) const NAME: &str = "name";
pub(crate) const SPEC: &str = "spec";
pub(crate) const PROJECT_TYPE: &str = "projectType";
pub(crate) const DEVFILE: &str = "devfile";
pub(crate) const DEVFILE_DATA: &str = "devfileData";
pub(crate) const STARTER_PROJECTS: &str = "starterProjects";
pub(crate) const DEBUG_PROCESS_ID: &str = "debugProcessID";
pub(crate) const PATHS: &str = "paths";
pub(crate) const POST: &str = "post";
pub(crate) const PARAMETERS: &str = "parameters";
pub(crate) const BODY_VALUE: &str = "body";
pub(crate) const SCHEMA: &str = "schema";
pub(crate) const DOLLAR_REF: &str = "$ref";
pub(crate) const SUPPORTED_ODO_FEATURES: &str = "supportedOdoFeatures";
pub(crate) const LOCAL_ADDRESS: &str = "localAddress";
pub(crate) const LOCAL_PORT: &str = "localPort";
pub(crate) const CONTAINER_PORT: &str = "containerPort";
pub(crate) const DEV_FORWARDED_PORTS: &str = "devForwardedPorts";
pub(crate) const RUNNING_IN: &str = "runningIn";
pub(crate) const CONTAINER_NAME: &str = "containerName";
pub(crate) const LANGUAGE: &str = "language";
pub(crate) const ENV: &str = "env";
pub(crate) const VALUE: &str = "value";
