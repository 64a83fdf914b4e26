//! Typed results produced by the parser.
//!
//! Every entity is fully built before it is handed out; builders are
//! consumed by `build()`, so a half-populated value is never observable.

mod component;
mod component_type;
mod debug;
mod feature;
mod url;

pub use component::{ComponentInfo, ComponentInfoBuilder, ComponentKind};
pub use component_type::{ComponentTypeInfo, ComponentTypeInfoBuilder, Starter, StarterBuilder};
pub use debug::DebugStatus;
pub use feature::{ComponentFeature, ComponentFeatures};
pub use url::{Url, DEFAULT_HOST, DEFAULT_PORT};

use serde::Serialize;

/// Everything `odo describe component` reports in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDescription {
    /// Devfile metadata and supported features.
    pub info: ComponentInfo,
    /// Active port forwards.
    pub urls: Vec<Url>,
    /// Features the component is currently running under.
    pub running: ComponentFeatures,
}
