//! Conversion of odo JSON documents into the typed [`model`](crate::model).
//!
//! [`decode`] handles the describe/list/registry outputs and never fails;
//! [`schema`] resolves `$ref`s in OpenAPI documents and fails loudly.

pub mod decode;
mod fields;
pub mod schema;

pub use decode::{
    parse_component_description, parse_component_info, parse_component_state,
    parse_component_type_info, parse_debug_status, parse_describe_component_info,
    parse_features, parse_forwarded_urls, parse_starter,
};
pub use schema::{find_schema, resolve, resolve_refs};
