//! Manifest analysis: turns raw declarations into [`Component`](crate::models::Component)s
//! and answers the lookups the generators need about them.

pub mod extractor;
pub mod members;

pub use extractor::get_components;
pub use members::{
    get_component_methods, get_component_properties, get_custom_event_types, get_description,
    get_member_description,
};
