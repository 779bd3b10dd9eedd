pub mod base;
pub mod docs;
pub mod solid;

pub use docs::get_component_details_template;
pub use solid::{generate_solid_js_types, SolidTypeGenerator};
