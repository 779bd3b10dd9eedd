pub mod file_writer;
pub mod template_context;
pub mod template_helpers;
pub mod templates;

pub use file_writer::FileWriter;
pub use template_context::{ComponentContext, ImportContext, MemberEntryContext};
pub use template_helpers::TemplateHelpers;
