use crate::generators::base::templates::register_common_filters;
use tera::{Context, Tera};

pub const DECLARATION_TEMPLATE: &str = "solid/solid-js.d.ts.tera";

/// Create a Tera engine with the SolidJS declaration templates and shared filters
pub fn create_template_engine() -> crate::Result<Tera> {
    let mut tera = Tera::default();
    register_templates(&mut tera)?;
    register_common_filters(&mut tera);
    Ok(tera)
}

fn register_templates(tera: &mut Tera) -> crate::Result<()> {
    macro_rules! template {
        ($name:expr, $path:expr) => {
            tera.add_raw_template($name, include_str!($path)).map_err(|e| {
                crate::Error::CodeGeneration(format!("Failed to register {}: {}", $name, e))
            })?;
        };
    }

    template!(
        "solid/partials/scoped_elements.tera",
        "templates/partials/scoped_elements.tera"
    );
    template!(
        "solid/partials/base_props.tera",
        "templates/partials/base_props.tera"
    );
    template!(
        "solid/partials/props_type.tera",
        "templates/partials/props_type.tera"
    );
    template!(
        "solid/partials/custom_elements.tera",
        "templates/partials/custom_elements.tera"
    );

    template!(DECLARATION_TEMPLATE, "templates/solid-js.d.ts.tera");

    Ok(())
}

/// Render a template, keeping the source chain in the error message
pub fn render(tera: &Tera, template_name: &str, context: &Context) -> crate::Result<String> {
    tera.render(template_name, context).map_err(|e| {
        let mut message = format!("Failed to render template '{}': {}", template_name, e);
        if let Some(source) = std::error::Error::source(&e) {
            message.push_str(&format!("\nSource: {}", source));
        }
        crate::Error::CodeGeneration(message)
    })
}
