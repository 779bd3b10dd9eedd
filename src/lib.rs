//! # Custom Elements TypeGen
//!
//! Generate SolidJS type declarations from a Custom Elements Manifest.
//!
//! This library reads a `custom-elements.json` file produced by a manifest analyzer and
//! writes a single `.d.ts` file that gives every custom element typed attributes,
//! `prop:` properties and `on:` event handlers in Solid's JSX, with the element's
//! events, methods, slots and CSS hooks rendered as hover documentation.
//!
//! ## Features
//!
//! - 🧩 **Component Discovery**: Picks custom element classes out of every manifest module
//! - 📝 **Props Types**: Attributes, public fields and events for each tag
//! - 📦 **Type Imports**: Per-component or global import paths, named or default exports
//! - 📚 **Hover Docs**: Markdown details for events, methods, slots, CSS properties and parts
//! - 🏷️ **Tag Naming**: Optional prefix and suffix around every tag name
//!
//! ## Quick Start
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Write a config file with the defaults
//! cem-typegen init
//!
//! # Generate ./solid-js.d.ts from ./custom-elements.json
//! cem-typegen generate --config cem-typegen.json
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use custom_elements_typegen::{generate_from_config, GenerateConfig, Logger};
//!
//! let config = GenerateConfig {
//!     manifest: Some("./dist/custom-elements.json".to_string()),
//!     outdir: Some("./types".to_string()),
//!     global_type_path: Some("my-library".to_string()),
//!     ..Default::default()
//! };
//!
//! let path = generate_from_config(&config, &Logger::new(false, false))?;
//! # Ok::<(), custom_elements_typegen::Error>(())
//! ```
//!
//! Rendering without touching the filesystem:
//!
//! ```rust
//! use custom_elements_typegen::{Manifest, Options, SolidTypeGenerator};
//!
//! let manifest = Manifest::from_json(r#"{"modules": []}"#)?;
//! let options = Options::default();
//! let declarations = SolidTypeGenerator::new(&options)?.render(&manifest)?;
//! assert!(declarations.contains("export type CustomElements = {};"));
//! # Ok::<(), custom_elements_typegen::Error>(())
//! ```
//!
//! ## Example
//!
//! Given this manifest declaration:
//!
//! ```json
//! {
//!   "kind": "class",
//!   "name": "Button",
//!   "tagName": "my-button",
//!   "customElement": true,
//!   "attributes": [{ "name": "disabled", "type": { "text": "boolean" } }]
//! }
//! ```
//!
//! The generated file contains:
//!
//! ```typescript
//! type ButtonProps = {
//!   /** */
//!   "disabled"?: boolean;
//! };
//!
//! export type CustomElements = {
//!   /**
//!    * ...
//!    */
//!   "my-button": Partial<ButtonProps | BaseProps | BaseEvents>;
//! };
//! ```

pub mod analysis;
mod error;
pub mod generators;
pub mod interface;
pub mod models;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use generators::{generate_solid_js_types, SolidTypeGenerator};
pub use interface::config::{ComponentTypePath, GenerateConfig, Labels, Options};
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};
