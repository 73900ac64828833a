//! Code generation from CRM entity metadata.
//!
//! This module renders two artifacts from a selection of [`EntityDescriptor`]s:
//!
//! - **Class file**: a language-neutral [`CodeNamespace`] emitted as C# by [`CSharpEmitter`]
//! - **Client module**: TypeScript interfaces, attribute maps and data classes, substituted
//!   into a module [`Template`]
//!
//! # Architecture
//!
//! ```text
//! EntityDescriptor[]
//!     ↓
//!  ├─→ [ClassModel builder] → CodeNamespace → [ClassEmitter] → Entities.cs
//!  └─→ [Module renderer] (fold) → text → [Template] → entities.ts
//! ```
//!
//! Both paths share the same type mapping ([`types`]) and naming rules ([`naming`]).
//!
//! # Usage
//!
//! ```rust
//! use crmgen_cli::codegen::{CSharpEmitter, Template, generate_class_file, generate_module};
//! use crmgen_core::{AttributeDescriptor, AttributeTypeCode, EntityDescriptor};
//!
//! let account = EntityDescriptor::new("account", "Account", "accountid")
//!     .with_attribute(
//!         AttributeDescriptor::new("accountid", AttributeTypeCode::Uniqueidentifier).primary_id(),
//!     )
//!     .with_attribute(AttributeDescriptor::new("primarycontactid", AttributeTypeCode::Lookup));
//!
//! let class_file = generate_class_file("Crm.Entities", &[account.clone()], &CSharpEmitter);
//! assert!(class_file.contains("public string primarycontactid;"));
//!
//! let module = generate_module(&[account], &Template::default());
//! assert!(module.text().contains("_primarycontactid_value?: string;"));
//! ```
//!
//! # See Also
//!
//! - [`class_model`] module for the class model
//! - [`typescript`] module for the client module blocks
//! - [`template`] module for placeholder substitution

pub mod class_model;
pub mod csharp;
pub mod naming;
pub mod template;
pub mod types;
pub mod typescript;

pub use class_model::{ClassModel, CodeNamespace, FieldModel, build_class_model};
pub use csharp::{CSharpEmitter, ClassEmitter};
pub use template::{Substitution, Template};
pub use types::{TargetType, map_type};
pub use typescript::render_entities;

use crmgen_core::EntityDescriptor;

/// Render the class file for the selected entities.
pub fn generate_class_file(
    namespace: &str,
    entities: &[EntityDescriptor],
    emitter: &impl ClassEmitter,
) -> String {
    emitter.emit(&build_class_model(namespace, entities))
}

/// Render the client module for the selected entities into `template`.
pub fn generate_module(entities: &[EntityDescriptor], template: &Template) -> Substitution {
    let content = render_entities(entities);
    tracing::debug!(
        entities = entities.len(),
        bytes = content.len(),
        "Rendered module content"
    );
    template.render(&content)
}
