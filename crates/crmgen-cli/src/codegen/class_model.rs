//! Language-neutral class model for entity classes.
//!
//! The model is the input to a [`ClassEmitter`](super::csharp::ClassEmitter):
//!
//! - [`CodeNamespace`]: a named namespace holding one class per selected entity
//! - [`ClassModel`]: a class with typed fields
//! - [`FieldModel`]: a field, optionally a constant with a textual initializer
//!
//! # Building
//!
//! ```rust
//! use crmgen_cli::codegen::class_model::build_class_model;
//! use crmgen_core::{AttributeDescriptor, AttributeTypeCode, EntityDescriptor};
//!
//! let account = EntityDescriptor::new("account", "Account", "accountid")
//!     .with_attribute(
//!         AttributeDescriptor::new("accountid", AttributeTypeCode::Uniqueidentifier).primary_id(),
//!     );
//!
//! let namespace = build_class_model("Crm.Entities", &[account]);
//! assert_eq!(namespace.classes[0].fields.len(), 2); // accountid + route
//! ```
//!
//! Field names are the raw attribute logical names. Lookup renaming only applies
//! to the client module.

use super::naming::type_name;
use super::types::{TargetType, map_type};
use crmgen_core::EntityDescriptor;

/// A namespace of generated classes.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeNamespace {
    /// Namespace name (e.g. `Crm.Entities`).
    pub name: String,

    /// Classes in selection order.
    pub classes: Vec<ClassModel>,
}

/// A generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    /// Class name.
    pub name: String,

    /// Fields in attribute order, followed by the `route` constant.
    pub fields: Vec<FieldModel>,
}

/// A field in a generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    /// Field name.
    pub name: String,

    /// Field type.
    pub ty: TargetType,

    /// Constant initializer; `Some` makes the field a constant.
    pub constant: Option<String>,
}

impl FieldModel {
    /// Create a plain field.
    pub fn new(name: impl Into<String>, ty: TargetType) -> Self {
        Self {
            name: name.into(),
            ty,
            constant: None,
        }
    }

    /// Create a textual constant.
    pub fn constant(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: TargetType::Textual,
            constant: Some(value.into()),
        }
    }
}

impl ClassModel {
    /// Build the class for one entity.
    ///
    /// Attributes without a type code are skipped with a warning.
    pub fn from_entity(entity: &EntityDescriptor) -> ClassModel {
        let mut fields = Vec::with_capacity(entity.attributes.len() + 1);

        for attr in &entity.attributes {
            match &attr.attribute_type {
                Some(code) => fields.push(FieldModel::new(&attr.logical_name, map_type(code))),
                None => tracing::warn!(
                    entity = %entity.logical_name,
                    attribute = %attr.logical_name,
                    "Skipping attribute without a type code"
                ),
            }
        }

        fields.push(FieldModel::constant("route", collection_route(entity)));

        ClassModel {
            name: type_name(entity),
            fields,
        }
    }
}

/// Collection name reported by the metadata service, or `<logical_name>s`.
pub fn collection_route(entity: &EntityDescriptor) -> String {
    match &entity.collection_name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("{}s", entity.logical_name),
    }
}

/// Build the class model for the selected entities, preserving selection order.
pub fn build_class_model(namespace: &str, entities: &[EntityDescriptor]) -> CodeNamespace {
    let classes = entities
        .iter()
        .map(|entity| {
            tracing::debug!(entity = %entity.logical_name, "Building class model");
            ClassModel::from_entity(entity)
        })
        .collect();

    CodeNamespace {
        name: namespace.to_string(),
        classes,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crmgen_core::{AttributeDescriptor, AttributeTypeCode};

    fn account() -> EntityDescriptor {
        EntityDescriptor::new("account", "Account", "accountid")
            .with_attribute(
                AttributeDescriptor::new("accountid", AttributeTypeCode::Uniqueidentifier)
                    .primary_id(),
            )
            .with_attribute(AttributeDescriptor::new(
                "numberofemployees",
                AttributeTypeCode::Integer,
            ))
            .with_attribute(AttributeDescriptor::new(
                "primarycontactid",
                AttributeTypeCode::Lookup,
            ))
    }

    #[test]
    fn from_entity___maps_fields_in_attribute_order() {
        let class = ClassModel::from_entity(&account());

        let names: Vec<&str> = class.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["accountid", "numberofemployees", "primarycontactid", "route"]
        );
        assert_eq!(class.name, "Account");
    }

    #[test]
    fn from_entity___lookup_keeps_raw_name() {
        let class = ClassModel::from_entity(&account());

        assert!(class.fields.iter().any(|f| f.name == "primarycontactid"));
        assert!(!class.fields.iter().any(|f| f.name.starts_with('_')));
    }

    #[test]
    fn from_entity___types_fields_via_mapper() {
        let class = ClassModel::from_entity(&account());

        assert_eq!(class.fields[0].ty, TargetType::Textual);
        assert_eq!(class.fields[1].ty, TargetType::Numeric);
        assert_eq!(class.fields[2].ty, TargetType::Textual);
    }

    #[test]
    fn from_entity___route_uses_collection_name() {
        let entity = EntityDescriptor::new("person", "Person", "personid")
            .with_collection_name("people");

        let class = ClassModel::from_entity(&entity);

        let route = class.fields.last().unwrap();
        assert_eq!(route.name, "route");
        assert_eq!(route.constant.as_deref(), Some("people"));
        assert_eq!(route.ty, TargetType::Textual);
    }

    #[test]
    fn from_entity___route_falls_back_to_logical_name() {
        let class = ClassModel::from_entity(&account());

        assert_eq!(
            class.fields.last().unwrap().constant.as_deref(),
            Some("accounts")
        );
    }

    #[test]
    fn from_entity___skips_untyped_attribute() {
        let entity = account().with_attribute(AttributeDescriptor::untyped("broken"));

        let class = ClassModel::from_entity(&entity);

        assert!(!class.fields.iter().any(|f| f.name == "broken"));
        assert_eq!(class.fields.len(), 4);
    }

    #[test]
    fn build_class_model___preserves_selection_order() {
        let contact = EntityDescriptor::new("contact", "Contact", "contactid");

        let namespace = build_class_model("Crm.Entities", &[contact, account()]);

        assert_eq!(namespace.name, "Crm.Entities");
        let names: Vec<&str> = namespace.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Contact", "Account"]);
    }

    #[test]
    fn build_class_model___empty_selection___empty_namespace() {
        let namespace = build_class_model("Crm.Entities", &[]);

        assert!(namespace.classes.is_empty());
    }
}
