//! Entity metadata types and the metadata document loader

use crate::attribute::AttributeDescriptor;
use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Members declared by every generated entity class, unavailable to attributes.
pub const RESERVED_MEMBER_NAMES: &[&str] = &["id", "route"];

/// One selectable entity type.
///
/// Attribute order is the retrieval order and is preserved by every generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityDescriptor {
    /// Stable lowercase identifier (e.g. `account`).
    pub logical_name: String,

    /// Display-cased name used for generated identifiers.
    #[serde(default)]
    pub schema_name: String,

    /// Logical name of the primary id attribute.
    pub primary_id_attribute: String,

    /// Plural collection name used by the web API, when the service supplied one.
    #[serde(default, rename = "LogicalCollectionName")]
    pub collection_name: Option<String>,

    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
}

impl EntityDescriptor {
    /// Create an entity with no attributes.
    pub fn new(
        logical_name: impl Into<String>,
        schema_name: impl Into<String>,
        primary_id_attribute: impl Into<String>,
    ) -> Self {
        Self {
            logical_name: logical_name.into(),
            schema_name: schema_name.into(),
            primary_id_attribute: primary_id_attribute.into(),
            collection_name: None,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the web API collection name.
    pub fn with_collection_name(mut self, collection_name: impl Into<String>) -> Self {
        self.collection_name = Some(collection_name.into());
        self
    }

    /// Look up an attribute by logical name.
    pub fn attribute(&self, logical_name: &str) -> Option<&AttributeDescriptor> {
        self.attributes
            .iter()
            .find(|a| a.logical_name == logical_name)
    }

    /// Check the structural invariants of the entity.
    pub fn validate(&self) -> CodegenResult<()> {
        if self.logical_name.is_empty() {
            return Err(CodegenError::invalid_entity(
                &self.schema_name,
                "logical name cannot be empty",
            ));
        }

        let mut seen = HashSet::new();
        let mut api_names = HashSet::new();
        for attr in &self.attributes {
            if attr.logical_name.is_empty() {
                return Err(CodegenError::invalid_entity(
                    &self.logical_name,
                    "attribute logical name cannot be empty",
                ));
            }
            if !seen.insert(attr.logical_name.as_str()) {
                return Err(CodegenError::invalid_entity(
                    &self.logical_name,
                    format!("duplicate attribute '{}'", attr.logical_name),
                ));
            }
            if RESERVED_MEMBER_NAMES.contains(&attr.logical_name.as_str()) {
                return Err(CodegenError::invalid_entity(
                    &self.logical_name,
                    format!("attribute name '{}' is reserved", attr.logical_name),
                ));
            }
            let api_name = attr.api_name();
            if !api_names.insert(api_name.clone()) {
                return Err(CodegenError::invalid_entity(
                    &self.logical_name,
                    format!(
                        "attribute '{}' collides with another attribute as '{api_name}'",
                        attr.logical_name
                    ),
                ));
            }
        }

        if self.attribute(&self.primary_id_attribute).is_none() {
            return Err(CodegenError::invalid_entity(
                &self.logical_name,
                format!(
                    "primary id attribute '{}' not found",
                    self.primary_id_attribute
                ),
            ));
        }

        Ok(())
    }

    /// Flag the attribute named by `primary_id_attribute` when the document did not.
    fn infer_primary_id(&mut self) {
        if self.attributes.iter().any(|a| a.is_primary_id) {
            return;
        }
        let primary = self.primary_id_attribute.as_str();
        if let Some(attr) = self
            .attributes
            .iter_mut()
            .find(|a| a.logical_name == primary)
        {
            attr.is_primary_id = true;
        }
    }
}

/// Accepted document shapes: a bare array or a web API `{ "value": [...] }` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    List(Vec<EntityDescriptor>),
    Envelope { value: Vec<EntityDescriptor> },
}

/// A set of entity definitions exported from the metadata service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDocument {
    entities: Vec<EntityDescriptor>,
}

impl MetadataDocument {
    /// Wrap already materialized entity definitions.
    pub fn new(entities: Vec<EntityDescriptor>) -> Self {
        Self { entities }
    }

    /// Parse a metadata document from JSON.
    pub fn from_json(json: &str) -> CodegenResult<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        let mut entities = match raw {
            RawDocument::List(entities) => entities,
            RawDocument::Envelope { value } => value,
        };
        for entity in &mut entities {
            entity.infer_primary_id();
        }
        Ok(Self { entities })
    }

    /// Load a metadata document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::Io(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// All entities in document order.
    pub fn entities(&self) -> &[EntityDescriptor] {
        &self.entities
    }

    /// Find an entity by logical name.
    pub fn get(&self, logical_name: &str) -> Option<&EntityDescriptor> {
        self.entities
            .iter()
            .find(|e| e.logical_name == logical_name)
    }

    /// Select entities in the requested order.
    ///
    /// Duplicates in `names` are kept, so the same entity may be selected twice.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> CodegenResult<Vec<EntityDescriptor>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| CodegenError::UnknownEntity(name.to_string()))
            })
            .collect()
    }
}
