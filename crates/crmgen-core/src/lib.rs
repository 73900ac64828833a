//! crmgen-core - Entity metadata model, configuration and errors
//!
//! This crate provides the foundational types shared by the crmgen generators:
//! - [`EntityDescriptor`] and [`AttributeDescriptor`] describing a CRM entity schema
//! - [`MetadataDocument`] for loading entity definitions exported by the metadata service
//! - [`GeneratorConfig`] for generator configuration (`crmgen.toml`)
//! - [`CodegenError`] for error handling

mod attribute;
mod config;
mod entity;
mod error;

pub use attribute::{AttributeDescriptor, AttributeTypeCode};
pub use config::{DEFAULT_PLACEHOLDER, GeneratorConfig, LOG_LEVELS};
pub use entity::{EntityDescriptor, MetadataDocument, RESERVED_MEMBER_NAMES};
pub use error::{CodegenError, CodegenResult};
