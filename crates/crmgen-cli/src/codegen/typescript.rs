//! TypeScript client module generation.
//!
//! Each entity renders four blocks, in this order:
//!
//! ```text
//! export interface AccountCollection extends RetrieveMultipleResponse<IAccount> {}
//!
//! export interface IAccount {
//!     // [key: string]: string | number
//!     _primarycontactid_value?: string;
//! }
//!
//! export class AccountAttributes {
//!     primarycontactid = { name: "primarycontactid", api_name: "_primarycontactid_value" };
//! }
//!
//! export class Account {
//!     route: string = "accounts";
//!     id?: string;
//!     _primarycontactid_value?: string;
//!
//!     constructor(initData?: IAccount) {
//!         ...
//!     }
//! }
//! ```
//!
//! Blocks are accumulated with a fold over the selected entities, so the output
//! for a selection is the concatenation of each entity's output in selection order.
//! `RetrieveMultipleResponse<T>` is expected to be declared by the template.

use super::naming::{lookup_fixer, route_name, type_name};
use super::types::attribute_type;
use crmgen_core::EntityDescriptor;

/// Render the module body for the selected entities.
pub fn render_entities(entities: &[EntityDescriptor]) -> String {
    entities.iter().fold(String::new(), render_entity)
}

/// Append one entity's blocks to the accumulated module text.
pub fn render_entity(mut code: String, entity: &EntityDescriptor) -> String {
    let name = type_name(entity);
    tracing::debug!(
        entity = %entity.logical_name,
        attributes = entity.attributes.len(),
        "Rendering module blocks"
    );

    render_collection_interface(&mut code, &name);
    render_interface(&mut code, &name, entity);
    render_attribute_map(&mut code, &name, entity);
    render_class(&mut code, &name, entity);
    code
}

fn render_collection_interface(code: &mut String, name: &str) {
    code.push_str(&format!(
        "export interface {name}Collection extends RetrieveMultipleResponse<I{name}> {{}}\n\n"
    ));
}

fn render_interface(code: &mut String, name: &str, entity: &EntityDescriptor) {
    code.push_str(&format!("export interface I{name} {{\n"));
    code.push_str("    // [key: string]: string | number\n");
    for attr in &entity.attributes {
        code.push_str(&format!(
            "    {}?: {};\n",
            lookup_fixer(attr),
            attribute_type(attr).typescript()
        ));
    }
    code.push_str("}\n\n");
}

fn render_attribute_map(code: &mut String, name: &str, entity: &EntityDescriptor) {
    code.push_str(&format!("export class {name}Attributes {{\n"));
    for attr in &entity.attributes {
        code.push_str(&format!(
            "    {0} = {{ name: \"{0}\", api_name: \"{1}\" }};\n",
            attr.logical_name,
            lookup_fixer(attr)
        ));
    }
    code.push_str("}\n\n");
}

fn render_class(code: &mut String, name: &str, entity: &EntityDescriptor) {
    code.push_str(&format!("export class {name} {{\n"));
    code.push_str(&format!(
        "    route: string = \"{}\";\n",
        route_name(&entity.logical_name)
    ));
    code.push_str("    id?: string;\n");
    for attr in &entity.attributes {
        code.push_str(&format!(
            "    {}?: {};\n",
            lookup_fixer(attr),
            attribute_type(attr).typescript()
        ));
    }

    code.push_str(&format!("\n    constructor(initData?: I{name}) {{\n"));
    code.push_str("        if (initData == undefined) {\n");
    code.push_str("            return;\n");
    code.push_str("        }\n");
    for attr in &entity.attributes {
        let key = lookup_fixer(attr);
        code.push_str(&format!("        this.{key} = initData.{key};\n"));
    }
    code.push_str(&format!(
        "        this.id = initData.{};\n",
        entity.primary_id_attribute
    ));
    code.push_str("    }\n");
    code.push_str("}\n\n");
}

#[cfg(test)]
#[path = "typescript/typescript_tests.rs"]
mod typescript_tests;
