#![allow(non_snake_case)]

use super::*;
use crmgen_core::{AttributeDescriptor, AttributeTypeCode};

fn account() -> EntityDescriptor {
    EntityDescriptor::new("account", "Account", "accountid")
        .with_attribute(
            AttributeDescriptor::new("accountid", AttributeTypeCode::Uniqueidentifier).primary_id(),
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

fn contact() -> EntityDescriptor {
    EntityDescriptor::new("contact", "Contact", "contactid").with_attribute(
        AttributeDescriptor::new("contactid", AttributeTypeCode::Uniqueidentifier).primary_id(),
    )
}

const ACCOUNT_MODULE: &str = r#"export interface AccountCollection extends RetrieveMultipleResponse<IAccount> {}

export interface IAccount {
    // [key: string]: string | number
    accountid?: string;
    numberofemployees?: number;
    _primarycontactid_value?: string;
}

export class AccountAttributes {
    accountid = { name: "accountid", api_name: "accountid" };
    numberofemployees = { name: "numberofemployees", api_name: "numberofemployees" };
    primarycontactid = { name: "primarycontactid", api_name: "_primarycontactid_value" };
}

export class Account {
    route: string = "accounts";
    id?: string;
    accountid?: string;
    numberofemployees?: number;
    _primarycontactid_value?: string;

    constructor(initData?: IAccount) {
        if (initData == undefined) {
            return;
        }
        this.accountid = initData.accountid;
        this.numberofemployees = initData.numberofemployees;
        this._primarycontactid_value = initData._primarycontactid_value;
        this.id = initData.accountid;
    }
}

"#;

#[test]
fn render_entity___renders_all_four_blocks() {
    let code = render_entity(String::new(), &account());

    assert_eq!(code, ACCOUNT_MODULE);
}

#[test]
fn render_entity___appends_to_accumulated_text() {
    let code = render_entity("// header\n".to_string(), &account());

    assert!(code.starts_with("// header\nexport interface AccountCollection"));
}

#[test]
fn render_entity___zero_attributes___still_complete() {
    let entity = EntityDescriptor::new("note", "Note", "noteid");

    let code = render_entity(String::new(), &entity);

    assert!(
        code.contains("export interface NoteCollection extends RetrieveMultipleResponse<INote> {}")
    );
    assert!(code.contains("export interface INote {\n    // [key: string]: string | number\n}\n"));
    assert!(code.contains("export class NoteAttributes {\n}\n"));
    assert!(code.contains("    route: string = \"notes\";\n    id?: string;\n"));
    assert!(code.contains("        this.id = initData.noteid;\n"));
    assert_eq!(code.matches('{').count(), code.matches('}').count());
}

#[test]
fn render_entity___constructor_returns_early_without_initializer() {
    let code = render_entity(String::new(), &account());

    let guard = code.find("if (initData == undefined)").unwrap();
    let first_assignment = code.find("this.accountid =").unwrap();
    assert!(guard < first_assignment);
    assert!(code.contains("            return;\n"));
}

#[test]
fn render_entity___route_lowercases_logical_name() {
    let entity = EntityDescriptor::new("SalesOrder", "SalesOrder", "salesorderid")
        .with_collection_name("salesorders_irrelevant");

    let code = render_entity(String::new(), &entity);

    assert!(code.contains("route: string = \"salesorders\";"));
}

#[test]
fn render_entity___activity_lookup_is_not_renamed() {
    let entity = EntityDescriptor::new("task", "Task", "activityid")
        .with_attribute(
            AttributeDescriptor::new("activityid", AttributeTypeCode::Uniqueidentifier)
                .primary_id(),
        )
        .with_attribute(AttributeDescriptor::new(
            "regardingactivityid",
            AttributeTypeCode::Lookup,
        ));

    let code = render_entity(String::new(), &entity);

    assert!(code.contains("    regardingactivityid?: string;\n"));
    assert!(!code.contains("_regardingactivityid_value"));
}

#[test]
fn render_entity___untyped_attribute_renders_as_string() {
    let entity = contact().with_attribute(AttributeDescriptor::untyped("mystery"));

    let code = render_entity(String::new(), &entity);

    assert!(code.contains("    mystery?: string;\n"));
}

#[test]
fn render_entity___missing_schema_name_uses_first_upper() {
    let entity = EntityDescriptor::new("lead", "", "leadid");

    let code = render_entity(String::new(), &entity);

    assert!(code.contains("export class Lead {"));
    assert!(code.contains("export interface ILead {"));
}

#[test]
fn render_entities___empty_selection___empty_text() {
    assert_eq!(render_entities(&[]), "");
}

#[test]
fn render_entities___concatenates_in_selection_order() {
    let code = render_entities(&[contact(), account()]);

    let contact_code = render_entity(String::new(), &contact());
    assert_eq!(code, format!("{contact_code}{ACCOUNT_MODULE}"));
}

#[test]
fn render_entities___no_cross_entity_interference() {
    let code = render_entities(&[account(), contact()]);

    let contact_start = code.find("export interface ContactCollection").unwrap();
    let (account_part, contact_part) = code.split_at(contact_start);
    assert!(account_part.contains("export class AccountAttributes"));
    assert!(!contact_part.contains("AccountAttributes"));
    assert!(!contact_part.contains("primarycontactid"));
}

#[test]
fn render_entities___duplicate_selection___renders_twice() {
    let code = render_entities(&[account(), account()]);

    assert_eq!(code, ACCOUNT_MODULE.repeat(2));
}

#[test]
fn render_entity___constructor_copies_every_interface_key() {
    let code = render_entity(String::new(), &account());

    let interface_keys: Vec<&str> = code
        .lines()
        .skip_while(|l| !l.starts_with("export interface IAccount"))
        .skip(2)
        .take_while(|l| *l != "}")
        .filter_map(|l| l.trim().split('?').next())
        .collect();

    assert_eq!(interface_keys.len(), 3);
    for key in interface_keys {
        assert!(code.contains(&format!("this.{key} = initData.{key};")));
    }
}
