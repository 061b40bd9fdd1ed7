//! Validation Tests
//!
//! End-to-end: build a document, render it and check sample data with the
//! draft-04 validator.

use serde_json::json;
use tracing_subscriber::EnvFilter;
use typed_schema::{
    ArrayNode, Delta, DocumentTemplate, EnumNode, Node, ObjectNode, ObjectTemplate, OneOfNode,
    ReferenceNode, Render, SchemaConfig, SchemaDocument, StringFormat, StringNode, TypeNode,
    ValidationConfig, Validator,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn location_schema() -> SchemaDocument {
    let template = ObjectTemplate::new()
        .with_required(["street", "street_number", "zip", "location", "staff"])
        .with_property("street", StringNode::new())
        .with_property("street_number", StringNode::new())
        .with_property("zip", TypeNode::union([Node::number(), Node::string()]))
        .with_property("location", StringNode::new())
        .with_property(
            "staff",
            ArrayNode::new().with_item(StringNode::new()).with_min_items(1),
        );
    DocumentTemplate::new(template).instantiate()
}

// =============================================================================
// End to End
// =============================================================================

#[test]
fn test_conformant_data_passes() {
    init_tracing();
    let document = location_schema();
    let data = json!({
        "street": "m",
        "street_number": "12a",
        "zip": 12345,
        "location": "Berlin",
        "staff": ["Hans"]
    });
    assert!(document.validate(&data).is_ok());
    assert!(document.is_valid(&data));
}

#[test]
fn test_empty_staff_violates_min_items() {
    init_tracing();
    let document = location_schema();
    let data = json!({
        "street": "m",
        "street_number": "12a",
        "zip": 12345,
        "location": "Berlin",
        "staff": []
    });
    let error = document.validate(&data).unwrap_err();
    assert_eq!(error.instance_path.to_string(), "/staff");
    assert!(error.schema_path.to_string().ends_with("minItems"));
}

#[test]
fn test_string_zip_is_accepted_by_union() {
    let document = location_schema();
    let data = json!({
        "street": "m",
        "street_number": "12a",
        "zip": "10115",
        "location": "Berlin",
        "staff": ["Hans"]
    });
    assert!(document.is_valid(&data));
}

#[test]
fn test_missing_required_field_is_reported() {
    let document = location_schema();
    let error = document
        .validate(&json!({"street": "m", "staff": ["Hans"]}))
        .unwrap_err();
    assert!(error.to_string().contains("required"));
}

// =============================================================================
// Default-Constructed Nodes
// =============================================================================

#[test]
fn test_item_less_array_compiles_and_validates() {
    init_tracing();
    let document = SchemaDocument::from_object(
        ObjectNode::new().with_property("tags", ArrayNode::new().with_min_items(1)),
    );
    let schema = document.render();
    assert!(Validator::default().compile(&schema).is_ok());

    assert!(document.validate(&json!({"tags": ["a"]})).is_ok());
    assert!(document.is_valid(&json!({"tags": ["a", 2]})));

    let error = document.validate(&json!({"tags": []})).unwrap_err();
    assert_eq!(error.instance_path.to_string(), "/tags");
    assert!(error.schema_path.to_string().ends_with("minItems"));
}

#[test]
fn test_document_of_default_nodes() {
    let document = SchemaDocument::from_object(
        ObjectNode::new()
            .with_property("list", ArrayNode::new())
            .with_property("nested", ObjectNode::new())
            .with_property("anything", TypeNode::any()),
    )
    .with_definition("empty", ObjectNode::new());

    let data = json!({
        "list": [1, "two", null],
        "nested": {"free": true},
        "anything": [{"x": 1}]
    });
    assert!(document.validate(&data).is_ok());
    assert!(document.is_valid(&json!({})));
    assert!(!document.is_valid(&json!({"list": {}})));
    assert!(!document.is_valid(&json!({"nested": []})));
}

#[test]
fn test_default_template_instance_validates() {
    let document = DocumentTemplate::new(ObjectTemplate::new()).instantiate();
    assert!(document.validate(&json!({"any": "thing"})).is_ok());
    assert!(!document.is_valid(&json!("not an object")));
}

// =============================================================================
// References and Composition
// =============================================================================

#[test]
fn test_reference_is_followed() {
    let document = SchemaDocument::from_object(
        ObjectNode::new()
            .with_property("home", ReferenceNode::new("address"))
            .require("home"),
    )
    .with_definition(
        "address",
        ObjectNode::new()
            .with_property("street", StringNode::new().with_min_length(2))
            .require("street"),
    );

    assert!(document.is_valid(&json!({"home": {"street": "Unter den Linden"}})));
    assert!(!document.is_valid(&json!({"home": {"street": "U"}})));
    assert!(!document.is_valid(&json!({"home": {}})));
}

#[test]
fn test_one_of_and_enum() {
    let document = SchemaDocument::from_object(ObjectNode::new().with_property(
        "contact",
        OneOfNode::new([
            Node::from(StringNode::new().with_format(StringFormat::Email)),
            Node::from(EnumNode::new(["none", "unknown"]).unwrap()),
        ]),
    ));

    assert!(document.is_valid(&json!({"contact": "hans@example.org"})));
    assert!(document.is_valid(&json!({"contact": "none"})));
    assert!(!document.is_valid(&json!({"contact": "nobody"})));
}

#[test]
fn test_closed_object_rejects_extra_properties() {
    let template = ObjectTemplate::new()
        .with_property("id", Node::number())
        .with_additional_properties(false);
    let document = DocumentTemplate::new(template).instantiate();

    assert!(document.is_valid(&json!({"id": 1})));
    assert!(!document.is_valid(&json!({"id": 1, "extra": true})));
}

#[test]
fn test_refined_document_validates_its_own_requirements() {
    let base = DocumentTemplate::new(
        ObjectTemplate::new()
            .with_property("name", StringNode::new())
            .require("name"),
    );
    let derived = base.refine(
        Delta::new()
            .discard_required("name")
            .require("id")
            .add_property("id", Node::number()),
    );

    let data = json!({"id": 7});
    assert!(derived.instantiate().is_valid(&data));
    assert!(!base.instantiate().is_valid(&data));
}

// =============================================================================
// Validator Settings
// =============================================================================

#[test]
fn test_all_errors_are_available() {
    let document = location_schema();
    let errors = Validator::default()
        .validate_all(&document.render(), &json!({}))
        .unwrap_err();
    assert_eq!(errors.len(), 5);
}

#[test]
fn test_lenient_formats() {
    let document = SchemaDocument::from_object(
        ObjectNode::new().with_property("mail", StringNode::new().with_format(StringFormat::Email)),
    );
    let data = json!({"mail": "not-an-address"});

    assert!(document.validate(&data).is_err());

    let lenient = Validator::new(ValidationConfig {
        validate_formats: false,
    });
    assert!(document.validate_with(&lenient, &data).is_ok());
    assert!(document.is_valid_with(&lenient, &data));
    assert!(!document.is_valid(&data));
}

#[test]
fn test_loaded_config_drives_render_and_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schemas.toml");
    std::fs::write(&path, "[validation]\nvalidate_formats = false\n").unwrap();
    let config = SchemaConfig::load_from(path.to_str()).unwrap();

    let document = SchemaDocument::from_object(
        ObjectNode::new()
            .with_property("mail", StringNode::new().with_format(StringFormat::Email))
            .with_property("tags", ArrayNode::new()),
    );
    assert!(document.render_with(&config.render)["properties"]["tags"]
        .get("items")
        .is_none());

    let validator = Validator::new(config.validation);
    let data = json!({"mail": "not-an-address", "tags": []});
    assert!(document.is_valid_with(&validator, &data));
    assert!(!document.is_valid(&data));
}
