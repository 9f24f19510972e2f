use crate::commands::{parse_bytecode, read_bytecode, translate};
use gremlin_translator::{StringQuoting, TranslatorConfig};
use std::fs;
use tempfile::TempDir;

const AIRPORTS: &str = r#"{
    "source_instructions": [
        { "operator": "withSack", "arguments": [{ "i32": 0 }] }
    ],
    "step_instructions": [
        { "operator": "V" },
        { "operator": "hasLabel", "arguments": [
            { "predicate": { "operator": "within", "values": [
                { "string": "airport" }, { "string": "continent" }
            ] } }
        ] },
        { "operator": "order" },
        { "operator": "by", "arguments": [
            { "traversal": { "bytecode": { "step_instructions": [{ "operator": "id" }] }, "anonymous": true } },
            { "token": { "order": "desc" } }
        ] },
        { "operator": "limit", "arguments": [{ "i64": 5 }] }
    ]
}"#;

#[test]
fn test_translate_json_bytecode() {
    let bytecode = parse_bytecode(AIRPORTS).expect("bytecode should parse");
    let translated = translate(&bytecode, TranslatorConfig::default()).unwrap();
    assert_eq!(
        translated,
        "g.V().hasLabel(within(['airport','continent'])).order().by(id(),desc).limit(5)"
    );
}

#[test]
fn test_translate_with_sources_and_custom_name() {
    let bytecode = parse_bytecode(AIRPORTS).expect("bytecode should parse");
    let config = TranslatorConfig::new("airports").with_source_instructions(true);
    let translated = translate(&bytecode, config).unwrap();
    assert!(translated.starts_with("airports.withSack(0).V()"));
}

#[test]
fn test_translate_map_and_binding_arguments() {
    let raw = r#"{
        "step_instructions": [
            { "operator": "mergeV", "arguments": [
                { "map": [
                    [{ "token": { "t": "label" } }, { "string": "person" }],
                    [{ "string": "name" }, { "binding": { "key": "name", "value": { "string": "O'Hare" } } }]
                ] }
            ] },
            { "operator": "property", "arguments": [{ "string": "city" }, { "string": "O'Hare" }] }
        ]
    }"#;
    let bytecode = parse_bytecode(raw).expect("bytecode should parse");

    let verbatim = translate(&bytecode, TranslatorConfig::default()).unwrap();
    assert_eq!(
        verbatim,
        "g.mergeV({label:'person','name':name}).property('city','O'Hare')"
    );

    let escaped = translate(
        &bytecode,
        TranslatorConfig::default().with_string_quoting(StringQuoting::Escaped),
    )
    .unwrap();
    assert!(escaped.ends_with(r"property('city','O\'Hare')"));
}

#[test]
fn test_translate_reports_depth_failure() {
    let raw = r#"{ "step_instructions": [
        { "operator": "inject", "arguments": [{ "list": [{ "list": [{ "i32": 1 }] }] }] }
    ] }"#;
    let bytecode = parse_bytecode(raw).expect("bytecode should parse");
    let err = translate(&bytecode, TranslatorConfig::default().with_max_depth(Some(1))).unwrap_err();
    assert!(format!("{err:?}").contains("depth limit of 1"));
}

#[test]
fn test_parse_rejects_malformed_json() {
    let err = parse_bytecode("{ not json").unwrap_err();
    assert!(err.to_string().contains("Failed to parse bytecode JSON"));
}

#[test]
fn test_read_bytecode_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bytecode.json");
    fs::write(&path, AIRPORTS).expect("Failed to write bytecode");

    let bytecode = read_bytecode(Some(&path)).expect("bytecode should load");
    assert_eq!(bytecode.step_instructions().len(), 5);
    assert_eq!(bytecode.source_instructions().len(), 1);
}
