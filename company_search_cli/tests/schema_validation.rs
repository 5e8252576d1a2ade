use company_search::{load_catalog, search, Company};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_companies() -> Vec<Company> {
    let path = workspace_root().join("company_search/tests/fixtures/companies.json");
    load_catalog(&path).unwrap_or_else(|e| panic!("load catalog {}: {}", path.display(), e))
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn matches_json(query: &str) -> Value {
    let companies = load_companies();
    let results = search(&companies, query);
    serde_json::to_value(&results).expect("matches serialize")
}

// ---------------------------------------------------------------------------
// Positive validation: search output conforms to the schema
// ---------------------------------------------------------------------------

#[test]
fn test_search_output_conforms_to_schema() {
    let schema = load_schema("match_result.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("match schema compiles");

    for query in ["aapl", "apple", "ms", "qxzy", "hwupkr0mpou8fgxbt394", "in"] {
        let data = matches_json(query);
        assert!(!data.as_array().unwrap().is_empty(), "no matches for '{query}'");
        if let Err(e) = validator.validate(&data) {
            panic!("search output for '{query}' failed validation: {e}");
        }
    }
}

#[test]
fn test_empty_result_conforms_to_schema() {
    let schema = load_schema("match_result.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("match schema compiles");
    let data = matches_json("zzzz-no-such-company");
    assert_eq!(data, serde_json::json!([]));
    assert!(validator.validate(&data).is_ok());
}

// ---------------------------------------------------------------------------
// Negative validation: schema rejects malformed output
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_missing_required_field() {
    let schema = load_schema("match_result.schema.json");
    let mut data = matches_json("aapl");

    data[0]
        .as_object_mut()
        .expect("match is an object")
        .remove("identifierType");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject match missing identifierType"
    );
}

#[test]
fn test_schema_rejects_invalid_identifier_type() {
    let schema = load_schema("match_result.schema.json");
    let mut data = matches_json("aapl");

    data[0]
        .as_object_mut()
        .expect("match is an object")
        .insert("identifierType".to_string(), Value::String("isin".to_string()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject unknown identifierType"
    );
}

#[test]
fn test_schema_rejects_confidence_above_one() {
    let schema = load_schema("match_result.schema.json");
    let mut data = matches_json("aapl");

    data[0]
        .as_object_mut()
        .expect("match is an object")
        .insert("confidence".to_string(), serde_json::json!(1.5));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject confidence outside [0, 1]"
    );
}

#[test]
fn test_schema_rejects_additional_properties() {
    let schema = load_schema("match_result.schema.json");
    let mut data = matches_json("aapl");

    data[0]
        .as_object_mut()
        .expect("match is an object")
        .insert("bogusField".to_string(), Value::Number(123.into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject additional properties"
    );
}
