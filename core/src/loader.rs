//! Swagger 2.0 document loading.
//!
//! Parses a spec file (or raw JSON text) into the normalized [`Document`]
//! model the engine consumes. The loader is deliberately lenient: absent
//! optional fields take their defined defaults, unknown keys and vendor
//! extensions are skipped. Only unreadable files, syntactically invalid
//! JSON, and a non-object root are errors.

use crate::model::{
    Document, HttpMethod, Operation, ParamLocation, Parameter, PathItem, Response, Schema,
    SchemaKind,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

/// Errors produced while loading a spec document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("[SWDIFF_LOAD_001] cannot read spec from '{path}': {source}. Suggestion: check that the path exists and is readable.")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("[SWDIFF_LOAD_002] spec is not valid JSON: {source}. Suggestion: validate the document with a JSON linter.")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("[SWDIFF_LOAD_003] malformed spec document: {message}.")]
    Malformed { message: String },
}

/// Read and parse a spec document from a file path.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&text)
}

/// Parse a spec document from raw JSON text.
pub fn parse_document(text: &str) -> Result<Document, LoadError> {
    let root: Value = serde_json::from_str(text).map_err(|source| LoadError::Json { source })?;
    let root = root.as_object().ok_or_else(|| LoadError::Malformed {
        message: "document root is not a JSON object".to_string(),
    })?;

    let mut paths = BTreeMap::new();
    if let Some(path_map) = root.get("paths").and_then(Value::as_object) {
        for (url, item) in path_map {
            if url.starts_with("x-") {
                continue;
            }
            if let Some(item) = item.as_object() {
                paths.insert(url.clone(), parse_path_item(item));
            }
        }
    }

    let mut definitions = BTreeMap::new();
    if let Some(defs) = root.get("definitions").and_then(Value::as_object) {
        for (name, schema) in defs {
            definitions.insert(name.clone(), parse_schema(schema));
        }
    }

    log::debug!(
        "loaded document: {} paths, {} definitions",
        paths.len(),
        definitions.len()
    );

    Ok(Document { paths, definitions })
}

fn parse_path_item(item: &Map<String, Value>) -> PathItem {
    let mut operations = BTreeMap::new();
    for (key, value) in item {
        // Non-method keys ("parameters", "$ref", vendor extensions) are
        // outside the normalized model and skipped.
        let Ok(method) = key.parse::<HttpMethod>() else {
            continue;
        };
        if let Some(op) = value.as_object() {
            operations.insert(method, parse_operation(op));
        }
    }
    PathItem { operations }
}

fn parse_operation(op: &Map<String, Value>) -> Operation {
    let summary = string_field(op, "summary");

    let mut parameters = Vec::new();
    if let Some(params) = op.get("parameters").and_then(Value::as_array) {
        for param in params {
            if let Some(param) = param.as_object() {
                if let Some(parsed) = parse_parameter(param) {
                    parameters.push(parsed);
                }
            }
        }
    }

    let mut responses = BTreeMap::new();
    if let Some(resp_map) = op.get("responses").and_then(Value::as_object) {
        for (code, resp) in resp_map {
            if code.starts_with("x-") {
                continue;
            }
            if let Some(resp) = resp.as_object() {
                responses.insert(code.clone(), parse_response(resp));
            }
        }
    }

    Operation {
        summary,
        parameters,
        responses,
    }
}

fn parse_parameter(param: &Map<String, Value>) -> Option<Parameter> {
    let name = string_field(param, "name").unwrap_or_default();
    let location = match param.get("in").and_then(Value::as_str) {
        Some("query") => ParamLocation::Query,
        Some("path") => ParamLocation::Path,
        Some("header") => ParamLocation::Header,
        Some("body") => ParamLocation::Body,
        Some("formData") => ParamLocation::Form,
        other => {
            log::debug!("skipping parameter '{name}' with unknown location {other:?}");
            return None;
        }
    };

    // Body parameters carry a schema object; every other location describes
    // its value shape inline on the parameter itself.
    let schema = if location == ParamLocation::Body {
        param.get("schema").map(parse_schema)
    } else {
        parse_inline_shape(param)
    };

    Some(Parameter {
        name,
        location,
        required: param
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        description: string_field(param, "description"),
        schema,
    })
}

fn parse_response(resp: &Map<String, Value>) -> Response {
    Response {
        description: string_field(resp, "description"),
        schema: resp.get("schema").map(parse_schema),
    }
}

/// Value shape of a non-body parameter, described by `type`/`items` fields
/// directly on the parameter object.
fn parse_inline_shape(obj: &Map<String, Value>) -> Option<Schema> {
    let type_name = obj.get("type").and_then(Value::as_str)?;
    let kind = if type_name == "array" {
        SchemaKind::Array {
            items: Box::new(
                obj.get("items")
                    .map(parse_schema)
                    .unwrap_or_else(|| Schema::primitive("any")),
            ),
        }
    } else {
        SchemaKind::Primitive {
            type_name: type_name.to_string(),
        }
    };
    Some(Schema {
        kind,
        description: None,
    })
}

fn parse_schema(value: &Value) -> Schema {
    let Some(obj) = value.as_object() else {
        return Schema::primitive("object");
    };

    if let Some(target) = obj.get("$ref").and_then(Value::as_str) {
        let name = target
            .strip_prefix(DEFINITIONS_REF_PREFIX)
            .unwrap_or(target);
        return Schema::reference(name);
    }

    let description = string_field(obj, "description");
    let type_name = obj.get("type").and_then(Value::as_str);

    let kind = if let Some(props) = obj.get("properties").and_then(Value::as_object) {
        let properties = props
            .iter()
            .map(|(name, schema)| (name.clone(), parse_schema(schema)))
            .collect();
        SchemaKind::Object { properties }
    } else {
        match type_name {
            Some("object") | None => SchemaKind::Object {
                properties: BTreeMap::new(),
            },
            Some("array") => SchemaKind::Array {
                items: Box::new(
                    obj.get("items")
                        .map(parse_schema)
                        .unwrap_or_else(|| Schema::primitive("any")),
                ),
            },
            Some(name) => SchemaKind::Primitive {
                type_name: name.to_string(),
            },
        }
    };

    Schema { kind, description }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}
