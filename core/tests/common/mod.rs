//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use swagger_diff::{
    Document, HttpMethod, Operation, ParamLocation, Parameter, PathItem, Response, Schema,
};

pub fn prim(type_name: &str) -> Schema {
    Schema::primitive(type_name)
}

pub fn obj(properties: &[(&str, Schema)]) -> Schema {
    Schema::object(
        properties
            .iter()
            .map(|(name, schema)| (name.to_string(), schema.clone()))
            .collect(),
    )
}

pub fn arr(items: Schema) -> Schema {
    Schema::array(items)
}

pub fn reference(name: &str) -> Schema {
    Schema::reference(name)
}

pub fn query_param(name: &str, required: bool, schema: Schema) -> Parameter {
    Parameter {
        name: name.to_string(),
        location: ParamLocation::Query,
        required,
        description: None,
        schema: Some(schema),
    }
}

pub fn body_param(name: &str, schema: Schema) -> Parameter {
    Parameter {
        name: name.to_string(),
        location: ParamLocation::Body,
        required: true,
        description: None,
        schema: Some(schema),
    }
}

pub fn operation(
    summary: &str,
    parameters: Vec<Parameter>,
    response_schema: Option<Schema>,
) -> Operation {
    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        Response {
            description: Some("successful operation".to_string()),
            schema: response_schema,
        },
    );
    Operation {
        summary: Some(summary.to_string()),
        parameters,
        responses,
    }
}

pub fn doc(
    paths: Vec<(&str, Vec<(HttpMethod, Operation)>)>,
    definitions: Vec<(&str, Schema)>,
) -> Document {
    Document {
        paths: paths
            .into_iter()
            .map(|(url, ops)| {
                (
                    url.to_string(),
                    PathItem {
                        operations: ops.into_iter().collect(),
                    },
                )
            })
            .collect(),
        definitions: definitions
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect(),
    }
}

/// Old-side petstore: `GET /pets` with an optional `limit` parameter and a
/// 200 response of `{id: integer}`.
pub fn petstore_old() -> Document {
    doc(
        vec![(
            "/pets",
            vec![(
                HttpMethod::Get,
                operation(
                    "List pets",
                    vec![query_param("limit", false, prim("integer"))],
                    Some(obj(&[("id", prim("integer"))])),
                ),
            )],
        )],
        vec![],
    )
}
