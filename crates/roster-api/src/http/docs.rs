//! Generated API documentation.
//!
//! The OpenAPI document and the HTML index are both rendered from
//! [`ROUTES`], so the two never disagree.

use axum::response::Html;
use axum::Json;
use serde_json::{json, Map, Value as JsonValue};

/// Where an operation reads its input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    None,
    /// Optional `keyword` query parameter.
    KeywordQuery,
    /// `{id}` path parameter.
    AgentCode,
    /// `{id}` path parameter plus a JSON body with the listed fields.
    AgentCodeAndBody(&'static [&'static str], &'static [&'static str]),
    /// JSON body with the listed required and optional fields.
    Body(&'static [&'static str], &'static [&'static str]),
}

/// One documented operation.
#[derive(Debug, Clone, Copy)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    pub input: Input,
    pub responses: &'static [(u16, &'static str)],
}

const AGENT_FIELDS: &[&str] = &["AGENT_CODE", "AGENT_NAME", "WORKING_AREA", "COMMISSION"];
const AGENT_OPTIONAL: &[&str] = &["PHONE_NO", "COUNTRY"];
const REPLACE_FIELDS: &[&str] = &["AGENT_NAME", "WORKING_AREA", "COMMISSION"];

pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: "get",
        path: "/say",
        tag: "Say",
        summary: "Forward a keyword to the echo function and return its response",
        input: Input::KeywordQuery,
        responses: &[
            (200, "Response relayed from the echo function"),
            (500, "Error calling Cloud Function"),
        ],
    },
    RouteDoc {
        method: "get",
        path: "/students",
        tag: "Students",
        summary: "Get all students",
        input: Input::None,
        responses: &[(200, "A list of students"), (500, "Server error")],
    },
    RouteDoc {
        method: "get",
        path: "/companies/agents",
        tag: "Companies",
        summary: "Get all companies and the agents working in their city",
        input: Input::None,
        responses: &[
            (200, "A list of companies with their agents"),
            (500, "Server error"),
        ],
    },
    RouteDoc {
        method: "get",
        path: "/companies/customers",
        tag: "Companies",
        summary: "Get all companies and the customers located in their city",
        input: Input::None,
        responses: &[
            (200, "A list of companies with their customers"),
            (500, "Server error"),
        ],
    },
    RouteDoc {
        method: "get",
        path: "/agents",
        tag: "Agents",
        summary: "Get all agents",
        input: Input::None,
        responses: &[(200, "A list of agents"), (500, "Server error")],
    },
    RouteDoc {
        method: "post",
        path: "/agents/create",
        tag: "Agents",
        summary: "Create a new agent",
        input: Input::Body(AGENT_FIELDS, AGENT_OPTIONAL),
        responses: &[
            (201, "Agent created successfully"),
            (400, "Missing or invalid fields"),
            (500, "Server error"),
        ],
    },
    RouteDoc {
        method: "patch",
        path: "/agents/{id}",
        tag: "Agents",
        summary: "Update the phone number and/or commission of an agent",
        input: Input::AgentCodeAndBody(&[], &["PHONE_NO", "COMMISSION"]),
        responses: &[
            (200, "Agent updated successfully"),
            (400, "Nothing to update or invalid COMMISSION"),
            (404, "Agent not found"),
            (500, "Server error"),
        ],
    },
    RouteDoc {
        method: "put",
        path: "/agents/{id}",
        tag: "Agents",
        summary: "Replace an agent",
        input: Input::AgentCodeAndBody(REPLACE_FIELDS, AGENT_OPTIONAL),
        responses: &[
            (200, "Agent replaced successfully"),
            (400, "Missing required fields"),
            (404, "Agent not found"),
            (500, "Server error"),
        ],
    },
    RouteDoc {
        method: "delete",
        path: "/agents/{id}",
        tag: "Agents",
        summary: "Delete an agent",
        input: Input::AgentCode,
        responses: &[
            (200, "Agent deleted successfully"),
            (404, "Agent not found"),
            (500, "Server error"),
        ],
    },
];

fn field_schema(field: &str) -> JsonValue {
    match field {
        "COMMISSION" => json!({ "oneOf": [{ "type": "number" }, { "type": "string" }] }),
        _ => json!({ "type": "string" }),
    }
}

fn body_schema(required: &[&str], optional: &[&str]) -> JsonValue {
    let properties: Map<String, JsonValue> = required
        .iter()
        .chain(optional)
        .map(|f| (f.to_string(), field_schema(f)))
        .collect();

    let mut schema = json!({ "type": "object", "properties": properties });
    if !required.is_empty() {
        schema["required"] = json!(required);
    }
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema } }
    })
}

fn agent_code_param() -> JsonValue {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "Agent code",
        "schema": { "type": "string" }
    })
}

fn operation(route: &RouteDoc) -> JsonValue {
    let responses: Map<String, JsonValue> = route
        .responses
        .iter()
        .map(|(status, description)| (status.to_string(), json!({ "description": description })))
        .collect();

    let mut op = json!({
        "summary": route.summary,
        "tags": [route.tag],
        "responses": responses,
    });

    match route.input {
        Input::None => {}
        Input::KeywordQuery => {
            op["parameters"] = json!([{
                "name": "keyword",
                "in": "query",
                "required": false,
                "description": "The keyword to forward",
                "schema": { "type": "string" }
            }]);
        }
        Input::AgentCode => {
            op["parameters"] = json!([agent_code_param()]);
        }
        Input::AgentCodeAndBody(required, optional) => {
            op["parameters"] = json!([agent_code_param()]);
            op["requestBody"] = body_schema(required, optional);
        }
        Input::Body(required, optional) => {
            op["requestBody"] = body_schema(required, optional);
        }
    }
    op
}

/// Render the OpenAPI 3.0 document for [`ROUTES`].
pub fn openapi_document() -> JsonValue {
    let mut paths = Map::new();
    for route in ROUTES {
        let item = paths
            .entry(route.path.to_string())
            .or_insert_with(|| JsonValue::Object(Map::new()));
        item[route.method] = operation(route);
    }

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "roster API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths,
    })
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a plain HTML index of [`ROUTES`].
pub fn docs_page() -> String {
    let mut rows = String::new();
    for route in ROUTES {
        let responses = route
            .responses
            .iter()
            .map(|(status, description)| format!("{} {}", status, escape(description)))
            .collect::<Vec<_>>()
            .join("<br>");
        rows.push_str(&format!(
            "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>\n",
            route.method.to_uppercase(),
            escape(route.path),
            escape(route.summary),
            responses
        ));
    }

    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>roster API</title></head>\n\
         <body>\n<h1>roster API</h1>\n\
         <p>Machine-readable description: <a href=\"/docs/openapi.json\">openapi.json</a></p>\n\
         <table>\n<tr><th>Method</th><th>Path</th><th>Summary</th><th>Responses</th></tr>\n\
         {}</table>\n</body>\n</html>\n",
        rows
    )
}

/// GET /docs
pub async fn docs_index() -> Html<String> {
    Html(docs_page())
}

/// GET /docs/openapi.json
pub async fn openapi_json() -> Json<JsonValue> {
    Json(openapi_document())
}
