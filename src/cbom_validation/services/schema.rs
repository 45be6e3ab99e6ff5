use crate::cbom_validation::domain::{
    scalar_to_string, ArrayField, CbomDocument, Component, ObjectField, Presence,
    ValidationMessage, CBOM_PROPERTY_PREFIX, EXPECTED_BOM_FORMAT, EXPECTED_SPEC_VERSION,
};
use serde_json::Value;

/// Runs all CycloneDX 1.6 conformance checks over a document and returns the
/// combined message list.
///
/// The four checks are independent; none of them aborts the others. Each
/// message carries its severity tag so display code never infers it from
/// the text.
pub fn check_document(doc: &CbomDocument) -> Vec<ValidationMessage> {
    let mut messages = Vec::new();

    check_bom_format(doc, &mut messages);
    check_spec_version(doc, &mut messages);
    check_metadata(doc, &mut messages);
    check_components(doc, &mut messages);

    messages
}

fn check_literal_field(
    field: Presence<&Value>,
    name: &str,
    expected: &str,
    messages: &mut Vec<ValidationMessage>,
) {
    match field {
        Presence::Absent | Presence::Null => messages.push(ValidationMessage::error(format!(
            "Missing required field: {}",
            name
        ))),
        Presence::Value(value) => match value.as_str() {
            // The producer never emits an empty string; treat it as missing.
            Some("") => messages.push(ValidationMessage::error(format!(
                "Missing required field: {}",
                name
            ))),
            Some(actual) if actual == expected => {}
            Some(_) | None => messages.push(ValidationMessage::error(format!(
                "Expected {} '{}', got '{}'",
                name,
                expected,
                scalar_to_string(value)
            ))),
        },
    }
}

fn check_bom_format(doc: &CbomDocument, messages: &mut Vec<ValidationMessage>) {
    check_literal_field(doc.bom_format(), "bomFormat", EXPECTED_BOM_FORMAT, messages);
}

fn check_spec_version(doc: &CbomDocument, messages: &mut Vec<ValidationMessage>) {
    check_literal_field(
        doc.spec_version(),
        "specVersion",
        EXPECTED_SPEC_VERSION,
        messages,
    );
}

fn check_metadata(doc: &CbomDocument, messages: &mut Vec<ValidationMessage>) {
    let metadata = match doc.metadata() {
        ObjectField::Object(map) if !map.is_empty() => map,
        // Missing, non-object and empty metadata short-circuit the sub-checks.
        _ => {
            messages.push(ValidationMessage::error("Missing metadata section"));
            return;
        }
    };

    let has_tools = metadata
        .get("tools")
        .and_then(Value::as_array)
        .is_some_and(|tools| !tools.is_empty());
    if !has_tools {
        messages.push(ValidationMessage::error(
            "metadata.tools array is empty or missing",
        ));
    }

    if !metadata.contains_key("timestamp") {
        messages.push(ValidationMessage::error("metadata.timestamp is missing"));
    } else if let Some(timestamp) = metadata.get("timestamp").and_then(Value::as_str) {
        // The producer always emits RFC 3339; anything else is advisory only.
        if chrono::DateTime::parse_from_rfc3339(timestamp).is_err() {
            messages.push(ValidationMessage::warning(format!(
                "metadata.timestamp should be an RFC 3339 timestamp, got '{}'",
                timestamp
            )));
        }
    }
}

fn check_components(doc: &CbomDocument, messages: &mut Vec<ValidationMessage>) {
    let components = match doc.components() {
        // An absent or empty components array is not an error.
        ArrayField::Missing => return,
        ArrayField::NotAnArray => {
            messages.push(ValidationMessage::error("components is not an array"));
            return;
        }
        ArrayField::Items(items) => items,
    };

    for (idx, raw) in components.iter().enumerate() {
        let component = Component::new(raw);

        if component.has_legacy_crypto() {
            messages.push(ValidationMessage::warning(format!(
                "Component {} ({}) has .crypto field (should use .properties in 1.6)",
                idx,
                component.name()
            )));
        }

        let properties = match component.properties() {
            ArrayField::Missing => continue,
            ArrayField::NotAnArray => {
                messages.push(ValidationMessage::error(format!(
                    "Component {}: properties must be an array",
                    idx
                )));
                continue;
            }
            ArrayField::Items(items) => items,
        };

        check_cbom_properties(idx, properties, messages);
    }
}

/// Validates the structure of `cbom:`-namespaced properties. Properties
/// outside the namespace are ignored, not flagged.
fn check_cbom_properties(idx: usize, properties: &[Value], messages: &mut Vec<ValidationMessage>) {
    for prop in properties {
        // A property that is not an object cannot carry a cbom: name.
        let Some(obj) = prop.as_object() else {
            continue;
        };
        let is_cbom = obj
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.starts_with(CBOM_PROPERTY_PREFIX));
        if !is_cbom {
            continue;
        }

        if !obj.contains_key("value") {
            messages.push(ValidationMessage::error(format!(
                "Component {}: property missing 'value' field",
                idx
            )));
        }
    }
}
