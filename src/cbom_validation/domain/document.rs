use serde_json::{Map, Value};

/// Risk label used for findings that carry no usable `risk` field.
pub const DEFAULT_RISK: &str = "UNKNOWN";

/// Algorithm name used for findings that carry no usable `algorithm` field.
pub const DEFAULT_ALGORITHM: &str = "unknown";

/// Severity labels that mark a non-quantum-safe finding as a vulnerable asset.
pub const VULN_SEVERITIES: [&str; 3] = ["CRITICAL", "HIGH", "MEDIUM"];

/// The only accepted `bomFormat` value.
pub const EXPECTED_BOM_FORMAT: &str = "CycloneDX";

/// The only accepted `specVersion` value.
pub const EXPECTED_SPEC_VERSION: &str = "1.6";

/// Namespace prefix of cryptographic component properties (e.g. `cbom:algorithm`).
pub const CBOM_PROPERTY_PREFIX: &str = "cbom:";

/// Display name for components without a `name` field.
pub const UNNAMED_COMPONENT: &str = "unnamed";

/// Tri-state presence of a JSON field.
///
/// The comparator's opt-in semantics depend on the distinction between a key
/// that is absent (exempt from comparison), explicitly null, and a key that
/// carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    Absent,
    Null,
    Value(T),
}

impl<'a> Presence<&'a Value> {
    /// Looks up `key` in a JSON object, distinguishing absent from null.
    pub fn of(map: &'a Map<String, Value>, key: &str) -> Self {
        match map.get(key) {
            None => Presence::Absent,
            Some(Value::Null) => Presence::Null,
            Some(value) => Presence::Value(value),
        }
    }
}

/// Shape of a document field that is expected to be a JSON array.
#[derive(Debug, Clone, Copy)]
pub enum ArrayField<'a> {
    /// Field is absent (or null, where null is tolerated).
    Missing,
    /// Field is present but not an array - a shape error the caller reports.
    NotAnArray,
    Items(&'a [Value]),
}

/// Shape of a document field that is expected to be a JSON object.
#[derive(Debug, Clone, Copy)]
pub enum ObjectField<'a> {
    Missing,
    NotAnObject,
    Object(&'a Map<String, Value>),
}

/// A parsed CBOM document.
///
/// The document is kept as a raw JSON tree and viewed through typed
/// accessors with explicit optional-field semantics; `{}` is a valid
/// document for every downstream stage.
#[derive(Debug)]
pub struct CbomDocument {
    root: Value,
}

impl CbomDocument {
    /// Parses a JSON text into a document.
    ///
    /// # Errors
    /// Returns the underlying serde_json decode error for malformed input.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let root = serde_json::from_str(text)?;
        Ok(Self { root })
    }

    fn field(&self, key: &str) -> Presence<&Value> {
        match self.root.as_object() {
            Some(map) => Presence::of(map, key),
            None => Presence::Absent,
        }
    }

    pub fn bom_format(&self) -> Presence<&Value> {
        self.field("bomFormat")
    }

    pub fn spec_version(&self) -> Presence<&Value> {
        self.field("specVersion")
    }

    pub fn metadata(&self) -> ObjectField<'_> {
        match self.field("metadata") {
            Presence::Absent | Presence::Null => ObjectField::Missing,
            Presence::Value(Value::Object(map)) => ObjectField::Object(map),
            Presence::Value(_) => ObjectField::NotAnObject,
        }
    }

    /// The `findings` array. An absent or null field reads as an empty
    /// sequence; any other non-array shape is surfaced for the caller to
    /// report before aggregation.
    pub fn findings(&self) -> ArrayField<'_> {
        match self.field("findings") {
            Presence::Absent | Presence::Null => ArrayField::Missing,
            Presence::Value(Value::Array(items)) => ArrayField::Items(items),
            Presence::Value(_) => ArrayField::NotAnArray,
        }
    }

    pub fn components(&self) -> ArrayField<'_> {
        match self.field("components") {
            Presence::Absent | Presence::Null => ArrayField::Missing,
            Presence::Value(Value::Array(items)) => ArrayField::Items(items),
            Presence::Value(_) => ArrayField::NotAnArray,
        }
    }

    pub fn summary(&self) -> ObjectField<'_> {
        match self.field("summary") {
            Presence::Absent | Presence::Null => ObjectField::Missing,
            Presence::Value(Value::Object(map)) => ObjectField::Object(map),
            Presence::Value(_) => ObjectField::NotAnObject,
        }
    }
}

/// Renders a scalar JSON value the way it appears in report messages:
/// strings without quotes, everything else in its JSON form.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON truthiness as the producer's summary logic understands it:
/// null, false, zero, and empty strings/arrays/objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Read-only view over one element of the `findings` array.
///
/// Findings are never mutated; missing or null fields fall back to the
/// documented defaults instead of failing the run, and a finding that is
/// not even an object contributes the defaults for every field.
#[derive(Debug, Clone, Copy)]
pub struct Finding<'a> {
    raw: &'a Value,
}

impl<'a> Finding<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// Uppercased severity label, defaulting to [`DEFAULT_RISK`].
    pub fn risk(&self) -> String {
        match self.raw.get("risk") {
            None | Some(Value::Null) => DEFAULT_RISK.to_string(),
            Some(value) => scalar_to_string(value).to_uppercase(),
        }
    }

    /// Raw (non-normalized) algorithm name, defaulting to [`DEFAULT_ALGORITHM`].
    pub fn algorithm(&self) -> String {
        match self.raw.get("algorithm") {
            None | Some(Value::Null) => DEFAULT_ALGORITHM.to_string(),
            Some(value) => scalar_to_string(value),
        }
    }

    /// Truthiness of the `quantum_resistant` flag; absent reads as false.
    pub fn quantum_resistant(&self) -> bool {
        self.raw.get("quantum_resistant").is_some_and(is_truthy)
    }
}

/// Read-only view over the document's self-reported `summary` object.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    raw: &'a Map<String, Value>,
}

impl<'a> Summary<'a> {
    pub fn new(raw: &'a Map<String, Value>) -> Self {
        Self { raw }
    }

    /// Tri-state lookup of a top-level count key such as `vulnerable_assets`.
    pub fn count(&self, key: &str) -> Presence<&'a Value> {
        Presence::of(self.raw, key)
    }

    /// A breakdown sub-map such as `risk_breakdown`. Absent and null are
    /// exempt from comparison; any other non-object shape is an error.
    pub fn breakdown(&self, key: &str) -> ObjectField<'a> {
        match Presence::of(self.raw, key) {
            Presence::Absent | Presence::Null => ObjectField::Missing,
            Presence::Value(Value::Object(map)) => ObjectField::Object(map),
            Presence::Value(_) => ObjectField::NotAnObject,
        }
    }
}

/// Read-only view over one element of the `components` array.
#[derive(Debug, Clone, Copy)]
pub struct Component<'a> {
    raw: &'a Value,
}

impl<'a> Component<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// Component name for report messages, defaulting to [`UNNAMED_COMPONENT`].
    pub fn name(&self) -> &'a str {
        self.raw
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(UNNAMED_COMPONENT)
    }

    /// Whether the component still carries the pre-1.6 `crypto` field.
    pub fn has_legacy_crypto(&self) -> bool {
        self.raw
            .as_object()
            .is_some_and(|map| map.contains_key("crypto"))
    }

    /// The component's `properties` array. Absent is fine (no properties to
    /// check); a present null or any other non-array shape is an error.
    pub fn properties(&self) -> ArrayField<'a> {
        match self.raw.get("properties") {
            None => ArrayField::Missing,
            Some(Value::Array(items)) => ArrayField::Items(items),
            Some(_) => ArrayField::NotAnArray,
        }
    }
}
