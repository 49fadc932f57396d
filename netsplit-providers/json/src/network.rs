use std::io::Read;

use netsplit_core::{AdjacencyList, AdjacencySource, EdgeId};
use serde_json::{Map, Value};
use tracing::debug;

use crate::JsonNetworkError;

/// Adjacency mapping loaded from a JSON object of the form
/// `{"<edge>": [<neighbour>, ...], ...}`.
///
/// Keys are decimal edge ids (JSON object keys are always strings).
/// Neighbours must be non-negative JSON integers; strings, floats and
/// negative numbers are rejected rather than coerced. Entries keep document
/// order.
#[derive(Debug, Clone)]
pub struct JsonNetwork {
    list: AdjacencyList,
}

impl JsonNetwork {
    /// Parses a network from a reader.
    ///
    /// # Errors
    /// Returns [`JsonNetworkError::Parse`] when the input is not valid JSON
    /// (including read failures) and the shape errors described on
    /// [`JsonNetwork::from_value`].
    ///
    /// # Examples
    /// ```
    /// use netsplit_core::AdjacencySource;
    /// use netsplit_providers_json::JsonNetwork;
    ///
    /// let raw = r#"{"1": [2], "3": []}"#;
    /// let network = JsonNetwork::try_from_reader("demo", raw.as_bytes())?;
    /// assert_eq!(network.len(), 2);
    /// assert_eq!(network.name(), "demo");
    /// # Ok::<(), netsplit_providers_json::JsonNetworkError>(())
    /// ```
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, JsonNetworkError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(name, &value)
    }

    /// Parses a network from an in-memory string.
    ///
    /// # Errors
    /// See [`JsonNetwork::try_from_reader`].
    pub fn try_from_str(name: impl Into<String>, raw: &str) -> Result<Self, JsonNetworkError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(name, &value)
    }

    /// Builds a network from an already parsed document.
    ///
    /// # Errors
    /// Returns [`JsonNetworkError::NotAnObject`] when the document is not an
    /// object, [`JsonNetworkError::InvalidEdgeId`] for a key that is not a
    /// decimal `u64`, [`JsonNetworkError::InvalidNeighbours`] when a value is
    /// not an array, and [`JsonNetworkError::InvalidNeighbour`] for an array
    /// element that is not a non-negative integer.
    pub fn from_value(name: impl Into<String>, value: &Value) -> Result<Self, JsonNetworkError> {
        let object = value
            .as_object()
            .ok_or(JsonNetworkError::NotAnObject { found: kind(value) })?;
        let list = parse_entries(name.into(), object)?;
        debug!(
            source = list.name(),
            entries = list.len(),
            "parsed network document"
        );
        Ok(Self { list })
    }

    /// Returns the parsed mapping.
    #[must_use]
    pub fn into_list(self) -> AdjacencyList {
        self.list
    }
}

impl AdjacencySource for JsonNetwork {
    fn name(&self) -> &str {
        self.list.name()
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn entries(&self) -> impl Iterator<Item = (EdgeId, &[EdgeId])> {
        self.list.entries()
    }
}

fn parse_entries(
    name: String,
    object: &Map<String, Value>,
) -> Result<AdjacencyList, JsonNetworkError> {
    let mut list = AdjacencyList::new(name);
    for (key, value) in object {
        let edge = parse_key(key)?;
        let raw_neighbours = value
            .as_array()
            .ok_or(JsonNetworkError::InvalidNeighbours {
                edge,
                found: kind(value),
            })?;
        let neighbours = raw_neighbours
            .iter()
            .map(|raw| parse_neighbour(edge, raw))
            .collect::<Result<Vec<_>, _>>()?;
        list.push(edge, neighbours);
    }
    Ok(list)
}

fn parse_key(raw: &str) -> Result<EdgeId, JsonNetworkError> {
    raw.parse::<u64>()
        .map(EdgeId::new)
        .map_err(|_| JsonNetworkError::InvalidEdgeId {
            raw: raw.to_owned(),
        })
}

fn parse_neighbour(edge: EdgeId, raw: &Value) -> Result<EdgeId, JsonNetworkError> {
    raw.as_u64()
        .map(EdgeId::new)
        .ok_or_else(|| JsonNetworkError::InvalidNeighbour {
            edge,
            raw: raw.to_string(),
        })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
