//! Module request strings of the form `transform?query!transform!resource`.

use packmate_utils::indexmap::FxIndexMap;

pub const SEGMENT_SEPARATOR: char = '!';
pub const QUERY_SEPARATOR: char = '?';

/// One `name?query` transform segment of a request chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRef {
  pub name: String,
  pub query: FxIndexMap<String, String>,
}

impl TransformRef {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), query: FxIndexMap::default() }
  }

  pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.query.insert(key.into(), value.into());
    self
  }

  /// Renders the segment back into its request form.
  pub fn to_request_segment(&self) -> String {
    if self.query.is_empty() {
      return self.name.clone();
    }
    let query = self
      .query
      .iter()
      .map(|(key, value)| {
        if value.is_empty() { key.clone() } else { format!("{key}={value}") }
      })
      .collect::<Vec<_>>()
      .join("&");
    format!("{}{QUERY_SEPARATOR}{query}", self.name)
  }
}

/// Splits a module request into its transform chain and trailing resource.
pub fn parse_request(request: &str) -> (Vec<TransformRef>, &str) {
  let mut segments: Vec<&str> = request.split(SEGMENT_SEPARATOR).collect();
  let resource = segments.pop().unwrap_or("");
  let transforms = segments.into_iter().map(parse_segment).collect();
  (transforms, resource)
}

fn parse_segment(segment: &str) -> TransformRef {
  match segment.split_once(QUERY_SEPARATOR) {
    Some((name, query)) => {
      TransformRef { name: name.to_string(), query: parse_query(query) }
    }
    None => TransformRef::new(segment),
  }
}

/// Parses `key=value&flag` pairs; a bare key maps to an empty value.
pub fn parse_query(query: &str) -> FxIndexMap<String, String> {
  query
    .split('&')
    .filter(|pair| !pair.is_empty())
    .map(|pair| match pair.split_once('=') {
      Some((key, value)) => (key.to_string(), value.to_string()),
      None => (pair.to_string(), String::new()),
    })
    .collect()
}
