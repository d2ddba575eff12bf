use serde::Deserialize;

/// Caller-facing feature toggles. Unset fields fall back to their defaults
/// during normalization; unknown keys in deserialized input are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PackmateOptions {
  pub logger: Option<bool>,
  pub asset: Option<bool>,
  pub stylus: Option<bool>,
  pub pug: Option<bool>,
}

/// Feature toggles with defaults applied, immutable for the plugin's
/// lifetime.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedPackmateOptions {
  pub logger: bool,
  pub asset: bool,
  pub stylus: bool,
  pub pug: bool,
}
