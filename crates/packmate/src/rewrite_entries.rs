use packmate_common::{parse_request, EntryMap, NormalizedPackmateOptions};

/// Request segment naming the asset passthrough transform.
pub const ASSET_TRANSFORM: &str = "packmate/asset";
/// Request segment naming the stylus-to-css transform.
pub const STYLUS_TRANSFORM: &str = "packmate/stylus";
/// Request segment naming the pug-to-html transform.
pub const PUG_TRANSFORM: &str = "packmate/pug";

/// Routes non-script entries through their content transforms by prepending
/// transform segments to the module request, in place. Runs once, before any
/// compilation starts.
///
/// Script entries (a `.js` entry name) are never touched. A transform that
/// already sits in the request chain is not prepended a second time, so the
/// rewrite is a pure function of `(entry, flags)`.
pub fn rewrite_entries(entries: &mut EntryMap, options: &NormalizedPackmateOptions) {
  for (name, request) in entries.iter_mut() {
    if name.ends_with(".js") {
      continue;
    }
    let stylesheet = request.ends_with(".styl") || request.ends_with(".stylus");
    let markup = request.ends_with(".jade") || request.ends_with(".pug");
    if options.stylus && stylesheet && !has_transform(request, STYLUS_TRANSFORM) {
      *request = format!("{STYLUS_TRANSFORM}!{request}");
    } else if options.pug && markup && !has_transform(request, PUG_TRANSFORM) {
      *request = format!("{PUG_TRANSFORM}!{request}");
    }
    if options.asset && !has_transform(request, ASSET_TRANSFORM) {
      *request = format!("{ASSET_TRANSFORM}?entry={name}!{request}");
    }
  }
}

fn has_transform(request: &str, name: &str) -> bool {
  parse_request(request).0.iter().any(|transform| transform.name == name)
}

#[cfg(test)]
mod tests {
  use packmate_common::{EntryMap, NormalizedPackmateOptions};

  use super::rewrite_entries;

  fn options(asset: bool, stylus: bool, pug: bool) -> NormalizedPackmateOptions {
    NormalizedPackmateOptions { logger: true, asset, stylus, pug }
  }

  fn entries(pairs: &[(&str, &str)]) -> EntryMap {
    pairs.iter().map(|(name, request)| (name.to_string(), request.to_string())).collect()
  }

  #[test]
  fn script_entries_are_never_rewritten() {
    let mut map = entries(&[("main.js", "./src/main.js")]);
    rewrite_entries(&mut map, &options(true, true, true));
    assert_eq!(map["main.js"], "./src/main.js");
  }

  #[test]
  fn stylesheet_entries_gain_transforms_when_enabled() {
    let mut map = entries(&[("main", "app.js"), ("theme", "theme.styl")]);
    rewrite_entries(&mut map, &options(true, true, false));
    assert_eq!(map["main"], "packmate/asset?entry=main!app.js");
    assert_eq!(map["theme"], "packmate/asset?entry=theme!packmate/stylus!theme.styl");
  }

  #[test]
  fn disabled_flags_add_no_transforms() {
    let mut map = entries(&[("theme", "theme.styl"), ("page", "page.pug")]);
    rewrite_entries(&mut map, &options(false, false, false));
    assert_eq!(map["theme"], "theme.styl");
    assert_eq!(map["page"], "page.pug");
  }

  #[test]
  fn markup_entries_gain_the_pug_transform() {
    let mut map = entries(&[("page", "page.pug"), ("legacy", "legacy.jade")]);
    rewrite_entries(&mut map, &options(false, false, true));
    assert_eq!(map["page"], "packmate/pug!page.pug");
    assert_eq!(map["legacy"], "packmate/pug!legacy.jade");
  }

  #[test]
  fn rewriting_twice_matches_a_single_rewrite() {
    let opts = options(false, true, true);
    let mut once = entries(&[("theme", "theme.stylus"), ("page", "page.pug")]);
    rewrite_entries(&mut once, &opts);
    let mut twice = once.clone();
    rewrite_entries(&mut twice, &opts);
    assert_eq!(once, twice);
  }
}
