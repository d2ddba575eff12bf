use packmate_common::{NormalizedPackmateOptions, PackmateOptions};

pub fn normalize_options(raw_options: PackmateOptions) -> NormalizedPackmateOptions {
  NormalizedPackmateOptions {
    logger: raw_options.logger.unwrap_or(true),
    asset: raw_options.asset.unwrap_or(true),
    stylus: raw_options.stylus.unwrap_or(false),
    pug: raw_options.pug.unwrap_or(false),
  }
}
