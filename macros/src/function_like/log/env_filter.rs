use std::env;

use minilog_parser::Level;
use proc_macro_error2::abort_call_site;

/// Compile-time level filter, from the `MINILOG_LEVEL` environment variable
#[derive(Debug, PartialEq)]
pub(crate) struct EnvFilter {
    max_level: Level,
}

impl EnvFilter {
    pub(crate) fn from_env_var() -> Self {
        let minilog_level = env::var("MINILOG_LEVEL").ok();
        match Self::new(minilog_level.as_deref()) {
            Ok(filter) => filter,
            Err(e) => abort_call_site!("{}", e),
        }
    }

    pub(crate) fn new(minilog_level: Option<&str>) -> Result<Self, String> {
        // nothing specified: everything is compiled in and left to the runtime threshold
        const LEVEL_WHEN_NOTHING_IS_SPECIFIED: Level = Level::Verbose;

        let max_level = match minilog_level.map(str::trim) {
            None | Some("") => LEVEL_WHEN_NOTHING_IS_SPECIFIED,
            Some(name) => Level::from_name(&name.to_ascii_lowercase()).ok_or_else(|| {
                format!(
                    "invalid `MINILOG_LEVEL` value `{}` (expected one of `off`, `error`, `warn`, \
                     `info`, `debug`, `verbose`)",
                    name
                )
            })?,
        };

        Ok(Self { max_level })
    }

    /// Whether statements at `level` are compiled in
    pub(crate) fn allows(&self, level: Level) -> bool {
        level.passes(self.max_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_allows_everything() {
        let filter = EnvFilter::new(None).unwrap();
        assert!(filter.allows(Level::Verbose));
        assert_eq!(EnvFilter::new(Some("  ")), Ok(filter));
    }

    #[test]
    fn level() {
        let filter = EnvFilter::new(Some("Info")).unwrap();
        assert!(filter.allows(Level::Error));
        assert!(filter.allows(Level::Info));
        assert!(!filter.allows(Level::Debug));
    }

    #[test]
    fn off() {
        let filter = EnvFilter::new(Some("off")).unwrap();
        assert!(!filter.allows(Level::Error));
    }

    #[test]
    fn invalid() {
        assert!(EnvFilter::new(Some("trace")).is_err());
    }
}
