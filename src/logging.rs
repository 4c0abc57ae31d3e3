//! Diagnostic logging via `tracing`.
//!
//! Events go to stderr so stdout carries only the rendered report. The filter
//! comes from `PALCASE_LOG` (standard `EnvFilter` syntax); without it the
//! default is `warn`, or `debug` for this crate with `--verbose`.

use tracing_subscriber::EnvFilter;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Filter directive used when `PALCASE_LOG` is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,palcase=debug" } else { "warn" }
}

/// Build the event filter from the environment and the verbosity flag.
pub fn filter(verbose: bool, env: &Env) -> EnvFilter {
    env.var(ENV_LOG)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool, env: &Env) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, env))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("palcase=debug"));
    }

    #[test]
    fn env_directive_wins() {
        let env = Env::mock([("PALCASE_LOG", "trace")]);
        assert_eq!(filter(false, &env).to_string(), "trace");
    }

    #[test]
    fn invalid_env_directive_falls_back() {
        let env = Env::mock([("PALCASE_LOG", "palcase=notalevel")]);
        assert_eq!(filter(false, &env).to_string(), "warn");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        init(false, &env);
        init(true, &env);
    }
}
