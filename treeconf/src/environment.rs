//! Sources of environment variable values.

/// Looks up environment variables by name.
///
/// Implemented for closures so tests and embedders can supply a fixed map
/// instead of the process environment.
pub trait EnvLookup {
    /// Value of `name`, or `None` when unset or not valid Unicode.
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Reads the environment of the current process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var_os(name).and_then(|value| value.into_string().ok())
    }
}
