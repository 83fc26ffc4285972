use std::collections::BTreeMap;

use super::value::Value;

/// Translation rules routing prefixed environment variables into their
/// namespace table, checked in declaration order.
pub(crate) const TRANSLATIONS: &[(&str, &str)] = &[
    ("GALAXY_CONFIG_", "galaxy"),
    ("GALAXY_UWSGI_CONFIG_", "galaxy_uwsgi"),
    ("GALAXY_JOB_METRICS_", "galaxy_job_metrics"),
];

/// An immutable snapshot of environment variables.
///
/// The builder never reads the process environment behind the caller's
/// back; it operates on whatever snapshot it was handed, which keeps
/// builds deterministic and tests free of real env manipulation.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Captures the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Coerces an environment string into a context value.
///
/// Only the literals `true`/`false` (case-insensitive) become booleans;
/// everything else, numbers included, stays a string.
pub(crate) fn coerce_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    Value::String(s.to_string())
}
