use std::path::{Path, PathBuf};

use super::env::{coerce_value, EnvSnapshot, TRANSLATIONS};
use super::file::load_seed_file;
use super::value::{Context, Value};
use super::ContextError;

/// A seed layer in the merge pipeline.
#[derive(Debug)]
enum SeedSource {
    Value(Context),
    File { path: PathBuf, required: bool },
}

/// Builder for the render context handed to the template engine.
///
/// The environment snapshot forms the base layer; seed layers are merged
/// over it in registration order (shallow, top level only). Prefixed
/// environment variables are then routed into their namespace tables
/// (`galaxy`, `galaxy_uwsgi`, `galaxy_job_metrics`), filling only keys the
/// seeds left absent, and `HOST_EXPORT_DIR` is derived when possible.
///
/// ## Example
///
/// ```no_run
/// use galaxy_configurator::ContextBuilder;
///
/// let context = ContextBuilder::from_process_env()
///     .with_seed_file("context.yml", false)
///     .build()?;
/// # Ok::<(), galaxy_configurator::ContextError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ContextBuilder {
    env: EnvSnapshot,
    seeds: Vec<SeedSource>,
}

impl ContextBuilder {
    /// Creates a builder over the given environment snapshot.
    ///
    /// The builder never reads the process environment itself; pass
    /// [`EnvSnapshot::from_process`] (or use
    /// [`from_process_env`](Self::from_process_env)) to build against the
    /// real environment.
    pub fn new(env: EnvSnapshot) -> Self {
        Self {
            env,
            seeds: Vec::new(),
        }
    }

    /// Creates a builder over a snapshot of the current process environment.
    pub fn from_process_env() -> Self {
        Self::new(EnvSnapshot::from_process())
    }

    /// Adds an already-parsed seed context layer.
    ///
    /// Seed layers are applied in registration order; each overwrites
    /// top-level keys of the layers below it, the environment included.
    pub fn with_seed(mut self, seed: Context) -> Self {
        self.seeds.push(SeedSource::Value(seed));
        self
    }

    /// Adds a YAML seed-context file.
    ///
    /// If `required` is `true`, the build fails if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_seed_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.seeds.push(SeedSource::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Builds the context: base environment, seed layers, namespace
    /// translation, derived path.
    pub fn build(self) -> Result<Context, ContextError> {
        let mut context: Context = self
            .env
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();

        // Seed layers overwrite the environment at the top level. The merge
        // is deliberately shallow: a seed namespace table replaces the whole
        // slot, which is what makes seed values win over env translation.
        for seed in self.seeds {
            let layer = match seed {
                SeedSource::Value(seed) => Some(seed),
                SeedSource::File { path, required } => load_seed_file(&path, required)?,
            };
            if let Some(layer) = layer {
                for (key, value) in layer {
                    context.insert(key, value);
                }
            }
        }

        for (_, namespace) in TRANSLATIONS {
            if !context.contains_key(*namespace) {
                context.insert(namespace.to_string(), Value::Table(Context::new()));
            }
        }

        translate_env(&self.env, &mut context);
        derive_host_export_dir(&mut context);

        Ok(context)
    }
}

/// Routes prefixed variables from the raw snapshot into their namespace
/// tables. Every rule is checked for every key, in declaration order;
/// a variable only fills a namespace key the seeds left absent.
fn translate_env(env: &EnvSnapshot, context: &mut Context) {
    for (key, value) in env.iter() {
        for (prefix, namespace) in TRANSLATIONS {
            let Some(local) = key.strip_prefix(prefix) else {
                continue;
            };
            let local = local.to_lowercase();

            match context.get_mut(*namespace) {
                Some(Value::Table(table)) => {
                    if !table.contains_key(&local) {
                        table.insert(local, coerce_value(value));
                    }
                }
                // A seed supplied a scalar under the namespace key; the
                // seed is authoritative, so the env contribution is dropped.
                _ => {
                    log::warn!(
                        "namespace '{}' holds a non-table seed value; skipping {}",
                        namespace,
                        key
                    );
                }
            }
        }
    }
}

/// Sets `HOST_EXPORT_DIR` from `EXPORT_DIR` and `HOST_PWD` unless already
/// present: a relative `./` export dir is anchored at the host working
/// directory, an absolute one is taken verbatim.
fn derive_host_export_dir(context: &mut Context) {
    if context.contains_key("HOST_EXPORT_DIR") {
        return;
    }
    let Some(export_dir) = context.get("EXPORT_DIR").and_then(Value::as_str) else {
        return;
    };
    let Some(host_pwd) = context.get("HOST_PWD").and_then(Value::as_str) else {
        return;
    };

    let derived = if let Some(relative) = export_dir.strip_prefix("./") {
        format!("{}/{}", host_pwd, relative)
    } else {
        export_dir.to_string()
    };
    log::debug!("derived HOST_EXPORT_DIR={}", derived);
    context.insert("HOST_EXPORT_DIR".to_string(), Value::String(derived));
}
