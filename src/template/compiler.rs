//! Template compilation
//!
//! Templates are minijinja sources rendered once per container record. The
//! record's top-level fields are addressable by name and the whole record
//! is bound to `this`, so the default template passes the record through
//! unchanged.

use minijinja::Environment;

use crate::error::{DockviewError, Result};

/// Default template: serialize the whole record to JSON.
pub const DEFAULT_TEMPLATE: &str = "{{ this | json }}";

/// A batch of compiled templates sharing one environment.
///
/// Immutable once built; templates may be rendered repeatedly and
/// concurrently.
#[derive(Debug)]
pub struct CompiledTemplates {
    env: Environment<'static>,
    names: Vec<String>,
}

impl CompiledTemplates {
    /// Internal template names, in the order the sources were given.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn env(&self) -> &Environment<'static> {
        &self.env
    }
}

/// Compile template sources into one environment.
///
/// An empty batch substitutes [`DEFAULT_TEMPLATE`]. Each source compiles
/// under the name `template_<index>`; a syntax error aborts the whole
/// batch and names the failing index.
pub fn compile(sources: &[String]) -> Result<CompiledTemplates> {
    let mut env = Environment::new();
    env.add_filter("json", json_filter);

    let sources: Vec<String> = if sources.is_empty() {
        vec![DEFAULT_TEMPLATE.to_string()]
    } else {
        sources.to_vec()
    };

    let mut names = Vec::with_capacity(sources.len());
    for (index, source) in sources.into_iter().enumerate() {
        let name = format!("template_{index}");
        env.add_template_owned(name.clone(), source)
            .map_err(|source| DockviewError::Template { index, source })?;
        names.push(name);
    }

    Ok(CompiledTemplates { env, names })
}

/// Serialize any template value to JSON text.
///
/// Returns the empty string when serialization fails; the template keeps
/// rendering with best-effort output instead of aborting.
fn json_filter(value: minijinja::Value) -> String {
    serde_json::to_string(&value).unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
