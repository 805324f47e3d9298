//! Template rendering pipeline
//!
//! Each template runs over every container record: render, then decode the
//! rendered text as one JSON value, then collect the values into one array
//! per template. Rendering happens on a blocking task feeding a bounded
//! channel while decoding consumes from it, so memory stays bounded to a
//! few in-flight renders.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::{DockviewError, Result};
use crate::output::write_array;
use crate::template::CompiledTemplates;

/// Rendered texts in flight between the render task and the decode loop.
const CHANNEL_CAPACITY: usize = 8;

/// Render every record through every template, writing one JSON array per
/// template to `sink`, in the order the templates were given.
///
/// A failing template aborts the run; arrays written for templates that
/// already completed stay on the sink.
pub async fn render_all<W: Write>(
    templates: &Arc<CompiledTemplates>,
    records: &Arc<Vec<serde_json::Value>>,
    sink: &mut W,
) -> Result<()> {
    for name in templates.names() {
        let values = render_template(templates, name, records).await?;
        write_array(&values, sink)?;
    }

    Ok(())
}

/// Render one template over all records, decoding each rendered text as a
/// JSON value. All-or-nothing: any render or decode failure aborts the
/// whole template's run.
///
/// The producer task stops on its own render errors; a decode error drops
/// the receiver, which cancels the producer at its next send.
pub async fn render_template(
    templates: &Arc<CompiledTemplates>,
    name: &str,
    records: &Arc<Vec<serde_json::Value>>,
) -> Result<Vec<serde_json::Value>> {
    let (tx, mut rx) = mpsc::channel::<String>(CHANNEL_CAPACITY);

    let producer = tokio::task::spawn_blocking({
        let templates = Arc::clone(templates);
        let records = Arc::clone(records);
        let name = name.to_string();

        move || -> Result<()> {
            let template =
                templates
                    .env()
                    .get_template(&name)
                    .map_err(|e| DockviewError::Render {
                        template: name.clone(),
                        reason: e.to_string(),
                    })?;

            for record in records.iter() {
                let text =
                    template
                        .render(render_context(record))
                        .map_err(|e| DockviewError::Render {
                            template: name.clone(),
                            reason: e.to_string(),
                        })?;

                if tx.blocking_send(text).is_err() {
                    // Consumer gave up; nothing left to render.
                    return Ok(());
                }
            }

            Ok(())
        }
    });

    let mut values = Vec::with_capacity(records.len());

    while let Some(text) = rx.recv().await {
        match serde_json::from_str(&text) {
            Ok(value) => values.push(value),
            Err(source) => {
                drop(rx);
                let _ = producer.await;
                return Err(DockviewError::Decode {
                    template: name.to_string(),
                    source,
                });
            }
        }
    }

    match producer.await {
        Ok(result) => result?,
        Err(join) => {
            return Err(DockviewError::Render {
                template: name.to_string(),
                reason: join.to_string(),
            })
        }
    }

    Ok(values)
}

/// Build the rendering context for one record: every top-level field by
/// name, plus the whole record as `this`.
pub(crate) fn render_context(record: &serde_json::Value) -> HashMap<String, minijinja::Value> {
    let mut context = HashMap::new();

    if let serde_json::Value::Object(fields) = record {
        for (key, value) in fields {
            context.insert(key.clone(), minijinja::Value::from_serialize(value));
        }
    }

    context.insert("this".to_string(), minijinja::Value::from_serialize(record));
    context
}

// ============================================================================
// Tests
// ============================================================================
