//! Container listing and inspection

use bollard::container::{InspectContainerOptions, ListContainersOptions};
use bollard::Docker;

use crate::error::{DockviewError, Result};
use crate::filter::FilterSet;

/// List containers matching the filter set, then inspect each one in list
/// order, returning the full inspection data as opaque JSON records.
///
/// Fails the whole run on the first listing or inspection error; no
/// partial results, no retry.
pub async fn inspect_containers(
    docker: &Docker,
    filters: FilterSet,
) -> Result<Vec<serde_json::Value>> {
    let options = ListContainersOptions::<String> {
        filters: filters.into_query(),
        ..Default::default()
    };

    let summaries = docker.list_containers(Some(options)).await?;

    let mut records = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let id = summary.id.ok_or(DockviewError::MissingContainerId)?;

        let response = docker
            .inspect_container(&id, None::<InspectContainerOptions>)
            .await?;

        records.push(serde_json::to_value(response).map_err(DockviewError::Encode)?);
    }

    Ok(records)
}
