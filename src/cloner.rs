// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use anyhow::Error;
use hashlink::LinkedHashMap;
use tracing::info;

use crate::config_xml::ConfigNode;
use crate::remote::RemoteResourceClient;
use crate::substitution::SubstitutionTable;
use crate::{transform, urls};

/// Outcome of a clone run: which jobs were created, which already existed
/// and were left untouched, and the url of the new view.
#[derive(Clone, Debug)]
pub struct CloneReport {
    pub created_jobs: Vec<String>,
    pub existing_jobs: Vec<String>,
    pub view_url: String,
}

/// Drives the clone pipeline against an injected remote client.
pub struct Cloner<'a> {
    client: &'a dyn RemoteResourceClient,
}

impl<'a> Cloner<'a> {
    pub fn new(client: &'a dyn RemoteResourceClient) -> Cloner<'a> {
        Cloner { client }
    }

    /// Clones the view at `source_view_url` and every job it references,
    /// renaming all of them through `table`. The new view itself is named
    /// `new_view_name`, which is not substituted.
    ///
    /// Already-existing jobs are skipped and reported. There is no rollback:
    /// a failure after job creation has begun leaves the created jobs in
    /// place.
    pub async fn clone_view(
        &self,
        source_view_url: &str,
        new_view_name: &str,
        table: &SubstitutionTable,
    ) -> Result<CloneReport, Error> {
        let source_view_url = urls::strip_end_slash(source_view_url);
        // The new view is created from the parent container so that source
        // and clone end up as siblings.
        let parent_url = urls::parent_view_url(source_view_url)?;
        let root_url = urls::server_root(source_view_url)?;

        info!("fetching view config from {source_view_url}");
        let mut view_config = self.client.fetch_config(source_view_url).await?;

        let job_names = transform::extract_job_names(&view_config);
        info!("view references {} job(s)", job_names.len());

        let mut job_configs = Vec::new();
        for name in &job_names {
            let job_url = format!("{root_url}/job/{name}");
            info!("fetching job config from {job_url}");
            let config = self.client.fetch_config(&job_url).await?;
            job_configs.push((name.clone(), config));
        }

        // Jobs that rename onto the same name collapse to one entry; the
        // last one wins.
        let mut renamed_jobs: LinkedHashMap<String, ConfigNode> = LinkedHashMap::new();
        for (name, mut config) in job_configs {
            transform::transform_document(&mut config, table);
            let new_name = table.apply(&name);
            renamed_jobs.insert(new_name, config);
        }

        transform::transform_document(&mut view_config, table);

        let mut created_jobs = Vec::new();
        let mut existing_jobs = Vec::new();
        for (name, config) in &renamed_jobs {
            if self.client.job_exists(name).await? {
                info!("job {name} already exists");
                existing_jobs.push(name.clone());
            } else {
                self.client.create_job(name, config).await?;
                info!("created job {name}");
                created_jobs.push(name.clone());
            }
        }

        self.client.create_view(parent_url, new_view_name, &view_config).await?;
        let view_url = format!("{parent_url}/view/{new_view_name}");
        info!("created view {view_url}");

        Ok(CloneReport {
            created_jobs,
            existing_jobs,
            view_url,
        })
    }
}
