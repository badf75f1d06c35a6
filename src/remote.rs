// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use anyhow::{anyhow, Error};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::config_xml::{emit_config_xml_string, parse_config_xml_str, ConfigNode};

const CONFIG_XML_PATH: &str = "/config.xml";

#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Network boundary of the clone pipeline. The orchestrator issues one call
/// at a time and awaits each response before moving on.
#[async_trait]
pub trait RemoteResourceClient {
    /// Fetches and parses `<resource_url>/config.xml`.
    async fn fetch_config(&self, resource_url: &str) -> Result<ConfigNode, Error>;

    /// Probes whether a job with this name exists on the server.
    async fn job_exists(&self, name: &str) -> Result<bool, Error>;

    /// Creates a new job from the serialized document.
    async fn create_job(&self, name: &str, config: &ConfigNode) -> Result<(), Error>;

    /// Creates a new view under `parent_url` from the serialized document.
    async fn create_view(&self, parent_url: &str, view_name: &str, config: &ConfigNode) -> Result<(), Error>;
}

/// Basic-auth HTTP client against a single server root.
pub struct HttpRemoteClient {
    http: reqwest::Client,
    root_url: String,
    credentials: Credentials,
}

impl HttpRemoteClient {
    pub fn new(root_url: impl Into<String>, credentials: Credentials) -> HttpRemoteClient {
        HttpRemoteClient {
            http: reqwest::Client::new(),
            root_url: root_url.into(),
            credentials,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
    }

    fn post_xml(&self, url: &str, body: String) -> reqwest::RequestBuilder {
        self.http
            .post(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(CONTENT_TYPE, "text/xml")
            .body(body)
    }
}

#[async_trait]
impl RemoteResourceClient for HttpRemoteClient {
    async fn fetch_config(&self, resource_url: &str) -> Result<ConfigNode, Error> {
        let config_url = format!("{resource_url}{CONFIG_XML_PATH}");
        let response = self.get(&config_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("unable to access {config_url}: response code {status}"));
        }

        let body = response.text().await?;
        parse_config_xml_str(&body)
    }

    async fn job_exists(&self, name: &str) -> Result<bool, Error> {
        let config_url = format!("{}/job/{}{}", self.root_url, name, CONFIG_XML_PATH);
        let response = self.get(&config_url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(anyhow!("unable to check job {name}: response code {status}")),
        }
    }

    async fn create_job(&self, name: &str, config: &ConfigNode) -> Result<(), Error> {
        let url = format!("{}/createItem?name={}", self.root_url, name);
        let body = emit_config_xml_string(config)?;
        let response = self.post_xml(&url, body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("unable to create job {name}: response code {status}"));
        }
        Ok(())
    }

    async fn create_view(&self, parent_url: &str, view_name: &str, config: &ConfigNode) -> Result<(), Error> {
        let url = format!("{parent_url}/createView?name={view_name}");
        let body = emit_config_xml_string(config)?;
        let response = self.post_xml(&url, body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("unable to create view {view_name}: response code {status}"));
        }
        Ok(())
    }
}
