//! REST content service client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use tracing::{debug, info};

use docdesk_core::config::content::ContentConfig;
use docdesk_core::error::{AppError, ErrorKind};
use docdesk_core::result::AppResult;
use docdesk_core::traits::ContentApi;
use docdesk_core::types::{DeleteOptions, NodeRef};

use crate::dto::{CopyRequest, Entry, ListEnvelope, status_error};

/// Query parameter used for ticket authentication.
const TICKET_PARAM: &str = "alf_ticket";

/// Page size requested when listing children.
const PAGE_SIZE: u64 = 100;

/// How requests authenticate.
#[derive(Debug, Clone)]
enum Credentials {
    Basic { username: String, password: String },
    Ticket(String),
    Anonymous,
}

/// Content service client over HTTP.
#[derive(Debug, Clone)]
pub struct RestContentApi {
    /// Shared HTTP client.
    client: Client,
    /// API root, e.g. `https://ecm/alfresco/api/-default-/public/alfresco/versions/1`.
    api_root: Url,
    /// Request authentication.
    credentials: Credentials,
}

impl RestContentApi {
    /// Create a client from configuration.
    pub fn new(config: &ContentConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        let credentials = match (&config.username, &config.ticket) {
            (Some(username), _) => Credentials::Basic {
                username: username.clone(),
                password: config.password.clone().unwrap_or_default(),
            },
            (None, Some(ticket)) => Credentials::Ticket(ticket.clone()),
            (None, None) => Credentials::Anonymous,
        };

        let root = config.api_root();
        let api_root = Url::parse(&root).map_err(|e| {
            AppError::configuration(format!("Invalid content service URL '{root}': {e}"))
        })?;
        if api_root.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "Content service URL '{root}' cannot carry a path"
            )));
        }

        info!(api_root = %api_root, "Content service client ready");

        Ok(Self {
            client,
            api_root,
            credentials,
        })
    }

    /// Build the URL below the API root from path `segments`, with `query`
    /// appended. Each segment is percent-encoded as a single path segment.
    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> AppResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(AppError::validation(format!(
                "Invalid node id '{bad}' in request path"
            )));
        }

        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::internal("Content service URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
            if let Credentials::Ticket(ticket) = &self.credentials {
                pairs.append_pair(TICKET_PARAM, ticket);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.credentials {
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            Credentials::Ticket(_) | Credentials::Anonymous => builder,
        }
    }

    /// Send a request and turn non-2xx answers into errors.
    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Content service request failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), body = %body, "Content service error response");
        Err(status_error(status.as_u16(), body))
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> AppResult<T> {
        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Unexpected content service response: {e}"),
                e,
            )
        })
    }
}

#[async_trait]
impl ContentApi for RestContentApi {
    async fn get_node(&self, node_id: &str) -> AppResult<NodeRef> {
        let url = self.endpoint(&["nodes", node_id], &[])?;
        let response = self.send(self.request(Method::GET, url)).await?;
        let node: Entry<NodeRef> = Self::read_json(response).await?;
        Ok(node.entry)
    }

    async fn copy_node(&self, node_id: &str, target_parent_id: &str) -> AppResult<NodeRef> {
        let url = self.endpoint(&["nodes", node_id, "copy"], &[])?;
        let response = self
            .send(
                self.request(Method::POST, url)
                    .json(&CopyRequest { target_parent_id }),
            )
            .await?;

        let created: Entry<NodeRef> = Self::read_json(response).await?;
        debug!(node_id, created_id = %created.entry.id, "Node copied");
        Ok(created.entry)
    }

    async fn delete_node(&self, node_id: &str, options: DeleteOptions) -> AppResult<()> {
        let url = self.endpoint(
            &["nodes", node_id],
            &[("permanent", options.permanent.to_string())],
        )?;
        self.send(self.request(Method::DELETE, url)).await?;
        debug!(node_id, permanent = options.permanent, "Node deleted");
        Ok(())
    }

    async fn list_children(&self, folder_id: &str) -> AppResult<Vec<NodeRef>> {
        let mut children = Vec::new();
        let mut skip: u64 = 0;

        loop {
            let url = self.endpoint(
                &["nodes", folder_id, "children"],
                &[
                    ("skipCount", skip.to_string()),
                    ("maxItems", PAGE_SIZE.to_string()),
                ],
            )?;
            let response = self.send(self.request(Method::GET, url)).await?;
            let page: ListEnvelope<NodeRef> = Self::read_json(response).await?;

            let next = page.list.next_skip();
            children.extend(page.list.entries.into_iter().map(|e| e.entry));

            match next {
                Some(next) => skip = next,
                None => break,
            }
        }

        Ok(children)
    }
}
