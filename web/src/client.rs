use gloo::net::http::{Request, Response};
use jeopardy_core::{CategoryDetail, CategoryId, CategorySummary, TriviaSource};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ClientError {
    #[error("{0}")]
    Network(#[from] gloo::net::Error),
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// HTTP access to the jService trivia API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JServiceClient {
    base_url: String,
}

impl JServiceClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response, ClientError> {
        let url = self.url(path);
        log::debug!("GET {} {:?}", url, query);

        let response = Request::get(&url)
            .query(query.iter().map(|(name, value)| (*name, value.as_str())))
            .send()
            .await?;

        if !response.ok() {
            return Err(ClientError::Status {
                url,
                status: response.status(),
            });
        }
        Ok(response)
    }
}

impl TriviaSource for JServiceClient {
    type Error = ClientError;

    async fn list_category_ids(&self, count: usize) -> Result<Vec<CategoryId>, Self::Error> {
        let summaries: Vec<CategorySummary> = self
            .get("categories", &[("count", count.to_string())])
            .await?
            .json()
            .await?;
        Ok(summaries.into_iter().map(|summary| summary.id).collect())
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetail, Self::Error> {
        Ok(self
            .get("category", &[("id", id.to_string())])
            .await?
            .json()
            .await?)
    }
}
