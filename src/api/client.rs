use std::{fs, path::Path, time::Duration};

use reqwest::blocking::{multipart, Client, Response};
use url::Url;

use crate::{api_key::ApiKey, errors::RequestFailure};

use super::errors::ApiClientError;
use super::models::Task;

/// Header carrying the static API credential.
pub const API_KEY_HEADER: &str = "X-API-Key";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
// Result files can be large, give the download more room than the API calls.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    api_key: ApiKey,
    client: Client,
}

impl ApiClient {
    /// # Errors
    ///
    /// Fails if the provided `Url` cannot be a base. We rely on that
    /// invariant in other methods.
    pub fn new(base: Url, api_key: ApiKey) -> Result<Self, ApiClientError> {
        // Test here so that we are sure path_segments_mut succeeds
        if base.cannot_be_a_base() {
            return Err(ApiClientError::CannotBeBase(base));
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base,
            api_key,
            client,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn create_task_url(&self) -> Result<Url, ApiClientError> {
        let mut url = self.base.clone();
        let url_clone = url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiClientError::CannotBeBase(url_clone))?
            .extend(&["x", "api", "simple", "tasks"]);
        Ok(url)
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn task_status_url(&self, task_id: &str, user_id: &str) -> Result<Url, ApiClientError> {
        let mut url = self.base.clone();
        let url_clone = url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiClientError::CannotBeBase(url_clone))?
            .extend(&["x", "api", "simple", "tasks", task_id]);
        url.query_pairs_mut().append_pair("user_id", user_id);
        Ok(url)
    }

    /// Uploads the input file and creates a verification task.
    ///
    /// The file is streamed as a single `file` multipart field; its
    /// format is opaque to the client. No retry is performed here.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be read (before any network
    /// activity), on transport failure, on a non-2xx response, or if the
    /// response body is not a valid task snapshot.
    pub fn upload_file(&self, path: impl AsRef<Path>) -> Result<Task, ApiClientError> {
        let body = multipart::Form::new().file("file", path.as_ref())?;
        let url = self.create_task_url()?;

        let response = self
            .client
            .post(url.clone())
            .header(API_KEY_HEADER, self.api_key.as_ref())
            .multipart(body)
            .send()
            .map_err(ApiClientError::Reqwest)?;

        Self::parse_task(url, response)
    }

    /// Fetches a fresh snapshot of the task.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::upload_file`], minus the file access.
    pub fn get_task_status(&self, task_id: &str, user_id: &str) -> Result<Task, ApiClientError> {
        let url = self.task_status_url(task_id, user_id)?;

        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, self.api_key.as_ref())
            .send()?;

        Self::parse_task(url, response)
    }

    /// Downloads the exported result file to `output`.
    ///
    /// # Errors
    ///
    /// Will return `Err` on an invalid result URL, transport failure,
    /// non-2xx response, or if the output file cannot be written.
    pub fn download_results(
        &self,
        result_url: &str,
        output: impl AsRef<Path>,
    ) -> Result<(), ApiClientError> {
        let url = Url::parse(result_url)?;

        // Result URLs are pre-signed, no API key header needed.
        let client = Client::builder().timeout(DOWNLOAD_TIMEOUT).build()?;
        let mut response = client.get(url.clone()).send()?;

        if !response.status().is_success() {
            return Err(ApiClientError::from(RequestFailure::new(
                url,
                response.status(),
                response.text()?,
            )));
        }

        let mut file = fs::File::create(output.as_ref())?;
        response.copy_to(&mut file)?;
        Ok(())
    }

    fn parse_task(url: Url, response: Response) -> Result<Task, ApiClientError> {
        let status_code = response.status();
        if !status_code.is_success() {
            return Err(ApiClientError::from(RequestFailure::new(
                url,
                status_code,
                response.text()?,
            )));
        }

        let response_text = response.text()?;
        log::debug!("Raw API response: {response_text}");

        serde_json::from_str(&response_text).map_err(|e| {
            log::error!("Failed to parse task response: {e}");
            log::error!("Response text: {response_text}");
            ApiClientError::Decode { url, source: e }
        })
    }
}
