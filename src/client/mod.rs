//! The deep-clean API client.

pub(crate) mod response;
pub mod transport;

use url::Url;

use crate::core::config::Config;
use crate::core::error::{ClientError, Result};
use crate::core::models::{EmailResult, EmailStatus};
use response::DeepCleanResponse;
use transport::{HttpTransport, Transport};

/// Path of the deep-clean endpoint, joined to the configured base URL.
const DEEP_CLEAN_PATH: &str = "/clean/deep.php";

/// The code ListWise reports for "the submitted address is syntactically
/// invalid". It arrives through the error fields but is a regular answer,
/// not a failure.
const ERROR_CODE_INVALID_EMAIL: i64 = 1;

/// Client for the ListWise deep-clean API.
///
/// Each client owns its configuration, API key included, so clients with
/// different keys can coexist in one process. The client performs exactly
/// one request per [`deep_clean`](DeepCleanClient::deep_clean) call and
/// never retries internally.
pub struct DeepCleanClient<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl DeepCleanClient<HttpTransport> {
    /// Creates a client backed by a real HTTP transport.
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> DeepCleanClient<T> {
    /// Creates a client with a caller-supplied transport.
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one deep-clean check for `email`.
    ///
    /// An [`EmailStatus::Processing`] result is a normal outcome: the
    /// service has not finished checking the address yet and the caller
    /// should call again in a few minutes. ListWise recommends bulk
    /// uploading a list and waiting for processing to complete so the
    /// status is final.
    ///
    /// # Errors
    ///
    /// Fails with [`ClientError::MissingApiKey`] before any network I/O
    /// when no key is configured; with [`ClientError::Transport`] or
    /// [`ClientError::Decode`] for network and malformed-body failures
    /// (both retryable); with [`ClientError::Api`] when the service
    /// reports an unrecoverable error for this input; and with
    /// [`ClientError::UnknownStatus`] when the response carries a status
    /// string this client does not know.
    pub async fn deep_clean(&self, email: &str) -> Result<EmailResult> {
        let url = self.deep_clean_url(email)?;
        let body = self.transport.fetch(&url).await?;
        let response: DeepCleanResponse = serde_json::from_str(&body)?;
        self.interpret(email, response)
    }

    /// Builds the request URL, percent-encoding the query parameters.
    fn deep_clean_url(&self, email: &str) -> Result<Url> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ClientError::MissingApiKey),
        };
        let mut url = Url::parse(&self.config.api_base_url)?.join(DEEP_CLEAN_PATH)?;
        url.query_pairs_mut()
            .append_pair("email", email)
            .append_pair("api_key", api_key);
        Ok(url)
    }

    /// Turns a decoded response into the caller-facing result, applying the
    /// API's error-code conventions.
    fn interpret(&self, email: &str, response: DeepCleanResponse) -> Result<EmailResult> {
        if !response.email_status.is_empty() {
            let result = response.into_result()?;
            if result.status == EmailStatus::Processing {
                tracing::info!("'{}' is still processing, check back later", result.email);
            }
            return Ok(result);
        }

        match response.error_code {
            Some(code) if code != ERROR_CODE_INVALID_EMAIL => {
                let message = response.error_msg.unwrap_or_default();
                tracing::error!(
                    "unrecoverable API error for '{}': code={}, message='{}'",
                    email,
                    code,
                    message
                );
                Err(ClientError::Api {
                    code,
                    message,
                    email: email.to_string(),
                })
            }
            Some(_) => {
                tracing::warn!("invalid email address: '{}'", email);
                Ok(EmailResult::new(email, EmailStatus::Invalid, true, false))
            }
            None => Err(ClientError::Decode(
                "response carries neither email_status nor error_code".to_string(),
            )),
        }
    }
}
