// API client module: a small blocking HTTP client for the two read-only
// GitHub endpoints this tool consumes (the gist listing for a user and
// the authenticated-identity probe). It is intentionally synchronous:
// one invocation issues at most three sequential requests.

use std::collections::HashMap;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::console;

/// Default GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent sent with every request; GitHub rejects UA-less calls.
const USER_AGENT_VALUE: &str = "getgist-cli";

/// Whether the session may see private gists. Derived once per run by
/// probing the identity endpoint, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

/// Why a fetch produced no content. Callers can tell a failed request
/// apart from a genuinely empty response body (`Ok("")`).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("couldn't reach GitHub at {url}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("could not read the response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// One gist as returned by the listing endpoint, trimmed to the fields
/// this tool reads.
#[derive(Debug, Deserialize)]
pub struct GistEntry {
    pub id: String,
    pub description: Option<String>,
    pub files: HashMap<String, GistFileInfo>,
}

#[derive(Debug, Deserialize)]
pub struct GistFileInfo {
    pub raw_url: String,
}

#[derive(Debug, Deserialize)]
struct AuthenticatedUser {
    login: String,
}

/// Blocking GitHub client holding the base URL, an optional personal
/// access token, and the auth mode established for this run.
pub struct GitHubClient {
    client: Client,
    api_base: String,
    token: Option<String>,
    auth: AuthState,
}

impl GitHubClient {
    /// Build a client for the given API base. The base is a parameter
    /// so the tool can be pointed at GitHub Enterprise (or a test
    /// server) without code changes.
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(GitHubClient {
            client,
            api_base: api_base.into(),
            token,
            auth: AuthState::Anonymous,
        })
    }

    /// Create a client using `GETGIST_API_URL` when set, or the public
    /// GitHub API otherwise.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let api_base =
            std::env::var("GETGIST_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        Self::new(api_base, token)
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth
    }

    /// Validate the configured token against the identity endpoint and
    /// settle the auth mode for the rest of the run. A missing or
    /// invalid token is not an error: the session degrades to anonymous
    /// with a notice, and only public gists will be visible.
    ///
    /// Runs once, before any gist listing.
    pub fn authenticate(&mut self, user: &str) -> AuthState {
        let token = match self.token.clone() {
            Some(token) => token,
            None => {
                console::output("No access token set.");
                console::output("Looking for public Gists only.");
                return self.auth;
            }
        };

        let url = format!("{}/user", self.api_base);
        let login = self
            .fetch_with_token(&url, Some(&token))
            .ok()
            .and_then(|body| serde_json::from_str::<AuthenticatedUser>(&body).ok())
            .map(|identity| identity.login);

        if login.as_deref() == Some(user) {
            console::output(&format!("User `{}` authenticated.", user));
            self.auth = AuthState::Authenticated;
        } else {
            console::output(&format!("Invalid token for user {}.", user));
            console::output("Looking for public Gists only.");
        }
        self.auth
    }

    /// List all gists of a user. Transport failures and malformed
    /// responses are reported and treated as an empty listing, never as
    /// a hard failure; a misspelled username looks exactly like a user
    /// with no gists.
    pub fn list_gists(&self, user: &str) -> Vec<GistEntry> {
        let url = format!("{}/users/{}/gists", self.api_base, user);
        let body = match self.fetch(&url) {
            Ok(body) => body,
            Err(_) => {
                console::output("[Hint] Check if the entered user name is correct.");
                return Vec::new();
            }
        };
        match serde_json::from_str(&body) {
            Ok(gists) => gists,
            Err(_) => {
                console::output(&format!("[Error] Unexpected response from {}.", url));
                Vec::new()
            }
        }
    }

    /// GET a URL and return the body as text. The token is attached
    /// automatically once the session is authenticated. Every request
    /// is announced, and every failure prints a diagnostic naming the
    /// URL before the typed error is returned.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let token = match self.auth {
            AuthState::Authenticated => self.token.as_deref(),
            AuthState::Anonymous => None,
        };
        self.fetch_with_token(url, token)
    }

    fn fetch_with_token(&self, url: &str, token: Option<&str>) -> Result<String, FetchError> {
        console::output(&format!("Fetching {} …", url));

        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = match request.send() {
            Ok(response) => response,
            Err(source) => {
                console::output(&format!("[Error] Couldn't reach GitHub at {}.", url));
                return Err(FetchError::Unreachable {
                    url: url.to_string(),
                    source,
                });
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            console::output(&format!(
                "[Error] HTTP status {} for {}.",
                status.as_u16(),
                url
            ));
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| {
            console::output(&format!("[Error] Could not read the response from {}.", url));
            FetchError::Body {
                url: url.to_string(),
                source,
            }
        })
    }
}
