//! Request handling for the paraphrase service.
//!
//! This module validates raw request fields, runs variation generation and
//! shapes the outcome into serializable records. Failures are reported as
//! [ServiceError]s, which render to a field-keyed JSON error body:
//!
//! ```json
//! {"limit": ["Limit must be a positive integer"]}
//! ```
//!
//! Checks run in a fixed order: the tree first, then the limit, then
//! generation. A request with both an invalid tree and an invalid limit
//! therefore reports the tree.

use crate::bracket;
use crate::error::Error;
use crate::variation::{DEFAULT_LIMIT, Paraphraser};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Status code of every client-side failure.
pub const BAD_REQUEST: u16 = 400;

/// Status code of a failure not caused by the request.
pub const INTERNAL_ERROR: u16 = 500;

// =#========================================================================#=
// RECORDS
// =#========================================================================#=
/// Raw paraphrase request, as received.
///
/// Both fields are kept as text so that validation can report bad values
/// with the service's own messages.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParaphraseRequest {
    /// Bracketed tree text
    #[serde(default)]
    pub tree: Option<String>,
    /// Maximum number of paraphrases; defaults to [DEFAULT_LIMIT]
    #[serde(default)]
    pub limit: Option<String>,
}

impl ParaphraseRequest {
    /// Creates a request for `tree` without a limit.
    pub fn new<S: Into<String>>(tree: S) -> Self {
        ParaphraseRequest {
            tree: Some(tree.into()),
            limit: None,
        }
    }

    /// Sets the raw limit value.
    pub fn with_limit<S: Into<String>>(mut self, limit: S) -> Self {
        self.limit = Some(limit.into());
        self
    }
}

/// One paraphrase, as its flattened tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TreeRecord {
    pub tree: String,
}

/// Successful response: the paraphrases in generation order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParaphraseResponse {
    pub paraphrases: Vec<TreeRecord>,
}

impl ParaphraseResponse {
    /// Returns the flattened trees of all paraphrases.
    pub fn trees(&self) -> Vec<&str> {
        self.paraphrases
            .iter()
            .map(|record| record.tree.as_str())
            .collect()
    }
}

impl From<Vec<String>> for ParaphraseResponse {
    fn from(trees: Vec<String>) -> Self {
        ParaphraseResponse {
            paraphrases: trees.into_iter().map(|tree| TreeRecord { tree }).collect(),
        }
    }
}

// =#========================================================================#=
// SERVICE ERROR
// =#========================================================================#=
/// Reasons a paraphrase request is rejected.
///
/// The display text of each variant is the message shown to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No tree was supplied.
    #[error("This field may not be null.")]
    MissingTree,
    /// The tree was empty or whitespace only.
    #[error("This field may not be blank.")]
    BlankTree,
    /// The tree text is not a well-formed labeled tree.
    #[error("Invalid parse tree")]
    InvalidTree(#[source] Error),
    /// The limit is not a positive integer.
    #[error("Limit must be a positive integer")]
    InvalidLimit(String),
    /// The tree has no coordinate structure that admits a reordering.
    #[error("Cannot generate any variation of the given parse tree")]
    NoVariations,
    /// Generation failed on a tree that had parsed fine.
    #[error("Variation generation failed")]
    Generation(#[source] Error),
}

impl ServiceError {
    /// Name of the request field the error is reported under.
    pub fn field(&self) -> &'static str {
        match self {
            ServiceError::InvalidLimit(_) => "limit",
            ServiceError::Generation(_) => "non_field_errors",
            _ => "tree",
        }
    }

    /// HTTP-style status code for the error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Generation(_) => INTERNAL_ERROR,
            _ => BAD_REQUEST,
        }
    }

    /// Returns whether the request itself was at fault.
    pub fn is_client_error(&self) -> bool {
        self.status_code() == BAD_REQUEST
    }

    /// Renders the error body `{"<field>": ["<message>"]}`.
    pub fn to_error_body(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(self.field().to_string(), json!([self.to_string()]));
        serde_json::Value::Object(body)
    }
}

// =#========================================================================#=
// HANDLING
// =#========================================================================#=
/// Validates a raw limit value.
///
/// An absent limit means [DEFAULT_LIMIT]. Otherwise the value, with
/// surrounding whitespace removed, must be an integer greater than zero.
///
/// # Example
/// ```
/// use paratree::service::validate_limit;
///
/// assert_eq!(validate_limit(None), Ok(20));
/// assert_eq!(validate_limit(Some(" 3 ")), Ok(3));
/// assert!(validate_limit(Some("0")).is_err());
/// assert!(validate_limit(Some("abc")).is_err());
/// ```
pub fn validate_limit(raw: Option<&str>) -> Result<usize, ServiceError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };
    let invalid = || ServiceError::InvalidLimit(raw.to_string());

    // Parsed signed first, so "-1" is rejected as non-positive, not as garbage
    let value: i64 = raw.trim().parse().map_err(|_| invalid())?;
    if value <= 0 {
        return Err(invalid());
    }
    usize::try_from(value).map_err(|_| invalid())
}

/// Handles one paraphrase request.
///
/// # Errors
/// The first failing check, in order: [ServiceError::MissingTree] or
/// [ServiceError::BlankTree], [ServiceError::InvalidTree],
/// [ServiceError::InvalidLimit], [ServiceError::NoVariations].
///
/// # Example
/// ```
/// use paratree::service::{handle, ParaphraseRequest};
///
/// let request = ParaphraseRequest::new("(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))");
/// let response = handle(&request).unwrap();
/// assert_eq!(response.trees(), vec!["(NP (NP (NNS dogs)) (CC and) (NP (NNS cats)))"]);
/// ```
pub fn handle(request: &ParaphraseRequest) -> Result<ParaphraseResponse, ServiceError> {
    let result = process(request);
    match &result {
        Ok(response) => tracing::info!("Generated {} paraphrases", response.paraphrases.len()),
        Err(e) if e.is_client_error() => tracing::warn!("Rejected request: {} ({})", e, e.field()),
        Err(e) => tracing::error!("Request failed: {:?}", e),
    }
    result
}

fn process(request: &ParaphraseRequest) -> Result<ParaphraseResponse, ServiceError> {
    let text = request.tree.as_deref().ok_or(ServiceError::MissingTree)?;
    if text.trim().is_empty() {
        return Err(ServiceError::BlankTree);
    }

    let tree = bracket::parse_str(text).map_err(|e| ServiceError::InvalidTree(e.into()))?;
    tracing::debug!("Parsed tree with {} nodes", tree.num_nodes());

    let limit = validate_limit(request.limit.as_deref())?;
    tracing::debug!("Using limit {}", limit);

    let variations = Paraphraser::new()
        .with_limit(limit)
        .variations_of(&tree)
        .map_err(ServiceError::Generation)?;
    if variations.is_empty() {
        return Err(ServiceError::NoVariations);
    }
    Ok(variations.into())
}
