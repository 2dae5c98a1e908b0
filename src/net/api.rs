//! Contact form submission over HTTP.
//!
//! Client-side (hydrate): one real POST via `gloo-net`.
//! Server-side (SSR): a stub outcome, since submission is only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps onto a [`SubmissionOutcome`] variant instead of
//! propagating: the form stays usable after any outcome, and the caller's
//! cleanup runs unconditionally.

#![allow(clippy::unused_async)]

use crate::state::contact::{ContactFields, SubmissionOutcome};

/// Endpoint receiving contact form submissions. The service behind it is an
/// external collaborator; only the exchange shape matters here.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Expected body shape of a non-2xx response.
#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Submit the contact form once.
///
/// Fire-and-forget request/response: no timeout, no cancellation. A 2xx
/// response is [`SubmissionOutcome::Success`]; a non-2xx response with a
/// readable JSON body becomes [`SubmissionOutcome::ServerError`] (falling
/// back to the generic message when the `error` field is absent); transport
/// failures and unreadable bodies are [`SubmissionOutcome::NetworkError`].
pub async fn submit_contact(endpoint: &str, fields: &ContactFields) -> SubmissionOutcome {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::contact::classify_response;

        let request = match gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(fields)
        {
            Ok(request) => request,
            Err(err) => {
                log::warn!("contact submission could not be encoded: {err}");
                return SubmissionOutcome::NetworkError;
            }
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("contact submission transport failure: {err}");
                return SubmissionOutcome::NetworkError;
            }
        };

        if response.ok() {
            return classify_response(true, None);
        }

        match response.json::<ErrorBody>().await {
            Ok(body) => classify_response(false, body.error),
            Err(err) => {
                log::warn!(
                    "contact rejection body unreadable (status {}): {err}",
                    response.status()
                );
                SubmissionOutcome::NetworkError
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, fields);
        SubmissionOutcome::NetworkError
    }
}
