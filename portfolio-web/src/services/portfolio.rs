//! # Portfolio API Client
//!
//! Thin gloo-net wrappers over the two backend endpoints. Errors come back
//! as user-facing strings; callers decide whether to show them or fall back
//! to default content.

use gloo_net::http::Request;
use shared::{ContactRequest, ContactResponse, ErrorResponse, PortfolioData};

use crate::utils::constants::{CONTACT_ENDPOINT, PORTFOLIO_ENDPOINT};

/// Fetch the aggregate portfolio payload.
pub async fn fetch_portfolio() -> Result<PortfolioData, String> {
    let response = Request::get(PORTFOLIO_ENDPOINT)
        .send()
        .await
        .map_err(|e| format!("Portfolio request failed: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "Portfolio request returned status {}",
            response.status()
        ));
    }

    response
        .json::<PortfolioData>()
        .await
        .map_err(|e| format!("Invalid portfolio payload: {e}"))
}

/// Submit the contact form. The request should already pass
/// [`ContactRequest::validate`].
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactResponse, String> {
    let response = Request::post(CONTACT_ENDPOINT)
        .json(request)
        .map_err(|e| format!("Failed to encode message: {e}"))?
        .send()
        .await
        .map_err(|_| {
            "Something went wrong while sending your message. Please try again.".to_string()
        })?;

    if !response.ok() {
        // The backend reports validation problems as {"error": "..."}.
        if let Ok(err) = response.json::<ErrorResponse>().await {
            return Err(err.error);
        }
        return Err("Something went wrong while sending your message. Please try again.".to_string());
    }

    response
        .json::<ContactResponse>()
        .await
        .map_err(|_| "Unexpected response from the server.".to_string())
}
