use newsletter_logging::{nl_error, nl_info};

use crate::{ApiError, FailureKind, NewsletterApi};

/// Fetches a bearer token. Failures are logged and collapse into `None`.
pub async fn authenticate(api: &dyn NewsletterApi) -> Option<String> {
    match api.issue_token().await {
        Ok(token) => Some(token),
        Err(err) => {
            nl_error!("Error fetching authentication token: {}", err);
            None
        }
    }
}

/// Authenticates, then submits `topics` for generation.
///
/// Returns the backend task identifier. No generation request is made when
/// authentication yields no token.
pub async fn submit_topics(api: &dyn NewsletterApi, topics: &[String]) -> Result<String, ApiError> {
    let Some(token) = authenticate(api).await else {
        return Err(ApiError::new(
            FailureKind::MissingToken,
            "authentication failed",
        ));
    };

    match api.generate_newsletter(&token, topics).await {
        Ok(task_id) => {
            nl_info!("Newsletter task {} accepted for {} topics", task_id, topics.len());
            Ok(task_id)
        }
        Err(err) => {
            nl_error!("Error submitting request: {}", err);
            Err(err)
        }
    }
}
