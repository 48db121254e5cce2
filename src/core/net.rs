use serde::Deserialize;

use crate::core::DashError;

/// Body shape the news API uses for its own error responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Read the response body as text, turning non-2xx statuses into [`DashError::Status`].
///
/// The `error` field of a JSON error body is kept as detail for the message.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, DashError> {
    let status = resp.status();
    let url = resp.url().to_string();

    if !status.is_success() {
        // The status alone is enough for the message; an unreadable body is not an error.
        let detail = resp
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|b| b.error);
        return Err(DashError::Status {
            status: status.as_u16(),
            url,
            detail,
        });
    }

    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(%url, bytes = text.len(), "received body");

    Ok(text)
}
