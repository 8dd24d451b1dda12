use super::*;

impl RemoteClient {
    /// Passes 2xx responses through. Anything else becomes an error carrying
    /// the server's message, or `fallback` when the body has none.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        fallback: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body: serde_json::Value = resp.json().unwrap_or(serde_json::Value::Null);
        let msg = error_message(&body).unwrap_or_else(|| format!("{} (HTTP {})", fallback, status));
        tracing::debug!(%status, message = %msg, "store rejected request");
        anyhow::bail!(msg)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
