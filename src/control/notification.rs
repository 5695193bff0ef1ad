use tracing::instrument;

use super::Controls;
use crate::error::DaemonError;
use crate::models::{NotificationPayload, NotificationRequest};

impl Controls {
    /// Validate a phone notification body and pop it up on the desktop.
    ///
    /// Rejections happen before any side effect. Whether the desktop popup
    /// actually fired is not reported back.
    #[instrument(skip_all, fields(operation = "notify", body_len = raw.len()))]
    pub async fn notify(&self, raw: &[u8]) -> Result<NotificationRequest, DaemonError> {
        let payload = NotificationPayload::parse(raw).map_err(|e| {
            tracing::debug!(error = %e, "Rejected notification body");
            DaemonError::InvalidPayload
        })?;
        let request = NotificationRequest::from(payload);
        if !request.has_content() {
            return Err(DaemonError::MissingContent);
        }

        tracing::info!(
            app = %request.package_name,
            title = %request.title,
            text = %request.text,
            posted_at = %request.posted_at,
            "Phone notification"
        );
        self.show_desktop_notification(&request).await;
        Ok(request)
    }

    async fn show_desktop_notification(&self, request: &NotificationRequest) {
        if !self.runner.exists(&self.notifier).await {
            tracing::warn!(
                notifier = %self.notifier,
                "Desktop notifier not found; skipping desktop popup"
            );
            return;
        }

        let app_name = format!("--app-name={}", self.notifier_app_name);
        let summary = request.summary();
        let body = request.body();
        match self
            .runner
            .run(
                &self.notifier,
                &[app_name.as_str(), "--", summary.as_str(), body.as_str()],
            )
            .await
            .and_then(|out| out.check(&self.notifier))
        {
            Ok(_) => tracing::debug!("Desktop notification shown"),
            Err(e) => tracing::warn!(error = %e, "Desktop notification failed"),
        }
    }
}
