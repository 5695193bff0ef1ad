use tracing::instrument;

use super::Controls;
use crate::error::DaemonError;

impl Controls {
    /// Run the suspend command and wait for it to exit.
    ///
    /// The caller rarely sees the success response: the machine usually goes
    /// down while it is being written.
    #[instrument(skip(self), fields(operation = "suspend"))]
    pub async fn suspend(&self) -> Result<(), DaemonError> {
        tracing::info!("Sleep request received. Putting the machine to sleep...");
        let Some((program, args)) = self.suspend_command.split_first() else {
            return Err(DaemonError::ActionFailed(
                "no suspend command configured".into(),
            ));
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner
            .run(program, &args)
            .await
            .and_then(|out| out.check(program))
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(error = %e, "Error putting system to sleep");
                DaemonError::ActionFailed(e.to_string())
            })
    }
}
