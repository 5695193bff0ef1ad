// Control actions: suspend the host, relay phone notifications to the desktop

mod notification;
mod suspend;

use std::sync::Arc;

use crate::command::CommandRunner;
use crate::config::CommandsConfig;

pub struct Controls {
    runner: Arc<dyn CommandRunner>,
    suspend_command: Vec<String>,
    notifier: String,
    notifier_app_name: String,
}

impl Controls {
    pub fn new(runner: Arc<dyn CommandRunner>, commands: &CommandsConfig) -> Self {
        Self {
            runner,
            suspend_command: commands.suspend.clone(),
            notifier: commands.notifier.clone(),
            notifier_app_name: commands.notifier_app_name.clone(),
        }
    }
}
