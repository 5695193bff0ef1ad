// Shared test helpers: scripted metric provider and recording command runner

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use stats_daemon::command::{CommandError, CommandOutput, CommandRunner};
use stats_daemon::config::AppConfig;
use stats_daemon::metrics::MetricsProvider;
use stats_daemon::models::{BatteryReading, SensorGroup};
use stats_daemon::routes::{self, AppState};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const MOCK_CPU: f64 = 42.5;
pub const MOCK_RAM: f64 = 67.3;
pub const MOCK_TEMP: f64 = 55.0;
pub const MOCK_BATTERY: f64 = 80.0;

/// Each field is what the matching provider call returns; `Err` strings become errors.
#[derive(Clone)]
pub struct FakeProvider {
    pub cpu: Result<f64, String>,
    pub ram: Result<f64, String>,
    pub sensors: Result<Vec<SensorGroup>, String>,
    pub battery: Result<Option<BatteryReading>, String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            cpu: Ok(MOCK_CPU),
            ram: Ok(MOCK_RAM),
            sensors: Ok(vec![SensorGroup::new("coretemp", vec![MOCK_TEMP])]),
            battery: Ok(Some(BatteryReading {
                percent: MOCK_BATTERY,
                plugged: true,
            })),
        }
    }
}

#[async_trait]
impl MetricsProvider for FakeProvider {
    fn warm_up(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn cpu_usage(&self) -> anyhow::Result<f64> {
        self.cpu.clone().map_err(anyhow::Error::msg)
    }

    async fn ram_usage(&self) -> anyhow::Result<f64> {
        self.ram.clone().map_err(anyhow::Error::msg)
    }

    async fn sensor_groups(&self) -> anyhow::Result<Vec<SensorGroup>> {
        self.sensors.clone().map_err(anyhow::Error::msg)
    }

    async fn battery(&self) -> anyhow::Result<Option<BatteryReading>> {
        self.battery.clone().map_err(anyhow::Error::msg)
    }
}

/// Records every invocation as `[program, args...]`. Commands without a scripted
/// response fail to spawn, as if the program were not installed.
#[derive(Default)]
pub struct FakeRunner {
    installed: HashSet<String>,
    responses: HashMap<String, CommandOutput>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` visible to the PATH check.
    pub fn with_program(mut self, program: &str) -> Self {
        self.installed.insert(program.to_string());
        self
    }

    /// Script the output for an exact command line, e.g. `"upower -e"`.
    pub fn respond(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.responses.insert(command_line.to_string(), output);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, program: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|c| c.first().map(String::as_str) == Some(program))
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        let key = call.join(" ");
        self.calls.lock().unwrap().push(call);
        self.responses
            .get(&key)
            .cloned()
            .ok_or_else(|| CommandError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "No such file or directory",
                ),
            })
    }

    async fn exists(&self, program: &str) -> bool {
        self.installed.contains(program)
    }
}

pub fn ok(stdout: &str) -> CommandOutput {
    CommandOutput {
        success: true,
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn exit(code: i32, stderr: &str) -> CommandOutput {
    CommandOutput {
        success: false,
        code: Some(code),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

pub fn test_server(provider: FakeProvider, runner: Arc<FakeRunner>) -> TestServer {
    let state = AppState::new(Arc::new(provider), runner, &AppConfig::default());
    TestServer::new(routes::app(state))
}
