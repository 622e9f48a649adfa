//! Verifies the tracing events emitted while dispatching commands.

mod common;

use common::log_capture::TestLogCapture;
use common::logger::TestLogger;
use fbsimctl::cli::{Command, OutputFormat, Runner};
use fbsimctl::test_utils::{FixtureDeviceSet, fixture_control, test_application};
use fbsimctl::core::{ControlConfiguration, SimulatorControl};

#[test]
fn list_logs_count_of_listed_simulators() {
    let (log, capture) = TestLogger::with_capture("list_logs_count_of_listed_simulators");

    log.phase("execute");
    let mut runner = Runner::new(Vec::new(), OutputFormat::Human, false);
    runner
        .run(Command::parse_arguments(&["list"]), || {
            Ok(fixture_control(&["AAAA", "BBBB", "CCCC"]))
        })
        .unwrap();

    log.phase("verify");
    capture.assert_logged_at_level(tracing::Level::INFO, "Listed simulators");
    capture.assert_field_logged("count", "3");
    capture.assert_logged("Dispatching command");
    capture.assert_field_logged("command", "list");
    capture.assert_no_errors();

    log.finish_ok();
}

#[test]
fn help_logs_dispatch_only() {
    let capture = TestLogCapture::start();

    let no_args: [&str; 0] = [];
    let mut runner = Runner::new(Vec::new(), OutputFormat::Json, false);
    runner
        .run(Command::parse_arguments(&no_args), || {
            panic!("pool acquired for help")
        })
        .unwrap();

    capture.assert_field_logged("command", "help");
    assert!(
        !capture
            .crate_messages()
            .iter()
            .any(|m| m.contains("Listed simulators"))
    );
}

#[test]
fn bootstrap_logs_pool_summary() {
    let capture = TestLogCapture::start();

    let config = ControlConfiguration::new(test_application()).with_bucket(0);
    let control =
        SimulatorControl::with_device_set(config, &FixtureDeviceSet::with_udids(&["AAAA"]))
            .unwrap();

    assert_eq!(control.simulator_pool().len(), 1);
    capture.assert_logged("Simulator control ready");
    capture.assert_field_logged("prefix", "E2E_0_");
    capture.assert_field_logged("pooled", "1");
    capture.assert_field_logged("simctl", "/usr/bin/simctl");
}
