use super::*;
use crate::helpers::utils::create_buffer_logger;

#[test]
fn can_stay_silent_without_logging() {
    let telemetry = Telemetry::new(TelemetryMode::None);

    telemetry.on_iteration(1, Stage::Main, Some(10.), true);
    telemetry.on_result(10, 10.);
    telemetry.log("lost message");
}

#[test]
fn can_log_improvements_and_progress() {
    let (logger, buffer) = create_buffer_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_progress: 10 });

    telemetry.on_iteration(0, Stage::Init, None, false);
    telemetry.on_iteration(3, Stage::Main, Some(120.), true);
    telemetry.on_iteration(5, Stage::Main, Some(120.), false);
    telemetry.on_iteration(10, Stage::Main, Some(120.), false);
    telemetry.on_result(100, 120.);

    let messages = buffer.lock().unwrap();
    assert_eq!(messages.len(), 4);
    assert!(messages[0].contains("iteration 0"));
    assert!(messages[0].contains("stage: init"));
    assert!(messages[0].contains("unknown"));
    assert!(messages[1].contains("iteration 3"));
    assert!(messages[1].contains("120.00min"));
    assert!(messages[2].contains("iteration 10"));
    assert!(messages[3].contains("planning done after 100 iterations"));
}

#[test]
fn can_log_every_iteration_with_zero_progress_step() {
    let (logger, buffer) = create_buffer_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_progress: 0 });

    telemetry.on_iteration(1, Stage::Main, Some(10.), false);
    telemetry.on_iteration(2, Stage::Main, Some(10.), false);

    assert_eq!(buffer.lock().unwrap().len(), 2);
}
