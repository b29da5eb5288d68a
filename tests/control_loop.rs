//! End-to-end control loop scenarios over the mock platform

use tiva_trail::follower::{
    ControlPanel, FollowerConfig, LedColor, LineFollower, Mode, StatusLed,
};
use tiva_trail::libraries::encoder::{Axle, VelocityMailbox};
use tiva_trail::libraries::line_sensor::CalibrationTarget;
use tiva_trail::libraries::motor_driver::{AdjustLevel, DriveConfig, DriveInterface, HBridgeDrive};
use tiva_trail::platform::mock::{MockAdc, MockGpio, MockPwm, MockQei, MockTimer, MockUart};
use tiva_trail::platform::traits::{
    ChannelReadings, PwmConfig, PwmInterface, QeiDirection, TimerInterface, UartConfig,
};
use tiva_trail::telemetry::UartConsole;

type TestFollower<'a> = LineFollower<
    'a,
    HBridgeDrive<MockPwm, MockPwm, MockGpio, MockGpio>,
    MockAdc,
    MockGpio,
    MockQei,
    MockTimer,
    UartConsole<MockUart>,
>;

fn test_follower<'a>(left: &'a VelocityMailbox, right: &'a VelocityMailbox) -> TestFollower<'a> {
    let drive = HBridgeDrive::new(
        MockPwm::new(PwmConfig::default()),
        MockPwm::new(PwmConfig::default()),
        MockGpio::new_output(),
        MockGpio::new_output(),
        DriveConfig::default(),
    )
    .unwrap();

    LineFollower::new(
        drive,
        MockAdc::new(),
        ControlPanel::new(
            MockGpio::new_input_pull_up(),
            MockGpio::new_input_pull_up(),
            MockGpio::new_input_pull_up(),
            MockGpio::new_input_pull_up(),
        ),
        StatusLed::new(
            MockGpio::new_output(),
            MockGpio::new_output(),
            MockGpio::new_output(),
        ),
        MockQei::default(),
        MockQei::default(),
        left,
        right,
        MockTimer::new(),
        UartConsole::new(MockUart::new(UartConfig::default())),
        FollowerConfig::default(),
    )
}

fn transcript(follower: &TestFollower<'_>) -> String {
    String::from_utf8(follower.console().uart().tx_buffer()).unwrap()
}

fn press_mode_select(follower: &mut TestFollower<'_>) {
    follower.panel_mut().mode_select_mut().set_input_state(false);
    follower.poll().unwrap();
    follower.panel_mut().mode_select_mut().set_input_state(true);
}

fn press_log(follower: &mut TestFollower<'_>) {
    follower.panel_mut().log_mut().set_input_state(false);
    follower.poll().unwrap();
    follower.panel_mut().log_mut().set_input_state(true);
}

/// Calibrate both surfaces, then advance to diagnostic and return the
/// console transcript of the whole session.
fn session_transcript(
    black: ChannelReadings,
    white: ChannelReadings,
    sweep: ChannelReadings,
) -> String {
    let left = VelocityMailbox::new();
    let right = VelocityMailbox::new();
    let mut follower = test_follower(&left, &right);
    follower.init().unwrap();

    follower.adc_mut().queue_frame(black);
    press_log(&mut follower);
    follower.adc_mut().queue_frame(white);
    press_log(&mut follower);

    follower.adc_mut().set_baseline(sweep);
    press_mode_select(&mut follower);
    transcript(&follower)
}

#[test]
fn test_operator_session_transcript() {
    let black = [2850, 2910, 2875, 2860, 2895, 2855, 2870, 2865];
    let white = [512, 498, 505, 520, 515, 500, 508, 511];
    // Line under channels 3 and 4: those read far above white + margin
    let sweep = [400, 380, 395, 2600, 2700, 410, 405, 390];

    let left = VelocityMailbox::new();
    let right = VelocityMailbox::new();
    let mut follower = test_follower(&left, &right);
    follower.init().unwrap();

    follower.adc_mut().queue_frame(black);
    press_log(&mut follower);
    assert_eq!(follower.calibration_target(), CalibrationTarget::White);
    assert_eq!(follower.calibration().black(), &black);
    assert_eq!(follower.calibration().white(), &[0; 8]);

    follower.adc_mut().queue_frame(white);
    press_log(&mut follower);
    assert_eq!(follower.calibration_target(), CalibrationTarget::Black);
    assert_eq!(follower.calibration().black(), &black);
    assert_eq!(follower.calibration().white(), &white);

    follower.adc_mut().set_baseline(sweep);
    press_mode_select(&mut follower);
    assert_eq!(follower.mode(), Mode::Diagnostic);
    assert_eq!(follower.line_signature().bits(), 0b1110_0111);

    press_mode_select(&mut follower);
    assert_eq!(follower.mode(), Mode::LineFollow);
    assert_eq!(follower.indicator().color(), Some(LedColor::Red));
    assert!(follower.drive().is_enabled());

    assert_eq!(
        transcript(&follower),
        "CALIB_SENSOR\r\nCALIB_BLACK: \
         2850 2910 2875 2860 2895 2855 2870 2865 \r\nCALIB_WHITE: \
         0512 0498 0505 0520 0515 0500 0508 0511 \r\nCALIB_BLACK: \
         \r\nTEST_HW\r\nADC_BIN: 11100111\r\n\
         \r\nLINE_FOLLOW\r\n"
    );
}

#[test]
fn test_black_reference_never_affects_signature() {
    let white = [500; 8];
    let sweep = [300; 8];

    // Same white row and sweep, wildly different black rows
    let high_black = session_transcript([4000; 8], white, sweep);
    let low_black = session_transcript([10; 8], white, sweep);

    let expected_tail = "\r\nTEST_HW\r\nADC_BIN: 11111111\r\n";
    assert!(high_black.ends_with(expected_tail));
    assert!(low_black.ends_with(expected_tail));
}

#[test]
fn test_trim_hold_ramps_and_clamps() {
    let left = VelocityMailbox::new();
    let right = VelocityMailbox::new();
    let mut follower = test_follower(&left, &right);
    follower.init().unwrap();

    press_mode_select(&mut follower);
    press_mode_select(&mut follower);
    assert_eq!(follower.mode(), Mode::LineFollow);

    // A held decrease ramps one step per pass
    follower.panel_mut().decrease_mut().set_input_state(false);
    follower.poll().unwrap();
    assert_eq!(follower.adjust(), AdjustLevel::new(480).unwrap());
    follower.poll().unwrap();
    assert_eq!(follower.adjust(), AdjustLevel::new(460).unwrap());

    for _ in 0..30 {
        follower.poll().unwrap();
    }
    assert_eq!(follower.adjust(), AdjustLevel::MIN);
    follower.panel_mut().decrease_mut().set_input_state(true);

    let (left_pwm, right_pwm) = follower.drive().channels();
    assert!((left_pwm.duty_cycle() - 0.05).abs() < 1e-6);
    assert!((right_pwm.duty_cycle() - 0.05).abs() < 1e-6);

    // Ramp all the way up against the other clamp
    follower.panel_mut().increase_mut().set_input_state(false);
    for _ in 0..50 {
        follower.poll().unwrap();
    }
    assert_eq!(follower.adjust(), AdjustLevel::MAX);
    follower.panel_mut().increase_mut().set_input_state(true);

    let (left_pwm, right_pwm) = follower.drive().channels();
    assert!((left_pwm.duty_cycle() - 0.95).abs() < 1e-6);
    assert!((right_pwm.duty_cycle() - 0.95).abs() < 1e-6);
}

#[test]
fn test_axle_reports_require_fresh_velocity() {
    let left = VelocityMailbox::new();
    let right = VelocityMailbox::new();
    let mut follower = test_follower(&left, &right);
    follower.init().unwrap();

    press_mode_select(&mut follower);
    press_mode_select(&mut follower);

    follower.qei_mut(Axle::Left).set_position(14_500);
    follower.qei_mut(Axle::Right).set_position(250);

    // Only the left window has latched; the right axle stays silent
    left.latch(250, QeiDirection::Forward);
    follower.poll().unwrap();

    let text = transcript(&follower);
    assert!(text.ends_with("Motor 1:   250,  14500 \n"));
    assert_eq!(text.matches("Motor 2:").count(), 0);
    assert!(!left.is_fresh());

    // Nothing latched since the take: no new report either side
    follower.poll().unwrap();
    assert_eq!(transcript(&follower).matches("Motor 1:").count(), 1);

    // Both axles latched, the later left sample wins
    left.latch(100, QeiDirection::Forward);
    left.latch(300, QeiDirection::Forward);
    right.latch(40, QeiDirection::Reverse);
    follower.poll().unwrap();

    let text = transcript(&follower);
    assert!(text.ends_with("Motor 1:   300,  14500 \nMotor 2:   -40,    250 \n"));
}

#[test]
fn test_interrupt_latch_reaches_report() {
    let left = VelocityMailbox::new();
    let right = VelocityMailbox::new();
    let mut follower = test_follower(&left, &right);
    follower.init().unwrap();

    press_mode_select(&mut follower);
    press_mode_select(&mut follower);

    // The window interrupt body: read the decoder, latch the mailbox
    follower
        .qei_mut(Axle::Left)
        .set_velocity(420, QeiDirection::Reverse);
    left.latch_from(follower.qei_mut(Axle::Left));

    follower.poll().unwrap();
    assert!(transcript(&follower).ends_with("Motor 1:  -420,      0 \n"));
}

#[test]
fn test_loop_pacing_delays() {
    let left = VelocityMailbox::new();
    let right = VelocityMailbox::new();
    let mut follower = test_follower(&left, &right);
    follower.init().unwrap();
    assert_eq!(follower.timer().now_us(), 0);

    // Accepted log press settles for the full delay
    press_log(&mut follower);
    assert_eq!(follower.timer().now_us(), 375_000);

    // Idle calibrate passes burn no simulated time
    follower.poll().unwrap();
    assert_eq!(follower.timer().now_us(), 375_000);

    // Mode advance settles, then the diagnostic body adds its short pause
    press_mode_select(&mut follower);
    assert_eq!(follower.timer().now_us(), 750_075);

    follower.poll().unwrap();
    assert_eq!(follower.timer().now_us(), 750_150);

    // Line-follow entry settles and the first pass runs the loop delay
    press_mode_select(&mut follower);
    assert_eq!(follower.timer().now_us(), 1_500_150);

    follower.poll().unwrap();
    assert_eq!(follower.timer().now_us(), 1_875_150);
}
