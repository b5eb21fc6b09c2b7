// Logging tests
//
// Only one test installs the global subscriber; a second installation in the
// same process must fail instead of panicking.

use kirikae::logging::init_subscriber;

#[test]
fn test_init_subscriber_once() {
    assert!(init_subscriber(true).is_ok());
    tracing::info!(component = "logging_tests", "subscriber installed");
    assert!(init_subscriber(false).is_err());
}
