//! Response assertions

use axum::http::StatusCode;
use axum_test::TestResponse;

/// Assert a JSON error response: status code plus `msg` and `status` fields
pub fn assert_error(response: &TestResponse, status: StatusCode) -> String {
    assert_eq!(
        response.status_code(),
        status,
        "unexpected status, body: {}",
        response.text()
    );

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], status.as_u16());
    body["msg"]
        .as_str()
        .expect("error body has no msg")
        .to_string()
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
