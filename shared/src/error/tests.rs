use super::*;

#[test]
fn test_classify_credential_codes() {
    assert_eq!(
        GatewayErrorKind::classify_code("auth/wrong-password"),
        GatewayErrorKind::InvalidCredentials
    );
    assert_eq!(
        GatewayErrorKind::classify_code("auth/user-not-found"),
        GatewayErrorKind::InvalidCredentials
    );
    assert_eq!(
        GatewayErrorKind::classify_code("auth/invalid-credential"),
        GatewayErrorKind::InvalidCredentials
    );
}

#[test]
fn test_classify_popup_closed() {
    assert_eq!(
        GatewayErrorKind::classify_code("auth/popup-closed-by-user"),
        GatewayErrorKind::PopupCancelled
    );
}

#[test]
fn test_classify_invalid_email() {
    assert_eq!(
        GatewayErrorKind::classify_code("auth/invalid-email"),
        GatewayErrorKind::InvalidEmail
    );
}

#[test]
fn test_classify_network() {
    assert_eq!(
        GatewayErrorKind::classify_code("auth/network-request-failed"),
        GatewayErrorKind::Network
    );
}

#[test]
fn test_unknown_code_falls_through() {
    assert_eq!(
        GatewayErrorKind::classify_code("auth/some-future-code"),
        GatewayErrorKind::Unknown
    );
}

#[test]
fn test_error_response_round_trip() {
    let wire = ErrorResponse {
        code: "auth/popup-closed-by-user".to_string(),
        message: "Popup closed by user".to_string(),
    };
    let err: GatewayError = wire.into();
    assert_eq!(err.kind, GatewayErrorKind::PopupCancelled);
    assert_eq!(err.message, "Popup closed by user");
}
