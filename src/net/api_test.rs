use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
}

#[test]
fn status_403_maps_to_unauthorized() {
    assert_eq!(ApiError::from_status(403), ApiError::Unauthorized);
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(ApiError::from_status(404), ApiError::Status(404));
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
}

// =============================================================
// Error display
// =============================================================

#[test]
fn unauthorized_message_names_the_session() {
    assert_eq!(
        ApiError::Unauthorized.to_string(),
        "session expired or not authorized"
    );
}

#[test]
fn status_message_includes_code() {
    assert_eq!(
        ApiError::Status(502).to_string(),
        "request failed with status 502"
    );
}
