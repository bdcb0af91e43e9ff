use super::*;

#[test]
fn login_outcome_returns_token_on_success() {
    let result = Ok(LoginResponse { access_token: "jwt-token".to_owned() });
    assert_eq!(login_outcome(result), Ok("jwt-token".to_owned()));
}

#[test]
fn login_outcome_rejected_credentials_store_nothing() {
    assert_eq!(
        login_outcome(Err(ApiError::Status(401))),
        Err("Error al iniciar sesión. Verifica tus credenciales.")
    );
}

#[test]
fn login_outcome_network_failure_uses_same_message() {
    assert_eq!(
        login_outcome(Err(ApiError::Network("offline".to_owned()))),
        Err("Error al iniciar sesión. Verifica tus credenciales.")
    );
}

#[test]
fn login_outcome_blank_token_is_a_failure() {
    let result = Ok(LoginResponse { access_token: "  ".to_owned() });
    assert!(login_outcome(result).is_err());
}
