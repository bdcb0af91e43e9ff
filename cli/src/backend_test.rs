use super::*;

fn creds() -> Credentials {
    Credentials::new("ana@example.com", "secreto").unwrap()
}

fn auth_header(req: &reqwest::Request) -> Option<&str> {
    req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}

#[test]
fn login_and_register_skip_stored_token() {
    let backend = HttpBackend::new("http://api.test/", Some("stale".to_owned()));
    let login = backend.json_post(endpoints::AUTH_LOGIN, &creds()).build().unwrap();
    let register = backend.json_post(endpoints::AUTH_REGISTER, &creds()).build().unwrap();

    assert_eq!(login.url().as_str(), "http://api.test/auth/login");
    assert_eq!(auth_header(&login), None);
    assert_eq!(auth_header(&register), None);
}

#[test]
fn api_calls_carry_bearer_token() {
    let backend = HttpBackend::new("http://api.test", Some("tok".to_owned()));
    let req = backend.json_post(endpoints::PROCESS, &serde_json::json!({})).build().unwrap();
    assert_eq!(auth_header(&req), Some("Bearer tok"));
}

#[test]
fn blank_token_is_not_sent() {
    let backend = HttpBackend::new("http://api.test", Some("  ".to_owned()));
    let req = backend.json_post(endpoints::PROCESS, &serde_json::json!({})).build().unwrap();
    assert_eq!(auth_header(&req), None);
}
