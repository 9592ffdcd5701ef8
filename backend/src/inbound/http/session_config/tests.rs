//! Unit tests for session configuration parsing.

use super::*;
use crate::test_support::SessionKeyFile;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use std::collections::HashMap;

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn key_file() -> SessionKeyFile {
    SessionKeyFile::with_len(SESSION_KEY_MIN_LEN).expect("key file creation should succeed")
}

fn release_vars(key_file: &SessionKeyFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key_file.path().to_string_lossy().into_owned()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

fn expect_error(result: Result<SessionSettings, SessionConfigError>) -> SessionConfigError {
    match result {
        Ok(_) => panic!("expected session configuration to fail"),
        Err(error) => error,
    }
}

#[rstest]
fn release_accepts_complete_configuration(key_file: SessionKeyFile) {
    let env = mock_env(release_vars(&key_file));

    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("valid release settings");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
    assert_eq!(
        settings.key_source,
        KeySource::File(key_file.path().to_path_buf())
    );
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(key_file: SessionKeyFile, #[case] missing: &'static str) {
    let mut vars = release_vars(&key_file);
    vars.remove(missing);

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "sideways")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_malformed_toggles(
    key_file: SessionKeyFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(&key_file);
    vars.insert(name, value.to_owned());

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::InvalidEnv { name: got, .. } if got == name));
}

#[rstest]
fn release_rejects_insecure_same_site_none(key_file: SessionKeyFile) {
    let mut vars = release_vars(&key_file);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
}

#[rstest]
fn release_rejects_ephemeral_keys(key_file: SessionKeyFile) {
    let mut vars = release_vars(&key_file);
    vars.insert(ALLOW_EPHEMERAL_ENV, "yes".to_owned());

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
fn release_rejects_short_keys() {
    let short = SessionKeyFile::with_len(SESSION_KEY_MIN_LEN - 1).expect("key file");
    let env = mock_env(release_vars(&short));

    let err = expect_error(session_settings_from_env(&env, BuildMode::Release));

    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length, .. } if length == SESSION_KEY_MIN_LEN - 1
    ));
}

#[rstest]
fn release_requires_a_readable_key() {
    let mut vars = HashMap::from([
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Lax".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ]);
    vars.insert(KEY_FILE_ENV, "/nonexistent/moviebox/session_key".to_owned());

    let err = expect_error(session_settings_from_env(&mock_env(vars), BuildMode::Release));

    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn debug_defaults_everything() {
    let env = mock_env(HashMap::from([(
        KEY_FILE_ENV,
        "/nonexistent/moviebox/session_key".to_owned(),
    )]));

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
    assert_eq!(settings.key_source, KeySource::Ephemeral);
}

#[rstest]
fn debug_tolerates_insecure_same_site_none(key_file: SessionKeyFile) {
    let mut vars = release_vars(&key_file);
    vars.insert(COOKIE_SECURE_ENV, "false".to_owned());
    vars.insert(SAMESITE_ENV, "none".to_owned());

    let settings =
        session_settings_from_env(&mock_env(vars), BuildMode::Debug).expect("debug is lenient");

    assert!(!settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::None);
}

#[rstest]
#[case("1", Some(true))]
#[case(" Yes ", Some(true))]
#[case("n", Some(false))]
#[case("FALSE", Some(false))]
#[case("2", None)]
fn bool_parsing(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_bool(raw), expected);
}
