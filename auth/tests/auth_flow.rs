use std::sync::Arc;
use std::thread;

use auth::AuthConfig;
use auth::AuthService;
use auth::CredentialStore;
use auth::HashingConfig;
use auth::LoginError;
use auth::RegisterError;
use auth::SystemClock;
use auth::TokenError;
use auth::TokenIssuer;
use auth::TokenValidator;
use auth::Username;
use chrono::Duration;

const SECRET: &str = "integration-secret-key-at-least-32-bytes";

fn config() -> AuthConfig {
    AuthConfig::new(SECRET).with_hashing(HashingConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
}

fn tamper_signature(token: &str) -> String {
    let (message, signature) = token.rsplit_once('.').expect("token has three segments");
    let mut bytes = signature.as_bytes().to_vec();
    bytes[0] = if bytes[0] == b'x' { b'y' } else { b'x' };
    format!("{}.{}", message, String::from_utf8(bytes).unwrap())
}

#[test]
fn test_example_session() {
    let auth = AuthService::new(&config()).expect("Failed to build auth service");

    assert_eq!(auth.register("alice", "s3cret!"), Ok(()));

    let issued = auth.login("alice", "s3cret!").expect("Login failed");
    let identity = auth
        .authenticate(issued.access_token.as_str())
        .expect("Authentication failed");
    assert_eq!(identity.username.as_str(), "alice");

    assert_eq!(
        auth.login("alice", "wrong"),
        Err(LoginError::InvalidCredentials)
    );
}

#[test]
fn test_many_identities_round_trip() {
    let auth = AuthService::new(&config()).unwrap();
    let pairs = [
        ("alice", "s3cret!"),
        ("Bob", "correct horse battery staple"),
        ("carol@example.com", "ü-nicode-pässword"),
        ("d", " "),
    ];

    for (username, password) in pairs {
        auth.register(username, password).unwrap();
    }

    for (username, password) in pairs {
        let issued = auth.login(username, password).unwrap();
        let identity = auth.authenticate(issued.access_token.as_str()).unwrap();
        assert_eq!(identity.username.as_str(), username);
    }
}

#[test]
fn test_duplicate_registration_keeps_state() {
    let auth = AuthService::new(&config()).unwrap();
    auth.register("alice", "s3cret!").unwrap();
    let before = auth
        .credentials()
        .lookup(&Username::new("alice").unwrap());

    assert!(matches!(
        auth.register("alice", "other"),
        Err(RegisterError::AlreadyExists(_))
    ));

    let after = auth
        .credentials()
        .lookup(&Username::new("alice").unwrap());
    assert_eq!(before, after);
    assert_eq!(auth.credentials().len(), 1);
}

#[test]
fn test_concurrent_registration_has_single_winner() {
    let auth = Arc::new(AuthService::new(&config()).unwrap());
    let callers = 8;

    let results: Vec<Result<(), RegisterError>> = (0..callers)
        .map(|i| {
            let auth = Arc::clone(&auth);
            thread::spawn(move || auth.register("racer", &format!("password-{}", i)))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().expect("register thread panicked"))
        .collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let losers = results
        .iter()
        .filter(|r| matches!(r, Err(RegisterError::AlreadyExists(_))))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(losers, callers - 1);

    // Exactly one of the passwords is the stored one.
    let accepted = (0..callers)
        .filter(|i| auth.login("racer", &format!("password-{}", i)).is_ok())
        .count();
    assert_eq!(accepted, 1);
}

#[test]
fn test_zero_ttl_token_is_expired() {
    let config = config();
    let issuer = TokenIssuer::from_config(&config, Arc::new(SystemClock)).unwrap();
    let validator = TokenValidator::from_config(&config, Arc::new(SystemClock)).unwrap();

    let issued = issuer
        .issue(&Username::new("alice").unwrap(), Duration::zero())
        .unwrap();

    assert_eq!(
        validator.validate(issued.access_token.as_str()),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_tampered_token_is_invalid_signature() {
    let config = config();
    let issuer = TokenIssuer::from_config(&config, Arc::new(SystemClock)).unwrap();
    let validator = TokenValidator::from_config(&config, Arc::new(SystemClock)).unwrap();

    let issued = issuer.issue_default(&Username::new("alice").unwrap()).unwrap();
    let tampered = tamper_signature(issued.access_token.as_str());

    assert_eq!(
        validator.validate(&tampered),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_service_tokens_validate_with_standalone_validator() {
    let config = config();
    let auth = AuthService::new(&config).unwrap();
    let validator = TokenValidator::from_config(&config, Arc::new(SystemClock)).unwrap();
    auth.register("alice", "s3cret!").unwrap();

    let issued = auth.login("alice", "s3cret!").unwrap();
    let identity = validator.validate(issued.access_token.as_str()).unwrap();

    assert_eq!(identity.username.as_str(), "alice");
    assert_eq!(
        auth.authenticate(&tamper_signature(issued.access_token.as_str())),
        Err(LoginError::Unauthorized)
    );
}

#[test]
fn test_tokens_do_not_cross_secrets() {
    let auth_a = AuthService::new(&config()).unwrap();
    let auth_b = AuthService::new(&AuthConfig::new("a-completely-different-secret-of-32b")).unwrap();
    auth_a.register("alice", "s3cret!").unwrap();

    let issued = auth_a.login("alice", "s3cret!").unwrap();

    assert_eq!(
        auth_b.authenticate(issued.access_token.as_str()),
        Err(LoginError::Unauthorized)
    );
}
