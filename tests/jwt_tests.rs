use rentals_backend::config::JwtConfig;
use rentals_backend::model::user::Role;
use rentals_backend::util::jwt::*;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

fn create_test_jwt_utils() -> JwtTokenUtilsImpl {
    JwtTokenUtilsImpl::new(JwtConfig::default())
}

#[test]
fn test_token_type_as_str() {
    assert_eq!(TokenType::Access.as_str(), "access");
    assert_eq!(TokenType::Refresh.as_str(), "refresh");
}

#[test]
fn test_generate_token_pair_claims() {
    let jwt_utils = create_test_jwt_utils();

    let pair = jwt_utils.generate_token_pair("user123", "A1", Role::Tenant).unwrap();
    assert_eq!(pair.token_type, "Bearer");
    assert_eq!(pair.expires_in, 15 * 60);
    assert_ne!(pair.access_token, pair.refresh_token);

    let claims = jwt_utils.validate_access_token(&pair.access_token).unwrap();
    assert_eq!(claims.sub, "user123");
    assert_eq!(claims.identifier, "A1");
    assert_eq!(claims.role, "tenant");
    assert_eq!(claims.token_type, "access");
    assert!(claims.exp > Utc::now().timestamp());

    let refresh = jwt_utils.validate_refresh_token(&pair.refresh_token).unwrap();
    assert_eq!(refresh.token_type, "refresh");
    assert!(refresh.exp > claims.exp);
    assert_ne!(refresh.jti, claims.jti);
}

#[test]
fn test_token_types_are_not_interchangeable() {
    let jwt_utils = create_test_jwt_utils();
    let pair = jwt_utils.generate_token_pair("admin1", "landlord", Role::Admin).unwrap();

    assert!(matches!(
        jwt_utils.validate_access_token(&pair.refresh_token),
        Err(JwtError::InvalidTokenType { .. })
    ));
    assert!(matches!(
        jwt_utils.validate_refresh_token(&pair.access_token),
        Err(JwtError::InvalidTokenType { .. })
    ));
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let jwt_utils = create_test_jwt_utils();
    let other = JwtTokenUtilsImpl::new(JwtConfig {
        jwt_secret: "another_secret_key_that_is_long_enough_to_use".to_string(),
        ..JwtConfig::default()
    });
    let pair = other.generate_token_pair("user123", "A1", Role::Tenant).unwrap();

    assert!(matches!(
        jwt_utils.validate_access_token(&pair.access_token),
        Err(JwtError::DecodingFailed(_))
    ));
}

#[test]
fn test_expired_token_rejected() {
    let jwt_utils = create_test_jwt_utils();
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "user123".to_string(),
        identifier: "A1".to_string(),
        role: "tenant".to_string(),
        iat: now - 7200,
        exp: now - 3600,
        token_type: "access".to_string(),
        jti: "expired".to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_utils.jwt_config.jwt_secret.as_bytes()),
    )
    .unwrap();

    assert!(matches!(jwt_utils.validate_access_token(&token), Err(JwtError::TokenExpired)));
}

#[test]
fn test_extract_token_from_header() {
    let jwt_utils = create_test_jwt_utils();

    assert_eq!(jwt_utils.extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
    assert!(jwt_utils.extract_token_from_header("Basic abc").is_err());
    assert!(jwt_utils.extract_token_from_header("Bearer ").is_err());
    assert!(jwt_utils.extract_token_from_header("").is_err());
}

#[test]
fn test_check_role_permission() {
    let jwt_utils = create_test_jwt_utils();

    assert!(jwt_utils.check_role_permission("admin", Role::Admin));
    assert!(jwt_utils.check_role_permission("admin", Role::Tenant));
    assert!(jwt_utils.check_role_permission("tenant", Role::Tenant));
    assert!(!jwt_utils.check_role_permission("tenant", Role::Admin));
    assert!(!jwt_utils.check_role_permission("guest", Role::Tenant));
}
