use super::*;

/// Expect an owner context for a valid token of an approved owner
#[tokio::test]
async fn resolves_approved_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    let (team, owner) = test.league().insert_owned_team("Zebras", false).await?;
    let header = format!("Bearer {}", issue_test_token(TEST_OWNER_EMAIL)?);

    let owner_service = OwnerService::new(&test.db);
    let verifier = TokenVerifier::new(TEST_JWT_SECRET);
    let context = owner_service
        .resolve(Some(&header), &verifier)
        .await
        .unwrap();

    assert_eq!(context.owner_id, owner.id);
    assert_eq!(context.team_id, team.id);
    assert_eq!(context.team_name, "Zebras");
    assert!(!context.is_admin);
    assert!(context.require_admin().is_err());

    Ok(())
}

/// Expect MissingBearer without a header or with a non-bearer scheme
#[tokio::test]
async fn fails_without_bearer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let owner_service = OwnerService::new(&test.db);
    let verifier = TokenVerifier::new(TEST_JWT_SECRET);
    let missing = owner_service.resolve(None, &verifier).await;
    let basic = owner_service
        .resolve(Some("Basic dXNlcjpwYXNz"), &verifier)
        .await;

    assert!(matches!(
        missing,
        Err(Error::AuthError(AuthError::MissingBearer))
    ));
    assert!(matches!(basic, Err(Error::AuthError(AuthError::MissingBearer))));

    Ok(())
}

/// Expect InvalidCredential for an expired token
#[tokio::test]
async fn fails_for_expired_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    test.league().insert_owned_team("Zebras", false).await?;
    let header = format!("Bearer {}", issue_expired_test_token(TEST_OWNER_EMAIL)?);

    let owner_service = OwnerService::new(&test.db);
    let verifier = TokenVerifier::new(TEST_JWT_SECRET);
    let result = owner_service.resolve(Some(&header), &verifier).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredential(_)))
    ));

    Ok(())
}

/// Expect InvalidCredential for a token signed with another secret
#[tokio::test]
async fn fails_for_foreign_signature() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_league_tables().build().await?;
    test.league().insert_owned_team("Zebras", false).await?;
    let header = format!("Bearer {}", issue_test_token(TEST_OWNER_EMAIL)?);

    let owner_service = OwnerService::new(&test.db);
    let verifier = TokenVerifier::new("a-different-secret-for-another-site");
    let result = owner_service.resolve(Some(&header), &verifier).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredential(_)))
    ));

    Ok(())
}

/// Expect NotApprovedOwner for a valid token whose email has no approved owner
#[tokio::test]
async fn fails_for_unapproved_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;
    let header = format!("Bearer {}", issue_test_token("stranger@example.com")?);

    let owner_service = OwnerService::new(&test.db);
    let verifier = TokenVerifier::new(TEST_JWT_SECRET);
    let result = owner_service.resolve(Some(&header), &verifier).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::NotApprovedOwner(email))) if email == "stranger@example.com"
    ));

    Ok(())
}
