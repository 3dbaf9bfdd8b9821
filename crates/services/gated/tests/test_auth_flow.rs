use std::error::Error;

use gate_sdk::error::Error as SdkError;
use serial_test::serial;

mod common;

#[tokio::test]
#[serial]
async fn test_register_login_validate_scenario() -> Result<(), Box<dyn Error>> {
    let Some(client) = common::client_from_env() else {
        return Ok(());
    };
    let email = common::unique_email("scenario");

    let registered = client.register(&email, "secret123").await?;
    assert_eq!(registered.user.email, email);

    let logged_in = client.login(&email, "secret123").await?;
    assert_eq!(logged_in.user, registered.user);

    // Both tokens validate, and resolve to the identity issued with them.
    let user = client.validate(&registered.token).await?;
    assert_eq!(user, registered.user);
    let user = client.validate(&logged_in.token).await?;
    assert_eq!(user, logged_in.user);

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_duplicate_registration_rejected() -> Result<(), Box<dyn Error>> {
    let Some(client) = common::client_from_env() else {
        return Ok(());
    };
    let email = common::unique_email("duplicate");

    client.register(&email, "secret123").await?;

    let result = client.register(&email, "another-password").await;
    match result {
        Err(SdkError::Api { status, .. }) => assert_eq!(status, 400),
        other => panic!("expected duplicate email rejection, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_concurrent_duplicate_registration_yields_one_success() -> Result<(), Box<dyn Error>> {
    let Some(client) = common::client_from_env() else {
        return Ok(());
    };
    let email = common::unique_email("race");

    let (first, second) = tokio::join!(
        client.register(&email, "secret123"),
        client.register(&email, "secret123"),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one registration must win");

    let loser = if first.is_ok() { second } else { first };
    match loser {
        Err(SdkError::Api { status, .. }) => assert_eq!(status, 400),
        other => panic!("expected duplicate email rejection, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_missing_credential_fields_rejected() -> Result<(), Box<dyn Error>> {
    let Some(client) = common::client_from_env() else {
        return Ok(());
    };

    // Absent and present-but-empty fields get the same validation error.
    let bodies = [
        serde_json::json!({ "email": common::unique_email("partial") }),
        serde_json::json!({ "password": "secret123" }),
        serde_json::json!({}),
        serde_json::json!({ "email": "", "password": "" }),
    ];

    for endpoint in ["auth/register", "auth/login"] {
        for body in &bodies {
            let response = client.api.post(endpoint, body).await?;
            assert_eq!(response.status().as_u16(), 400, "{endpoint} {body}");

            let envelope: serde_json::Value = response.json().await?;
            assert_eq!(envelope["status"], "error");
            assert_eq!(envelope["message"], "Email and password are required");
        }
    }

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_login_failures_are_indistinguishable() -> Result<(), Box<dyn Error>> {
    let Some(client) = common::client_from_env() else {
        return Ok(());
    };
    let email = common::unique_email("leak");
    client.register(&email, "secret123").await?;

    let wrong_password = client.login(&email, "not-the-password").await;
    let unknown_email = client
        .login(&common::unique_email("nobody"), "secret123")
        .await;

    match (wrong_password, unknown_email) {
        (
            Err(SdkError::Api {
                status: first_status,
                message: first_message,
            }),
            Err(SdkError::Api {
                status: second_status,
                message: second_message,
            }),
        ) => {
            assert_eq!(first_status, 401);
            assert_eq!(first_status, second_status);
            assert_eq!(first_message, second_message);
        }
        other => panic!("expected identical rejections, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_validate_rejects_missing_and_garbage_tokens() -> Result<(), Box<dyn Error>> {
    let Some(client) = common::client_from_env() else {
        return Ok(());
    };

    let response = client.api.get("auth/validate").await?;
    assert_eq!(response.status().as_u16(), 401);

    match client.validate("garbage").await {
        Err(SdkError::Api { status, .. }) => assert_eq!(status, 401),
        other => panic!("expected unauthorized, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_health_endpoint() -> Result<(), Box<dyn Error>> {
    let Some(client) = common::client_from_env() else {
        return Ok(());
    };

    let response = client.api.get("health").await?;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["status"], "ok");

    Ok(())
}
