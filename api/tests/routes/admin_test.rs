#[cfg(test)]
mod tests {
    use crate::helpers::app::{ADMIN_BADGE_ID, ADMIN_PASSWORD};
    use crate::helpers::{admin_token, body_json, make_test_app};
    use api::auth::AdminClaims;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;
    use tower::ServiceExt;

    fn login_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/admin")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn check_auth_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/api/admin/checkAuth");
        if let Some(token) = token {
            builder = builder.header("auth", token);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn login_with_admin_credentials_returns_token() {
        let (app, _) = make_test_app().await;

        let res = app
            .clone()
            .oneshot(login_request(
                json!({ "badgeId": ADMIN_BADGE_ID, "password": ADMIN_PASSWORD }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Admin logged in successfully");
        let token = json["data"]["token"].as_str().unwrap().to_owned();
        assert!(json["data"]["expiresAt"].is_string());

        let res = app.oneshot(check_auth_request(Some(&token))).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Admin is authenticated");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let res = app
            .oneshot(login_request(
                json!({ "badgeId": ADMIN_BADGE_ID, "password": "nope" }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(res).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication failed");
    }

    #[tokio::test]
    async fn login_with_non_admin_badge_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let res = app
            .oneshot(login_request(
                json!({ "badgeId": "A1", "password": ADMIN_PASSWORD }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_with_missing_fields_is_bad_request() {
        let (app, _) = make_test_app().await;

        let res = app
            .oneshot(login_request(json!({ "badgeId": ADMIN_BADGE_ID })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let json = body_json(res).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Password is required");
    }

    #[tokio::test]
    async fn check_auth_without_token_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let res = app.oneshot(check_auth_request(None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(res).await;
        assert_eq!(json["message"], "Unauthorized - Token not provided");
    }

    #[tokio::test]
    async fn check_auth_with_garbage_token_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let res = app
            .oneshot(check_auth_request(Some("not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(res).await;
        assert_eq!(json["message"], "Invalid token");
    }

    #[tokio::test]
    async fn check_auth_with_non_admin_claim_is_unauthorized() {
        let (app, _) = make_test_app().await;
        let now = chrono::Utc::now().timestamp() as usize;
        let token = encode(
            &Header::default(),
            &AdminClaims { is_admin: false, iat: now, exp: now + 600 },
            &EncodingKey::from_secret(b"integration-test-secret"),
        )
        .unwrap();

        let res = app.oneshot(check_auth_request(Some(&token))).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(res).await;
        assert_eq!(json["message"], "User is not an admin");
    }

    #[tokio::test]
    async fn bearer_prefix_is_tolerated() {
        let (app, state) = make_test_app().await;
        let token = format!("Bearer {}", admin_token(&state));

        let res = app.oneshot(check_auth_request(Some(&token))).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
