#[cfg(test)]
mod tests {
    use crate::helpers::app::ADMIN_BADGE_ID;
    use crate::helpers::{admin_token, body_json, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::badge::Model as Badge;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("auth", token);
        match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    #[tokio::test]
    async fn badge_routes_require_a_token() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/badges")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(res).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Unauthorized - Token not provided");
    }

    #[tokio::test]
    async fn list_includes_admin_badge() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);

        let res = app
            .oneshot(authed("GET", "/api/badges", &token, None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        assert_eq!(json["message"], "Badges retrieved successfully");
        let badges = json["data"].as_array().unwrap();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0]["badgeId"], ADMIN_BADGE_ID);
        assert_eq!(badges[0]["name"], "admin");
        assert!(badges[0]["lastScanned"].is_null());
        assert_eq!(badges[0]["isScanned"], false);
        assert!(badges[0].get("id").is_none());
    }

    #[tokio::test]
    async fn create_then_fetch_badge() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);

        let res = app
            .clone()
            .oneshot(authed(
                "POST",
                "/api/badges",
                &token,
                Some(json!({ "badgeId": "A1", "name": "Alice" })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Badge created successfully");
        assert_eq!(json["data"]["badgeId"], "A1");
        assert_eq!(json["data"]["isScanned"], false);

        let res = app
            .oneshot(authed("GET", "/api/badges/A1", &token, None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Badge retrieved successfully");
        assert_eq!(json["data"]["name"], "Alice");
    }

    #[tokio::test]
    async fn duplicate_badge_is_rejected_and_original_kept() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);
        Badge::create(state.db(), "A1", "Alice").await.unwrap();

        let res = app
            .oneshot(authed(
                "POST",
                "/api/badges",
                &token,
                Some(json!({ "badgeId": "A1", "name": "Mallory" })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Badge with the given ID already exists");

        let stored = Badge::find_by_badge_id(state.db(), "A1").await.unwrap().unwrap();
        assert_eq!(stored.name, "Alice");
        assert_eq!(Badge::find_all(state.db()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_with_missing_name_is_bad_request() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);

        let res = app
            .oneshot(authed(
                "POST",
                "/api/badges",
                &token,
                Some(json!({ "badgeId": "A1" })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Name is required");
    }

    #[tokio::test]
    async fn create_with_blank_badge_id_is_bad_request() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);

        let res = app
            .oneshot(authed(
                "POST",
                "/api/badges",
                &token,
                Some(json!({ "badgeId": "   ", "name": "Nobody" })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Badge ID is required");

        assert_eq!(Badge::find_all(state.db()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_badge_is_not_found() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);

        let res = app
            .oneshot(authed("GET", "/api/badges/nope", &token, None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Badge not found");
    }

    #[tokio::test]
    async fn rename_changes_name_only() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);
        let badge = Badge::create(state.db(), "A1", "Alice").await.unwrap();
        badge.record_scan(state.db()).await.unwrap();

        let res = app
            .clone()
            .oneshot(authed(
                "PUT",
                "/api/badges/A1",
                &token,
                Some(json!({ "name": "Alicia" })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Badge modified successfully");
        assert_eq!(json["data"]["name"], "Alicia");
        assert_eq!(json["data"]["isScanned"], true);

        let res = app
            .oneshot(authed(
                "PUT",
                "/api/badges/ghost",
                &token,
                Some(json!({ "name": "Nobody" })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_single_badge() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);
        Badge::create(state.db(), "A1", "Alice").await.unwrap();

        let res = app
            .clone()
            .oneshot(authed("DELETE", "/api/badges/A1", &token, None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Badge deleted successfully");

        let res = app
            .oneshot(authed("DELETE", "/api/badges/A1", &token, None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn admin_badge_cannot_be_deleted() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);

        let res = app
            .oneshot(authed(
                "DELETE",
                &format!("/api/badges/{ADMIN_BADGE_ID}"),
                &token,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let json = body_json(res).await;
        assert_eq!(json["message"], "The admin badge cannot be deleted");

        assert!(
            Badge::find_by_badge_id(state.db(), ADMIN_BADGE_ID)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn delete_all_keeps_admin_badge() {
        let (app, state) = make_test_app().await;
        let token = admin_token(&state);
        Badge::create(state.db(), "A1", "Alice").await.unwrap();
        Badge::create(state.db(), "B2", "Bob").await.unwrap();

        let res = app
            .oneshot(authed("DELETE", "/api/badges", &token, None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["message"], "All badges deleted successfully");
        assert_eq!(json["data"]["deleted"], 2);

        let left = Badge::find_all(state.db()).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].badge_id, ADMIN_BADGE_ID);
    }
}
