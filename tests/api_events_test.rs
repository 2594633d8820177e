//! Integration tests for the event creation API endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_json, test_app, token_path};

    fn create_request(payload: Value) -> Request<Body> {
        Request::builder()
            .uri("/create-event")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    fn mock_token(server: &mut ServerGuard) -> mockito::Mock {
        server
            .mock("POST", token_path().as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token_type": "Bearer", "expires_in": 3599, "access_token": "graph-token"}"#)
            .create()
    }

    /// Tests creating an event with an attendee
    #[tokio::test]
    async fn it_creates_an_event() {
        let mut server = Server::new_async().await;
        let token = mock_token(&mut server);
        let create = server
            .mock("POST", "/me/events")
            .match_header("authorization", "Bearer graph-token")
            .match_body(Matcher::Json(json!({
                "subject": "Planning",
                "start": {"dateTime": "2024-01-02T15:00:00Z", "timeZone": "UTC"},
                "end": {"dateTime": "2024-01-02T16:00:00Z", "timeZone": "UTC"},
                "attendees": [{
                    "emailAddress": {"address": "bob@example.com", "name": "bob"},
                    "type": "required"
                }]
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "AAMkAGI2"}"#)
            .create();
        let app = test_app(&server.url());

        let response = app
            .oneshot(create_request(json!({
                "subject": "Planning",
                "start_time": "2024-01-02T15:00:00Z",
                "end_time": "2024-01-02T16:00:00Z",
                "attendees": ["bob@example.com"]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body,
            json!({"success": true, "message": "Event created successfully."})
        );
        token.assert();
        create.assert();
    }

    /// Tests that attendees default to an empty list
    #[tokio::test]
    async fn it_defaults_attendees_to_empty() {
        let mut server = Server::new_async().await;
        let _token = mock_token(&mut server);
        let create = server
            .mock("POST", "/me/events")
            .match_body(Matcher::Json(json!({
                "subject": "Focus time",
                "start": {"dateTime": "2024-01-02T15:00:00Z", "timeZone": "UTC"},
                "end": {"dateTime": "2024-01-02T16:00:00Z", "timeZone": "UTC"},
                "attendees": []
            })))
            .with_status(201)
            .create();
        let app = test_app(&server.url());

        let response = app
            .oneshot(create_request(json!({
                "subject": "Focus time",
                "start_time": "2024-01-02T15:00:00Z",
                "end_time": "2024-01-02T16:00:00Z"
            })))
            .await
            .unwrap();

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], true);
        create.assert();
    }

    /// Tests that the provider's response body is passed back on failure
    #[tokio::test]
    async fn it_returns_the_provider_error() {
        let mut server = Server::new_async().await;
        let _token = mock_token(&mut server);
        let _create = server
            .mock("POST", "/me/events")
            .with_status(400)
            .with_body("bad request")
            .create();
        let app = test_app(&server.url());

        let response = app
            .oneshot(create_request(json!({
                "subject": "Planning",
                "start_time": "2024-01-02T15:00:00Z",
                "end_time": "2024-01-02T16:00:00Z",
                "attendees": ["bob@example.com"]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, json!({"success": false, "error": "bad request"}));
    }

    /// Tests that any status other than 201 is a failure
    #[tokio::test]
    async fn it_treats_200_as_failure() {
        let mut server = Server::new_async().await;
        let _token = mock_token(&mut server);
        let _create = server
            .mock("POST", "/me/events")
            .with_status(200)
            .with_body(r#"{"id": "AAMkAGI2"}"#)
            .create();
        let app = test_app(&server.url());

        let response = app
            .oneshot(create_request(json!({
                "subject": "Planning",
                "start_time": "2024-01-02T15:00:00Z",
                "end_time": "2024-01-02T16:00:00Z"
            })))
            .await
            .unwrap();

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, json!({"success": false, "error": r#"{"id": "AAMkAGI2"}"#}));
    }

    /// Tests that a rejected token request is reported without
    /// calling the calendar
    #[tokio::test]
    async fn it_reports_token_failures() {
        let mut server = Server::new_async().await;
        let _token = server
            .mock("POST", token_path().as_str())
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "invalid_client", "error_description": "Invalid client secret provided."}"#)
            .create();
        let create = server.mock("POST", "/me/events").expect(0).create();
        let app = test_app(&server.url());

        let response = app
            .oneshot(create_request(json!({
                "subject": "Planning",
                "start_time": "2024-01-02T15:00:00Z",
                "end_time": "2024-01-02T16:00:00Z"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("Invalid client secret provided.")
        );
        assert!(body.get("message").is_none());
        create.assert();
    }

    /// Tests the endpoint rejects a body without a subject
    #[tokio::test]
    async fn it_returns_422_for_missing_subject() {
        let server = Server::new_async().await;
        let app = test_app(&server.url());

        let response = app
            .oneshot(create_request(json!({
                "start_time": "2024-01-02T15:00:00Z",
                "end_time": "2024-01-02T16:00:00Z"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
