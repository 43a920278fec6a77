//! Error handling integration tests.

#[cfg(test)]
mod tests {
    use crate::{client, endpoint_url, error_message, post_render, render_body};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_400_for_missing_fields() {
        let client = client();

        let cases = [
            (render_body("", "private", "b"), "aws-region is required"),
            (render_body("us-east-1", "", "b"), "acl is required"),
            (render_body("us-east-1", "private", ""), "bucket-name is required"),
        ];

        for (body, reason) in cases {
            let resp = post_render(&client, body.to_string()).await;
            assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
            assert_eq!(error_message(resp).await, reason);
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_400_for_unknown_acl() {
        let client = client();

        let resp = post_render(
            &client,
            render_body("us-east-1", "public-read-write", "b").to_string(),
        )
        .await;

        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        assert!(error_message(resp).await.starts_with("acl must be one of"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_400_for_malformed_json() {
        let client = client();

        let resp = post_render(&client, r#"{"payload": {"properties": "#).await;

        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, "invalid request body");

        // The server is still up afterwards.
        let health = client
            .get(format!("{}/healthz", endpoint_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(health.status(), reqwest::StatusCode::OK);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_405_for_get_render() {
        let client = client();

        let resp = client
            .get(format!("{}/render", endpoint_url()))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_404_for_unknown_route() {
        let client = client();

        let resp = client
            .post(format!("{}/plan", endpoint_url()))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
        assert_eq!(error_message(resp).await, "route not found: /plan");
    }
}
