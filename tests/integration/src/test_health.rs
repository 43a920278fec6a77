//! Liveness probe integration tests.

#[cfg(test)]
mod tests {
    use crate::{client, endpoint_url, post_render};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_ok_on_healthz() {
        let client = client();

        let resp = client
            .get(format!("{}/healthz", endpoint_url()))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), "ok");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_stay_healthy_while_render_fails() {
        let client = client();

        let bad = (0..10).map(|_| post_render(&client, "garbage"));
        let health = (0..10).map(|_| {
            let client = client.clone();
            async move {
                client
                    .get(format!("{}/healthz", endpoint_url()))
                    .send()
                    .await
                    .unwrap()
                    .status()
            }
        });

        let (_, statuses) = tokio::join!(
            futures::future::join_all(bad),
            futures::future::join_all(health)
        );

        assert!(statuses.iter().all(|s| *s == reqwest::StatusCode::OK));
    }
}
