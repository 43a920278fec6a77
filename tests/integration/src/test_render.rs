//! Render endpoint integration tests.

#[cfg(test)]
mod tests {
    use crate::{client, post_render, render_body, test_bucket_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_render_bucket_document() {
        let client = client();

        let resp = post_render(
            &client,
            render_body("us-east-1", "private", "my-bucket").to_string(),
        )
        .await;

        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("text/plain"),
        );
        assert!(resp.headers().get("x-request-id").is_some());

        let doc = resp.text().await.unwrap();
        assert!(doc.contains("resource \"aws_s3_bucket\""));
        assert!(doc.contains("bucket = \"my-bucket\""));
        assert!(doc.contains("acl    = \"private\""));
        assert!(doc.contains("region = \"us-east-1\""));
        assert!(!doc.contains("{{") && !doc.contains("}}"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_render_every_allowed_acl() {
        let client = client();
        let bucket = test_bucket_name("acl");

        for acl in ["private", "public-read", "authenticated-read"] {
            let resp = post_render(&client, render_body("eu-west-1", acl, &bucket).to_string()).await;
            assert_eq!(resp.status(), reqwest::StatusCode::OK, "acl {acl}");
            let doc = resp.text().await.unwrap();
            assert!(doc.contains(&format!("acl    = \"{acl}\"")));
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_render_identical_output_for_identical_input() {
        let client = client();
        let body = render_body("ap-south-1", "public-read", &test_bucket_name("same")).to_string();

        let first = post_render(&client, body.clone()).await.text().await.unwrap();
        let second = post_render(&client, body).await.text().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_not_mix_concurrent_renders() {
        let client = client();

        let requests = (0..20).map(|i| {
            let client = client.clone();
            async move {
                let bucket = test_bucket_name(&format!("par{i}"));
                let resp = post_render(
                    &client,
                    render_body("us-west-2", "private", &bucket).to_string(),
                )
                .await;
                (bucket, resp.text().await.unwrap())
            }
        });

        for (bucket, doc) in futures::future::join_all(requests).await {
            assert!(doc.contains(&format!("bucket = \"{bucket}\"")));
            assert_eq!(doc.matches("test-par").count(), 2, "{doc}");
        }
    }
}
