//! tfrender server: renders S3 bucket descriptions into Terraform.
//!
//! # Usage
//!
//! ```text
//! HTTP_PORT=8080 tfrender-server
//! curl -X POST localhost:8080/render \
//!   -d '{"payload":{"properties":{"aws-region":"us-east-1","acl":"private","bucket-name":"my-bucket"}}}'
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HTTP_PORT` | `8080` | Listening port (all interfaces) |
//! | `MAX_BODY_SIZE` | `1048576` | Maximum request body in bytes |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `LOG_FORMAT` | `text` | `text` or `json` |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tfrender_core::{
    BucketRenderer, LogFormat, TfRenderConfig, TfRenderCoreHandler, TfRenderProvider,
};
use tfrender_http::TfRenderHttpService;

/// Server version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str, format: LogFormat) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}

/// Parse the template and assemble the HTTP service.
///
/// Fails if the bundled template does not parse, so a broken build never
/// starts serving.
fn build_service(config: &TfRenderConfig) -> Result<TfRenderHttpService<TfRenderCoreHandler>> {
    let renderer = BucketRenderer::new().context("failed to load bundled template")?;
    let provider = TfRenderProvider::new(Arc::new(renderer));
    let handler = TfRenderCoreHandler::new(provider);

    Ok(TfRenderHttpService::new(
        Arc::new(handler),
        config.http_config(),
    ))
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve(
    listener: TcpListener,
    service: TfRenderHttpService<TfRenderCoreHandler>,
) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

/// Perform a health check by requesting `/healthz` from a running server.
///
/// Exits with code 0 if healthy, 1 otherwise.
async fn run_health_check(addr: &str) -> Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    let mut stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("cannot connect to {addr}"))?;

    // Keep the write side open: the server closes the stream after replying.
    let request = format!("GET /healthz HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await?;

    let mut response = String::new();
    stream.read_to_string(&mut response).await?;

    if response.starts_with("HTTP/1.1 200") {
        Ok(())
    } else {
        anyhow::bail!("unhealthy response from {addr}")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = TfRenderConfig::from_env();

    // Handle --health-check flag for Docker HEALTHCHECK.
    if std::env::args().any(|a| a == "--health-check") {
        let addr = config.gateway_listen().replace("0.0.0.0", "127.0.0.1");
        let healthy = run_health_check(&addr).await.is_ok();
        std::process::exit(i32::from(!healthy));
    }

    init_tracing(&config.log_level, config.log_format)?;

    info!(
        http_port = %config.http_port,
        max_body_size = config.max_body_size,
        log_format = %config.log_format,
        version = VERSION,
        "starting tfrender server",
    );

    let service = build_service(&config)?;

    let listen = config.gateway_listen();
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid bind address: {listen}"))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, "listening for connections");

    serve(listener, service).await
}
