mod config;

use clap::Parser;
use config::GatewayConfig;
use http::{Response, StatusCode};
use hyper::{body::Incoming, server::conn::http1, service::service_fn, Request};
use hyper_util::rt::TokioIo;
use ic_http_gateway::{
    collect_request, HttpGatewayClient, HttpGatewayRequestArgs, HttpGatewayResponseBody,
};
use log::{debug, error, info, warn};
use std::convert::Infallible;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GatewayConfig::parse();
    let http_gateway = config.build_client()?;

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        "Serving canister {} from {} on http://{}",
        config.canister_id, config.api_url, config.listen_addr
    );

    loop {
        let (stream, remote_addr) = match listener.accept().await {
            Ok(connection) => connection,
            Err(err) => {
                warn!("Failed to accept connection: {}", err);
                continue;
            }
        };
        debug!("Accepted connection from {}", remote_addr);

        let io = TokioIo::new(stream);
        let http_gateway = http_gateway.clone();
        let canister_id = config.canister_id;

        tokio::spawn(async move {
            let service = service_fn(move |request: Request<Incoming>| {
                let http_gateway = http_gateway.clone();

                async move {
                    Ok::<_, Infallible>(serve(&http_gateway, canister_id, request).await)
                }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!("Error serving connection from {}: {:?}", remote_addr, err);
            }
        });
    }
}

async fn serve(
    http_gateway: &HttpGatewayClient,
    canister_id: candid::Principal,
    request: Request<Incoming>,
) -> Response<HttpGatewayResponseBody> {
    let canister_request = match collect_request(request).await {
        Ok(canister_request) => canister_request,
        Err(err) => {
            warn!("Failed to read request: {}", err);

            let mut response = Response::new(HttpGatewayResponseBody::from(err.to_string()));
            *response.status_mut() = StatusCode::BAD_REQUEST;
            return response;
        }
    };

    let method = canister_request.method().clone();
    let uri = canister_request.uri().clone();

    let gateway_response = http_gateway
        .request(HttpGatewayRequestArgs {
            canister_id,
            canister_request,
        })
        .send()
        .await;

    info!(
        "{} {} -> {} (upgraded: {}, verification version: {:?})",
        method,
        uri,
        gateway_response.canister_response.status(),
        gateway_response.metadata.upgraded_to_update_call,
        gateway_response.metadata.response_verification_version,
    );
    if gateway_response.streaming_strategy.is_some() {
        warn!(
            "{} {} was streamed by the canister, only the first chunk is served",
            method, uri
        );
    }

    gateway_response.canister_response
}
