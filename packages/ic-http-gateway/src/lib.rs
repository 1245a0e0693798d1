/*!
# HTTP Gateway

An implementation of the [HTTP Gateway Protocol](https://internetcomputer.org/docs/current/references/http-gateway-protocol-spec)
for the Internet Computer. It translates ordinary HTTP requests into calls to a canister's
`http_request` and `http_request_update` methods, and refuses to serve query responses whose
certification cannot be verified against the Internet Computer's root key.

## Protocol

Every request is first sent to the canister as a query call, negotiating the highest response
verification version supported by this crate. If the canister answers with `upgrade = true` the
request is replayed as an update call and its result is served as-is, since update calls go
through consensus. Otherwise the query response is verified with
[ic-response-verification](https://docs.rs/ic-response-verification) before it is served. A
response that fails verification is never returned to the caller.

## Usage

```rust,no_run
use bytes::Bytes;
use candid::Principal;
use http::Request;
use ic_agent::Agent;
use ic_http_gateway::{HttpGatewayClient, HttpGatewayRequestArgs};

# async fn run() -> Result<(), Box<dyn std::error::Error>> {
let agent = Agent::builder().with_url("https://icp-api.io").build()?;
let http_gateway = HttpGatewayClient::builder().with_agent(agent).build()?;

let canister_request = Request::builder()
    .uri("/index.html")
    .body(Bytes::new())?;

let gateway_response = http_gateway
    .request(HttpGatewayRequestArgs {
        canister_id: Principal::from_text("qoctq-giaaa-aaaaa-aaaea-cai")?,
        canister_request,
    })
    .send()
    .await;

println!("{}", gateway_response.canister_response.status());
# Ok(())
# }
```
*/

mod canister;
pub use canister::*;

mod client;
pub use client::*;

mod protocol;
pub use protocol::process_request;

mod request;
pub use request::*;

mod response;
pub use response::*;

mod verification;
pub use verification::*;

mod consts;
pub use consts::*;

mod error;
pub use error::*;
