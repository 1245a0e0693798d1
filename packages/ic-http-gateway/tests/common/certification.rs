use base64::{engine::general_purpose, Engine as _};
use candid::Principal;
use ic_certification::{fork, labeled, leaf, Certificate, HashTree};
use ic_http_certification::{
    DefaultCelBuilder, DefaultResponseCertification, HttpCertification, HttpCertificationPath,
    HttpCertificationTree, HttpCertificationTreeEntry, HttpResponse,
    CERTIFICATE_EXPRESSION_HEADER_NAME, CERTIFICATE_HEADER_NAME,
};
use ic_http_gateway::CanisterHttpResponse;
use miracl_core_bls12381::bls12381::bls::{core_sign, key_pair_generate, BLS_OK};
use serde::Serialize;

const IC_STATE_ROOT_DOMAIN_SEPARATOR: &[u8; 14] = b"\x0Dic-state-root";
const DER_PREFIX: &[u8; 37] = b"\x30\x81\x82\x30\x1d\x06\x0d\x2b\x06\x01\x04\x01\x82\xdc\x7c\x05\x03\x01\x02\x01\x06\x0c\x2b\x06\x01\x04\x01\x82\xdc\x7c\x05\x03\x02\x01\x03\x61\x00";

/// A BLS key standing in for the subnet's threshold key. Its DER encoded public key is the
/// root key certificates are verified against.
pub struct SigningKey {
    secret_key: [u8; 48],
    public_key: [u8; 96],
}

impl SigningKey {
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let mut secret_key = [0u8; 48];
        let mut public_key = [0u8; 96];
        assert_eq!(key_pair_generate(seed, &mut secret_key, &mut public_key), BLS_OK);

        Self {
            secret_key,
            public_key,
        }
    }

    pub fn root_key(&self) -> Vec<u8> {
        [DER_PREFIX.as_slice(), self.public_key.as_slice()].concat()
    }

    fn sign_tree(&self, tree: &HashTree) -> Vec<u8> {
        let message = [
            IC_STATE_ROOT_DOMAIN_SEPARATOR.as_slice(),
            tree.digest().as_slice(),
        ]
        .concat();

        let mut signature = [0u8; 48];
        assert_eq!(core_sign(&mut signature, &message, &self.secret_key), BLS_OK);

        signature.to_vec()
    }
}

pub fn subnet_key() -> SigningKey {
    SigningKey::from_seed(&[7; 32])
}

pub fn cbor_encode<T: Serialize>(value: &T) -> Vec<u8> {
    let mut serializer = serde_cbor::Serializer::new(Vec::new());
    serializer.self_describe().unwrap();
    value.serialize(&mut serializer).unwrap();
    serializer.into_inner()
}

fn leb_encode_timestamp(timestamp_ns: u128) -> Vec<u8> {
    let mut encoded_time = vec![];
    leb128::write::unsigned(&mut encoded_time, timestamp_ns as u64).unwrap();
    encoded_time
}

/// Builds a certificate signed by `signing_key` in which `canister_id` certified
/// `certified_data` at `time_ns`.
pub fn create_certificate(
    signing_key: &SigningKey,
    canister_id: &Principal,
    certified_data: &[u8],
    time_ns: u128,
) -> Vec<u8> {
    let tree = fork(
        labeled(
            "canister",
            labeled(
                canister_id.as_slice(),
                labeled("certified_data", leaf(certified_data.to_vec())),
            ),
        ),
        labeled("time", leaf(leb_encode_timestamp(time_ns))),
    );
    let signature = signing_key.sign_tree(&tree);

    cbor_encode(&Certificate {
        tree,
        signature,
        delegation: None,
    })
}

/// Builds the response a canister serves for a `GET` of `url`: `body` as plain text, with its
/// status code, `Content-Type` header and body certified at `time_ns`. Other headers are left
/// out of the certification.
pub fn certified_response(
    signing_key: &SigningKey,
    canister_id: &Principal,
    url: &str,
    body: &str,
    time_ns: u128,
) -> CanisterHttpResponse {
    let response_certification =
        DefaultResponseCertification::certified_response_headers(vec!["Content-Type"]);
    let cel_expr = DefaultCelBuilder::response_only_certification()
        .with_response_certification(response_certification)
        .build();
    let mut response = HttpResponse {
        status_code: 200,
        headers: vec![
            ("Content-Type".to_string(), "text/plain".to_string()),
            (CERTIFICATE_EXPRESSION_HEADER_NAME.to_string(), cel_expr.to_string()),
        ],
        body: body.as_bytes().to_vec(),
        upgrade: None,
    };

    let path = HttpCertificationPath::exact(url);
    let expr_path = path.to_expr_path();
    let certification = HttpCertification::response_only(&cel_expr, &response, None).unwrap();
    let entry = HttpCertificationTreeEntry::new(&path, certification);

    let mut http_tree = HttpCertificationTree::default();
    http_tree.insert(&entry);
    let witness = http_tree.witness(&entry, url).unwrap();

    let certified_data = http_tree.root_hash();
    let certificate = create_certificate(signing_key, canister_id, &certified_data, time_ns);
    response.headers.push((
        CERTIFICATE_HEADER_NAME.to_string(),
        format!(
            "certificate=:{}:, tree=:{}:, expr_path=:{}:, version=2",
            general_purpose::STANDARD.encode(certificate),
            general_purpose::STANDARD.encode(cbor_encode(&witness)),
            general_purpose::STANDARD.encode(cbor_encode(&expr_path)),
        ),
    ));

    CanisterHttpResponse {
        status_code: response.status_code,
        headers: response.headers,
        body: response.body,
        upgrade: None,
        streaming_strategy: None,
    }
}
