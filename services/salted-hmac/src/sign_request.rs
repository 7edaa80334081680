// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Salted hmac request signer.
use std::fmt::Write;
use std::sync::{Arc, Once};

use apisign_core::hash::base64_url_hex_hmac_sha256;
use apisign_core::time::now_epoch_seconds;
use apisign_core::utils::{random_salt, DEFAULT_SALT_LENGTH};
use apisign_core::{Error, Result};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use log::{log_enabled, warn, Level};
use serde::Serialize;

use super::body::{Body, JsonSerializer, SerializeBody};
use super::config::Config;
use super::constants::*;
use super::credential::Credential;
use super::diagnostics::{Diagnostics, NoopDiagnostics};
use super::method::Method;

static SENSITIVE_LOG_WARNING: Once = Once::new();

/// RequestSigner produces the salted hmac authentication headers for a request.
///
/// The signer holds nothing but immutable configuration, so a single
/// instance can be shared across threads and used concurrently.
///
/// ```
/// use apisign_salted_hmac::{RequestSigner, SigningOptions};
///
/// let signer = RequestSigner::new("testAccessKey", "testSecretKey");
/// let headers = signer
///     .sign("GET", "/v1/test", SigningOptions::new().with_body(r#"{"key":"value"}"#))
///     .unwrap();
/// assert_eq!(headers.access_key(), "testAccessKey");
/// assert_eq!(headers.salt().len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
    serializer: Arc<dyn SerializeBody>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl RequestSigner {
    /// Create a signer from an access key and a secret key.
    ///
    /// Never fails. If debug logging is enabled a one-time warning is logged,
    /// since debug diagnostics may expose signing material.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::from_credential(Credential::new(access_key, secret_key))
    }

    /// Create a signer from a [`Credential`].
    pub fn from_credential(credential: Credential) -> Self {
        if log_enabled!(Level::Debug) {
            SENSITIVE_LOG_WARNING.call_once(|| {
                warn!("debug logging is enabled, signing diagnostics may expose sensitive values");
            });
        }

        Self {
            credential,
            serializer: Arc::new(JsonSerializer),
            diagnostics: Arc::new(NoopDiagnostics),
        }
    }

    /// Create a signer from a [`Config`].
    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self::from_credential(config.into_credential()?))
    }

    /// Replace the serializer used for [`Body::Json`] bodies.
    pub fn with_serializer(mut self, serializer: impl SerializeBody) -> Self {
        self.serializer = Arc::new(serializer);
        self
    }

    /// Replace the diagnostics sink.
    ///
    /// # Note
    ///
    /// Recording sinks see the body, salt and signature of every request.
    /// Only use them while debugging.
    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics) -> Self {
        self.diagnostics = Arc::new(diagnostics);
        self
    }

    /// The access key this signer sends.
    pub fn access_key(&self) -> &str {
        &self.credential.access_key
    }

    /// Sign a request.
    ///
    /// `method` is matched case-insensitively against the supported methods,
    /// `path` must start with `/`. Salt and timestamp are generated unless
    /// given in `opts`.
    pub fn sign(&self, method: &str, path: &str, opts: SigningOptions) -> Result<SignedHeaders> {
        let method = Method::parse(method)?;
        self.diagnostics.record("method", &method);

        check_path(path)?;
        self.diagnostics.record("path", &path);

        let body = opts
            .body
            .as_ref()
            .map(|body| body.to_text(self.serializer.as_ref()))
            .transpose()?;
        let body = body.as_deref().unwrap_or_default();
        self.diagnostics.record("body", &body);

        let salt = opts
            .salt
            .unwrap_or_else(|| random_salt(DEFAULT_SALT_LENGTH));
        self.diagnostics.record("salt", &salt);

        let timestamp = opts.timestamp.unwrap_or_else(now_epoch_seconds);
        self.diagnostics.record("timestamp", &timestamp);

        let string_to_sign = string_to_sign(method, path, &salt, timestamp, &self.credential, body)?;
        let signature = base64_url_hex_hmac_sha256(
            self.credential.secret_key.as_bytes(),
            string_to_sign.as_bytes(),
        );
        self.diagnostics.record("signature", &signature);

        // The idempotency token reads the clock again instead of reusing
        // `timestamp`, so the two may differ.
        let idempotency = format!("{}{}", now_epoch_seconds(), salt);

        Ok(SignedHeaders {
            access_key: self.credential.access_key.clone(),
            salt,
            timestamp: timestamp.to_string(),
            signature,
            idempotency,
        })
    }

    /// Sign a request whose body is any serializable value.
    ///
    /// The value is converted into json first and then serialized by the
    /// configured [`SerializeBody`].
    pub fn sign_json<T: Serialize + ?Sized>(
        &self,
        method: &str,
        path: &str,
        body: &T,
    ) -> Result<SignedHeaders> {
        let value = serde_json::to_value(body)
            .map_err(|e| Error::body_invalid(e.to_string()).with_source(e))?;
        self.sign(method, path, SigningOptions::new().with_body(value))
    }
}

fn check_path(path: &str) -> Result<()> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(Error::invalid_path(format!(
            "invalid path `{path}`, path must start with `/`"
        )))
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// lowercase(Method) + Path + Salt + Timestamp + AccessKey + SecretKey + Body
/// ```
///
/// No separators. Body is empty when absent.
fn string_to_sign(
    method: Method,
    path: &str,
    salt: &str,
    timestamp: i64,
    cred: &Credential,
    body: &str,
) -> Result<String> {
    let mut s = String::new();
    s.write_str(method.as_str())?;
    s.write_str(path)?;
    s.write_str(salt)?;
    write!(&mut s, "{timestamp}")?;
    s.write_str(&cred.access_key)?;
    s.write_str(&cred.secret_key)?;
    s.write_str(body)?;

    Ok(s)
}

/// Optional inputs of [`RequestSigner::sign`].
///
/// Salt and timestamp overrides are used as-is without validation.
#[derive(Debug, Clone, Default)]
pub struct SigningOptions {
    /// Body to sign, an empty string is signed when `None`.
    pub body: Option<Body>,
    /// Salt override, a random 12 characters salt is used when `None`.
    pub salt: Option<String>,
    /// Timestamp override in epoch seconds, the current time is used when `None`.
    pub timestamp: Option<i64>,
}

impl SigningOptions {
    /// Create options with every value defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set body
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set salt
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Set timestamp
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// The five authentication headers produced by [`RequestSigner::sign`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    access_key: String,
    salt: String,
    timestamp: String,
    signature: String,
    idempotency: String,
}

impl SignedHeaders {
    /// Value of the `access_key` header.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Value of the `salt` header, the salt used for signing.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Value of the `timestamp` header, the epoch second used for signing.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Value of the `signature` header.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Value of the `idempotency` header.
    pub fn idempotency(&self) -> &str {
        &self.idempotency
    }

    /// Iterate `(name, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (HEADER_ACCESS_KEY, self.access_key.as_str()),
            (HEADER_SALT, self.salt.as_str()),
            (HEADER_TIMESTAMP, self.timestamp.as_str()),
            (HEADER_SIGNATURE, self.signature.as_str()),
            (HEADER_IDEMPOTENCY, self.idempotency.as_str()),
        ]
        .into_iter()
    }

    /// Convert into owned `(name, value)` pairs in wire order.
    pub fn into_vec(self) -> Vec<(&'static str, String)> {
        vec![
            (HEADER_ACCESS_KEY, self.access_key),
            (HEADER_SALT, self.salt),
            (HEADER_TIMESTAMP, self.timestamp),
            (HEADER_SIGNATURE, self.signature),
            (HEADER_IDEMPOTENCY, self.idempotency),
        ]
    }

    /// Build a [`HeaderMap`] holding the five headers.
    ///
    /// The signature value is marked as sensitive. Fails if a caller supplied
    /// salt is not a valid header value.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(5);
        for (name, value) in self.iter() {
            let mut value = HeaderValue::from_str(value)?;
            if name == HEADER_SIGNATURE {
                value.set_sensitive(true);
            }
            headers.insert(HeaderName::from_static(name), value);
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use apisign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn signer() -> RequestSigner {
        RequestSigner::new("testAccessKey", "testSecretKey")
    }

    #[test]
    fn test_string_to_sign() -> Result<()> {
        let cred = Credential::new("testAccessKey", "testSecretKey");
        let s = string_to_sign(
            Method::Get,
            "/v1/test",
            "abcdefABCDEF",
            1700000000,
            &cred,
            r#"{"key":"value"}"#,
        )?;

        assert_eq!(
            s,
            r#"get/v1/testabcdefABCDEF1700000000testAccessKeytestSecretKey{"key":"value"}"#
        );
        Ok(())
    }

    #[test]
    fn test_sign() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let headers = signer().sign(
            "GET",
            "/v1/test",
            SigningOptions::new()
                .with_body(r#"{"key":"value"}"#)
                .with_salt("abcdefABCDEF")
                .with_timestamp(1700000000),
        )?;

        assert_eq!(headers.access_key(), "testAccessKey");
        assert_eq!(headers.salt(), "abcdefABCDEF");
        assert_eq!(headers.timestamp(), "1700000000");
        assert_eq!(
            headers.signature(),
            "ZDQ5YTFiYzNkY2MxZWYwM2EwODI4ZGQ3YjZjY2E5ZDFiYTI2MjNhMWJiZWUyYTRmZTJjOGIxYzg0ODI2OGZhOQ=="
        );
        assert!(headers.idempotency().ends_with("abcdefABCDEF"));
        Ok(())
    }

    #[test]
    fn test_sign_without_body() -> Result<()> {
        let headers = signer().sign(
            "post",
            "/v1/orders",
            SigningOptions::new()
                .with_salt("saltSALT1234")
                .with_timestamp(1712345678),
        )?;

        assert_eq!(
            headers.signature(),
            "NDZjYTg5NDYyOWRkMDg0ZTM0ZTA2NmQ5NmJiMzZlMDk0MjdjYzg4NWE3OTk5YzE0Mzc4N2UwYTg3ZmQ1MzA5Nw=="
        );
        Ok(())
    }

    #[test]
    fn test_empty_body_equals_no_body() -> Result<()> {
        let opts = SigningOptions::new().with_salt("s").with_timestamp(1);
        let without = signer().sign("PUT", "/a", opts.clone())?;
        let with_empty = signer().sign("PUT", "/a", opts.with_body(""))?;

        assert_eq!(without.signature(), with_empty.signature());
        Ok(())
    }

    #[test]
    fn test_json_body_matches_text_body() -> Result<()> {
        let opts = SigningOptions::new()
            .with_salt("abcdefABCDEF")
            .with_timestamp(1700000000);
        let text = signer().sign("GET", "/v1/test", opts.clone().with_body(r#"{"key":"value"}"#))?;
        let value = signer().sign("GET", "/v1/test", opts.with_body(json!({"key": "value"})))?;

        assert_eq!(text.signature(), value.signature());
        Ok(())
    }

    #[test]
    fn test_generated_salt_and_timestamp() -> Result<()> {
        let before = now_epoch_seconds();
        let headers = signer().sign("GET", "/v1/test", SigningOptions::new())?;
        let after = now_epoch_seconds();

        assert_eq!(headers.salt().len(), DEFAULT_SALT_LENGTH);
        assert!(headers.salt().chars().all(|c| c.is_ascii_alphanumeric()));

        let timestamp: i64 = headers.timestamp().parse().unwrap();
        assert!(before <= timestamp && timestamp <= after);
        Ok(())
    }

    #[test]
    fn test_idempotency_uses_live_clock() -> Result<()> {
        let headers = signer().sign(
            "GET",
            "/v1/test",
            SigningOptions::new().with_salt("fixedsalt").with_timestamp(42),
        )?;

        let prefix = headers
            .idempotency()
            .strip_suffix("fixedsalt")
            .expect("idempotency must end with the salt");
        let clock: i64 = prefix.parse().expect("idempotency must start with digits");
        assert!(clock > 42);
        assert_eq!(headers.timestamp(), "42");
        Ok(())
    }

    #[test]
    fn test_invalid_method_fails_first() {
        let err = signer()
            .sign("PATCH", "no-slash", SigningOptions::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMethod);
    }

    #[test]
    fn test_invalid_path() {
        for path in ["", "v1/test", " /v1/test"] {
            let err = signer().sign("GET", path, SigningOptions::new()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPath, "path: {path:?}");
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_sign_json_unserializable_body() {
        use std::collections::BTreeMap;

        // Maps with non-string keys can't become json objects.
        let body = BTreeMap::from([((1, 2), "value")]);
        let err = signer().sign_json("POST", "/v1/test", &body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BodyInvalid);
    }

    #[test]
    fn test_to_header_map() -> Result<()> {
        let headers = signer().sign(
            "GET",
            "/v1/test",
            SigningOptions::new().with_salt("abc").with_timestamp(1),
        )?;
        let map = headers.to_header_map()?;

        assert_eq!(map.len(), 5);
        assert_eq!(map["access_key"], "testAccessKey");
        assert_eq!(map["timestamp"], "1");
        assert!(map["signature"].is_sensitive());
        assert!(!map["salt"].is_sensitive());
        Ok(())
    }

    #[test]
    fn test_to_header_map_invalid_salt() -> Result<()> {
        let headers = signer().sign(
            "GET",
            "/v1/test",
            SigningOptions::new().with_salt("bad\nsalt"),
        )?;

        let err = headers.to_header_map().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        Ok(())
    }

    #[derive(Debug)]
    struct RecordingDiagnostics(Arc<Mutex<Vec<(String, String)>>>);

    impl Diagnostics for RecordingDiagnostics {
        fn record(&self, step: &str, value: &dyn std::fmt::Display) {
            self.0
                .lock()
                .unwrap()
                .push((step.to_string(), value.to_string()));
        }
    }

    #[test]
    fn test_diagnostics_never_see_secret_key() -> Result<()> {
        let records = Arc::new(Mutex::new(Vec::new()));
        let signer = signer().with_diagnostics(RecordingDiagnostics(records.clone()));
        signer.sign(
            "GET",
            "/v1/test",
            SigningOptions::new()
                .with_body("body")
                .with_salt("abc")
                .with_timestamp(1),
        )?;

        let records = records.lock().unwrap();
        let steps: Vec<&str> = records.iter().map(|(step, _)| step.as_str()).collect();
        assert_eq!(
            steps,
            vec!["method", "path", "body", "salt", "timestamp", "signature"]
        );
        assert!(records.iter().all(|(_, v)| !v.contains("testSecretKey")));
        Ok(())
    }

    #[test]
    fn test_debug_redacts_secret() {
        let output = format!("{:?}", signer());
        assert!(!output.contains("testSecretKey"), "{output}");
    }
}
