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

//! Salted hmac signer for API requests.
//!
//! Every signed request carries five headers: `access_key`, `salt`,
//! `timestamp`, `signature` and `idempotency`. The signature is the URL safe
//! base64 of the hex encoded HMAC-SHA256 over
//!
//! ```text
//! lowercase(method) + path + salt + timestamp + access_key + secret_key + body
//! ```
//!
//! keyed with the secret key.
//!
//! ## Example
//!
//! ```
//! use apisign_salted_hmac::{RequestSigner, SigningOptions};
//!
//! let signer = RequestSigner::new("testAccessKey", "testSecretKey");
//! let headers = signer
//!     .sign(
//!         "GET",
//!         "/v1/test",
//!         SigningOptions::new()
//!             .with_salt("abcdefABCDEF")
//!             .with_timestamp(1700000000),
//!     )
//!     .unwrap();
//!
//! for (name, value) in headers.iter() {
//!     println!("{name}: {value}");
//! }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod body;
pub use body::{Body, JsonSerializer, SerializeBody};

mod diagnostics;
pub use diagnostics::{Diagnostics, LogDiagnostics, NoopDiagnostics};

mod method;
pub use method::{Method, SUPPORTED_METHODS};

mod sign_request;
pub use sign_request::{RequestSigner, SignedHeaders, SigningOptions};

pub use apisign_core::time::now_epoch_seconds;
pub use apisign_core::utils::{random_salt, DEFAULT_SALT_LENGTH};

mod constants;
