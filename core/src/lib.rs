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

//! Core components for signing API requests.
//!
//! This crate provides the shared building blocks used by the apisign
//! signers: the error type, hash and time helpers, salt generation and the
//! [`Context`] used to load configuration from the environment.
//!
//! ## Example
//!
//! ```
//! use apisign_core::hash::base64_url_hex_hmac_sha256;
//! use apisign_core::utils::random_salt;
//!
//! let salt = random_salt(12);
//! assert_eq!(salt.len(), 12);
//!
//! let signature = base64_url_hex_hmac_sha256(b"secret", b"content");
//! assert_eq!(signature.len(), 88);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and encoding utilities
//! - [`time`]: Clock utilities
//! - [`utils`]: Salt generation and data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
