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

use std::borrow::Cow;
use std::fmt::Debug;

use apisign_core::{Error, Result};
use serde_json::Value;

/// Body of the request to sign.
///
/// Text is signed verbatim. Structured values go through the signer's
/// [`SerializeBody`] first; the signer never parses or reorders text.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Already serialized body text.
    Text(String),
    /// Structured body, serialized by the configured [`SerializeBody`].
    Json(Value),
}

impl Body {
    pub(crate) fn to_text<'a>(&'a self, serializer: &dyn SerializeBody) -> Result<Cow<'a, str>> {
        match self {
            Body::Text(text) => Ok(Cow::Borrowed(text)),
            Body::Json(value) => serializer.serialize(value).map(Cow::Owned),
        }
    }
}

impl From<&str> for Body {
    fn from(value: &str) -> Self {
        Body::Text(value.to_string())
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Body::Text(value)
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

/// SerializeBody encodes a structured body into the text that gets signed.
///
/// Implementations should produce a stable field order, otherwise the
/// signature of the same logical body changes between runs.
pub trait SerializeBody: Debug + Send + Sync + 'static {
    /// Serialize `value` into text.
    fn serialize(&self, value: &Value) -> Result<String>;
}

/// Compact JSON serializer.
///
/// `serde_json` keeps object keys sorted, so the output is stable for equal values.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl SerializeBody for JsonSerializer {
    fn serialize(&self, value: &Value) -> Result<String> {
        serde_json::to_string(value).map_err(|e| Error::body_invalid(e.to_string()).with_source(e))
    }
}
