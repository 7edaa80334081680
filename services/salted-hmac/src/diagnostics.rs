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

use std::fmt::{Debug, Display};

use log::debug;

/// Diagnostics receives the intermediate values of a signing call.
///
/// The values include the body, salt and signature, so a recording
/// implementation must never be installed by default.
pub trait Diagnostics: Debug + Send + Sync + 'static {
    /// Record the value produced by a signing step.
    fn record(&self, step: &str, value: &dyn Display);
}

/// NoopDiagnostics drops everything. This is what every signer starts with.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn record(&self, _step: &str, _value: &dyn Display) {}
}

/// LogDiagnostics forwards every step to `log::debug!`.
///
/// Only useful while debugging signature mismatches.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn record(&self, step: &str, value: &dyn Display) {
        debug!("{step}: {value}");
    }
}
