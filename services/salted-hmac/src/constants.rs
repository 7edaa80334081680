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

// Env values used in apisign salted hmac signer.
pub const APISIGN_ACCESS_KEY: &str = "APISIGN_ACCESS_KEY";
pub const APISIGN_SECRET_KEY: &str = "APISIGN_SECRET_KEY";

// Header names, case-sensitive on the wire.
pub const HEADER_ACCESS_KEY: &str = "access_key";
pub const HEADER_SALT: &str = "salt";
pub const HEADER_TIMESTAMP: &str = "timestamp";
pub const HEADER_SIGNATURE: &str = "signature";
pub const HEADER_IDEMPOTENCY: &str = "idempotency";
