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

//! Utility functions and types.

use std::fmt::Debug;

use rand::distributions::Alphanumeric;
use rand::thread_rng;
use rand::Rng;

/// Default length of a generated salt.
pub const DEFAULT_SALT_LENGTH: usize = 12;

/// Generate a random salt of `length` characters.
///
/// Characters are drawn uniformly, with replacement, from `[A-Za-z0-9]`.
/// The source is not required to be cryptographically secure.
pub fn random_salt(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Redacts a secret so it can be printed in `Debug` output.
///
/// - Values shorter than 12 characters are fully redacted.
/// - Longer values keep their first and last three characters, so two
///   different keys can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.chars().count();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            let head: String = self.0.chars().take(3).collect();
            let tail: String = self.0.chars().skip(length - 3).collect();
            write!(f, "{head}***{tail}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_random_salt_default_length() {
        let salt = random_salt(DEFAULT_SALT_LENGTH);
        assert_eq!(salt.len(), 12);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()), "{salt}");
    }

    #[test]
    fn test_random_salt_custom_length() {
        for length in [0, 1, 7, 32, 256] {
            let salt = random_salt(length);
            assert_eq!(salt.len(), length);
            assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()), "{salt}");
        }
    }

    #[test]
    fn test_random_salt_varies() {
        // 62^32 possible values, a collision here means the source is broken.
        assert_ne!(random_salt(32), random_salt(32));
    }

    #[test]
    fn test_redact() {
        let cases = vec![
            ("", "EMPTY"),
            ("secret", "***"),
            ("testSecretK", "***"),
            ("testSecretKey", "tes***Key"),
            ("ünïcödé-secret-kéy", "ünï***kéy"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact::from(input)),
                expected,
                "Failed on input: {}",
                input
            );
        }
    }
}
