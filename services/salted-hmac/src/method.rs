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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use apisign_core::{Error, Result};

/// Lowercase tokens of every method the signer accepts, in listing order.
pub const SUPPORTED_METHODS: [&str; 6] = ["get", "post", "put", "delete", "head", "options"];

/// Http method accepted by the signer.
///
/// Parsing is case-insensitive, the canonical form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl Method {
    /// Parse a method from any mixture of upper and lower case.
    ///
    /// Returns an `InvalidMethod` error listing every supported method otherwise.
    pub fn parse(method: &str) -> Result<Self> {
        match method.to_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "delete" => Ok(Method::Delete),
            "head" => Ok(Method::Head),
            "options" => Ok(Method::Options),
            _ => Err(Error::invalid_method(format!(
                "invalid http method `{method}`, supported methods are: {}",
                SUPPORTED_METHODS.join(", ")
            ))),
        }
    }

    /// The lowercase token used in the string to sign.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Head => "head",
            Method::Options => "options",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Method::parse(s)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
            Method::Head => http::Method::HEAD,
            Method::Options => http::Method::OPTIONS,
        }
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = Error;

    fn try_from(method: &http::Method) -> Result<Self> {
        Method::parse(method.as_str())
    }
}

#[cfg(test)]
mod tests {
    use apisign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("GET", Method::Get; "upper get")]
    #[test_case("Get", Method::Get; "mixed get")]
    #[test_case("post", Method::Post; "lower post")]
    #[test_case("PuT", Method::Put; "mixed put")]
    #[test_case("DELETE", Method::Delete; "upper delete")]
    #[test_case("head", Method::Head; "lower head")]
    #[test_case("Options", Method::Options; "mixed options")]
    fn test_parse(input: &str, expected: Method) {
        assert_eq!(Method::parse(input).unwrap(), expected);
    }

    #[test_case("PATCH"; "patch")]
    #[test_case("CONNECT"; "connect")]
    #[test_case(""; "empty")]
    #[test_case(" get"; "leading space")]
    fn test_parse_invalid(input: &str) {
        let err = Method::parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMethod);
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_message() {
        let err = Method::parse("PATCH").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid http method `PATCH`, supported methods are: get, post, put, delete, head, options"
        );
    }

    #[test]
    fn test_as_str_is_supported() {
        for token in SUPPORTED_METHODS {
            assert_eq!(Method::parse(token).unwrap().as_str(), token);
        }
    }

    #[test]
    fn test_http_method_conversion() {
        let method = Method::try_from(&http::Method::DELETE).unwrap();
        assert_eq!(method, Method::Delete);
        assert_eq!(http::Method::from(method), http::Method::DELETE);
        assert!(Method::try_from(&http::Method::PATCH).is_err());
    }
}
