// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Add the encryption headers to outgoing requests.

use crate::headers::EncryptionHeaders;
use http::HeaderMap;

/// Request types that can carry the customer-provided encryption headers.
///
/// Implementations must replace any existing values for the encryption
/// headers, so applying the same [EncryptionHeaders] more than once leaves a
/// single value for each header.
pub trait WithEncryptionHeaders: Sized {
    /// Sets the encryption headers on `self`.
    fn with_encryption_headers(self, headers: &EncryptionHeaders) -> Self;
}

/// Augments a request with the encryption headers, if necessary.
///
/// When `headers` is `None` the request is returned unmodified.
///
/// # Example
/// ```
/// # use azblob_cpek::{KeyAes256Error, apply, headers::build};
/// let headers = build(Some(&[0x42_u8; 32][..]))?;
/// let request = http::Request::put("https://account.blob.core.windows.net/container/blob")
///     .body(())
///     .expect("a valid request");
/// let request = apply(request, headers.as_ref());
/// assert_eq!(
///     request.headers().get("x-ms-encryption-algorithm").map(|v| v.as_bytes()),
///     Some(b"AES256".as_slice())
/// );
/// # Ok::<(), KeyAes256Error>(())
/// ```
pub fn apply<R>(request: R, headers: Option<&EncryptionHeaders>) -> R
where
    R: WithEncryptionHeaders,
{
    headers.into_iter().fold(request, |r, h| {
        tracing::debug!(
            key_sha256 = h.key_sha256_base64(),
            "applying customer-provided encryption headers"
        );
        r.with_encryption_headers(h)
    })
}

impl WithEncryptionHeaders for HeaderMap {
    fn with_encryption_headers(mut self, headers: &EncryptionHeaders) -> Self {
        insert_all(&mut self, headers);
        self
    }
}

impl WithEncryptionHeaders for &mut HeaderMap {
    fn with_encryption_headers(self, headers: &EncryptionHeaders) -> Self {
        insert_all(self, headers);
        self
    }
}

impl<B> WithEncryptionHeaders for http::Request<B> {
    fn with_encryption_headers(mut self, headers: &EncryptionHeaders) -> Self {
        insert_all(self.headers_mut(), headers);
        self
    }
}

impl<B> WithEncryptionHeaders for &mut http::Request<B> {
    fn with_encryption_headers(self, headers: &EncryptionHeaders) -> Self {
        insert_all(self.headers_mut(), headers);
        self
    }
}

#[cfg(feature = "reqwest")]
impl WithEncryptionHeaders for reqwest::Request {
    fn with_encryption_headers(mut self, headers: &EncryptionHeaders) -> Self {
        insert_all(self.headers_mut(), headers);
        self
    }
}

#[cfg(feature = "reqwest")]
impl WithEncryptionHeaders for &mut reqwest::Request {
    fn with_encryption_headers(self, headers: &EncryptionHeaders) -> Self {
        insert_all(self.headers_mut(), headers);
        self
    }
}

#[cfg(feature = "reqwest")]
impl WithEncryptionHeaders for reqwest::RequestBuilder {
    fn with_encryption_headers(self, headers: &EncryptionHeaders) -> Self {
        // `RequestBuilder::headers()` replaces existing values, while
        // `RequestBuilder::header()` appends.
        self.headers(headers.as_header_map().clone())
    }
}

fn insert_all(map: &mut HeaderMap, headers: &EncryptionHeaders) {
    for (name, value) in headers.as_header_map() {
        map.insert(name.clone(), value.clone());
    }
}
