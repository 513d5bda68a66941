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

//! The HTTP headers used with customer-provided encryption keys.

use crate::error::KeyAes256Error;
use crate::key::KeyAes256;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use sha2::{Digest, Sha256};

/// The request header carrying the base64-encoded key.
pub const ENCRYPTION_KEY: &str = "x-ms-encryption-key";

/// The request (and response) header carrying the base64-encoded SHA-256
/// hash of the key.
pub const ENCRYPTION_KEY_SHA256: &str = "x-ms-encryption-key-sha256";

/// The request header naming the encryption algorithm.
pub const ENCRYPTION_ALGORITHM: &str = "x-ms-encryption-algorithm";

/// The only supported value for [ENCRYPTION_ALGORITHM].
pub const AES256: &str = "AES256";

/// The headers sent with requests using a customer-provided encryption key.
///
/// This is derived from a [KeyAes256] and cannot be modified once created.
/// Use [build] to create one from raw, optional, key bytes, or
/// [EncryptionHeaders::new] if the key is already validated.
///
/// # Example
/// ```
/// # use azblob_cpek::{EncryptionHeaders, KeyAes256};
/// let key = KeyAes256::from([0x42; 32]);
/// let headers = EncryptionHeaders::new(&key);
/// assert_eq!(headers.algorithm(), "AES256");
/// assert_eq!(headers.key_base64(), key.to_base64());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionHeaders {
    key_base64: String,
    key_sha256_base64: String,
    headers: HeaderMap,
}

impl EncryptionHeaders {
    /// Computes the encryption headers for `key`.
    pub fn new(key: &KeyAes256) -> Self {
        let key_base64 = BASE64_STANDARD.encode(key.as_bytes());
        let key_sha256_base64 = BASE64_STANDARD.encode(Sha256::digest(key.as_bytes()));

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(
            HeaderName::from_static(ENCRYPTION_KEY),
            header_value(&key_base64),
        );
        headers.insert(
            HeaderName::from_static(ENCRYPTION_KEY_SHA256),
            header_value(&key_sha256_base64),
        );
        headers.insert(
            HeaderName::from_static(ENCRYPTION_ALGORITHM),
            HeaderValue::from_static(AES256),
        );
        Self {
            key_base64,
            key_sha256_base64,
            headers,
        }
    }

    /// The key, in standard base64 encoding.
    pub fn key_base64(&self) -> &str {
        &self.key_base64
    }

    /// The SHA-256 hash of the key, in standard base64 encoding.
    pub fn key_sha256_base64(&self) -> &str {
        &self.key_sha256_base64
    }

    /// The encryption algorithm, always `AES256`.
    pub fn algorithm(&self) -> &'static str {
        AES256
    }

    /// The three headers, ready to be added to a request.
    pub fn as_header_map(&self) -> &HeaderMap {
        &self.headers
    }
}

impl std::fmt::Debug for EncryptionHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionHeaders")
            .field("key_base64", &"[censored]")
            .field("key_sha256_base64", &self.key_sha256_base64)
            .field("algorithm", &AES256)
            .finish()
    }
}

impl From<&KeyAes256> for EncryptionHeaders {
    fn from(key: &KeyAes256) -> Self {
        Self::new(key)
    }
}

impl From<KeyAes256> for EncryptionHeaders {
    fn from(key: KeyAes256) -> Self {
        Self::new(&key)
    }
}

/// Builds the encryption headers for an optional key.
///
/// A `None` key means the request does not use a customer-provided key, and
/// this function returns `Ok(None)`. A key with any length other than 32
/// bytes, including an empty key, is an error.
///
/// # Example
/// ```
/// # use azblob_cpek::{KeyAes256Error, headers::build};
/// assert!(build(None)?.is_none());
///
/// let headers = build(Some(&[0_u8; 32][..]))?.expect("a valid key produces headers");
/// assert_eq!(headers.key_base64(), "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=");
///
/// let err = build(Some(&[0_u8; 16][..])).unwrap_err();
/// assert_eq!(err, KeyAes256Error::InvalidLength { length: 16 });
/// # Ok::<(), KeyAes256Error>(())
/// ```
pub fn build(key: Option<&[u8]>) -> Result<Option<EncryptionHeaders>, KeyAes256Error> {
    key.map(KeyAes256::new)
        .transpose()
        .map(|k| k.as_ref().map(EncryptionHeaders::new))
}

fn header_value(base64: &str) -> HeaderValue {
    // The standard base64 alphabet, including padding, is visible ASCII.
    HeaderValue::from_str(base64).expect("base64 strings are valid header values")
}
