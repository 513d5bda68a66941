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

//! Custom errors for customer-provided encryption keys.

/// Represents errors that can occur when creating [KeyAes256] instances or
/// building [EncryptionHeaders].
///
/// These errors are detected locally, before any request is sent to the
/// service. Retrying the same input always fails with the same error.
///
/// # Example
/// ```
/// # use azblob_cpek::{KeyAes256, KeyAes256Error};
/// let invalid_key_bytes: &[u8] = b"too_short_key"; // Less than 32 bytes
/// let result = KeyAes256::new(invalid_key_bytes);
///
/// assert!(matches!(result, Err(KeyAes256Error::InvalidLength { length: 13 })));
/// ```
///
/// [KeyAes256]: crate::KeyAes256
/// [EncryptionHeaders]: crate::EncryptionHeaders
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KeyAes256Error {
    /// The provided key's length was not exactly 32 bytes.
    ///
    /// An empty key is reported here with `length == 0`. Use `None` to
    /// indicate that no customer-provided key should be used.
    #[error("invalid key length, expected 32 bytes, got {length}")]
    InvalidLength { length: usize },

    /// The provided key was not valid standard base64.
    #[error("the key is not valid base64: {0}")]
    InvalidBase64(#[source] base64::DecodeError),
}

/// Represents errors detected when validating the encryption headers
/// returned by the service.
///
/// The service echoes the SHA-256 hash of the customer-provided key in the
/// `x-ms-encryption-key-sha256` response header. A missing or different hash
/// means the service did not use the key sent by the client library.
///
/// # Example
/// ```
/// # use azblob_cpek::{EncryptionHeaders, KeyAes256, ResponseKeyError, response::check_key_sha256};
/// let headers = EncryptionHeaders::new(&KeyAes256::from([0x42; 32]));
/// let response = http::HeaderMap::new();
/// let result = check_key_sha256(&response, &headers);
/// assert!(matches!(result, Err(ResponseKeyError::Missing)));
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ResponseKeyError {
    /// The response does not include the key hash header.
    #[error("the response is missing the `x-ms-encryption-key-sha256` header")]
    Missing,

    /// The key hash header is present but it is not a valid string.
    #[error("the format for the `x-ms-encryption-key-sha256` header is incorrect")]
    BadHeaderFormat,

    /// The key hash reported by the service does not match the key sent.
    #[error("the encryption key hashes do not match: got={got}, want={want}")]
    Mismatch { got: String, want: String },
}
