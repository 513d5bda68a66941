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

//! Validate the encryption headers returned by the service.

use crate::error::ResponseKeyError;
use crate::headers::{ENCRYPTION_KEY_SHA256, EncryptionHeaders};
use http::HeaderMap;

/// Verifies the service used the customer-provided key sent in the request.
///
/// Successful responses to requests using a customer-provided key include
/// the SHA-256 hash of that key. This function compares the hash in the
/// response `headers` against the hash of the key in `sent`.
///
/// # Example
/// ```
/// # use azblob_cpek::{EncryptionHeaders, KeyAes256, response::check_key_sha256};
/// let sent = EncryptionHeaders::new(&KeyAes256::from([0x42; 32]));
/// let mut response = http::HeaderMap::new();
/// response.insert(
///     "x-ms-encryption-key-sha256",
///     sent.key_sha256_base64().parse().expect("valid header value"),
/// );
/// assert!(check_key_sha256(&response, &sent).is_ok());
/// ```
pub fn check_key_sha256(
    headers: &HeaderMap,
    sent: &EncryptionHeaders,
) -> Result<(), ResponseKeyError> {
    let got = headers
        .get(ENCRYPTION_KEY_SHA256)
        .ok_or(ResponseKeyError::Missing)?
        .to_str()
        .map_err(|_| ResponseKeyError::BadHeaderFormat)?;
    if got != sent.key_sha256_base64() {
        tracing::warn!(
            got,
            want = sent.key_sha256_base64(),
            "the service reported a different customer-provided key"
        );
        return Err(ResponseKeyError::Mismatch {
            got: got.to_string(),
            want: sent.key_sha256_base64().to_string(),
        });
    }
    Ok(())
}

/// Verifies the response hash when the request used a customer-provided key.
///
/// Returns `Ok(())` without examining `headers` if `sent` is `None`.
pub fn check_optional_key_sha256(
    headers: &HeaderMap,
    sent: Option<&EncryptionHeaders>,
) -> Result<(), ResponseKeyError> {
    sent.map_or(Ok(()), |s| check_key_sha256(headers, s))
}
