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

use crate::error::KeyAes256Error;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use rand::RngCore;

/// The size of an AES-256 key, in bytes.
pub const KEY_LENGTH: usize = 32;

/// KeyAes256 represents an AES-256 encryption key used with the
/// customer-provided encryption keys (CPEK) feature.
///
/// This key must be exactly 32 bytes in length and should be provided in its
/// raw (unencoded) byte format. Use [from_base64][KeyAes256::from_base64] if
/// the key is stored as a base64 string.
///
/// # Examples
///
/// Creating a `KeyAes256` instance from a valid byte slice:
/// ```
/// # use azblob_cpek::{KeyAes256, KeyAes256Error};
/// let raw_key_bytes: [u8; 32] = [0x42; 32]; // Example 32-byte key
/// let key_aes_256 = KeyAes256::new(&raw_key_bytes)?;
/// # Ok::<(), KeyAes256Error>(())
/// ```
///
/// Handling an error for an invalid key length:
/// ```
/// # use azblob_cpek::{KeyAes256, KeyAes256Error};
/// let invalid_key_bytes: &[u8] = b"too_short_key"; // Less than 32 bytes
/// let result = KeyAes256::new(invalid_key_bytes);
///
/// assert!(matches!(result, Err(KeyAes256Error::InvalidLength { .. })));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct KeyAes256 {
    key: [u8; KEY_LENGTH],
}

impl KeyAes256 {
    /// Attempts to create a new [KeyAes256].
    ///
    /// This conversion will succeed only if the input slice is exactly 32
    /// bytes long. The error reports the length of the input.
    ///
    /// # Example
    /// ```
    /// # use azblob_cpek::{KeyAes256, KeyAes256Error};
    /// let raw_key_bytes: [u8; 32] = [0x42; 32]; // Example 32-byte key
    /// let key_aes_256 = KeyAes256::new(&raw_key_bytes)?;
    /// # Ok::<(), KeyAes256Error>(())
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, KeyAes256Error> {
        let key = <[u8; KEY_LENGTH]>::try_from(key)
            .map_err(|_| KeyAes256Error::InvalidLength { length: key.len() })?;
        Ok(Self { key })
    }

    /// Creates a [KeyAes256] from its standard base64 representation.
    ///
    /// Keys are often stored and exchanged as base64 strings, for example in
    /// secret managers or configuration files.
    ///
    /// # Example
    /// ```
    /// # use azblob_cpek::{KeyAes256, KeyAes256Error};
    /// let key = KeyAes256::from_base64("QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=")?;
    /// assert_eq!(key.as_bytes(), &[0x42; 32]);
    /// # Ok::<(), KeyAes256Error>(())
    /// ```
    pub fn from_base64<T: AsRef<[u8]>>(encoded: T) -> Result<Self, KeyAes256Error> {
        let decoded = BASE64_STANDARD
            .decode(encoded)
            .map_err(KeyAes256Error::InvalidBase64)?;
        Self::new(&decoded)
    }

    /// Generates a new random key.
    ///
    /// The key uses the thread-local random number generator, which is
    /// cryptographically secure.
    ///
    /// # Example
    /// ```
    /// # use azblob_cpek::KeyAes256;
    /// let key = KeyAes256::generate();
    /// assert_eq!(key.as_bytes().len(), 32);
    /// ```
    pub fn generate() -> Self {
        let mut key = [0_u8; KEY_LENGTH];
        rand::rng().fill_bytes(&mut key);
        Self { key }
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    /// Returns the key in standard base64 encoding.
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.key)
    }
}

impl std::fmt::Debug for KeyAes256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyAes256")
            .field("key", &"[censored]")
            .finish()
    }
}

impl From<[u8; KEY_LENGTH]> for KeyAes256 {
    fn from(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }
}

impl TryFrom<&[u8]> for KeyAes256 {
    type Error = KeyAes256Error;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Vec<u8>> for KeyAes256 {
    type Error = KeyAes256Error;
    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}
