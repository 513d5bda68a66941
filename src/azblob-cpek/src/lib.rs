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

//! Customer-provided encryption keys for blob storage requests.
//!
//! Blob storage services can encrypt data at rest with a key supplied by the
//! application, instead of a key managed by the service. The application
//! sends the key, its SHA-256 hash, and the algorithm name with every request
//! that reads or writes the data:
//!
//! * `x-ms-encryption-key`: the key, in standard base64.
//! * `x-ms-encryption-key-sha256`: the SHA-256 hash of the key, in standard
//!   base64.
//! * `x-ms-encryption-algorithm`: always `AES256`.
//!
//! This crate validates the key, computes these values, and adds them to
//! outgoing requests. It does not send requests.
//!
//! # Example
//! ```
//! # use azblob_cpek::{KeyAes256Error, apply, headers::build};
//! # fn sample(key: Option<&[u8]>) -> Result<(), KeyAes256Error> {
//! let encryption = build(key)?;
//! let request = http::Request::put("https://account.blob.core.windows.net/container/blob")
//!     .body(())
//!     .expect("a valid request");
//! let request = apply(request, encryption.as_ref());
//! // ... send `request` ...
//! # Ok(()) }
//! ```
//!
//! # Features
//!
//! * `reqwest` (enabled by default): apply the headers to
//!   `reqwest::Request` and `reqwest::RequestBuilder`.

pub mod apply;
pub mod error;
pub mod headers;
mod key;
pub mod response;

pub use apply::{WithEncryptionHeaders, apply};
pub use error::{KeyAes256Error, ResponseKeyError};
pub use headers::EncryptionHeaders;
pub use key::{KEY_LENGTH, KeyAes256};
