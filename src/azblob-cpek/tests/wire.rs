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

#[cfg(test)]
mod tests {
    use azblob_cpek::headers::{
        AES256, ENCRYPTION_ALGORITHM, ENCRYPTION_KEY, ENCRYPTION_KEY_SHA256,
    };
    use azblob_cpek::response::check_key_sha256;
    use azblob_cpek::{
        EncryptionHeaders, KeyAes256, KeyAes256Error, ResponseKeyError, apply,
    };
    use httptest::{Expectation, Server, matchers::*, responders::*};

    type Result = anyhow::Result<()>;

    #[tokio::test]
    async fn upload_with_key() -> Result {
        let key = KeyAes256::generate();
        let encryption = azblob_cpek::headers::build(Some(key.as_bytes().as_slice()))?;
        let want = encryption.clone().expect("a valid key produces headers");

        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/container/blob"),
                request::headers(contains((ENCRYPTION_ALGORITHM, AES256))),
                request::headers(contains((ENCRYPTION_KEY, key.to_base64()))),
                request::headers(contains((
                    ENCRYPTION_KEY_SHA256,
                    want.key_sha256_base64().to_string()
                ))),
                request::headers(contains(("x-ms-blob-type", "BlockBlob"))),
            ])
            .respond_with(
                status_code(201)
                    .append_header(ENCRYPTION_KEY_SHA256, want.key_sha256_base64().to_string())
                    .append_header("x-ms-request-server-encrypted", "true"),
            ),
        );

        let client = reqwest::Client::new();
        let builder = client
            .put(server.url("/container/blob").to_string())
            .header("x-ms-blob-type", "BlockBlob")
            .body("hello");
        let response = apply(builder, encryption.as_ref()).send().await?;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        check_key_sha256(response.headers(), &want)?;
        Ok(())
    }

    #[tokio::test]
    async fn download_without_key() -> Result {
        let encryption = azblob_cpek::headers::build(None)?;
        assert!(encryption.is_none(), "{encryption:?}");

        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/container/blob"),
                not(request::headers(contains(key(ENCRYPTION_ALGORITHM)))),
                not(request::headers(contains(key(ENCRYPTION_KEY)))),
                not(request::headers(contains(key(ENCRYPTION_KEY_SHA256)))),
                request::headers(contains(("x-ms-version", "2021-08-06"))),
            ])
            .respond_with(status_code(200).body("hello")),
        );

        let client = reqwest::Client::new();
        let builder = client
            .get(server.url("/container/blob").to_string())
            .header("x-ms-version", "2021-08-06");
        let response = apply(builder, encryption.as_ref()).send().await?;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await?, "hello");
        Ok(())
    }

    #[tokio::test]
    async fn detects_wrong_key() -> Result {
        let sent = EncryptionHeaders::new(&KeyAes256::from([0x42; 32]));
        let other = EncryptionHeaders::new(&KeyAes256::from([0x00; 32]));

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("HEAD", "/container/blob")).respond_with(
                status_code(200).append_header(
                    ENCRYPTION_KEY_SHA256,
                    other.key_sha256_base64().to_string(),
                ),
            ),
        );

        let client = reqwest::Client::new();
        let builder = client.head(server.url("/container/blob").to_string());
        let response = apply(builder, Some(&sent)).send().await?;
        let got = check_key_sha256(response.headers(), &sent);
        assert!(
            matches!(got, Err(ResponseKeyError::Mismatch { .. })),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn invalid_key_fails_before_sending() {
        // No server is needed, request preparation fails locally.
        let got = azblob_cpek::headers::build(Some(&[0xab_u8; 16][..]));
        assert!(
            matches!(got, Err(KeyAes256Error::InvalidLength { length: 16 })),
            "{got:?}"
        );
    }
}
