//! Request canonicalization and HMAC signing.
//!
//! The Admin API authenticates each request with HTTP Basic auth whose
//! password is an HMAC-SHA1 signature over a canonical form of the request.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::params::Params;
use crate::transport::{Method, TransportError};

type HmacSha1 = Hmac<Sha1>;

/// Integration key and secret key pair.
#[derive(Clone)]
pub struct Credentials {
    integration_key: String,
    secret_key: String,
}

impl Credentials {
    /// Create credentials from an integration key and secret key.
    pub fn new(integration_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            integration_key: integration_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The integration key (public half).
    pub fn integration_key(&self) -> &str {
        &self.integration_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("integration_key", &self.integration_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Encode parameters the way they are signed and sent.
///
/// Pairs are sorted by name then value, and both sides are percent-encoded
/// leaving only `A-Z a-z 0-9 - _ . ~` unescaped.
pub fn canonical_params(params: &Params) -> String {
    let mut pairs: Vec<(&str, &str)> = params.iter().collect();
    pairs.sort_unstable();
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the newline-joined string that gets signed.
pub fn canonical_request(
    date: &str,
    method: Method,
    host: &str,
    path: &str,
    canonical_params: &str,
) -> String {
    let host = host.to_lowercase();
    [date, method.as_str(), host.as_str(), path, canonical_params].join("\n")
}

/// Compute the `Authorization` header value for a canonical request.
pub fn authorization(
    credentials: &Credentials,
    canonical_request: &str,
) -> Result<String, TransportError> {
    let mut mac = HmacSha1::new_from_slice(credentials.secret_key.as_bytes())
        .map_err(|e| TransportError::Request(format!("invalid secret key: {e}")))?;
    mac.update(canonical_request.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    let basic = STANDARD.encode(format!("{}:{}", credentials.integration_key, signature));
    Ok(format!("Basic {basic}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("DIWJ8X6AEYOR5OMC6TQ1", "Zh5eGmUq9zpfQnyUIu5OL9iWoMMv5ZNmk3zLJ4Ep")
    }

    #[test]
    fn test_canonical_params_sorted_and_encoded() {
        let params: Params = [
            ("username", "root"),
            ("realname", "First Last"),
            ("notes", "a&b=c"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            canonical_params(&params),
            "notes=a%26b%3Dc&realname=First%20Last&username=root"
        );
    }

    #[test]
    fn test_canonical_params_empty() {
        assert_eq!(canonical_params(&Params::new()), "");
    }

    #[test]
    fn test_canonical_params_keeps_tilde() {
        let params: Params = [("k~", "v~ü")].into_iter().collect();
        assert_eq!(canonical_params(&params), "k~=v~%C3%BC");
    }

    #[test]
    fn test_canonical_request_lowercases_host() {
        let canon = canonical_request(
            "Tue, 21 Aug 2012 17:29:18 -0000",
            Method::Post,
            "API-xxxxxxxx.DuoSecurity.com",
            "/admin/v1/users",
            "username=root",
        );
        assert_eq!(
            canon,
            "Tue, 21 Aug 2012 17:29:18 -0000\nPOST\napi-xxxxxxxx.duosecurity.com\n/admin/v1/users\nusername=root"
        );
    }

    #[test]
    fn test_authorization_shape() {
        let header = authorization(&creds(), "canonical").unwrap();
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        let (ikey, sig) = decoded.split_once(':').unwrap();
        assert_eq!(ikey, "DIWJ8X6AEYOR5OMC6TQ1");
        assert_eq!(sig.len(), 40);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_authorization_known_answer() {
        let canon = canonical_request(
            "Fri, 07 Dec 2012 17:18:00 -0000",
            Method::Post,
            "foO.BaR52.cOm",
            "/Foo/BaR2/qux",
            "realname=First%20Last&username=root",
        );
        let credentials = Credentials::new("test_ikey", "gtdfxv9YgVBYcF6dl2Eq17KUQJN2PLM2ODVTkvoT");
        assert_eq!(
            authorization(&credentials, &canon).unwrap(),
            "Basic dGVzdF9pa2V5OjdmZjVjZTFkOWM5MjJhOTRiNjQ3NGQwMmQzMzQwOTZhOWY4ZTBiNDQ="
        );
    }

    #[test]
    fn test_signature_depends_on_request() {
        let a = authorization(&creds(), "GET\n/a").unwrap();
        let b = authorization(&creds(), "GET\n/b").unwrap();
        assert_eq!(a, authorization(&creds(), "GET\n/a").unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", creds());
        assert!(rendered.contains("DIWJ8X6AEYOR5OMC6TQ1"));
        assert!(!rendered.contains("Zh5eGmUq"));
    }
}
