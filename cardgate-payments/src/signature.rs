//! RSA message signing and verification
//!
//! Signatures are RSA PKCS#1 v1.5 over the canonical string, base64 encoded.
//! The digest depends on the gateway protocol version: SHA-1 up to 1.7 and
//! SHA-256 from 1.8 on.

use crate::{PaymentError, PaymentResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

/// Digest used inside the PKCS#1 v1.5 signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-1, used up to protocol 1.7
    Sha1,
    /// SHA-256, used from protocol 1.8
    Sha256,
}

impl HashAlgorithm {
    fn scheme(&self) -> Pkcs1v15Sign {
        match self {
            Self::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
            Self::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        }
    }

    fn digest(&self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => Sha1::digest(message).to_vec(),
            Self::Sha256 => Sha256::digest(message).to_vec(),
        }
    }
}

/// Gateway protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProtocolVersion {
    /// `v1.7`, signed with SHA-1
    #[default]
    V1_7,
    /// `v1.8`, signed with SHA-256
    V1_8,
    /// `v1.9`, signed with SHA-256
    V1_9,
}

impl ProtocolVersion {
    /// Digest the gateway expects for this version
    /// Digest this signer uses
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        match self {
            Self::V1_7 => HashAlgorithm::Sha1,
            Self::V1_8 | Self::V1_9 => HashAlgorithm::Sha256,
        }
    }

    /// Version number as it appears in the gateway URL (`1.7`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1_7 => "1.7",
            Self::V1_8 => "1.8",
            Self::V1_9 => "1.9",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches(['v', 'V']) {
            "1.7" => Ok(Self::V1_7),
            "1.8" => Ok(Self::V1_8),
            "1.9" => Ok(Self::V1_9),
            other => Err(PaymentError::Config(format!(
                "unsupported protocol version: {}",
                other
            ))),
        }
    }
}

/// Parse an RSA private key from PKCS#1 or PKCS#8 PEM
pub fn parse_private_key(pem: &str) -> PaymentResult<RsaPrivateKey> {
    let pem = pem.trim();
    let parsed = if pem.contains("BEGIN RSA PRIVATE KEY") {
        RsaPrivateKey::from_pkcs1_pem(pem).map_err(|e| e.to_string())
    } else {
        RsaPrivateKey::from_pkcs8_pem(pem).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| PaymentError::Config(format!("invalid private key: {}", e)))
}

/// Parse an RSA public key from PKCS#1 or SubjectPublicKeyInfo PEM
pub fn parse_public_key(pem: &str) -> PaymentResult<RsaPublicKey> {
    let pem = pem.trim();
    let parsed = if pem.contains("BEGIN RSA PUBLIC KEY") {
        RsaPublicKey::from_pkcs1_pem(pem).map_err(|e| e.to_string())
    } else {
        RsaPublicKey::from_public_key_pem(pem).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| PaymentError::Config(format!("invalid public key: {}", e)))
}

/// Signs canonical strings with the merchant private key
#[derive(Clone)]
pub struct MessageSigner {
    key: RsaPrivateKey,
    hash: HashAlgorithm,
}

impl MessageSigner {
    /// Create a new signer
    pub fn new(key: RsaPrivateKey, hash: HashAlgorithm) -> Self {
        Self { key, hash }
    }

    /// Create a signer from PEM text
    pub fn from_pem(pem: &str, hash: HashAlgorithm) -> PaymentResult<Self> {
        Ok(Self::new(parse_private_key(pem)?, hash))
    }

    /// Sign a canonical string, returning the base64 signature
    pub fn sign(&self, canonical: &str) -> PaymentResult<String> {
        let digest = self.hash.digest(canonical.as_bytes());
        let signature = self
            .key
            .sign(self.hash.scheme(), &digest)
            .map_err(|e| PaymentError::Signing(e.to_string()))?;
        Ok(STANDARD.encode(signature))
    }

    /// Public half of the signing key
    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey::from(&self.key)
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash
    }
}

impl fmt::Debug for MessageSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSigner")
            .field("hash", &self.hash)
            .finish_non_exhaustive()
    }
}

/// Verifies gateway signatures with the gateway public key
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: RsaPublicKey,
    hash: HashAlgorithm,
}

impl SignatureVerifier {
    /// Create a new verifier
    pub fn new(key: RsaPublicKey, hash: HashAlgorithm) -> Self {
        Self { key, hash }
    }

    /// Create a verifier from PEM text
    pub fn from_pem(pem: &str, hash: HashAlgorithm) -> PaymentResult<Self> {
        Ok(Self::new(parse_public_key(pem)?, hash))
    }

    /// Check a base64 signature over a canonical string.
    ///
    /// Malformed base64, a signature of the wrong length and a signature made
    /// with another key all yield `false`.
    pub fn verify(&self, canonical: &str, signature: &str) -> bool {
        let Ok(raw) = STANDARD.decode(signature.trim()) else {
            return false;
        };
        let digest = self.hash.digest(canonical.as_bytes());
        self.key.verify(self.hash.scheme(), &digest, &raw).is_ok()
    }

    /// Digest this verifier expects
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash
    }
}
