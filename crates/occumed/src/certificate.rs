//! Integrity hashing and verification links for issued fitness certificates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::clinical::FitnessStatus;

pub const HASH_SCHEME: &str = "sha256";

/// Finalized verdict metadata handed over by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateData {
    pub attention_id: String,
    pub worker_rut: String,
    pub worker_name: String,
    pub verdict: FitnessStatus,
    pub issue_date: NaiveDate,
}

impl CertificateData {
    /// Stable JSON encoding: sorted keys, no whitespace, ISO dates.
    pub fn canonical_json(&self) -> String {
        json!({
            "attentionId": self.attention_id,
            "issueDate": self.issue_date.format("%Y-%m-%d").to_string(),
            "verdict": self.verdict.as_str(),
            "workerName": self.worker_name,
            "workerRut": self.worker_rut,
        })
        .to_string()
    }

    pub fn integrity_hash(&self) -> String {
        let digest = Sha256::digest(self.canonical_json().as_bytes());
        format!("{HASH_SCHEME}-{}", hex::encode(digest))
    }
}

/// Data the caller embeds in the rendered certificate and persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCertificate {
    pub integrity_hash: String,
    pub qr_url: String,
    pub is_legally_valid: bool,
    pub metadata: CertificateData,
}

impl LegalCertificate {
    /// Whether `data` still hashes to the value recorded on this certificate.
    pub fn matches(&self, data: &CertificateData) -> bool {
        verify_integrity(&data.integrity_hash(), &self.integrity_hash)
    }
}

#[derive(Debug, Clone)]
pub struct CertificatePreparer {
    verify_base_url: String,
}

impl CertificatePreparer {
    pub fn new(verify_base_url: impl Into<String>) -> Self {
        let verify_base_url = verify_base_url.into().trim_end_matches('/').to_string();
        Self { verify_base_url }
    }

    pub fn verification_url(&self, attention_id: &str) -> String {
        format!("{}/verify/{}", self.verify_base_url, attention_id)
    }

    pub fn prepare(&self, data: CertificateData) -> LegalCertificate {
        let integrity_hash = data.integrity_hash();
        let qr_url = self.verification_url(&data.attention_id);

        debug!(
            attention_id = %data.attention_id,
            verdict = data.verdict.as_str(),
            "certificate prepared"
        );

        LegalCertificate {
            integrity_hash,
            qr_url,
            is_legally_valid: true,
            metadata: data,
        }
    }
}

/// Exact comparison of a presented hash against the stored original.
pub fn verify_integrity(presented: &str, original: &str) -> bool {
    presented == original
}
