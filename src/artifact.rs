//! For reading compiled contract artifacts (Truffle, Hardhat or Foundry JSON).
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("File {filename} could not be opened {source}")]
    FileOpener {
        source: io::Error,
        filename: PathBuf,
    },
    #[error("serde_json error {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Artifact has no abi")]
    MissingAbi,
}

/// Contract artifact with the ABI kept as raw JSON.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawArtifact {
    #[serde(default)]
    pub contract_name: String,
    #[serde(default)]
    pub abi: Value,
    #[serde(default)]
    bytecode: Bytecode,
    #[serde(default)]
    deployed_bytecode: Bytecode,
}

/// Truffle and Hardhat store bytecode as a string, Foundry nests it in an object.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
enum Bytecode {
    Hex(String),
    Object { object: String },
}

impl Default for Bytecode {
    fn default() -> Self {
        Bytecode::Hex(String::new())
    }
}

impl Bytecode {
    fn as_str(&self) -> &str {
        match self {
            Bytecode::Hex(s) => s,
            Bytecode::Object { object } => object,
        }
    }
}

impl RawArtifact {
    /// Parses artifact JSON. The ABI must be present.
    pub fn from_json(data: &str) -> Result<Self, ArtifactError> {
        let artifact: RawArtifact = serde_json::from_str(data)?;
        if artifact.abi.is_null() {
            return Err(ArtifactError::MissingAbi);
        }
        Ok(artifact)
    }

    /// The ABI as compact JSON.
    pub fn abi_json(&self) -> Result<String, ArtifactError> {
        Ok(serde_json::to_string(&self.abi)?)
    }

    /// Creation bytecode.
    pub fn bytecode(&self) -> &str {
        self.bytecode.as_str()
    }

    /// Runtime bytecode.
    pub fn deployed_bytecode(&self) -> &str {
        self.deployed_bytecode.as_str()
    }
}

/// Reads and parses an artifact file.
pub fn parse_artifact_file<P: AsRef<Path>>(path: P) -> Result<RawArtifact, ArtifactError> {
    let filename = path.as_ref().to_path_buf();
    let data = fs::read_to_string(&filename)
        .map_err(|source| ArtifactError::FileOpener { source, filename })?;
    RawArtifact::from_json(&data)
}

#[cfg(test)]
mod test {
    use super::*;

    const TRUFFLE: &str = r#"{
        "contractName": "Counter",
        "abi": [{"inputs":[],"name":"count","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"view","type":"function"}],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x60806040"
    }"#;

    const FOUNDRY: &str = r#"{
        "abi": [],
        "bytecode": {"object": "0x6080604052", "sourceMap": ""},
        "deployedBytecode": {"object": "0x60806040", "sourceMap": ""}
    }"#;

    #[test]
    fn test_truffle_artifact() {
        let artifact = RawArtifact::from_json(TRUFFLE).unwrap();
        assert_eq!(artifact.contract_name, "Counter");
        assert_eq!(artifact.bytecode(), "0x6080604052");
        assert_eq!(artifact.deployed_bytecode(), "0x60806040");
        assert!(artifact.abi_json().unwrap().starts_with(r#"[{"inputs":[]"#));
    }

    #[test]
    fn test_foundry_artifact() {
        let artifact = RawArtifact::from_json(FOUNDRY).unwrap();
        assert_eq!(artifact.contract_name, "");
        assert_eq!(artifact.bytecode(), "0x6080604052");
        assert_eq!(artifact.abi_json().unwrap(), "[]");
    }

    #[test]
    fn test_missing_abi() {
        assert!(matches!(
            RawArtifact::from_json(r#"{"bytecode": "0x00"}"#),
            Err(ArtifactError::MissingAbi)
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            parse_artifact_file("does/not/exist.json"),
            Err(ArtifactError::FileOpener { .. })
        ));
    }
}
