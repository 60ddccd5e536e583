use std::{io::Write, path::PathBuf};

use crate::artifact::parse_artifact_file;

use super::CommandError;

/// Prints the ABI or the bytecode from a contract artifacts file.
#[derive(Clone, Debug, Default)]
pub struct ArtifactsCommand {
    pub file: Option<PathBuf>,
    pub abi: bool,
    pub bytecode: bool,
    /// With `bytecode`, print the runtime rather than the creation bytecode.
    pub deployed: bool,
}

impl ArtifactsCommand {
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let Some(file) = &self.file else {
            return Err(CommandError::MissingArtifactFile);
        };
        match (self.abi, self.bytecode) {
            (false, false) => return Err(CommandError::MissingArtifactSection),
            (true, true) => return Err(CommandError::ConflictingArtifactSections),
            _ => {}
        }

        let artifact = parse_artifact_file(file)?;
        if self.abi {
            writeln!(out, "{}", artifact.abi_json()?)?;
        } else if self.deployed {
            writeln!(out, "{}", artifact.deployed_bytecode())?;
        } else {
            writeln!(out, "{}", artifact.bytecode())?;
        }
        Ok(())
    }
}
