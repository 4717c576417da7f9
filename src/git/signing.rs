//! Tag signing.
//!
//! Signing is delegated to a [`TagSigner`]. The repository layer serializes the
//! unsigned tag object, hands those exact bytes to the signer and appends the
//! returned armored signature after the tag message, which is the layout
//! `git tag -s` produces.

use crate::error::SigningError;
use crate::git::GitConfig;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const PGP_SIGNATURE_HEADER: &str = "-----BEGIN PGP SIGNATURE-----";

/// Produces detached signatures for tag payloads
pub trait TagSigner {
    /// Sign `payload`, returning an ASCII-armored detached signature.
    fn sign(&self, key_id: Option<&str>, payload: &[u8]) -> Result<String, SigningError>;
}

/// Whether and how a tag gets signed
#[derive(Clone, Copy, Default)]
pub struct SigningContext<'a> {
    signer: Option<&'a dyn TagSigner>,
    key_id: Option<&'a str>,
}

impl<'a> SigningContext<'a> {
    /// Plain annotated tags
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Sign with `signer`, optionally selecting a specific key
    pub fn enabled(key_id: Option<&'a str>, signer: &'a dyn TagSigner) -> Self {
        Self {
            signer: Some(signer),
            key_id,
        }
    }

    /// Derive the context from the release configuration's sign flag
    pub fn from_config(config: &'a GitConfig, signer: &'a dyn TagSigner) -> Self {
        if config.sign {
            Self::enabled(config.signing_key.as_deref(), signer)
        } else {
            Self::disabled()
        }
    }

    /// Check if tags will be signed
    pub fn is_enabled(&self) -> bool {
        self.signer.is_some()
    }

    /// Signing key identifier, if one was configured
    pub fn key_id(&self) -> Option<&'a str> {
        self.key_id
    }

    pub(crate) fn sign(&self, payload: &[u8]) -> Option<Result<String, SigningError>> {
        self.signer.map(|signer| signer.sign(self.key_id, payload))
    }
}

impl fmt::Debug for SigningContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningContext")
            .field("enabled", &self.is_enabled())
            .field("key_id", &self.key_id)
            .finish()
    }
}

/// Signs by running `gpg --detach-sign`
#[derive(Debug, Clone)]
pub struct GpgSigner {
    program: PathBuf,
}

impl GpgSigner {
    /// Locate `gpg` on `PATH`
    pub fn new() -> Result<Self, SigningError> {
        let program = which::which("gpg").map_err(|source| SigningError::ProgramNotFound {
            program: "gpg".to_string(),
            source,
        })?;
        Ok(Self { program })
    }

    /// Use a specific gpg executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Honor `gpg-program` from the configuration, otherwise search `PATH`
    pub fn from_config(config: &GitConfig) -> Result<Self, SigningError> {
        match config.gpg_program {
            Some(ref program) => Ok(Self::with_program(program)),
            None => Self::new(),
        }
    }

    fn io_error(&self, source: std::io::Error) -> SigningError {
        SigningError::Io {
            program: self.program.clone(),
            source,
        }
    }
}

impl TagSigner for GpgSigner {
    fn sign(&self, key_id: Option<&str>, payload: &[u8]) -> Result<String, SigningError> {
        let mut command = Command::new(&self.program);
        command.args(["--batch", "--armor", "--detach-sign"]);
        if let Some(key) = key_id {
            command.arg("--local-user").arg(key);
        }

        log::debug!("Signing {} bytes with {}", payload.len(), self.program.display());

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.io_error(e))?;

        // stdin must be closed before waiting, gpg reads until EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(payload).map_err(|e| self.io_error(e))?;
        }

        let output = child.wait_with_output().map_err(|e| self.io_error(e))?;
        if !output.status.success() {
            return Err(SigningError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let signature =
            String::from_utf8(output.stdout).map_err(|e| SigningError::InvalidSignature {
                reason: e.to_string(),
            })?;
        validate_signature(&signature)?;
        Ok(signature)
    }
}

/// Reject output that is not an armored PGP signature.
pub fn validate_signature(signature: &str) -> Result<(), SigningError> {
    if signature.trim_start().starts_with(PGP_SIGNATURE_HEADER) {
        Ok(())
    } else {
        Err(SigningError::InvalidSignature {
            reason: "missing PGP signature header".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSigner;

    impl TagSigner for FixedSigner {
        fn sign(&self, key_id: Option<&str>, payload: &[u8]) -> Result<String, SigningError> {
            Ok(format!("{}:{}", key_id.unwrap_or("-"), payload.len()))
        }
    }

    #[test]
    fn test_disabled_context_never_signs() {
        let context = SigningContext::disabled();
        assert!(!context.is_enabled());
        assert!(context.sign(b"payload").is_none());
    }

    #[test]
    fn test_context_follows_sign_flag() {
        let signer = FixedSigner;
        let mut config = GitConfig {
            signing_key: Some("KEY".to_string()),
            ..GitConfig::default()
        };

        assert!(!SigningContext::from_config(&config, &signer).is_enabled());

        config.sign = true;
        let context = SigningContext::from_config(&config, &signer);
        assert!(context.is_enabled());
        assert_eq!(context.key_id(), Some("KEY"));

        let signature = context.sign(b"abc").expect("enabled").expect("signed");
        assert_eq!(signature, "KEY:3");
    }

    #[test]
    fn test_signature_validation() {
        assert!(validate_signature("-----BEGIN PGP SIGNATURE-----\n\nabc\n").is_ok());
        assert!(validate_signature("gpg: signing failed").is_err());
    }

    #[test]
    fn test_missing_program_is_an_io_error() {
        let signer = GpgSigner::with_program("/definitely/not/a/gpg");
        let err = signer.sign(None, b"payload").unwrap_err();
        assert!(matches!(err, SigningError::Io { .. }));
    }
}
