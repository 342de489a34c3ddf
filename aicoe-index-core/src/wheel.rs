//! # wheel: artifact filename parsing
//!
//! Splits a wheel filename into the fields defined by PEP 427:
//!
//! ```text
//! {distribution}-{version}(-{build_tag})?-{python_tag}-{abi_tag}-{platform_tag}.whl
//! ```
//!
//! Parsing is an explicit tokenizer over the hyphen-separated stem. The first token is
//! the distribution, the last three are the tags, and what remains in between is the
//! version optionally followed by a build tag. Hyphens inside distribution or version
//! are not allowed (PEP 427 requires them escaped as `_`), so a stem has exactly
//! five or six tokens.

use thiserror::Error;

pub const WHEEL_EXTENSION: &str = ".whl";

/// Fields of a successfully parsed wheel filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    pub distribution: String,
    pub version: String,
    pub build_tag: Option<String>,
    pub python_tag: String,
    pub abi_tag: String,
    pub platform_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelNameError {
    #[error("not a wheel file")]
    NotAWheel,
    #[error("wheel file does not correspond to Python naming standard")]
    InvalidName,
}

/// Parse `filename` into an [`ArtifactName`].
///
/// Anything without the `.whl` extension is rejected as [`WheelNameError::NotAWheel`]
/// before tokenizing.
pub fn parse_wheel_name(filename: &str) -> Result<ArtifactName, WheelNameError> {
    let stem = filename
        .strip_suffix(WHEEL_EXTENSION)
        .ok_or(WheelNameError::NotAWheel)?;

    let tokens: Vec<&str> = stem.split('-').collect();
    if tokens.iter().any(|token| token.is_empty()) {
        return Err(WheelNameError::InvalidName);
    }

    let (distribution, version, build_tag, python_tag, abi_tag, platform_tag) =
        match tokens.as_slice() {
            [distribution, version, python_tag, abi_tag, platform_tag] => {
                (*distribution, *version, None, *python_tag, *abi_tag, *platform_tag)
            }
            [distribution, version, build_tag, python_tag, abi_tag, platform_tag] => (
                *distribution,
                *version,
                Some(*build_tag),
                *python_tag,
                *abi_tag,
                *platform_tag,
            ),
            _ => return Err(WheelNameError::InvalidName),
        };

    Ok(ArtifactName {
        distribution: distribution.to_string(),
        version: version.to_string(),
        build_tag: build_tag.map(str::to_string),
        python_tag: python_tag.to_string(),
        abi_tag: abi_tag.to_string(),
        platform_tag: platform_tag.to_string(),
    })
}
