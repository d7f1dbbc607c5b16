use std::fmt;

/// Suffix that marks a branch as a release line (`0.13.x`).
pub const RELEASE_BRANCH_SUFFIX: &str = ".x";

/// A release line identifier such as `0.13`.
///
/// Ordering compares `major` then `minor` as integers, so `2.10` is greater
/// than `2.9`. The textual label is kept as it appeared in the branch name and
/// only breaks ties between otherwise equal numbers (`0.7` vs `00.7`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseId {
    major: u32,
    minor: u32,
    label: String,
}

impl ReleaseId {
    /// Create a release id from its numeric components
    pub fn new(major: u32, minor: u32) -> Self {
        ReleaseId {
            major,
            minor,
            label: format!("{}.{}", major, minor),
        }
    }

    /// Parse a local release branch name (e.g. "0.13.x" -> 0.13)
    ///
    /// Returns `None` for anything that is not `<digits>.<digits>.x`.
    pub fn parse_branch(branch: &str) -> Option<Self> {
        let label = branch.strip_suffix(RELEASE_BRANCH_SUFFIX)?;
        let (major, minor) = label.split_once('.')?;

        Some(ReleaseId {
            major: parse_component(major)?,
            minor: parse_component(minor)?,
            label: label.to_string(),
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// The documentation version label, e.g. "0.13"
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// The branch this release line lives on, e.g. "0.13.x"
    pub fn branch_name(&self) -> String {
        format!("{}{}", self.label, RELEASE_BRANCH_SUFFIX)
    }
}

// `u32::from_str` accepts a leading '+', which is not a valid branch component.
fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u32>().ok()
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
