use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// The four credential strings read from the environment at startup.
/// Never persisted; absent variables arrive here as empty strings and
/// surface later as authentication failures.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub notify_email: String,
    pub notify_password: String,
    pub portal_user: String,
    pub portal_password: String,
}

/// Portal posts embed their numeric ID in the panel element's `id`
/// attribute, after this literal prefix.
pub const POST_ID_PREFIX: &str = "collapse";

/// Numeric identifier of a portal announcement post. The portal is assumed
/// to assign strictly increasing IDs; greater-than is the only decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostId(pub u64);

impl PostId {
    /// Extract a post ID from a panel element's `id` attribute by stripping
    /// the known prefix. `None` means the page shape does not match.
    pub fn from_element_id(attr: &str) -> Option<Self> {
        attr.strip_prefix(POST_ID_PREFIX)?.parse().ok().map(PostId)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PostId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PostId)
    }
}

/// What a completed run did, returned by the orchestrator instead of being
/// signalled through control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A newer post was seen; the checkpoint was updated and an email sent.
    Notified(PostId),
    /// Nothing newer than the stored checkpoint.
    Skipped { current: PostId, stored: PostId },
}
