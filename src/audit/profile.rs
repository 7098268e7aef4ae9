//! Audit profiles: the two configurations of the shared extraction pipeline.

use std::fmt;

use crate::error_handling::AuditError;
use crate::extract::{LinkClassification, WordCountMethod};
use crate::fetch::FetchedPage;
use crate::parse::ParsedDocument;

use super::target::AuditTarget;

/// How much detail a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Basic,
    Full,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Basic => f.write_str("basic"),
            Granularity::Full => f.write_str("full"),
        }
    }
}

/// Which URL relative references in the document resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrl {
    /// The URL the caller asked for
    Requested,
    /// The URL the transport ended up at after redirects
    Final,
}

/// Parameters that distinguish the basic and full audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditProfile {
    pub granularity: Granularity,
    pub link_rule: LinkClassification,
    pub word_count: WordCountMethod,
    pub base_url: BaseUrl,
}

impl AuditProfile {
    pub const BASIC: AuditProfile = AuditProfile {
        granularity: Granularity::Basic,
        link_rule: LinkClassification::Hostname,
        word_count: WordCountMethod::WhitespaceSplit,
        base_url: BaseUrl::Requested,
    };

    pub const FULL: AuditProfile = AuditProfile {
        granularity: Granularity::Full,
        link_rule: LinkClassification::SchemePrefix,
        word_count: WordCountMethod::Tokens,
        base_url: BaseUrl::Final,
    };
}

/// A report shape that can be assembled from a parsed page.
pub trait ReportAssembly: Sized {
    /// The pipeline configuration this report is built with.
    const PROFILE: AuditProfile;

    /// Runs the extractors this report needs and assembles the result.
    fn assemble(
        target: &AuditTarget,
        page: &FetchedPage,
        doc: &ParsedDocument,
    ) -> Result<Self, AuditError>;
}
