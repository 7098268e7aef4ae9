//! The compact ("free") report.

use serde::Serialize;

use crate::error_handling::AuditError;
use crate::extract::{
    extract_headings, extract_images, extract_links, extract_meta_description, extract_title,
    extract_word_statistics,
};
use crate::fetch::FetchedPage;
use crate::parse::ParsedDocument;
use crate::utils::char_length;

use super::profile::{AuditProfile, ReportAssembly};
use super::report::HttpInfo;
use super::target::AuditTarget;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicReport {
    pub http: HttpInfo,
    pub metadata: BasicMetadata,
    pub content: ContentSummary,
    pub links: LinkCounts,
    pub images: ImageCounts,
}

/// Title and description; an empty value is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicMetadata {
    pub title: Option<String>,
    pub title_length: usize,
    pub description: Option<String>,
    pub description_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummary {
    pub word_count: usize,
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    pub total_links: usize,
    pub internal_links: usize,
    pub external_links: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCounts {
    pub total_images: usize,
    pub images_without_alt: usize,
}

impl ReportAssembly for BasicReport {
    const PROFILE: AuditProfile = AuditProfile::BASIC;

    fn assemble(
        target: &AuditTarget,
        page: &FetchedPage,
        doc: &ParsedDocument,
    ) -> Result<Self, AuditError> {
        let profile = Self::PROFILE;

        let title = extract_title(doc).filter(|t| !t.is_empty());
        let description = extract_meta_description(doc).filter(|d| !d.is_empty());
        let headings = extract_headings(doc);
        let words = extract_word_statistics(doc, profile.word_count)?;
        let links = extract_links(doc, profile.link_rule)?;
        let images = extract_images(doc);

        Ok(BasicReport {
            http: HttpInfo::new(page.status, target.using_https()),
            metadata: BasicMetadata {
                title_length: title.as_deref().map(char_length).unwrap_or(0),
                title,
                description_length: description.as_deref().map(char_length).unwrap_or(0),
                description,
            },
            content: ContentSummary {
                word_count: words.total,
                h1_count: headings.count(1),
                h2_count: headings.count(2),
                h3_count: headings.count(3),
            },
            links: LinkCounts {
                total_links: links.total,
                internal_links: links.internal,
                external_links: links.external,
            },
            images: ImageCounts {
                total_images: images.total,
                images_without_alt: images.missing_alt,
            },
        })
    }
}
