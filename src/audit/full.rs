//! The full report, with per-tag statistics and raw link/image lists.

use serde::Serialize;

use crate::error_handling::AuditError;
use crate::extract::{
    count_meta_descriptions, count_titles, extract_headings, extract_images, extract_links,
    extract_meta_description, extract_metadata_info, extract_title, extract_word_statistics,
    ImageRecord, LinkRecord, MetadataInfo, TagStatistics,
};
use crate::fetch::FetchedPage;
use crate::parse::ParsedDocument;

use super::profile::{AuditProfile, ReportAssembly};
use super::report::HttpInfo;
use super::target::AuditTarget;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullReport {
    #[serde(rename = "Input")]
    pub input: InputInfo,
    pub http: HttpInfo,
    pub title: TitleSection,
    pub meta_description: DescriptionSection,
    pub metadata_info: MetadataInfo,
    #[serde(rename = "Page Headings summary")]
    pub headings: HeadingsSection,
    pub word_count: WordCountSection,
    pub links_summary: LinksSection,
    pub images_analysis: ImagesSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputInfo {
    #[serde(rename = "URL")]
    pub url: String,
    /// `"Domain"` or `"URL with path"`
    #[serde(rename = "Input type")]
    pub input_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleSection {
    #[serde(flatten)]
    pub stats: TagStatistics,
    /// Number of `<title>` elements
    #[serde(rename = "tag number")]
    pub tag_number: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionSection {
    #[serde(flatten)]
    pub stats: TagStatistics,
    /// Number of `<meta name="description">` elements
    pub number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingsSection {
    #[serde(rename = "H1")]
    pub h1: usize,
    #[serde(rename = "H2")]
    pub h2: usize,
    #[serde(rename = "H3")]
    pub h3: usize,
    #[serde(rename = "H4")]
    pub h4: usize,
    #[serde(rename = "H5")]
    pub h5: usize,
    #[serde(rename = "H6")]
    pub h6: usize,
    #[serde(rename = "H1 count")]
    pub h1_count: usize,
    #[serde(rename = "H1 Content")]
    pub h1_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCountSection {
    pub total: usize,
    #[serde(rename = "Corrected word count")]
    pub corrected: usize,
    #[serde(rename = "Anchor text words")]
    pub anchor_text_words: usize,
    #[serde(rename = "Anchor Percentage")]
    pub anchor_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinksSection {
    #[serde(rename = "Total links")]
    pub total: usize,
    #[serde(rename = "External links")]
    pub external: usize,
    #[serde(rename = "Internal")]
    pub internal: usize,
    #[serde(rename = "Nofollow count")]
    pub nofollow: usize,
    pub links: Vec<LinkRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagesSection {
    pub summary: ImagesSummarySection,
    pub data: Vec<ImageRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagesSummarySection {
    pub total: usize,
    #[serde(rename = "No src tag")]
    pub no_src: usize,
    #[serde(rename = "No alt tag")]
    pub no_alt: usize,
}

impl ReportAssembly for FullReport {
    const PROFILE: AuditProfile = AuditProfile::FULL;

    fn assemble(
        target: &AuditTarget,
        page: &FetchedPage,
        doc: &ParsedDocument,
    ) -> Result<Self, AuditError> {
        let profile = Self::PROFILE;

        let title = extract_title(doc);
        let description = extract_meta_description(doc);
        let headings = extract_headings(doc);
        let words = extract_word_statistics(doc, profile.word_count)?;
        let links = extract_links(doc, profile.link_rule)?;
        let images = extract_images(doc);

        Ok(FullReport {
            input: InputInfo {
                url: target.input().to_string(),
                input_type: target.input_type(),
            },
            http: HttpInfo::new(page.status, page.final_url.scheme() == "https"),
            title: TitleSection {
                stats: TagStatistics::from_value(title.as_deref()),
                tag_number: count_titles(doc),
            },
            meta_description: DescriptionSection {
                stats: TagStatistics::from_value(description.as_deref()),
                number: count_meta_descriptions(doc),
            },
            metadata_info: extract_metadata_info(doc),
            headings: HeadingsSection {
                h1: headings.count(1),
                h2: headings.count(2),
                h3: headings.count(3),
                h4: headings.count(4),
                h5: headings.count(5),
                h6: headings.count(6),
                h1_count: headings.count(1),
                h1_content: headings.first_h1,
            },
            word_count: WordCountSection {
                total: words.total,
                corrected: words.total,
                anchor_text_words: words.anchor_words,
                anchor_percentage: words.anchor_percentage,
            },
            links_summary: LinksSection {
                total: links.total,
                external: links.external,
                internal: links.internal,
                nofollow: links.nofollow,
                links: links.records,
            },
            images_analysis: ImagesSection {
                summary: ImagesSummarySection {
                    total: images.total,
                    no_src: images.missing_src,
                    no_alt: images.missing_alt,
                },
                data: images.records,
            },
        })
    }
}
