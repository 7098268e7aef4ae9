//! Audit aggregator.
//!
//! Runs one audit end to end: validate the target, fetch the page, parse it,
//! run the extractors for the requested report shape, and assemble the result.
//! The whole call sits behind a single failure boundary: any fetch or
//! extraction failure replaces the report with `{"error": "..."}`.
//!
//! Two entry points exist, [`Auditor::basic`] and [`Auditor::full`]. They share
//! the same pipeline and differ only in their [`AuditProfile`].

mod basic;
mod full;
mod profile;
mod report;
mod target;

use log::{debug, error, info};

use crate::config::Config;
use crate::error_handling::{AuditError, InitializationError};
use crate::fetch::{ContentFetcher, FetchedPage};
use crate::parse::ParsedDocument;

// Re-export public API
pub use basic::{BasicMetadata, BasicReport, ContentSummary, ImageCounts, LinkCounts};
pub use full::{
    DescriptionSection, FullReport, HeadingsSection, ImagesSection, ImagesSummarySection,
    InputInfo, LinksSection, TitleSection, WordCountSection,
};
pub use profile::{AuditProfile, BaseUrl, Granularity, ReportAssembly};
pub use report::{AuditReport, HttpInfo};
pub use target::AuditTarget;

/// Runs audits with a reusable fetcher.
///
/// Holds no per-audit state, so one `Auditor` can serve concurrent audits of
/// different URLs.
#[derive(Debug, Clone)]
pub struct Auditor {
    fetcher: ContentFetcher,
}

impl Auditor {
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::with_fetcher(ContentFetcher::new(config)?))
    }

    pub fn with_fetcher(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }

    /// Compact report: title/description, H1-H3 counts, word count, hostname
    /// based link counts, and image alt coverage.
    pub async fn basic(&self, url: &str) -> AuditReport<BasicReport> {
        self.run(url).await
    }

    /// Full report: every extractor, raw link and image lists, hreflang entries.
    pub async fn full(&self, url: &str) -> AuditReport<FullReport> {
        self.run(url).await
    }

    /// Runs the pipeline for report shape `R`.
    pub async fn run<R: ReportAssembly>(&self, url: &str) -> AuditReport<R> {
        let granularity = R::PROFILE.granularity;
        info!("Starting {granularity} audit for {url}");

        let result = self.audit::<R>(url).await;
        match &result {
            Ok(_) => info!("Finished {granularity} audit for {url}"),
            Err(AuditError::FetchFailed) => {
                info!("Aborted {granularity} audit for {url}: page could not be fetched")
            }
            Err(e) => error!("Error during {granularity} audit for {url}: {e}"),
        }
        AuditReport::from(result)
    }

    async fn audit<R: ReportAssembly>(&self, url: &str) -> Result<R, AuditError> {
        let target = AuditTarget::parse(url).ok_or(AuditError::FetchFailed)?;
        let page = self
            .fetcher
            .fetch(target.url())
            .await
            .ok_or(AuditError::FetchFailed)?;
        assemble_page(&target, &page)
    }
}

/// Parses a fetched page against the profile's base URL and assembles `R`.
///
/// Kept synchronous so the parsed tree never lives across an `.await`.
pub(crate) fn assemble_page<R: ReportAssembly>(
    target: &AuditTarget,
    page: &FetchedPage,
) -> Result<R, AuditError> {
    let base_url = match R::PROFILE.base_url {
        BaseUrl::Requested => target.url().clone(),
        BaseUrl::Final => page.final_url.clone(),
    };
    debug!("Parsing {} bytes with base URL {base_url}", page.body.len());

    let doc = ParsedDocument::parse(&page.body, base_url);
    R::assemble(target, page, &doc)
}

/// Runs a basic audit with a freshly built default [`Auditor`].
///
/// # Example
///
/// ```no_run
/// # async fn example() {
/// let report = seo_audit::basic_audit("https://example.com").await;
/// if let Some(error) = report.error() {
///     eprintln!("audit failed: {error}");
/// }
/// # }
/// ```
pub async fn basic_audit(url: &str) -> AuditReport<BasicReport> {
    match Auditor::new(&Config::default()) {
        Ok(auditor) => auditor.basic(url).await,
        Err(e) => AuditReport::Failed {
            error: e.to_string(),
        },
    }
}

/// Runs a full audit with a freshly built default [`Auditor`].
pub async fn full_audit(url: &str) -> AuditReport<FullReport> {
    match Auditor::new(&Config::default()) {
        Ok(auditor) => auditor.full(url).await,
        Err(e) => AuditReport::Failed {
            error: e.to_string(),
        },
    }
}
