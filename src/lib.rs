//! seo_audit library: on-page SEO audit of a single web page
//!
//! Fetches one page, parses its HTML, and reports metadata completeness,
//! heading structure, word and anchor-text statistics, link classification,
//! and image attribute coverage. Two report shapes are available: a compact
//! basic report and a full report with per-tag statistics and raw lists.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{Auditor, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let auditor = Auditor::new(&Config::default())?;
//! let report = auditor.full("https://example.com/blog/").await;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod audit;
pub mod config;
mod error_handling;
pub mod extract;
mod fetch;
pub mod initialization;
pub mod parse;
mod utils;

// Re-export public API
pub use audit::{
    basic_audit, full_audit, AuditProfile, AuditReport, AuditTarget, Auditor, BaseUrl,
    BasicMetadata, BasicReport, ContentSummary, DescriptionSection, FullReport, Granularity,
    HeadingsSection, HttpInfo, ImageCounts, ImagesSection, ImagesSummarySection, InputInfo,
    LinkCounts, LinksSection, ReportAssembly, TitleSection, WordCountSection,
};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AuditError, InitializationError};
pub use fetch::{ContentFetcher, FetchedPage};
