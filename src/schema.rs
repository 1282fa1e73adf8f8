//! Declarative description of the job board's markup.
//!
//! The board carries no semantic markup: within a selector's match list,
//! field identity is determined purely by ordinal position. Every selector
//! and offset lives in this one table so a markup change on the site is a
//! one-line edit here instead of a hunt for scattered literals.

/// Ordinal positions of the basic fields within one posting fragment's
/// info-cell match list.
#[derive(Debug, Clone, Copy)]
pub struct BasicOffsets {
    pub title: usize,
    pub department: usize,
    pub deadline: usize,
    pub salary: usize,
}

impl Default for BasicOffsets {
    fn default() -> Self {
        BasicOffsets {
            title: 0,
            department: 1,
            deadline: 2,
            salary: 4,
        }
    }
}

/// Ordinal positions of the detailed fields within the flat table-cell
/// match list of a detail document.
#[derive(Debug, Clone, Copy)]
pub struct DetailOffsets {
    pub pos_available: usize,
    pub duties_summary: usize,
    pub req_qualifications: usize,
    pub des_qualifications: usize,
    pub category: usize,
    pub fte: usize,
    pub full_part: usize,
    pub temp_reg: usize,
    pub start_date: usize,
    pub end_date: usize,
    pub contact_name: usize,
    pub contact_phone: usize,
}

impl Default for DetailOffsets {
    fn default() -> Self {
        DetailOffsets {
            pos_available: 2,
            duties_summary: 8,
            req_qualifications: 11,
            des_qualifications: 12,
            category: 14,
            fte: 15,
            full_part: 16,
            temp_reg: 17,
            start_date: 18,
            end_date: 19,
            contact_name: 20,
            contact_phone: 21,
        }
    }
}

/// Everything the extraction engine needs to know about the site, passed in
/// at construction.
#[derive(Debug, Clone)]
pub struct SiteSchema {
    pub base_url: String,
    /// Path of the keyword search endpoint, relative to `base_url`.
    pub search_path: String,
    /// One match per posting on a listing page.
    pub posting_selector: String,
    /// Basic-field cells inside a posting fragment, read by `BasicOffsets`.
    pub info_selector: String,
    /// Anchor leading from a fragment to its detail document.
    pub action_selector: String,
    /// Detail-document cells, read by `DetailOffsets`.
    pub detail_selector: String,
    pub basic_offsets: BasicOffsets,
    pub detail_offsets: DetailOffsets,
    /// Listing pages return at most this many postings; a full page means
    /// there may be more.
    pub page_size: usize,
}

impl Default for SiteSchema {
    fn default() -> Self {
        SiteSchema {
            base_url: "https://www.jobsatosu.com".to_string(),
            search_path: "/postings/search".to_string(),
            posting_selector: "#search_results > div".to_string(),
            info_selector: ".col-md-push-0".to_string(),
            action_selector: "a[href^='/postings']".to_string(),
            detail_selector: "td".to_string(),
            basic_offsets: BasicOffsets::default(),
            detail_offsets: DetailOffsets::default(),
            page_size: 30,
        }
    }
}
