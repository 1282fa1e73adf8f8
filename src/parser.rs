use log::{info, warn};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::fetch::PageFetcher;
use crate::job::Job;
use crate::schema::SiteSchema;

const STARTING_PAGE_NUMBER: u32 = 1;

/// Extraction and pagination engine. Walks keyword search results page by
/// page, fetches each posting's detail document, and populates [`Job`]
/// records through the positional schema.
pub struct JobsParser<F: PageFetcher> {
    fetcher: F,
    schema: SiteSchema,
    posting_sel: Selector,
    info_sel: Selector,
    action_sel: Selector,
    detail_sel: Selector,
    base: Url,
}

impl<F: PageFetcher> JobsParser<F> {
    /// Panics on a malformed schema; the schema is construction-time
    /// configuration, not runtime input.
    pub fn new(fetcher: F, schema: SiteSchema) -> Self {
        let posting_sel =
            Selector::parse(&schema.posting_selector).expect("invalid posting selector");
        let info_sel = Selector::parse(&schema.info_selector).expect("invalid info selector");
        let action_sel = Selector::parse(&schema.action_selector).expect("invalid action selector");
        let detail_sel = Selector::parse(&schema.detail_selector).expect("invalid detail selector");
        let base = Url::parse(&schema.base_url).expect("invalid base url");

        JobsParser {
            fetcher,
            schema,
            posting_sel,
            info_sel,
            action_sel,
            detail_sel,
            base,
        }
    }

    /// Fetches every result page for `keyword` and returns the fully
    /// populated records in listing order. Any fetch failure or markup
    /// shape mismatch aborts the whole search.
    pub fn search(&self, keyword: &str) -> Result<Vec<Job>> {
        let mut jobs = Vec::new();
        let mut page = STARTING_PAGE_NUMBER;
        loop {
            let url = self.search_url(keyword, page);
            info!("Fetching listing page {}: {}", page, url);
            let document = self.fetcher.fetch(&url)?;

            let fragments: Vec<ElementRef> = document.select(&self.posting_sel).collect();
            let count = fragments.len();
            for fragment in fragments {
                jobs.push(self.fill_job_fields(fragment)?);
            }

            // A short page (possibly empty) is the last one. A full page
            // may be the last too, which costs one extra empty fetch when
            // the total is an exact multiple of the page size.
            if count < self.schema.page_size {
                break;
            }
            page += 1;
        }
        info!("Search for {:?} returned {} jobs", keyword, jobs.len());
        Ok(jobs)
    }

    fn search_url(&self, keyword: &str, page: u32) -> String {
        let mut url = format!(
            "{}{}?query={}&commit=Search",
            self.schema.base_url,
            self.schema.search_path,
            urlencoding::encode(keyword)
        );
        if page > STARTING_PAGE_NUMBER {
            url.push_str(&format!("&page={page}"));
        }
        url
    }

    // Two-pass population: basic fields from the listing fragment, the
    // rest from the detail document behind the fragment's action link.
    fn fill_job_fields(&self, fragment: ElementRef) -> Result<Job> {
        let mut job = Job::default();
        self.basic_fields(fragment, &mut job)?;

        let detail_url = self.detail_url(fragment, &job)?;
        info!("Fetching details: {}", detail_url);
        let detail = self.fetcher.fetch(detail_url.as_str())?;
        self.detailed_fields(&detail, &mut job)?;
        Ok(job)
    }

    fn basic_fields(&self, fragment: ElementRef, job: &mut Job) -> Result<()> {
        let cells: Vec<String> = fragment.select(&self.info_sel).map(cell_text).collect();
        let offsets = &self.schema.basic_offsets;
        let selector = &self.schema.info_selector;

        job.title = positional(&cells, offsets.title, selector)?.to_string();
        job.department = positional(&cells, offsets.department, selector)?.to_string();
        job.app_deadline = positional(&cells, offsets.deadline, selector)?.to_string();
        job.salary_range = positional(&cells, offsets.salary, selector)?.to_string();
        Ok(())
    }

    fn detailed_fields(&self, detail: &Html, job: &mut Job) -> Result<()> {
        let cells: Vec<String> = detail.select(&self.detail_sel).map(cell_text).collect();
        let offsets = &self.schema.detail_offsets;
        let selector = &self.schema.detail_selector;

        job.pos_available = numeric_cell(
            positional(&cells, offsets.pos_available, selector)?,
            "positions available",
        );
        job.duties_summary = positional(&cells, offsets.duties_summary, selector)?.to_string();
        job.req_qualifications =
            positional(&cells, offsets.req_qualifications, selector)?.to_string();
        job.des_qualifications =
            positional(&cells, offsets.des_qualifications, selector)?.to_string();
        job.category = positional(&cells, offsets.category, selector)?.to_string();
        job.fte = numeric_cell(positional(&cells, offsets.fte, selector)?, "FTE");
        job.full_part = positional(&cells, offsets.full_part, selector)?.to_string();
        job.temp_reg = positional(&cells, offsets.temp_reg, selector)?.to_string();
        job.start_date = positional(&cells, offsets.start_date, selector)?.to_string();
        job.end_date = positional(&cells, offsets.end_date, selector)?.to_string();
        job.contact_name = positional(&cells, offsets.contact_name, selector)?.to_string();
        job.contact_phone = positional(&cells, offsets.contact_phone, selector)?.to_string();
        Ok(())
    }

    fn detail_url(&self, fragment: ElementRef, job: &Job) -> Result<Url> {
        let anchor = fragment
            .select(&self.action_sel)
            .next()
            .ok_or_else(|| ScrapeError::MissingDetailLink {
                title: job.title.clone(),
            })?;
        let href = anchor
            .value()
            .attr("href")
            .ok_or_else(|| ScrapeError::MissingDetailLink {
                title: job.title.clone(),
            })?;
        Ok(self.base.join(href)?)
    }
}

// The one place field identity meets ordinal position. An out-of-range
// index is a schema mismatch, not a missing value.
fn positional<'a>(cells: &'a [String], index: usize, selector: &str) -> Result<&'a str> {
    cells
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| ScrapeError::SchemaMismatch {
            selector: selector.to_string(),
            index,
            found: cells.len(),
        })
}

fn cell_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

// Leading digits, like "3" in "3 openings". Non-numeric cells degrade to
// zero instead of failing the extraction.
fn numeric_cell(text: &str, field: &str) -> u32 {
    let trimmed = text.trim();
    let digits: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse() {
        Ok(n) => n,
        Err(_) => {
            if !trimmed.is_empty() {
                warn!("Non-numeric {field} value {trimmed:?}, defaulting to 0");
            }
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TEST_BASE: &str = "https://jobs.example.test";

    struct FakeFetcher {
        pages: HashMap<String, String>,
    }

    impl PageFetcher for FakeFetcher {
        fn fetch(&self, url: &str) -> Result<Html> {
            let body = self
                .pages
                .get(url)
                .unwrap_or_else(|| panic!("unexpected fetch: {url}"));
            Ok(Html::parse_document(body))
        }
    }

    struct FailingFetcher;

    impl PageFetcher for FailingFetcher {
        fn fetch(&self, url: &str) -> Result<Html> {
            Err(ScrapeError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }

    fn test_schema() -> SiteSchema {
        SiteSchema {
            base_url: TEST_BASE.to_string(),
            ..SiteSchema::default()
        }
    }

    fn search_url(keyword: &str, page: u32) -> String {
        let mut url = format!("{TEST_BASE}/postings/search?query={keyword}&commit=Search");
        if page > 1 {
            url.push_str(&format!("&page={page}"));
        }
        url
    }

    fn fragment_html(id: usize, title: &str) -> String {
        format!(
            "<div>\
               <span class=\"col-md-push-0\">{title}</span>\
               <span class=\"col-md-push-0\">Statistics</span>\
               <span class=\"col-md-push-0\">03/15/2024</span>\
               <span class=\"col-md-push-0\">Columbus Campus</span>\
               <span class=\"col-md-push-0\">$20.00 - $25.00 hourly</span>\
               <a href=\"/postings/{id}\">View details</a>\
             </div>"
        )
    }

    fn listing_html(fragments: &str) -> String {
        format!("<html><body><div id=\"search_results\">{fragments}</div></body></html>")
    }

    fn detail_html(pos_available: &str, fte: &str) -> String {
        let mut cells: Vec<String> = (0..22).map(|i| format!("filler {i}")).collect();
        cells[2] = pos_available.to_string();
        cells[8] = "Collect and analyze data".to_string();
        cells[11] = "Bachelor's degree".to_string();
        cells[12] = "Master's degree".to_string();
        cells[14] = "Research".to_string();
        cells[15] = fte.to_string();
        cells[16] = "Full-Time".to_string();
        cells[17] = "Regular".to_string();
        cells[18] = "02/01/2024".to_string();
        cells[19] = "03/15/2024".to_string();
        cells[20] = "Pat Doe".to_string();
        cells[21] = "614-555-0100".to_string();
        let tds: String = cells.into_iter().map(|c| format!("<td>{c}</td>")).collect();
        format!("<html><body><table><tr>{tds}</tr></table></body></html>")
    }

    // Builds a consistent fake site for `count` postings under `keyword`,
    // chunked into 30-per-page listings like the real board.
    fn fake_site(keyword: &str, count: usize) -> FakeFetcher {
        let mut pages = HashMap::new();
        let ids: Vec<usize> = (0..count).collect();
        let mut page = 1;
        for chunk in ids.chunks(30) {
            let fragments: String = chunk
                .iter()
                .map(|id| fragment_html(*id, &format!("Job {id}")))
                .collect();
            pages.insert(search_url(keyword, page), listing_html(&fragments));
            page += 1;
        }
        if count % 30 == 0 {
            // exact multiple: the engine asks for one page past the end
            pages.insert(search_url(keyword, page), listing_html(""));
        }
        for id in ids {
            pages.insert(
                format!("{TEST_BASE}/postings/{id}"),
                detail_html("1", "1"),
            );
        }
        FakeFetcher { pages }
    }

    #[test]
    fn search_populates_records_in_two_passes() {
        let parser = JobsParser::new(fake_site("analyst", 1), test_schema());
        let jobs = parser.search("analyst").unwrap();
        assert_eq!(jobs.len(), 1);

        let job = &jobs[0];
        assert_eq!(job.title, "Job 0");
        assert_eq!(job.department, "Statistics");
        assert_eq!(job.app_deadline, "03/15/2024");
        assert_eq!(job.salary_range, "$20.00 - $25.00 hourly");
        assert_eq!(job.pos_available, 1);
        assert_eq!(job.duties_summary, "Collect and analyze data");
        assert_eq!(job.req_qualifications, "Bachelor's degree");
        assert_eq!(job.des_qualifications, "Master's degree");
        assert_eq!(job.category, "Research");
        assert_eq!(job.fte, 1);
        assert_eq!(job.full_part, "Full-Time");
        assert_eq!(job.temp_reg, "Regular");
        assert_eq!(job.start_date, "02/01/2024");
        assert_eq!(job.end_date, "03/15/2024");
        assert_eq!(job.contact_name, "Pat Doe");
        assert_eq!(job.contact_phone, "614-555-0100");
    }

    #[test]
    fn pagination_terminates_around_the_page_size_boundary() {
        for count in [29, 30, 31] {
            let parser = JobsParser::new(fake_site("eng", count), test_schema());
            let jobs = parser.search("eng").unwrap();
            assert_eq!(jobs.len(), count, "total {count}");
            // listing order is preserved across pages
            assert_eq!(jobs[0].title, "Job 0");
            assert_eq!(jobs[count - 1].title, format!("Job {}", count - 1));
        }
    }

    #[test]
    fn empty_result_page_yields_no_jobs() {
        let parser = JobsParser::new(fake_site("nomatch", 0), test_schema());
        assert!(parser.search("nomatch").unwrap().is_empty());
    }

    #[test]
    fn keyword_is_percent_encoded_in_the_query() {
        let mut pages = HashMap::new();
        pages.insert(search_url("data%20analyst", 1), listing_html(""));
        let parser = JobsParser::new(FakeFetcher { pages }, test_schema());
        // panics inside the fake on any other URL
        assert!(parser.search("data analyst").unwrap().is_empty());
    }

    #[test]
    fn truncated_fragment_is_a_schema_mismatch() {
        let fragment = "<div>\
             <span class=\"col-md-push-0\">Lone Job</span>\
             <span class=\"col-md-push-0\">Statistics</span>\
             <span class=\"col-md-push-0\">03/15/2024</span>\
             <a href=\"/postings/1\">View details</a>\
           </div>";
        let mut pages = HashMap::new();
        pages.insert(search_url("x", 1), listing_html(fragment));
        let parser = JobsParser::new(FakeFetcher { pages }, test_schema());

        match parser.search("x") {
            Err(ScrapeError::SchemaMismatch {
                selector,
                index,
                found,
            }) => {
                assert_eq!(selector, ".col-md-push-0");
                assert_eq!(index, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }

    #[test]
    fn fragment_without_action_link_is_fatal() {
        let fragment = "<div>\
             <span class=\"col-md-push-0\">Linkless Job</span>\
             <span class=\"col-md-push-0\">Statistics</span>\
             <span class=\"col-md-push-0\">03/15/2024</span>\
             <span class=\"col-md-push-0\">Columbus Campus</span>\
             <span class=\"col-md-push-0\">$20.00 hourly</span>\
           </div>";
        let mut pages = HashMap::new();
        pages.insert(search_url("x", 1), listing_html(fragment));
        let parser = JobsParser::new(FakeFetcher { pages }, test_schema());

        match parser.search("x") {
            Err(ScrapeError::MissingDetailLink { title }) => assert_eq!(title, "Linkless Job"),
            other => panic!("expected missing link, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cells_default_to_zero() {
        let mut pages = HashMap::new();
        pages.insert(search_url("x", 1), listing_html(&fragment_html(7, "Job 7")));
        pages.insert(
            format!("{TEST_BASE}/postings/7"),
            detail_html("TBD", ""),
        );
        let parser = JobsParser::new(FakeFetcher { pages }, test_schema());

        let jobs = parser.search("x").unwrap();
        assert_eq!(jobs[0].pos_available, 0);
        assert_eq!(jobs[0].fte, 0);
    }

    #[test]
    fn numeric_cell_reads_leading_digits() {
        assert_eq!(numeric_cell("3 openings", "positions available"), 3);
        assert_eq!(numeric_cell(" 12 ", "FTE"), 12);
        assert_eq!(numeric_cell("", "FTE"), 0);
    }

    #[test]
    fn fetch_failure_aborts_the_search() {
        let parser = JobsParser::new(FailingFetcher, test_schema());
        match parser.search("anything") {
            Err(ScrapeError::Status { status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
