use crate::job::{Job, Salary};

// Positions of month, day, and year within a `MM/DD/YYYY` split.
const MONTH_INDEX: usize = 0;
const DAY_INDEX: usize = 1;
const YEAR_INDEX: usize = 2;

/// Field to order the catalog by. Each key carries its documented
/// direction: salaries and open positions rank highest-first, dates and
/// text rank ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    MinSalary,
    MaxSalary,
    Deadline,
    StartDate,
    EndDate,
    PositionsAvailable,
    FullPart,
    TempReg,
}

/// The current search session's records. Single owner, single writer; a
/// new search replaces the whole collection.
#[derive(Debug, Default)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn new() -> Self {
        JobCatalog { jobs: Vec::new() }
    }

    /// Clear-then-refill for a new search session; nothing from the prior
    /// keyword survives.
    pub fn replace(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Stable in-place sort: records with equal keys keep their previous
    /// relative order.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::MinSalary => self.jobs.sort_by(|a, b| {
                b.min_salary()
                    .sort_value()
                    .total_cmp(&a.min_salary().sort_value())
            }),
            SortKey::MaxSalary => self.jobs.sort_by(|a, b| {
                b.max_salary()
                    .sort_value()
                    .total_cmp(&a.max_salary().sort_value())
            }),
            SortKey::Deadline => self.jobs.sort_by_key(|j| year_first(&j.app_deadline)),
            SortKey::StartDate => self.jobs.sort_by_key(|j| year_first(&j.start_date)),
            SortKey::EndDate => self.jobs.sort_by_key(|j| year_first(&j.end_date)),
            SortKey::PositionsAvailable => {
                self.jobs.sort_by(|a, b| b.pos_available.cmp(&a.pos_available))
            }
            SortKey::FullPart => self.jobs.sort_by(|a, b| a.full_part.cmp(&b.full_part)),
            SortKey::TempReg => self.jobs.sort_by(|a, b| a.temp_reg.cmp(&b.temp_reg)),
        }
    }

    /// Case-insensitive exact title match. When several postings share a
    /// title, the latest one in catalog order wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Job> {
        self.jobs
            .iter()
            .filter(|job| job.title.eq_ignore_ascii_case(title))
            .last()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.jobs
            .iter()
            .any(|job| job.title.eq_ignore_ascii_case(title))
    }

    /// Pairs two records for side-by-side display; `None` when either
    /// title is absent.
    pub fn compare(&self, title_a: &str, title_b: &str) -> Option<Comparison<'_>> {
        Some(Comparison {
            left: self.find_by_title(title_a)?,
            right: self.find_by_title(title_b)?,
        })
    }
}

/// Two records paired field by field, covering every stored field plus the
/// derived salary bounds.
pub struct Comparison<'a> {
    pub left: &'a Job,
    pub right: &'a Job,
}

impl Comparison<'_> {
    pub fn rows(&self) -> Vec<(&'static str, String, String)> {
        let pair = |f: fn(&Job) -> String| (f(self.left), f(self.right));
        let mut rows = Vec::new();
        let mut push = |label, (l, r): (String, String)| rows.push((label, l, r));

        push("Title", pair(|j| j.title.clone()));
        push("Department", pair(|j| j.department.clone()));
        push("Application Deadline", pair(|j| j.app_deadline.clone()));
        push("Salary Range", pair(|j| j.salary_range.clone()));
        push("Minimum Salary", pair(|j| j.min_salary().to_string()));
        push("Maximum Salary", pair(|j| j.max_salary().to_string()));
        push("Positions Available", pair(|j| j.pos_available.to_string()));
        push("Duties Summary", pair(|j| j.duties_summary.clone()));
        push("Required Qualifications", pair(|j| j.req_qualifications.clone()));
        push("Desired Qualifications", pair(|j| j.des_qualifications.clone()));
        push("Job Category", pair(|j| j.category.clone()));
        push("Job Appointment (FTE)", pair(|j| j.fte.to_string()));
        push("Full/Part Time", pair(|j| j.full_part.clone()));
        push("Temporary or Regular", pair(|j| j.temp_reg.clone()));
        push("Posting Start Date", pair(|j| j.start_date.clone()));
        push("Posting End Date", pair(|j| j.end_date.clone()));
        push("Department Contact Name", pair(|j| j.contact_name.clone()));
        push("Department Contact Phone", pair(|j| j.contact_phone.clone()));
        rows
    }
}

/// Reorders `MM/DD/YYYY` to `YYYYMMDD` so plain string comparison sorts
/// chronologically. Pure; the original string is never modified. Anything
/// not shaped like a date comes back unchanged.
pub fn year_first(date: &str) -> String {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return date.to_string();
    }
    format!("{}{}{}", parts[YEAR_INDEX], parts[MONTH_INDEX], parts[DAY_INDEX])
}
