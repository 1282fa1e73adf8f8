use std::error::Error;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::catalog::JobCatalog;
use crate::job::Job;

// Flat CSV row: every stored field plus the derived salary bounds, so the
// export is useful without re-running the salary math in a spreadsheet.
#[derive(Serialize)]
struct ExportRow<'a> {
    title: &'a str,
    department: &'a str,
    app_deadline: &'a str,
    salary_range: &'a str,
    min_salary: String,
    max_salary: String,
    pos_available: u32,
    duties_summary: &'a str,
    req_qualifications: &'a str,
    des_qualifications: &'a str,
    category: &'a str,
    fte: u32,
    full_part: &'a str,
    temp_reg: &'a str,
    start_date: &'a str,
    end_date: &'a str,
    contact_name: &'a str,
    contact_phone: &'a str,
}

impl<'a> From<&'a Job> for ExportRow<'a> {
    fn from(job: &'a Job) -> Self {
        ExportRow {
            title: &job.title,
            department: &job.department,
            app_deadline: &job.app_deadline,
            salary_range: &job.salary_range,
            min_salary: job.min_salary().to_string(),
            max_salary: job.max_salary().to_string(),
            pos_available: job.pos_available,
            duties_summary: &job.duties_summary,
            req_qualifications: &job.req_qualifications,
            des_qualifications: &job.des_qualifications,
            category: &job.category,
            fte: job.fte,
            full_part: &job.full_part,
            temp_reg: &job.temp_reg,
            start_date: &job.start_date,
            end_date: &job.end_date,
            contact_name: &job.contact_name,
            contact_phone: &job.contact_phone,
        }
    }
}

/// Writes the current result set to a CSV file with a header row.
pub fn write_catalog<P: AsRef<Path>>(catalog: &JobCatalog, path: P) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::WriterBuilder::new().from_path(path.as_ref())?;
    for job in catalog.iter() {
        writer.serialize(ExportRow::from(job))?;
    }
    writer.flush()?;
    info!(
        "Exported {} jobs to {}",
        catalog.len(),
        path.as_ref().display()
    );
    Ok(())
}
