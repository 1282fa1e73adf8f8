//! Terminal output for the interactive session. Pure rendering: nothing in
//! here derives business values beyond calling the record's own methods.

use crate::catalog::{Comparison, SortKey};
use crate::job::{Job, Salary};

const COMPARE_COL: usize = 35;
const RULE: &str =
    "---------------------------------------------------------------------------------";

pub fn keyword_prompt() {
    println!("\nEnter a keyword to search for a job (Type 'quit' to exit the program): ");
}

pub fn display_menu() {
    println!("{RULE}");
    println!("\nChoose an option below by entering its corresponding number or type the name of a job to get more details about it: ");
    println!("1. Sort the jobs by minimum salary");
    println!("2. Sort the jobs by maximum salary");
    println!("3. Sort the jobs by upcoming application deadline");
    println!("4. Sort the jobs by posting start date");
    println!("5. Sort the jobs by posting end date");
    println!("6. Sort the jobs by positions available");
    println!("7. Print the job full time/ part time information");
    println!("8. Print the job temporary/regular information");
    println!("9. Compare two jobs by typing the first job, and then second job");
    println!("10. To enter a new keyword to search for a new list of jobs");
    println!("Type 'save' to export the current results to a CSV file.");
    println!("Type 'quit' to end the program.");
}

pub fn no_results() {
    println!("0 results found. ");
}

pub fn invalid_input() {
    println!("That is not a valid input. ");
}

pub fn number_of_results(count: usize) {
    println!("\n{count} results found.\n");
}

pub fn header_all_results() {
    println!("{:<40}{:<40}{:<16}", "Title", "Salary Range", "App. Deadline");
}

pub fn all_results(job: &Job) {
    println!(
        "{:<40}{:<40}{:<16}",
        job.title, job.salary_range, job.app_deadline
    );
}

/// One row of a sorted listing: the title plus the sorted-by value.
pub fn titled_row(title: &str, value: &str) {
    println!("{title:<50}{value:<24}");
}

/// The display value a sorted listing shows next to each title.
pub fn sort_column(key: SortKey, job: &Job) -> String {
    match key {
        SortKey::MinSalary => format_money(&job.min_salary()),
        SortKey::MaxSalary => format_money(&job.max_salary()),
        SortKey::Deadline => job.app_deadline.clone(),
        SortKey::StartDate => job.start_date.clone(),
        SortKey::EndDate => job.end_date.clone(),
        SortKey::PositionsAvailable => job.pos_available.to_string(),
        SortKey::FullPart => job.full_part.clone(),
        SortKey::TempReg => job.temp_reg.clone(),
    }
}

pub fn print_details(job: &Job) {
    println!("{RULE}");
    println!("\nTitle: {}", job.title);
    println!("Department: {}", job.department);
    println!("Application Deadline: {}", job.app_deadline);
    println!("Salary Range: {}", job.salary_range);
    println!("Positions Available: {}", job.pos_available);
    println!("Job Category: {}", job.category);
    println!("Job Appointment (FTE): {}", job.fte);
    println!("Full/Part Time: {}", job.full_part);
    println!("Temporary or Regular: {}", job.temp_reg);
    println!("Posting Start Date: {}", job.start_date);
    println!("Posting End Date: {}", job.end_date);
    println!("Department Contact Name: {}", job.contact_name);
    println!("Department Contact Phone: {}", job.contact_phone);
    println!("\nSummary:\n {}", job.duties_summary);
    println!("\nRequired Qualifications:\n {}", job.req_qualifications);
    println!("\nDesired Qualifications:\n {}", job.des_qualifications);
}

pub fn comparing(comparison: &Comparison) {
    println!("{RULE}");
    println!();
    for (label, left, right) in comparison.rows() {
        println!(
            "{:<w$}{:<w$}{:<w$}",
            format!("{label}:"),
            clip(&left, COMPARE_COL - 1),
            clip(&right, COMPARE_COL - 1),
            w = COMPARE_COL
        );
    }
}

pub fn comparator_prompt_first_job() {
    println!("Type the name of the first job you want to compare: ");
}

pub fn comparator_prompt_second_job() {
    println!("Type the name of the second job you want to compare: ");
}

pub fn saved(count: usize, path: &str) {
    println!("Saved {count} results to {path}. ");
}

/// `$` plus thousands separators and two decimals; the sentinel passes
/// through untouched.
pub fn format_money(salary: &Salary) -> String {
    match salary {
        Salary::Negotiable => salary.to_string(),
        Salary::Annual(amount) => format!("${}", group_thousands(*amount)),
    }
}

fn group_thousands(amount: f64) -> String {
    let formatted = format!("{amount:.2}");
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::new();
    let digits = whole.len();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{grouped}.{fraction}")
}

// Keeps long free-text fields from wrecking the comparison columns.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}
