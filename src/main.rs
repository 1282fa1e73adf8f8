use std::error::Error;
use std::io::{self, BufRead};

use chrono::Local;
use log::{error, info};

use jobs_scraper_lib::menu::{self, MenuChoice};
use jobs_scraper_lib::{export, logger, view};
use jobs_scraper_lib::{HttpFetcher, JobCatalog, JobsParser, SiteSchema};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    info!("Starting jobs scraper...");

    let parser = JobsParser::new(HttpFetcher::new(), SiteSchema::default());
    let mut catalog = JobCatalog::new();
    let stdin = io::stdin();

    loop {
        view::keyword_prompt();
        let Some(keyword) = read_line(&stdin)? else { break };
        if keyword == "quit" {
            break;
        }

        let jobs = match parser.search(&keyword) {
            Ok(jobs) => jobs,
            Err(e) => {
                // A fetch failure or markup mismatch aborts this search;
                // the session itself survives.
                error!("Search for {:?} failed: {}", keyword, e);
                continue;
            }
        };
        if jobs.is_empty() {
            view::no_results();
            continue;
        }

        catalog.replace(jobs);
        view::number_of_results(catalog.len());
        view::header_all_results();
        for job in catalog.iter() {
            view::all_results(job);
        }

        let mut in_menu = true;
        while in_menu {
            view::display_menu();
            let Some(input) = read_line(&stdin)? else {
                return Ok(());
            };
            match menu::parse(&input) {
                MenuChoice::Sort(key) => {
                    catalog.sort_by(key);
                    for job in catalog.iter() {
                        view::titled_row(&job.title, &view::sort_column(key, job));
                    }
                }
                MenuChoice::Compare => {
                    if !compare_two(&stdin, &catalog)? {
                        return Ok(());
                    }
                }
                MenuChoice::Save => {
                    let filename = format!("jobs_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
                    match export::write_catalog(&catalog, &filename) {
                        Ok(()) => view::saved(catalog.len(), &filename),
                        Err(e) => error!("Failed to export results: {e}"),
                    }
                }
                MenuChoice::NewSearch => in_menu = false,
                MenuChoice::Quit => return Ok(()),
                MenuChoice::Lookup(title) => match catalog.find_by_title(&title) {
                    Some(job) => view::print_details(job),
                    None => view::invalid_input(),
                },
            }
        }
    }

    Ok(())
}

// Prompts for two titles present in the catalog and prints the comparison.
// Returns false when stdin is exhausted mid-prompt.
fn compare_two(stdin: &io::Stdin, catalog: &JobCatalog) -> io::Result<bool> {
    let Some(first) = prompt_valid_title(stdin, catalog, true)? else {
        return Ok(false);
    };
    let Some(second) = prompt_valid_title(stdin, catalog, false)? else {
        return Ok(false);
    };
    if let Some(comparison) = catalog.compare(&first, &second) {
        view::comparing(&comparison);
    }
    Ok(true)
}

fn prompt_valid_title(
    stdin: &io::Stdin,
    catalog: &JobCatalog,
    first: bool,
) -> io::Result<Option<String>> {
    loop {
        if first {
            view::comparator_prompt_first_job();
        } else {
            view::comparator_prompt_second_job();
        }
        let Some(input) = read_line(stdin)? else {
            return Ok(None);
        };
        if catalog.contains_title(&input) {
            return Ok(Some(input));
        }
        view::invalid_input();
    }
}

fn read_line(stdin: &io::Stdin) -> io::Result<Option<String>> {
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
