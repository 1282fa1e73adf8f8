use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Fatal faults raised while scraping. Field-level parse problems are
/// recovered in place and never surface here.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    // Out-of-range ordinals mean the site markup moved.
    #[error("schema mismatch: selector {selector:?} matched {found} nodes, wanted index {index}")]
    SchemaMismatch {
        selector: String,
        index: usize,
        found: usize,
    },

    #[error("no details link found for posting {title:?}")]
    MissingDetailLink { title: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_display_names_the_selector() {
        let err = ScrapeError::SchemaMismatch {
            selector: "td".to_string(),
            index: 21,
            found: 9,
        };
        let text = err.to_string();
        assert!(text.contains("\"td\""));
        assert!(text.contains("21"));
        assert!(text.contains("9"));
    }

    #[test]
    fn missing_link_display_names_the_posting() {
        let err = ScrapeError::MissingDetailLink {
            title: "Data Analyst".to_string(),
        };
        assert!(err.to_string().contains("Data Analyst"));
    }
}
