use crate::report::context::ReportContext;
use crate::report::error::ReportError;
use crate::report::tables::{TableRow, render_table};

const HEADER: &[&str] = &[
    "URL",
    "Status_Code",
    "Error_Type",
    "Occurrences",
    "Last_Status",
    "SEO_Impact",
];

/// Status class as far as SEO is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Redirect,
    ClientError,
    ServerError,
    Other,
}

impl ErrorClass {
    pub fn of(status: &str) -> Self {
        match status.as_bytes().first() {
            Some(b'3') => Self::Redirect,
            Some(b'4') => Self::ClientError,
            Some(b'5') => Self::ServerError,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Redirect => "Redirect",
            Self::ClientError => "Client error",
            Self::ServerError => "Server error",
            Self::Other => "Other",
        }
    }

    pub fn impact(self) -> &'static str {
        match self {
            Self::Redirect => "Medium - check redirect chains",
            Self::ClientError => "High - page not found or not authorized",
            Self::ServerError => "Critical - server problem",
            Self::Other => "Check",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorUrlRow<'a> {
    pub url: &'a str,
    pub status: &'a str,
    pub class: ErrorClass,
    pub occurrences: u64,
    /// Status of the URL's last logged request, whatever it was.
    pub last_status: &'a str,
}

/// Grouped by status ascending, then by occurrences descending.
pub fn error_url_rows<'a>(ctx: &ReportContext<'a>) -> Vec<ErrorUrlRow<'a>> {
    let state = ctx.state;
    let mut rows = Vec::new();

    for (status, urls) in state.error_urls() {
        let class = ErrorClass::of(status);
        for (url, occurrences) in urls.most_common(None) {
            let last_status = state
                .status_history(url)
                .last()
                .map_or(status.as_str(), |o| o.status.as_str());

            rows.push(ErrorUrlRow {
                url: url.as_str(),
                status: status.as_str(),
                class,
                occurrences,
                last_status,
            });
        }
    }

    rows
}

impl TableRow for ErrorUrlRow<'_> {
    fn fields(&self) -> Vec<String> {
        vec![
            self.url.to_string(),
            self.status.to_string(),
            self.class.label().to_string(),
            self.occurrences.to_string(),
            self.last_status.to_string(),
            self.class.impact().to_string(),
        ]
    }
}

pub fn render_error_urls(ctx: &ReportContext<'_>) -> Result<String, ReportError> {
    let header: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();
    render_table(&header, &error_url_rows(ctx))
}
