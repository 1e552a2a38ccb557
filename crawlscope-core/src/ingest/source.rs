use crate::error::AnalyzeError;
use glob::glob;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

pub const STDIN_MARKER: &str = "-";

/// Where log lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>, AnalyzeError> {
        match self {
            Source::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Source::File(path) => {
                let file = File::open(path).map_err(|e| AnalyzeError::unreadable(path, e))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Turn command line inputs into sources, keeping their order.
///
/// `-` is stdin. Inputs containing glob characters expand to the matching
/// files, sorted; a pattern that matches nothing is an error. Anything
/// else is taken as a file path and checked when it is opened.
pub fn resolve_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Source>, AnalyzeError> {
    let mut sources = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();

        if input == STDIN_MARKER {
            sources.push(Source::Stdin);
            continue;
        }

        if !is_pattern(input) {
            sources.push(Source::File(PathBuf::from(input)));
            continue;
        }

        let mut paths: Vec<_> = glob(input)
            .map_err(|e| AnalyzeError::Pattern {
                pattern: input.to_string(),
                source: e,
            })?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();

        if paths.is_empty() {
            return Err(AnalyzeError::NoMatch {
                pattern: input.to_string(),
            });
        }

        paths.sort();
        sources.extend(paths.into_iter().map(Source::File));
    }

    Ok(sources)
}
