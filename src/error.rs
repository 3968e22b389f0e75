use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read input: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("could not parse calorie count {text:?} on line {line}")]
    Parse { line: usize, text: String },

    #[error("calorie total overflowed on line {line}")]
    Overflow { line: usize },

    #[error("sum of the largest calorie totals overflowed")]
    TotalOverflow,
}

impl Error {
    /// Process exit code: 1 when the input couldn't be read, 2 when its contents were bad.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Open { .. } | Error::Read { .. } => 1,
            Error::Parse { .. } | Error::Overflow { .. } | Error::TotalOverflow => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
