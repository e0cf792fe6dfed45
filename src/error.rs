use std::error::Error as StdError;
use std::fmt;

/// Errors raised while loading the dataset or fitting the classifier.
///
/// All of these are startup-time failures; the process never reaches a
/// serving state once one occurs.
#[derive(Debug)]
pub enum Error {
    /// The CSV could not be read or parsed.
    Csv(csv::Error),
    /// A column the feature schema requires is absent from the CSV header.
    MissingColumn(&'static str),
    /// The dataset parsed but contains no records to fit on.
    EmptyDataset,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Csv(err) => write!(f, "failed to read training dataset: {}", err),
            Error::MissingColumn(column) => {
                write!(f, "training dataset is missing required column '{}'", column)
            }
            Error::EmptyDataset => write!(f, "training dataset contains no records"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
