use crate::error::{Error, Result};
use crate::model::{normalize, Movie};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Title,
    Year,
    Genre,
}

impl FromStr for FilterKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(FilterKey::Title),
            "year" => Ok(FilterKey::Year),
            "genre" => Ok(FilterKey::Genre),
            other => Err(Error::Validation(format!("Unknown filter: {}", other))),
        }
    }
}

/// Returns the movies matching `value` on `key`, in catalog order. An empty
/// result is not an error here.
pub fn filter(movies: &[Movie], key: FilterKey, value: &str) -> Result<Vec<Movie>> {
    let matches = match key {
        FilterKey::Title => {
            let title = normalize(value);
            movies
                .iter()
                .filter(|movie| normalize(&movie.title) == title)
                .cloned()
                .collect()
        }
        FilterKey::Year => {
            let year: i64 = value
                .trim()
                .parse()
                .map_err(|_| Error::Validation(format!("Invalid year: {}", value)))?;
            movies
                .iter()
                .filter(|movie| movie.year == year)
                .cloned()
                .collect()
        }
        FilterKey::Genre => {
            let genre = normalize(value);
            movies
                .iter()
                .filter(|movie| movie.genres.iter().any(|g| normalize(g) == genre))
                .cloned()
                .collect()
        }
    };
    Ok(matches)
}
