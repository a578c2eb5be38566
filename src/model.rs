use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "comun")]
    Regular,
    #[serde(rename = "admin")]
    Admin,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// What `/login` hands back: the stored user minus the password.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub role: Role,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Profile {
            username: user.username,
            role: user.role,
        }
    }
}

/// A catalog entry. Fields the catalog does not know about (the public
/// dataset carries `href`, `extract`, `thumbnail`, ...) ride along in `extra`
/// so a load/save cycle never drops them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i64,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    pub fn new(title: &str, year: i64, cast: &[&str], genres: &[&str]) -> Self {
        Movie {
            title: title.to_owned(),
            year,
            cast: cast.iter().map(|s| s.to_string()).collect(),
            genres: genres.iter().map(|s| s.to_string()).collect(),
            extra: Map::new(),
        }
    }

    pub fn has_title(&self, title: &str) -> bool {
        normalize(&self.title) == normalize(title)
    }

    /// Shallow merge: every field present in `patch` replaces the stored one.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(cast) = patch.cast {
            self.cast = cast;
        }
        if let Some(genres) = patch.genres {
            self.genres = genres;
        }
        self.extra.extend(patch.extra);
    }
}

/// Body of `PUT /movies/title/{title}`. An absent field is left alone; an
/// explicit `null` for a known field is rejected rather than ignored.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct MoviePatch {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    pub cast: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub genres: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
