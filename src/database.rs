use crate::error::Result;
use crate::model::*;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait UserDb: Send + Sync {
    fn load_users(&self) -> Result<Vec<User>>;
}

/// Whole-collection storage. Every write replaces everything that was there.
pub trait MovieDb: Send + Sync {
    fn load(&self) -> Result<Vec<Movie>>;
    fn save(&self, movies: &[Movie]) -> Result<()>;
}

/// A JSON document on disk holding one top-level array.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read<T: DeserializeOwned>(&self) -> Result<T> {
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    // Written next to the target and renamed over it, so readers see either
    // the old collection or the new one.
    fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&buf)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl UserDb for JsonFile {
    fn load_users(&self) -> Result<Vec<User>> {
        self.read()
    }
}

impl MovieDb for JsonFile {
    fn load(&self) -> Result<Vec<Movie>> {
        self.read()
    }

    fn save(&self, movies: &[Movie]) -> Result<()> {
        self.write(movies)
    }
}

/// Keeps everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryDb {
    users: Vec<User>,
    movies: Mutex<Vec<Movie>>,
}

impl MemoryDb {
    pub fn new(users: Vec<User>, movies: Vec<Movie>) -> Self {
        MemoryDb {
            users,
            movies: Mutex::new(movies),
        }
    }
}

impl UserDb for MemoryDb {
    fn load_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }
}

impl MovieDb for MemoryDb {
    fn load(&self) -> Result<Vec<Movie>> {
        let movies = self.movies.lock().map_err(|_| crate::Error::Poisoned)?;
        Ok(movies.clone())
    }

    fn save(&self, movies: &[Movie]) -> Result<()> {
        let mut stored = self.movies.lock().map_err(|_| crate::Error::Poisoned)?;
        *stored = movies.to_vec();
        Ok(())
    }
}
