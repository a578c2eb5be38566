use crate::database::MovieDb;
use crate::error::{Error, Result};
use crate::filter::{filter, FilterKey};
use crate::model::{Movie, MoviePatch};
use log::info;
use std::sync::{Arc, Mutex};

/// The movie collection as the handlers see it. Reads go straight to the
/// store; every mutation runs load-modify-save under `write_lock`, so two
/// concurrent writers never clobber each other.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn MovieDb>,
    write_lock: Arc<Mutex<()>>,
}

impl Catalog {
    pub fn new(store: Arc<dyn MovieDb>) -> Self {
        Catalog {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn all(&self) -> Result<Vec<Movie>> {
        self.store.load()
    }

    pub fn find(&self, key: FilterKey, value: &str) -> Result<Vec<Movie>> {
        let found = filter(&self.store.load()?, key, value)?;
        if found.is_empty() {
            Err(Error::NotFound)
        } else {
            Ok(found)
        }
    }

    pub fn add(&self, movie: Movie) -> Result<()> {
        self.mutate(|movies| {
            info!("adding {:?} ({})", movie.title, movie.year);
            movies.push(movie);
            Ok(())
        })
    }

    /// Patches the first movie whose title matches.
    pub fn update(&self, title: &str, patch: MoviePatch) -> Result<()> {
        self.mutate(|movies| {
            let movie = movies
                .iter_mut()
                .find(|movie| movie.has_title(title))
                .ok_or(Error::NotFound)?;
            movie.apply(patch);
            info!("updated {:?}", title);
            Ok(())
        })
    }

    /// Removes every movie whose title matches and returns how many went.
    pub fn remove(&self, title: &str) -> Result<usize> {
        self.mutate(|movies| {
            let before = movies.len();
            movies.retain(|movie| !movie.has_title(title));
            let removed = before - movies.len();
            if removed == 0 {
                return Err(Error::NotFound);
            }
            info!("removed {} movie(s) titled {:?}", removed, title);
            Ok(removed)
        })
    }

    // The collection is only written back when `f` succeeds.
    fn mutate<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Movie>) -> Result<T>,
    {
        let _guard = self.write_lock.lock().map_err(|_| Error::Poisoned)?;
        let mut movies = self.store.load()?;
        let out = f(&mut movies)?;
        self.store.save(&movies)?;
        Ok(out)
    }
}
