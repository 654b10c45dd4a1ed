//! Text dish store
//!
//! One UTF-8 file per dish, named `<id>.txt`:
//!
//! ```text
//! ID: P001
//! Nombre: Sopa
//! Precio: 2500.0
//! Categoría: Entrada
//! Disponible: True
//! ```
//!
//! Other tools read and write these files, so the labels, their order and the
//! `True`/`False` spelling are fixed.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::Dish;
use crate::domain::ports::{DishStore, LoadedDishes, SkippedFile, StoreError, StoreResult};
use crate::domain::value_objects::Money;
use crate::infrastructure::fs::{atomic_write, list_text_files};

const LABELS: [&str; 5] = ["ID", "Nombre", "Precio", "Categoría", "Disponible"];

/// `DishStore` backed by a directory of `.txt` files
#[derive(Debug, Clone)]
pub struct TextDishStore {
    dir: PathBuf,
}

impl TextDishStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", id))
    }
}

impl DishStore for TextDishStore {
    fn load_all(&self) -> StoreResult<LoadedDishes> {
        let files = list_text_files(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let mut loaded = LoadedDishes::default();
        for path in files {
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| decode_dish(&content));
            match parsed {
                Ok(dish) => {
                    debug!(path = %path.display(), id = dish.id(), "dish loaded");
                    loaded.dishes.push(dish);
                }
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "skipping unreadable dish file");
                    loaded.skipped.push(SkippedFile { path, reason });
                }
            }
        }
        Ok(loaded)
    }

    fn save(&self, dish: &Dish) -> StoreResult<()> {
        let path = self.path_for(dish.id());
        atomic_write(&path, &encode_dish(dish)).map_err(|e| StoreError::io(&path, e))?;
        debug!(path = %path.display(), "dish saved");
        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let path = self.path_for(id);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "dish file already gone");
                Ok(())
            }
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }
}

/// Render a dish in the five-line file format
pub fn encode_dish(dish: &Dish) -> String {
    // `{:?}` keeps the trailing `.0` on whole prices ("2500.0")
    format!(
        "ID: {}\nNombre: {}\nPrecio: {:?}\nCategoría: {}\nDisponible: {}\n",
        dish.id(),
        dish.name(),
        dish.price().amount(),
        dish.category(),
        if dish.is_available() { "True" } else { "False" },
    )
}

/// Parse the five-line file format.
///
/// Values are read by position. Each line is split on the first `": "` and
/// the value trimmed. Anything other than `True` reads as unavailable.
pub fn decode_dish(content: &str) -> Result<Dish, String> {
    let mut values = Vec::with_capacity(LABELS.len());
    let mut lines = content.lines();
    for label in LABELS {
        let line = lines
            .next()
            .ok_or_else(|| format!("missing '{}' line", label))?;
        let (_, value) = line
            .split_once(": ")
            .ok_or_else(|| format!("malformed '{}' line: {:?}", label, line))?;
        values.push(value.trim());
    }

    let price = Money::parse(values[2]).map_err(|e| e.to_string())?;
    if values[0].is_empty() {
        return Err("empty dish id".to_string());
    }

    Ok(Dish::new(values[0], values[1], price, values[3]).with_availability(values[4] == "True"))
}
