pub mod catalog;
pub mod persistence;

pub use catalog::MealCatalog;
pub use persistence::{
    load_catalog, load_catalog_csv, load_state, save_catalog, save_state, AppState,
};
