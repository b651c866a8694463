mod manager;
mod persistence;

pub use manager::{normalize_name, recipe_name, BerryCatalog};
pub use persistence::{
    load_catalog, load_catalog_json, load_catalog_tsv, load_recipes, parse_catalog_tsv,
    save_results,
};
