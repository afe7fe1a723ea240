mod manager;
mod persistence;

pub use manager::DishCatalog;
pub use persistence::{
    load_catalog, load_preferences, load_price_list, read_catalog, save_json, save_preferences,
};
