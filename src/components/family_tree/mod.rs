mod component;
mod loader;
mod render;
mod state;
mod types;

pub use component::FamilyTree;
pub use types::DEFAULT_FILE_PATH;
