pub mod export;
pub mod overlay;
pub mod range;
pub mod registry;
pub mod selection;
pub mod source;
pub mod value;
pub mod view;
