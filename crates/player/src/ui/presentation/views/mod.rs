//! Top-level views

mod landing;

pub use landing::LandingView;
