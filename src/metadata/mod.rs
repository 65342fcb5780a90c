pub mod client;
pub mod mapper;
pub mod models;

pub use client::MetadataClient;
pub use mapper::VariantMapper;
pub use models::{ListingResponse, RawTitle, Season, TitleDetail};
