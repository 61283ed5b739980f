pub mod api;
pub mod client;
pub mod error;
pub mod handlers;
pub mod http;
pub mod models;
pub mod paths;
pub mod queries;
pub mod render;
pub mod routes;
pub mod seo;
pub mod state;

mod serde_utils;

pub mod prelude {
    pub use crate::api::ContentSource;
    pub use crate::client::Sanity;
}
