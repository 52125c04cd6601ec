// Public handlers: token acquisition, no authentication required

pub mod auth;

pub use auth::token_post;
