// Protected handlers: valid bearer token required (enforced by
// middleware::jwt_auth_middleware on the /api router)

pub mod offers;

pub use offers::offers_get;
