//! Items API
//!
//! CRUD over the in-memory [`ItemStore`](crate::store::ItemStore):
//!
//! - `GET    /api/items`       list every item in insertion order
//! - `GET    /api/items/:id`   fetch one item, 404 when absent
//! - `POST   /api/items`       create an item, 201 with the assigned id
//! - `PUT    /api/items/:id`   replace an item's fields, 404 when absent
//! - `DELETE /api/items/:id`   remove an item, 204 or 404
//! - `OPTIONS` on both paths   200, CORS headers come from the CORS layer
//!
//! # Usage
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .nest("/api/items", items::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod routes;

pub use routes::routes;
