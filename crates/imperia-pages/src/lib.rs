//! View tree, router, screens and client hydration.
//!
//! The same route tree renders in two environments:
//!
//! - On the server, [`render_route`] builds an isolated [`Router`] per
//!   request and serializes the matched screen to markup. Data-dependent
//!   subtrees render a deterministic loading placeholder — the same markup
//!   the client's first paint produces — so hydration never mismatches.
//! - On the client, [`hydrate`] attaches to the delivered markup, fetches
//!   the route's content where needed, and patches the live document head
//!   through the upsert backend, with stale navigations suppressed.

pub mod component;
pub mod hydrate;
pub mod layout;
pub mod listings;
pub mod richtext;
pub mod router;
pub mod routes;
pub mod screens;
pub mod view;

pub use component::Component;
pub use router::{Route, RouteMatch, Router, RouterError};
pub use routes::{app_router, render_route, route_patterns};
pub use view::{IntoPage, Page, PageElement};
