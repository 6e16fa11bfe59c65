//! Route handlers

pub mod health;
pub mod resources;

use axum::Router;

use crate::resources::{
    Inventory, InventoryReports, Invoices, Notifications, Orders, Products, Sales, Surveys, Users,
};
use crate::state::AppState;

/// Every resource router under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(resources::router::<Surveys>())
        .merge(resources::router::<Invoices>())
        .merge(resources::router::<InventoryReports>())
        .merge(resources::router::<Inventory>())
        .merge(resources::router::<Notifications>())
        .merge(resources::router::<Orders>())
        .merge(resources::router::<Products>())
        .merge(resources::router::<Users>())
        .merge(resources::router::<Sales>())
}
