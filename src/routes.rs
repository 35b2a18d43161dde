//! Application route table for the Spoke bikes collection app.

use std::sync::Arc;

use crate::dispatch::Router;
use crate::error::RouterError;
use crate::guard::AccessGuard;
use crate::table::RouteTable;
use crate::view::View;

/// The page views the application binds into the route table.
///
/// Each field is an opaque renderable unit supplied by the embedding
/// application; this crate fixes the path surface and guard flags, nothing
/// about the pages themselves.
pub struct AppPages {
    pub home: Arc<dyn View>,
    pub bikes: Arc<dyn View>,
    pub bike_details: Arc<dyn View>,
    pub login: Arc<dyn View>,
    pub signup: Arc<dyn View>,
    pub add_bike: Arc<dyn View>,
    pub edit_bike: Arc<dyn View>,
    pub my_collection: Arc<dyn View>,
}

/// Builds the application router with its full route table.
///
/// # Routes
///
/// Public:
///
/// - `/` - Home
/// - `/bikes` - Bikes (list)
/// - `/bikes/:id` - BikeDetails
/// - `/login` - Login
/// - `/signup` - Signup
///
/// Guarded via [`AccessGuard`] (redirects to `/login` when the session is
/// not authenticated):
///
/// - `/add-bike` - AddBike
/// - `/edit-bike/:id` - EditBike
/// - `/my-collection` - MyCollection
///
/// # Errors
///
/// Returns [`RouterError`] if the table fails configuration validation;
/// with the fixed patterns above this only happens if the function itself
/// is miswired, and the caller should treat it as fatal at startup.
pub fn app_router(pages: AppPages) -> Result<Router, RouterError> {
    let mut table = RouteTable::new();

    table.register("/", pages.home, false)?;
    table.register("/bikes", pages.bikes, false)?;
    table.register("/bikes/:id", pages.bike_details, false)?;
    table.register("/login", pages.login, false)?;
    table.register("/signup", pages.signup, false)?;
    table.register("/add-bike", pages.add_bike, true)?;
    table.register("/edit-bike/:id", pages.edit_bike, true)?;
    table.register("/my-collection", pages.my_collection, true)?;

    tracing::info!(routes = table.len(), "application route table built");

    Ok(Router::new(table, AccessGuard::default()))
}
