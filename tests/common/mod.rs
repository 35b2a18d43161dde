#![allow(dead_code)]

use std::sync::Arc;

use spoke_router::pattern::PathParams;
use spoke_router::prelude::*;

/// Stub page rendering its name plus the parameters it received, so tests
/// can assert parameter passthrough from the rendered output.
pub struct PageStub {
    name: &'static str,
}

impl PageStub {
    pub fn new(name: &'static str) -> Arc<dyn View> {
        Arc::new(Self { name })
    }
}

impl View for PageStub {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, params: &PathParams) -> String {
        let args: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("<{} {}/>", self.name, args.join(" "))
    }
}

/// Session stub with a fixed authentication state.
pub struct StubSession(pub bool);

impl Session for StubSession {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}

pub fn authenticated() -> StubSession {
    StubSession(true)
}

pub fn anonymous() -> StubSession {
    StubSession(false)
}

/// The full application page set backed by stubs.
pub fn test_pages() -> AppPages {
    AppPages {
        home: PageStub::new("Home"),
        bikes: PageStub::new("Bikes"),
        bike_details: PageStub::new("BikeDetails"),
        login: PageStub::new("Login"),
        signup: PageStub::new("Signup"),
        add_bike: PageStub::new("AddBike"),
        edit_bike: PageStub::new("EditBike"),
        my_collection: PageStub::new("MyCollection"),
    }
}

/// The application router over stub pages.
pub fn test_router() -> Router {
    app_router(test_pages()).expect("application route table is valid")
}
