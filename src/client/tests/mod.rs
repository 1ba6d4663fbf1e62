//! Flows that cross the session, router, and API layers.

mod login_flow;
