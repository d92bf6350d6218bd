// Module layout (Clean Architecture style)
// - bootstrap: configuration, default content, and startup wiring
// - infrastructure: DB/filesystem adapters
// - presentation: HTTP handlers and routing
// - application: ports, policies, and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
