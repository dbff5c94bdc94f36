// Composition root for the timecards bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP router consumed by the binary and the e2e tests.

pub mod http;
pub mod state;
