// Composition root for the registration form.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the HTTP gateway and wire it into the form controller.
// - Host the form headlessly for the command line binary (see main.rs).

pub mod config;
