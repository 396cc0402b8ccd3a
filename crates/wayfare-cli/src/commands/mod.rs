//! One module per subcommand. Handlers translate arguments into core calls
//! and render the result; no validation logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod schema;
pub mod signin;
pub mod transitions;
pub mod validate;
