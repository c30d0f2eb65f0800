//! Request side of the Dumpling AI workflow node.
//!
//! An input item names a resource and an operation plus that operation's
//! parameters. The [`operation`] table turns it into a JSON body, the
//! [`client`] performs the authenticated POST, and the [`executor`] runs a
//! batch of items sequentially, normalizing failures.

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod executor;
pub mod operation;

#[cfg(test)]
mod tests;

pub use client::DumplingClient;
pub use config::DumplingConfig;
pub use credential::DumplingAiCredential;
pub use executor::{ExecutionOptions, InputItem, NodeExecutor, OutputItem, PairedItem};
pub use operation::{Operation, OperationDescriptor, PreparedRequest, Resource};

pub const DUMPLING_API_HOST: &str = "app.dumplingai.com";
pub const DUMPLING_API_BASE_URL: &str =
    const_format::concatcp!("https://", DUMPLING_API_HOST, "/api/v1");
