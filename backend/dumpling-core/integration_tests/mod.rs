mod client;
mod error;
mod executor;
mod helpers;
