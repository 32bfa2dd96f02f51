pub mod client;

pub use client::BrowserClient;
