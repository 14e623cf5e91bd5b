pub mod cloudflare;
mod types;

pub use cloudflare::CloudflareDnsProvider;
