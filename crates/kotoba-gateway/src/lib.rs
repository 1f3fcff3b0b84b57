pub mod jisho;
pub mod server;

pub use jisho::{Upstream, UpstreamError};
pub use server::{router, serve};
