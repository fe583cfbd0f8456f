pub mod http;

pub use http::{decode_reply, HttpReplyService};
