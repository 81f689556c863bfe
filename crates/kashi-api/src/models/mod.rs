//! モデルモジュール

mod request;
mod response;

pub use request::{ConvertRequest, MorasRequest};
pub use response::{ConvertResponse, GojuonResponse, MorasResponse};
