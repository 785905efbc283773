//! 路径参数提取器
//!
//! 把路径里的 ID 解析成 i64，解析失败直接返回 400，
//! 处理程序拿到的一定是合法数值。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $label:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(ErrorBadRequest(
                        serde_json::to_string(&ApiResponse::<()>::error_empty(
                            ErrorCode::BadRequest,
                            concat!("无效的", $label, "ID"),
                        ))
                        .unwrap_or_default(),
                    )),
                })
            }
        }
    };
}

define_safe_id_extractor!(SafeIDI64, "id", "资源");
define_safe_id_extractor!(SafeDivisionIdI64, "division_id", "分组");
