use serde::Deserialize;
use ts_rs::TS;

// 创建分组请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct CreateDivisionRequest {
    pub name: String,
    pub year: String,
    pub branch: String,
}
