use serde::Deserialize;
use ts_rs::TS;

// 登录请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// 学生自助注册请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterStudentRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: Option<String>,
    pub year: String,
    pub branch: String,
    pub division_id: i64,
    pub prn: String,
}

// 教师注册请求（管理员操作）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterTeacherRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: Option<String>,
    pub year: String,
    pub branch: String,
    pub designation: Option<String>,
}
