use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PerformanceService;
use crate::aggregation::marks::{
    GradedMark, overall_percentage_weighted, subject_averages_zero_filled,
};
use crate::aggregation::{attendance::percentage_of_records, round2};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::AttendanceFilter;
use crate::models::performance::responses::{StudentSummaryResponse, SubjectPerformance};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 学生查询自己的成绩综合视图
pub async fn student_summary(
    service: &PerformanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let storage = service.get_storage(request);

    match build_student_summary(&*storage, &student).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩综合视图失败: {e}"),
            )),
        ),
    }
}

/// 组装一个学生的成绩综合视图
///
/// 考勤取无时间范围的全量记录；科目均值按 zero-filled 口径
/// （每场测验三科都计入，缺考按 0 分）；总体百分比按分值加权。
/// 全部保留两位小数。
pub(crate) async fn build_student_summary(
    storage: &dyn Storage,
    student: &User,
) -> Result<StudentSummaryResponse> {
    // 全量考勤
    let records = storage
        .find_attendance(AttendanceFilter {
            student_id: Some(student.id),
            ..Default::default()
        })
        .await?;
    let attendance = percentage_of_records(&records);

    // 全部成绩（带测验满分）
    let rows = storage.find_test_marks_with_tests(student.id).await?;
    let marks: Vec<GradedMark> = rows
        .iter()
        .map(|(mark, test)| GradedMark::from_row(mark, test))
        .collect();

    let averages = subject_averages_zero_filled(&marks);
    let overall = overall_percentage_weighted(&marks);

    Ok(StudentSummaryResponse {
        name: student.profile.name.clone(),
        prn: student.profile.prn.clone().unwrap_or_default(),
        attendance,
        subject_performance: SubjectPerformance {
            coding: round2(averages.coding),
            aptitude: round2(averages.aptitude),
            technical: round2(averages.technical),
        },
        overall_percentage: round2(overall),
    })
}
