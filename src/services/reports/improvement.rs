use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::aggregation::marks::{
    group_marks_by_student, needs_improvement_by_overall_mean, overall_percentage_mean_of_means,
    subject_averages_recorded_only,
};
use crate::aggregation::round2;
use crate::models::performance::responses::ImprovementReportResponse;
use crate::models::tests::{requests::ImprovementParams, responses::ImprovementEntry};
use crate::models::users::requests::StudentFilter;
use crate::models::{ApiResponse, ErrorCode};

/// 进步报表载荷
///
/// 与需进步名单共用 recorded-only 科目均值，但入选阈值不同：
/// 这里按总体均值（mean-of-means）严格低于 50% 判定，
/// 名单端点则按任一科目均值低于 40% 判定。两套口径并存。
pub async fn improvement_report(
    service: &ReportService,
    params: ImprovementParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(division_id) = params.division_id else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "division_id 参数缺失",
        )));
    };

    let storage = service.get_storage(request);

    let division = match storage.get_division_by_id(division_id).await {
        Ok(Some(division)) => division,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::DivisionNotFound,
                "分组不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询分组失败: {e}"),
                )),
            );
        }
    };

    let students = match storage
        .list_students(StudentFilter {
            division_id: Some(division_id),
            ..Default::default()
        })
        .await
    {
        Ok(students) => students,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    };

    let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    let rows = match storage
        .find_test_marks_with_tests_by_students(&student_ids)
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩失败: {e}"),
                )),
            );
        }
    };
    let marks_by_student = group_marks_by_student(&rows);

    let mut improvement_students = Vec::new();
    for student in &students {
        let marks = marks_by_student
            .get(&student.id)
            .map_or(&[][..], |v| v.as_slice());
        let averages = subject_averages_recorded_only(marks);

        if needs_improvement_by_overall_mean(&averages) {
            improvement_students.push(ImprovementEntry {
                id: student.id,
                name: student.profile.name.clone(),
                prn: student.profile.prn.clone().unwrap_or_default(),
                percentage: round2(overall_percentage_mean_of_means(&averages)),
                avg_coding: round2(averages.coding),
                avg_aptitude: round2(averages.aptitude),
                avg_technical: round2(averages.technical),
            });
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ImprovementReportResponse {
            division_name: division.name,
            students: improvement_students,
        },
        "查询成功",
    )))
}
