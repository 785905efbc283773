use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::aggregation::marks::{
    CHART_IMPROVEMENT_THRESHOLD, chart_percentage, group_marks_by_student,
    needs_improvement_by_subject_floor, overall_percentage_mean_of_means,
    subject_averages_recorded_only,
};
use crate::aggregation::round2;
use crate::models::tests::responses::{
    ImprovementEntry, ImprovementListResponse, ImprovementRatioResponse,
};
use crate::models::users::requests::StudentFilter;
use crate::models::{ApiResponse, ErrorCode, tests::requests::ImprovementParams};

/// 需进步名单：任一科目均值严格低于 40% 的学生
///
/// 科目均值按 recorded-only 口径（只统计实际录入的成绩），
/// percentage 是三科均值的算术平均；名单顺序是学生的插入顺序。
pub async fn improvement_list(
    service: &TestService,
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

    // 一次取全分组学生的成绩，再在内存里按学生分桶
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

    let mut improvement_list = Vec::new();
    for student in &students {
        let marks = marks_by_student
            .get(&student.id)
            .map_or(&[][..], |v| v.as_slice());
        let averages = subject_averages_recorded_only(marks);

        if needs_improvement_by_subject_floor(&averages) {
            improvement_list.push(ImprovementEntry {
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
        ImprovementListResponse {
            students: improvement_list,
        },
        "查询成功",
    )))
}

/// 进步比例（图表用）
///
/// 固定按每条成绩 30 分的近似口径算百分比，低于 50% 计入 improvement；
/// 没有任何成绩的学生计入 satisfactory（与缺勤图表对零记录学生的口径相反）。
pub async fn improvement_chart(
    service: &TestService,
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

    let mut improvement = 0i64;
    for student in &students {
        let Some(marks) = marks_by_student.get(&student.id) else {
            continue; // 没有成绩的学生不计入 improvement
        };
        if marks.is_empty() {
            continue;
        }
        if chart_percentage(marks) < CHART_IMPROVEMENT_THRESHOLD {
            improvement += 1;
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ImprovementRatioResponse {
            improvement,
            satisfactory: students.len() as i64 - improvement,
        },
        "查询成功",
    )))
}
