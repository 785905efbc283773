use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::PerformanceService;
use crate::aggregation::round2;
use crate::middlewares::RequireJWT;
use crate::models::performance::responses::DivisionSubjectAverage;
use crate::models::tests::entities::Subject;
use crate::models::users::requests::StudentFilter;
use crate::models::{ApiResponse, ErrorCode};

/// 教师名下各分组按科目的平均原始分
///
/// 范围是教师已指派的分组、且年级与教师一致的学生；
/// 平均的是原始得分而不是百分比。行序按 (分组, 科目) 的首次出现顺序。
pub async fn teacher_marks_summary(
    service: &PerformanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let Some(teacher_year) = teacher.profile.year else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "教师未设置年级",
        )));
    };

    let storage = service.get_storage(request);

    let assignments = match storage.list_assignments_by_teacher(teacher.id).await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询指派失败: {e}"),
                )),
            );
        }
    };

    let division_ids: Vec<i64> = assignments.iter().map(|a| a.division_id).collect();

    let students = match storage
        .list_students(StudentFilter {
            division_ids: Some(division_ids.clone()),
            year: Some(teacher_year),
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

    let student_division: HashMap<i64, i64> = students
        .iter()
        .filter_map(|s| s.profile.division_id.map(|d| (s.id, d)))
        .collect();

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

    // 按 (分组, 科目) 求原始分均值，保持首次出现顺序
    let mut index: HashMap<(i64, Subject), usize> = HashMap::new();
    let mut groups: Vec<((i64, Subject), f64, usize)> = Vec::new();

    for (mark, _test) in &rows {
        let Some(&division_id) = student_division.get(&mark.student_id) else {
            continue;
        };
        let key = (division_id, mark.subject);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((key, 0.0, 0));
            groups.len() - 1
        });
        groups[slot].1 += mark.marks_obtained;
        groups[slot].2 += 1;
    }

    let divisions = match storage.list_divisions_by_ids(&division_ids).await {
        Ok(divisions) => divisions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询分组失败: {e}"),
                )),
            );
        }
    };
    let divisions_by_id: HashMap<i64, _> = divisions.into_iter().map(|d| (d.id, d)).collect();

    let averages: Vec<DivisionSubjectAverage> = groups
        .iter()
        .filter_map(|((division_id, subject), sum, count)| {
            let division = divisions_by_id.get(division_id)?;
            Some(DivisionSubjectAverage {
                division_id: division.id,
                division_name: division.name.clone(),
                year: division.year.clone(),
                branch: division.branch.clone(),
                subject: *subject,
                average_marks: round2(sum / *count as f64),
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(averages, "查询成功")))
}
