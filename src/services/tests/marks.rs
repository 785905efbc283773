use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TestService;
use crate::aggregation::marks::validate_mark_batch;
use crate::models::tests::{requests::SaveMarksRequest, responses::SaveMarksResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 批量保存一场测验的成绩
///
/// 整批先校验后写入：批次总分超过测验满分、或任一条超过每科满分
/// （total_marks / 3）时整批拒绝，不产生任何部分写入。
/// 通过校验后按 (student, test, subject) 自然键逐条 upsert，
/// 覆盖旧得分并刷新 graded_on。
pub async fn save_marks(
    service: &TestService,
    marks_data: SaveMarksRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let entries = marks_data.marks;

    if entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "成绩数据不能为空",
        )));
    }

    // 所有条目必须属于同一场测验
    let test_id = entries[0].test_id;
    if entries.iter().any(|e| e.test_id != test_id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarksValidationFailed,
            "所有成绩必须属于同一场测验",
        )));
    }

    if entries.iter().any(|e| e.marks_obtained < 0.0) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarksValidationFailed,
            "得分不能为负数",
        )));
    }

    let storage = service.get_storage(request);

    let test = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotFound,
                "测验不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    // 满分未配置时拒绝写入，而不是按 0 计
    if test.total_marks <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarksValidationFailed,
            "测验未配置满分",
        )));
    }

    if let Err(violation) = validate_mark_batch(test.total_marks, &entries) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarksValidationFailed,
            violation.to_string(),
        )));
    }

    let mut saved = Vec::with_capacity(entries.len());
    for entry in entries {
        match storage.upsert_test_mark(entry).await {
            Ok(mark) => saved.push(mark),
            Err(e) => {
                error!("Failed to save test mark: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::MarksSaveFailed,
                        format!("保存成绩失败: {e}"),
                    )),
                );
            }
        }
    }

    Ok(HttpResponse::Created().json(ApiResponse::success(
        SaveMarksResponse { marks: saved },
        "成绩保存成功",
    )))
}
