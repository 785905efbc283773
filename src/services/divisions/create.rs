use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DivisionService;
use crate::models::divisions::{requests::CreateDivisionRequest, responses::DivisionResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_division_name;

pub async fn create_division(
    service: &DivisionService,
    division_data: CreateDivisionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 分组名必须是单个大写字母
    if let Err(msg) = validate_division_name(&division_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if division_data.year.trim().is_empty() || division_data.branch.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MissingParameter,
            "year 和 branch 不能为空",
        )));
    }

    // (name, year, branch) 查重
    match storage
        .find_division(
            &division_data.name,
            &division_data.year,
            &division_data.branch,
        )
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DivisionAlreadyExists,
                "该年级该专业下已存在同名分组",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询分组失败: {e}"),
                )),
            );
        }
    }

    match storage.create_division(division_data).await {
        Ok(division) => Ok(HttpResponse::Created().json(ApiResponse::success(
            DivisionResponse { division },
            "分组创建成功",
        ))),
        Err(e) => {
            error!("Failed to create division: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建分组失败: {e}"),
                )),
            )
        }
    }
}
