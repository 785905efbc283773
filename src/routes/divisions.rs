use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::divisions::requests::CreateDivisionRequest;
use crate::models::users::entities::UserRole;
use crate::services::DivisionService;
use crate::utils::SafeDivisionIdI64;

// 懒加载的全局 DivisionService 实例
static DIVISION_SERVICE: Lazy<DivisionService> = Lazy::new(DivisionService::new_lazy);

// HTTP处理程序
pub async fn create_division(
    req: HttpRequest,
    division_data: web::Json<CreateDivisionRequest>,
) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE
        .create_division(division_data.into_inner(), &req)
        .await
}

pub async fn list_for_teacher(req: HttpRequest) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE.list_for_teacher(&req).await
}

pub async fn list_by_year(req: HttpRequest, year: web::Path<String>) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE.list_by_year(year.into_inner(), &req).await
}

pub async fn list_students(
    req: HttpRequest,
    division_id: SafeDivisionIdI64,
) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE.list_students(division_id.0, &req).await
}

// 配置路由
pub fn configure_division_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/divisions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_for_teacher)
                            // 教师查询自己年级的分组
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_division)
                            // 仅管理员可以创建分组
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/year/{year}").route(
                    web::get()
                        .to(list_by_year)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{division_id}/students").route(
                    web::get()
                        .to(list_students)
                        // 教师查看分组学生名单
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
