use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::DefaulterParams;
use crate::models::tests::requests::ImprovementParams;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn defaulters_report(
    req: HttpRequest,
    query: web::Query<DefaulterParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .defaulters_report(query.into_inner(), &req)
        .await
}

pub async fn improvement_report(
    req: HttpRequest,
    query: web::Query<ImprovementParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .improvement_report(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/defaulters").route(
                    web::get()
                        .to(defaulters_report)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/improvement").route(
                    web::get()
                        .to(improvement_report)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
