use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::PerformanceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 PerformanceService 实例
static PERFORMANCE_SERVICE: Lazy<PerformanceService> = Lazy::new(PerformanceService::new_lazy);

// HTTP处理程序
pub async fn student_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    PERFORMANCE_SERVICE.student_summary(&req).await
}

pub async fn student_summary_for_teacher(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    PERFORMANCE_SERVICE
        .student_summary_for_teacher(student_id.0, &req)
        .await
}

pub async fn teacher_attendance_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    PERFORMANCE_SERVICE.teacher_attendance_summary(&req).await
}

pub async fn teacher_marks_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    PERFORMANCE_SERVICE.teacher_marks_summary(&req).await
}

// 配置路由
pub fn configure_performance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/performance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/summary").route(
                    web::get()
                        .to(student_summary)
                        // 学生查看自己的成绩综合视图
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            )
            .service(
                web::resource("/students/{id}").route(
                    web::get()
                        .to(student_summary_for_teacher)
                        // 教师查看任意学生（分组归属校验见 app.enforce_division_scope）
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/attendance").route(
                    web::get()
                        .to(teacher_attendance_summary)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/marks").route(
                    web::get()
                        .to(teacher_marks_summary)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
