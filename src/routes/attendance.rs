use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceEntry, DefaulterParams, DivisionAttendanceParams, StudentAttendanceParams,
    UpdateReasonRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn save_attendance(
    req: HttpRequest,
    entries: web::Json<Vec<AttendanceEntry>>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .save_attendance(entries.into_inner(), &req)
        .await
}

pub async fn view_own(
    req: HttpRequest,
    query: web::Query<StudentAttendanceParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.view_own(query.into_inner(), &req).await
}

pub async fn update_reason(
    req: HttpRequest,
    update: web::Json<UpdateReasonRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_reason(update.into_inner(), &req)
        .await
}

pub async fn view_division(
    req: HttpRequest,
    query: web::Query<DivisionAttendanceParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .view_division(query.into_inner(), &req)
        .await
}

pub async fn list_defaulters(
    req: HttpRequest,
    query: web::Query<DefaulterParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_defaulters(query.into_inner(), &req)
        .await
}

pub async fn defaulter_chart(
    req: HttpRequest,
    query: web::Query<DefaulterParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .defaulter_chart(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(view_division)
                            // 教师查看分组某天的考勤
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(save_attendance)
                            // 教师批量录入今天的考勤
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/mine").route(
                    web::get()
                        .to(view_own)
                        // 学生查看自己某天的考勤
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            )
            .service(
                web::resource("/reason").route(
                    web::put()
                        .to(update_reason)
                        // 学生补充请假原因
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            )
            .service(
                web::resource("/defaulters").route(
                    web::get()
                        .to(list_defaulters)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/defaulters/chart").route(
                    web::get()
                        .to(defaulter_chart)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
