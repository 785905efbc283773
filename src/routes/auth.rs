use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::{LoginRequest, RegisterStudentRequest, RegisterTeacherRequest};
use crate::models::users::entities::UserRole;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// HTTP处理程序
pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn logout(_req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout().await
}

pub async fn refresh_token(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&req).await
}

pub async fn verify_token(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.verify_token(&req).await
}

pub async fn me(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&req).await
}

pub async fn register_student(
    req: HttpRequest,
    register_data: web::Json<RegisterStudentRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .register_student(register_data.into_inner(), &req)
        .await
}

pub async fn register_teacher(
    req: HttpRequest,
    register_data: web::Json<RegisterTeacherRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .register_teacher(register_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::resource("/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(login)),
            )
            .service(
                web::resource("/refresh")
                    .wrap(middlewares::RateLimit::refresh_token())
                    .route(web::post().to(refresh_token)),
            )
            .service(
                // 学生自助注册是公开端点（历史行为），只做限流
                web::resource("/register/student")
                    .wrap(middlewares::RateLimit::register())
                    .route(web::post().to(register_student)),
            )
            .route("/logout", web::post().to(logout))
            .route("/verify", web::get().to(verify_token))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(me))
                    .service(
                        web::resource("/register/teacher")
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                            .route(web::post().to(register_teacher)),
                    ),
            ),
    );
}
