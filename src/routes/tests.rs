use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::tests::requests::{CreateTestRequest, ImprovementParams, SaveMarksRequest};
use crate::models::users::entities::UserRole;
use crate::services::TestService;

// 懒加载的全局 TestService 实例
static TEST_SERVICE: Lazy<TestService> = Lazy::new(TestService::new_lazy);

// HTTP处理程序
pub async fn create_test(
    req: HttpRequest,
    test_data: web::Json<CreateTestRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.create_test(test_data.into_inner(), &req).await
}

pub async fn list_tests(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEST_SERVICE.list_for_teacher(&req).await
}

pub async fn save_marks(
    req: HttpRequest,
    marks_data: web::Json<SaveMarksRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.save_marks(marks_data.into_inner(), &req).await
}

pub async fn improvement_list(
    req: HttpRequest,
    query: web::Query<ImprovementParams>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .improvement_list(query.into_inner(), &req)
        .await
}

pub async fn improvement_chart(
    req: HttpRequest,
    query: web::Query<ImprovementParams>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .improvement_chart(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_test_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tests")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_tests)
                            // 教师查看自己年级的测验
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_test)
                            // 仅管理员可以创建测验
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/marks").route(
                    web::post()
                        .to(save_marks)
                        // 教师批量录入成绩
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/improvement").route(
                    web::get()
                        .to(improvement_list)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/improvement/chart").route(
                    web::get()
                        .to(improvement_chart)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
