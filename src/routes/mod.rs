use crate::utils::webutils::validate_admin_token;
use actix_web::web;

pub mod commute;
pub mod employee;
pub mod employees;
pub mod enrollments;
pub mod health;
pub mod hr;
pub mod options;
pub mod reports;
pub mod token;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth =
        actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/employees")
                    .service(
                        web::scope("/create")
                            .service(employees::create)
                            .wrap(admin_auth),
                    )
                    .service(employees::list),
            )
            .service(web::scope("/options").service(options::list))
            .service(
                web::scope("/enrollments")
                    .service(enrollments::list)
                    .service(enrollments::create)
                    .service(enrollments::cancel),
            )
            .service(web::scope("/reports").service(reports::participation))
            .service(
                web::scope("/commute")
                    .service(commute::lobby)
                    .service(commute::start_session)
                    .service(commute::finish_session),
            )
            .service(web::scope("/hr").service(hr::dashboard))
            .service(
                web::scope("/employee")
                    .service(employee::dashboard)
                    .service(employee::select_option),
            )
            .service(web::scope("/token").service(token::refresh)),
    );
}
