use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::AuthenticatedMember;

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub email: String,
    pub age: i32,
}

/// Return the member the presented token belongs to.
async fn me(member: AuthenticatedMember) -> Result<HttpResponse, AppError> {
    let member = member.into_inner();
    Ok(HttpResponse::Ok().json(MemberResponse {
        id: member.id,
        email: member.email,
        age: member.age,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)));
}
