use actix_web::{Responder, get};

use crate::routes::{HOME_PATH, redirect};
use crate::session::AuthenticatedUser;

#[get("/")]
pub async fn show_index(_user: AuthenticatedUser) -> impl Responder {
    redirect(HOME_PATH)
}
