use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::data_service::{get_data_for_leaderboard, get_fighter_detail};
use super::sort_utils::{SortDirection, SortKey, sort_totals};
use crate::args::CleanArgs;
use crate::error::CoreError;
use crate::view::fighter::render_fighter_page;
use crate::view::leaderboard::render_leaderboard_page;

fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map_or("", String::as_str)
}

fn error_response(e: &CoreError) -> HttpResponse {
    match e {
        CoreError::NotFound(_) => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
        _ => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

fn blocking_error(e: &actix_web::error::BlockingError) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
}

pub async fn leaderboard_page(
    query: web::Query<HashMap<String, String>>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let json = match get_param_str(&query, "json") {
        "1" => true,
        "0" => false,
        other => other.parse().unwrap_or(false),
    };
    let sort_key = SortKey::from_param(get_param_str(&query, "sort"));
    let direction = SortDirection::from_param(get_param_str(&query, "dir"));

    let args_for_load = args.clone();
    let loaded = web::block(move || {
        get_data_for_leaderboard(args_for_load.get_ref(), chrono::Utc::now())
    })
    .await;

    let mut data = match loaded {
        Ok(Ok(data)) => data,
        Ok(Err(e)) => return error_response(&e),
        Err(e) => return blocking_error(&e),
    };

    sort_totals(&mut data.totals, sort_key, direction);

    if json {
        HttpResponse::Ok().json(data)
    } else {
        let markup = render_leaderboard_page(&data, sort_key, direction, chrono::Utc::now());
        HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string())
    }
}

pub async fn fighter_page(
    query: web::Query<HashMap<String, String>>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let name = get_param_str(&query, "name").trim().to_string();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "name parameter is required"}));
    }
    let json = get_param_str(&query, "json") == "1";

    let args_for_load = args.clone();
    let loaded = web::block(move || get_fighter_detail(args_for_load.get_ref(), &name)).await;

    match loaded {
        Ok(Ok(detail)) if json => HttpResponse::Ok().json(detail),
        Ok(Ok(detail)) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_fighter_page(&detail).into_string()),
        Ok(Err(e)) => error_response(&e),
        Err(e) => blocking_error(&e),
    }
}
