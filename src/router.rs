use crate::domain::{Category, SubmissionForm};
use crate::errors::ServerError;
use crate::gateway::{GatewayError, ListingsGateway};
use crate::paths;
use crate::responses::{
    html_response, html_response_with_status, see_other, stylesheet_response, text_response,
    ResultResp,
};
use crate::templates::pages;
use crate::views::{BrowserView, DetailView, SubmissionView, SubmitOutcome};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

/// Largest form body accepted on `POST /create`.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Longer names fall back to the generic success banner.
const MAX_NOTICE_NAME_CHARS: usize = 60;

/// What every request handler gets to work with.
pub struct AppState {
    pub gateway: Arc<dyn ListingsGateway>,
    pub page_size: u32,
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => browse(&req, app),
        ("GET", paths::CREATE) => {
            html_response(pages::create_listing_page(&SubmissionView::blank()))
        }
        ("POST", paths::CREATE) => create(req, app),
        ("GET", paths::STYLESHEET) => stylesheet_response(),
        ("GET", "/healthz") => text_response("ok"),
        ("GET", p) if p.starts_with("/listing/") => detail(&p["/listing/".len()..], app),
        _ => Err(ServerError::NotFound),
    }
}

fn browse(req: &Request, app: &AppState) -> ResultResp {
    let params = parse_query(req);

    let category = match params.get("category").map(|s| s.trim()) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<Category>()
                .map_err(|e| ServerError::BadRequest(e.to_string()))?,
        ),
    };

    let page = match params.get("page").map(|s| s.trim()) {
        None | Some("") => 0,
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| ServerError::BadRequest(format!("invalid page number: {raw}")))?,
    };

    let mut view = BrowserView::new(app.page_size);
    if params.get("notice").map(String::as_str) == Some(paths::NOTICE_CREATED) {
        let notice = match params.get("name").map(|s| s.trim()) {
            Some(name) if !name.is_empty() && name.chars().count() <= MAX_NOTICE_NAME_CHARS => {
                format!("“{name}” was added.")
            }
            _ => "Your place was added.".to_string(),
        };
        view.set_notice(notice);
    }
    view.load(app.gateway.as_ref(), category, page);

    html_response(pages::listings_page(&view))
}

fn detail(raw_id: &str, app: &AppState) -> ResultResp {
    let id = urlencoding::decode(raw_id)
        .map_err(|_| ServerError::BadRequest("listing id is not valid UTF-8".into()))?;
    // Ids containing '/' arrive percent-encoded; a raw '/' is some other path.
    // Dot segments would be collapsed out of the service URL.
    if raw_id.contains('/') || id.trim().is_empty() || id == "." || id == ".." {
        return Err(ServerError::NotFound);
    }

    let view = DetailView::load(app.gateway.as_ref(), &id);
    html_response_with_status(view.status(), pages::listing_detail_page(&view))
}

fn create(req: Request, app: &AppState) -> ResultResp {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form: {e}")))?;
    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }

    let form = SubmissionForm::from_pairs(url::form_urlencoded::parse(&raw));
    let mut view = SubmissionView::from_form(form);

    match view.submit(app.gateway.as_ref()) {
        SubmitOutcome::Submitted(created) => {
            see_other(&paths::created_notice_path(&created.name))
        }
        SubmitOutcome::Invalid => {
            html_response_with_status(422, pages::create_listing_page(&view))
        }
        SubmitOutcome::Rejected(err) => {
            let status = match err {
                GatewayError::Validation(_) => 422,
                _ => 502,
            };
            html_response_with_status(status, pages::create_listing_page(&view))
        }
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
