use url::form_urlencoded;

mod google;
pub use google::Google;
mod outlook;
pub use outlook::{WebOffice, WebOutlook};
mod yahoo;
pub use yahoo::Yahoo;

/// Appends form-urlencoded `params` to a base URL that already carries a query.
pub(crate) fn build_url(base: &str, params: &[(&str, String)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{base}&{query}")
}
