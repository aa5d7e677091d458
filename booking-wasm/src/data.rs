use booking_core::{DataError, Listing, parse_listings};
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

/// Fetch and decode the listings at `url`.
pub async fn get_data(url: &str) -> Result<Vec<Listing>, DataError> {
    let network = |e: gloo_net::Error| DataError::Network {
        url: url.to_string(),
        reason: e.to_string(),
    };
    let response = Request::get(url).send().await.map_err(network)?;
    if !response.ok() {
        return Err(DataError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let text = response.text().await.map_err(network)?;
    parse_listings(&text)
}

/// Callback flavour of [`get_data`]: exactly one of the two callbacks runs,
/// unless the page goes away first.
pub fn load_listings<S, E>(url: &'static str, on_success: S, on_error: E)
where
    S: FnOnce(Vec<Listing>) + 'static,
    E: FnOnce(DataError) + 'static,
{
    spawn_local(async move {
        match get_data(url).await {
            Ok(listings) => on_success(listings),
            Err(e) => on_error(e),
        }
    });
}
