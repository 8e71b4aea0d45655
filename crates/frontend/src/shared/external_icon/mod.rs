//! ExternalIcon - картинка, загружаемая по URL через fetch и показываемая через object URL.
//!
//! Пока загрузка не завершилась (или если она упала) показывается заглушка.

mod slot;

pub use slot::{Completion, IconSlot};

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::{Arc, Mutex};
use web_sys::{Blob, BlobPropertyBag, Url};

pub const PLACEHOLDER: &str = "🔄";

/// Fetch `url` and wrap the body into a `blob:` object URL.
pub async fn load_object_url(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let content_type = response.headers().get("content-type").unwrap_or_default();
    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Failed to read body: {}", e))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));

    let properties = BlobPropertyBag::new();
    properties.set_type(&content_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))
}

fn revoke(handle: &str) {
    if let Err(e) = Url::revoke_object_url(handle) {
        log::warn!("Failed to revoke {}: {:?}", handle, e);
    }
}

#[component]
pub fn ExternalIcon(
    #[prop(into)] url: Signal<String>,
    alt: &'static str,
    size: u32,
) -> impl IntoView {
    let slot = Arc::new(Mutex::new(IconSlot::default()));
    let src = RwSignal::new(None::<String>);

    let slot_for_fetch = slot.clone();
    Effect::new(move |_| {
        let url = url.get();
        let Ok((ticket, previous)) = slot_for_fetch.lock().map(|mut s| s.begin()) else {
            return;
        };
        src.set(None);
        if let Some(previous) = previous {
            revoke(&previous);
        }

        let slot = slot_for_fetch.clone();
        spawn_local(async move {
            let handle = match load_object_url(&url).await {
                Ok(handle) => handle,
                Err(e) => {
                    log::warn!("icon {} not loaded: {}", url, e);
                    return;
                }
            };
            let completion = match slot.lock() {
                Ok(mut s) => s.complete(ticket, handle),
                Err(_) => Completion::Stale(handle),
            };
            match completion {
                Completion::Applied => {
                    let current = slot
                        .lock()
                        .ok()
                        .and_then(|s| s.handle().map(str::to_string));
                    let _ = src.try_set(current);
                }
                Completion::Stale(handle) => revoke(&handle),
            }
        });
    });

    on_cleanup(move || {
        if let Some(handle) = slot.lock().ok().and_then(|mut s| s.release()) {
            revoke(&handle);
        }
    });

    let size = size.to_string();
    view! {
        {move || match src.get() {
            Some(src) => view! {
                <img src=src alt=alt width=size.clone() height=size.clone() />
            }
            .into_any(),
            None => view! { <span class="external-icon__placeholder">{PLACEHOLDER}</span> }
                .into_any(),
        }}
    }
}
