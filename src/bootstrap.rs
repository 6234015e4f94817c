use web_sys::{Document, Element};
use yew::AppHandle;

use crate::app::{Root, RootProps};
use crate::config::Config;
use crate::models::error::AppError;
use crate::query::{QueryClient, QueryClientConfig};

/// Starts the application: one query client for the whole page, mounted at
/// `#root`. Fails if the page has no such element.
pub fn start() -> Result<(), AppError> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::ConfigError("No document available".to_string()))?;

    let client = QueryClient::new(QueryClientConfig::default());
    // The app lives as long as the page; the handle is never used to unmount.
    let _handle = mount(&document, client)?;
    Ok(())
}

/// Renders the application tree into the mount point of `document`.
pub fn mount(document: &Document, client: QueryClient) -> Result<AppHandle<Root>, AppError> {
    let root = mount_point(document)?;

    gloo::console::log!(format!(
        "Mounting Roombook at #{} (stale time {}ms)",
        Config::MOUNT_POINT_ID,
        client.default_options().queries.stale_time.num_milliseconds()
    ));

    Ok(yew::Renderer::<Root>::with_root_and_props(root, RootProps { client }).render())
}

/// Finds the element the application is mounted into.
pub fn mount_point(document: &Document) -> Result<Element, AppError> {
    locate_mount_point(Config::MOUNT_POINT_ID, |id| document.get_element_by_id(id))
}

/// Looks up `id` and turns its absence into `AppError::MountPointMissing`.
pub fn locate_mount_point<T, F>(id: &str, lookup: F) -> Result<T, AppError>
where
    F: FnOnce(&str) -> Option<T>,
{
    lookup(id).ok_or_else(|| AppError::MountPointMissing(id.to_string()))
}
