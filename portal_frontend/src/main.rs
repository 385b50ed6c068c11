use leptos::mount::mount_to_body;
use leptos::prelude::*;
use portal_client::url::Environment;
use portal_frontend::{api_client, App};
use tracing::error;

fn main() {
    console_error_panic_hook::set_once();

    let env = Environment::from_build();
    // set up logging
    if env.logs_enabled() {
        tracing_wasm::set_as_global_default();
    }

    let client = match api_client(&env) {
        Ok(client) => client,
        Err(e) => {
            error!("Could not create API client: {e}");
            return;
        }
    };

    mount_to_body(move || view! { <App client=client/> })
}
