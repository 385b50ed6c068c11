pub mod components;
pub mod hooks;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use portal_client::url::{backend_url, Environment, Location};
use portal_client::{HttpClient, Session};
use tracing::info;

use crate::components::toast::{provide_toaster, Toasts};
use crate::components::{
    AgendaPage, FaqPage, NavBar, NavItem, NewsPage, SquadsPage, TrainingsPage,
};

/// Client for the content API of the current deployment, using the browser's
/// stored session.
pub fn api_client(env: &Environment) -> portal_client::Result<HttpClient> {
    let base_url = backend_url(env, Location::current().as_ref());
    info!(%base_url, "Using content API");
    HttpClient::new(base_url, Session::persistent())
}

#[component]
pub fn App(client: HttpClient) -> impl IntoView {
    provide_meta_context();
    provide_context(client);
    provide_toaster();

    view! {
        <Link rel="icon" type_="image/png" href="/logo.png"/>
        <Router>
            <main class="container mx-auto max-w-6xl px-4 min-h-screen pb-4">
                <NavBar items=vec![
                    NavItem::new("Notícias", "/"),
                    NavItem::new("Agenda", "/agenda"),
                    NavItem::new("Squads", "/squads"),
                    NavItem::new("Treinamentos", "/treinamentos"),
                    NavItem::new("FAQ", "/faq"),
                ]/>
                <Routes fallback=|| view! {
                    <p class="my-16 text-center dark:text-white">"Página não encontrada"</p>
                }>
                    <Route path=path!("/") view=NewsPage/>
                    <Route path=path!("/noticias") view=NewsPage/>
                    <Route path=path!("/agenda") view=AgendaPage/>
                    <Route path=path!("/squads") view=SquadsPage/>
                    <Route path=path!("/treinamentos") view=TrainingsPage/>
                    <Route path=path!("/faq") view=FaqPage/>
                </Routes>
            </main>
            <Toasts/>
        </Router>
    }
}
