use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Debug, Clone)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

impl NavItem {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        NavItem {
            name: name.into(),
            href: href.into(),
        }
    }

    fn is_active(&self, path: &str) -> bool {
        if self.href == "/" {
            path == "/"
        } else {
            path.starts_with(&self.href)
        }
    }
}

#[component]
pub fn NavBar(items: Vec<NavItem>) -> impl IntoView {
    let pathname = use_location().pathname;

    let items = items
        .into_iter()
        .map(|item| {
            let active = {
                let item = item.clone();
                Memo::new(move |_| item.is_active(&pathname.get()))
            };
            view! {
                <li>
                    <a
                        href=item.href
                        class=move || if active.get() {
                            "block py-2 px-3 text-white bg-blue-700 rounded md:bg-transparent md:text-blue-700 md:p-0 md:dark:text-blue-500"
                        } else {
                            "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:hover:text-blue-700 md:p-0 md:dark:hover:text-blue-500 dark:text-white dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent dark:border-gray-700"
                        }
                        aria-current=move || active.get().then_some("page")
                    >
                        {item.name}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="bg-white border-gray-200 dark:bg-gray-900">
            <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                <a href="/" class="flex items-center space-x-3 rtl:space-x-reverse">
                    <img src="/logo.png" class="h-8" alt="Squad Portal"/>
                    <span class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white">
                        "Squad Portal"
                    </span>
                </a>
                <div
                    class="items-center justify-between w-full md:flex md:w-auto md:order-1"
                >
                    <ul class="flex flex-col p-4 md:p-0 mt-4 font-medium border border-gray-100 rounded-lg bg-gray-50 md:space-x-8 rtl:space-x-reverse md:flex-row md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                        {items}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
