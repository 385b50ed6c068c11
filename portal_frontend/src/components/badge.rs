use leptos::prelude::*;

#[component]
pub fn Badge(
    level: BadgeLevel,
    #[prop(into, optional)] tooltip: Option<String>,
    children: Children,
) -> impl IntoView {
    let style = level.class();

    match tooltip {
        Some(tooltip_str) => view! {
            <span class=style>
                <abbr title=tooltip_str>
                    { children() }
                </abbr>
            </span>
        }
        .into_any(),
        None => view! {
            <span class=style>
                { children() }
            </span>
        }
        .into_any(),
    }
}

/// Badge tinted with an arbitrary CSS color, e.g. a squad's `cor`.
#[component]
pub fn ColorBadge(#[prop(into)] color: String, children: Children) -> impl IntoView {
    view! {
        <span
            class="text-white text-xs font-medium me-2 px-2.5 py-0.5 rounded"
            style=format!("background-color: {color}")
        >
            { children() }
        </span>
    }
}

#[derive(Debug, Clone, Copy)]
pub enum BadgeLevel {
    Info,
    Warning,
    Error,
    Success,
    Neutral,
}

impl BadgeLevel {
    fn class(self) -> &'static str {
        match self {
            BadgeLevel::Info => "bg-blue-100 text-blue-800 text-xs font-medium me-2 px-2.5 py-0.5 rounded dark:bg-blue-900 dark:text-blue-300",
            BadgeLevel::Warning => "bg-yellow-100 text-yellow-800 text-xs font-medium me-2 px-2.5 py-0.5 rounded dark:bg-yellow-900 dark:text-yellow-300",
            BadgeLevel::Error => "bg-red-100 text-red-800 text-xs font-medium me-2 px-2.5 py-0.5 rounded dark:bg-red-900 dark:text-red-300",
            BadgeLevel::Success => "bg-green-100 text-green-800 text-xs font-medium me-2 px-2.5 py-0.5 rounded dark:bg-green-900 dark:text-green-300",
            BadgeLevel::Neutral => "bg-gray-100 text-gray-800 text-xs font-medium me-2 px-2.5 py-0.5 rounded dark:bg-gray-700 dark:text-gray-300",
        }
    }
}
