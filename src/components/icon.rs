//! Inline Lucide-style SVG icons, looked up by name.

use leptos::*;

fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "dashboard" => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
        "message" => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        "dumbbell" => &["M6.5 6.5h11", "M6.5 17.5h11", "M6 20v-16", "M18 20V4", "M3 14v-4", "M21 14v-4"],
        "book" => &["M4 19.5A2.5 2.5 0 0 1 6.5 17H20", "M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"],
        "chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "settings" => &["M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z", "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82.55V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-2.82-.55l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.6 15H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 .55-2.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.6V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.82.55l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"],
        "flame" => &["M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.07-2.14 0-5.5 3-7.5.5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.15.43-2.29 1-3a2.5 2.5 0 0 0 2.5 2.5z"],
        "clock" => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        "trending" => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        "target" => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12z", "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z"],
        "calendar" => &["M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M16 2v4", "M8 2v4", "M3 10h18"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "zap" => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        "arrow-left" => &["M19 12H5", "M12 19l-7-7 7-7"],
        "trash" => &["M3 6h18", "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6", "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"],
        "save" => &["M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z", "M17 21v-8H7v8", "M7 3v5h8"],
        "menu" => &["M3 12h18", "M3 6h18", "M3 18h18"],
        "play" => &["M5 3l14 9-14 9V3z"],
        "check" => &["M20 6L9 17l-5-5"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "search" => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
        _ => &[],
    }
}

#[component]
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(default = "icon")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(&name).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
