use leptos::prelude::*;

use crate::profile::PROFILE;

/// Sticky translucent bar with the in-page section anchors and the resume
/// download. The anchor targets live in the page sections themselves.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-20 backdrop-blur-xl bg-white/40 border-b border-white/50">
            <div class="mx-auto max-w-6xl px-4 md:px-6 py-3 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="h-9 w-9 rounded-2xl bg-gradient-to-br from-black/80 to-black/60 text-white grid place-items-center font-bold">
                        {PROFILE.monogram()}
                    </div>
                    <div>
                        <p class="text-sm font-medium leading-tight">{PROFILE.name}</p>
                        <p class="text-xs text-slate-600 -mt-0.5">{PROFILE.title}</p>
                    </div>
                </div>
                <nav class="hidden md:flex items-center gap-2 text-sm">
                    <a href="#about" class="px-3 py-2 rounded-md hover:bg-white/60">
                        "About"
                    </a>
                    <a href="#skills" class="px-3 py-2 rounded-md hover:bg-white/60">
                        "Skills"
                    </a>
                    <a href="#experience" class="px-3 py-2 rounded-md hover:bg-white/60">
                        "Experience"
                    </a>
                    <a
                        href=PROFILE.links.resume
                        download=""
                        class="px-4 py-2 rounded-xl bg-slate-900 text-white hover:bg-slate-700"
                    >
                        "Resume"
                    </a>
                </nav>
            </div>
        </header>
    }
}
