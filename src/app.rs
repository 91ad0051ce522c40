mod header;
mod home;
mod motion;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use header::Header;
use home::ProfilePage;
use motion::GlowBackground;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased text-slate-900 selection:bg-black/80 selection:text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Govardhan Bhimireddy - {title}") />

        <Router>
            <GlowBackground />
            <Header />
            <main class="flex flex-col flex-grow w-full min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=ProfilePage />
                </Routes>
            </main>
        </Router>
    }
}
