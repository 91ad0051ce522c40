use leptos::{html, prelude::*};

/// Decorative glow behind the content. The gradient wash is static; the two
/// orbs drift on independent CSS keyframe loops (12s and 14s, ease-in-out,
/// see input.css). Nothing here reads or writes page state.
#[component]
pub fn GlowBackground() -> impl IntoView {
    view! {
        <div class="pointer-events-none fixed inset-0 -z-10 overflow-hidden">
            <div class="absolute inset-0 glow-base"></div>
            <div class="absolute h-[48rem] w-[48rem] -left-32 top-24 rounded-full blur-3xl bg-white/20 animate-drift-a"></div>
            <div class="absolute h-[40rem] w-[40rem] right-[-10rem] top-64 rounded-full blur-3xl bg-cyan-200/30 animate-drift-b"></div>
        </div>
    }
}

/// One-shot entrance transition: children fade/slide in the first time at
/// least 40% of the wrapper is visible, and stay revealed afterwards.
///
/// The observer only exists in the browser build. The server build renders
/// the content already visible, which doubles as the static fallback for
/// clients that never hydrate.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(cfg!(not(feature = "hydrate")));

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{
            use_intersection_observer_with_options, UseIntersectionObserverOptions,
            UseIntersectionObserverReturn,
        };

        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                if !revealed.get_untracked() && entries.iter().any(|e| e.is_intersecting()) {
                    set_revealed.set(true);
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![0.4]),
        );
        // once revealed there is nothing left to observe
        Effect::new(move |_| {
            if revealed.get() {
                stop();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_revealed;

    view! {
        <div
            node_ref=target
            class=move || {
                if revealed.get() {
                    "transition-all duration-500 ease-out opacity-100 translate-y-0"
                } else {
                    "transition-all duration-500 ease-out opacity-0 translate-y-3"
                }
            }
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // server build renders content already visible, so clients that never
    // hydrate still see the page
    #[test]
    fn reveal_renders_visible_without_a_browser() {
        let html = Owner::new().with(|| view! { <Reveal><p>"card"</p></Reveal> }.to_html());
        assert!(html.contains("opacity-100"));
        assert!(!html.contains("opacity-0"));
    }
}
