use leptos::prelude::*;
use leptos_meta::Title;

use super::motion::Reveal;
use crate::profile::{copyright_year, Experience, ABOUT, EXPERIENCES, HIGHLIGHTS, PROFILE, SKILLS};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Title text=PROFILE.title />
        <div class="w-full">
            <Hero />
            <AboutSkills />
            <ExperienceSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

/// Frosted-glass card used by every section.
#[component]
fn Tile(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "backdrop-blur-xl bg-white/50 rounded-xl border border-white/40 shadow-[0_8px_40px_rgba(0,0,0,0.06)] {class}",
        )>
            <div class="p-6 md:p-8">{children()}</div>
        </div>
    }
}

#[component]
fn SectionTitle(children: Children) -> impl IntoView {
    view! {
        <h2 class="text-xl md:text-2xl font-semibold tracking-tight text-slate-800">
            {children()}
        </h2>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-6xl px-4 md:px-6 pt-10 md:pt-16 pb-6">
            <div class="grid md:grid-cols-[1.2fr_1fr] gap-6 md:gap-8">
                <Tile>
                    <div class="flex flex-col md:flex-row md:items-center gap-6">
                        <div class="relative">
                            <div class="h-28 w-28 md:h-32 md:w-32 rounded-3xl bg-gradient-to-br from-white to-white/70 border border-white/60 shadow-inner grid place-items-center">
                                <span class="text-3xl md:text-4xl font-black text-slate-800">
                                    {PROFILE.monogram()}
                                </span>
                            </div>
                            <div class="absolute -inset-1 rounded-3xl bg-white/50 blur-2xl -z-10"></div>
                        </div>
                        <div>
                            <h1 class="text-2xl md:text-4xl font-semibold leading-tight tracking-tight text-slate-900">
                                {PROFILE.name}
                            </h1>
                            <p class="mt-1 md:mt-2 text-slate-700">{PROFILE.title}</p>
                            <div class="mt-4 flex flex-wrap items-center gap-2 text-sm text-slate-700">
                                <span class="inline-flex items-center gap-1">
                                    <i class="extra-location"></i>
                                    {PROFILE.location}
                                </span>
                                <a
                                    class="inline-flex items-center gap-1 hover:underline"
                                    href=PROFILE.mailto_href()
                                >
                                    <i class="extra-email"></i>
                                    {PROFILE.email}
                                </a>
                                <a
                                    class="inline-flex items-center gap-1 hover:underline"
                                    href=PROFILE.tel_href()
                                >
                                    <i class="extra-phone"></i>
                                    {PROFILE.phone}
                                </a>
                            </div>
                            <div class="mt-4 flex gap-2">
                                <a
                                    href=PROFILE.links.linkedin
                                    target="_blank"
                                    rel="noreferrer"
                                    class="inline-flex items-center gap-2 px-4 py-2 rounded-xl bg-white/70 border border-white/60 hover:bg-white"
                                >
                                    <i class="devicon-linkedin-plain"></i>
                                    "LinkedIn"
                                </a>
                                <a
                                    href=PROFILE.links.github
                                    target="_blank"
                                    rel="noreferrer"
                                    class="inline-flex items-center gap-2 px-4 py-2 rounded-xl bg-white/70 border border-white/60 hover:bg-white"
                                >
                                    <i class="devicon-github-plain"></i>
                                    "GitHub"
                                </a>
                            </div>
                        </div>
                    </div>
                </Tile>
                <Tile>
                    <SectionTitle>"Highlights"</SectionTitle>
                    <ul class="mt-4 space-y-3 text-sm text-slate-700">
                        {HIGHLIGHTS
                            .iter()
                            .copied()
                            .map(|h| view! { <li class="leading-6">{h}</li> })
                            .collect_view()}
                    </ul>
                </Tile>
            </div>
        </section>
    }
}

#[component]
fn AboutSkills() -> impl IntoView {
    view! {
        <section id="about" class="mx-auto max-w-6xl px-4 md:px-6 pb-6 md:pb-10">
            <div class="grid md:grid-cols-2 gap-6 md:gap-8">
                <Tile>
                    <SectionTitle>"About"</SectionTitle>
                    <p class="mt-4 text-sm leading-6 text-slate-700">{ABOUT}</p>
                </Tile>
                <div id="skills">
                    <Tile>
                        <SectionTitle>"Skills"</SectionTitle>
                        <SkillList />
                    </Tile>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillList() -> impl IntoView {
    view! {
        <div class="mt-4 flex flex-wrap gap-2">
            {SKILLS
                .iter()
                .copied()
                .map(|skill| {
                    view! {
                        <span class="px-2.5 py-1 text-xs font-medium rounded-lg bg-white/70 border border-white/60 text-slate-800">
                            {skill}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="mx-auto max-w-6xl px-4 md:px-6 pb-12">
            <div class="flex items-center justify-between mb-4 md:mb-6">
                <SectionTitle>"Experience"</SectionTitle>
                <div class="h-px flex-1 ml-4 bg-gradient-to-r from-slate-300/60 to-transparent"></div>
            </div>
            <div class="grid lg:grid-cols-3 md:grid-cols-2 gap-6 md:gap-8">
                <For
                    each=|| EXPERIENCES.iter()
                    key=|job| job.display_key()
                    children=|job| {
                        view! {
                            <Reveal>
                                <ExperienceCard job />
                            </Reveal>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(job: &'static Experience) -> impl IntoView {
    view! {
        <Tile class="h-full">
            <h3 class="text-lg md:text-xl font-semibold text-slate-900">{job.role}</h3>
            <p class="text-sm text-slate-700 mt-1">{job.company}</p>
            <p class="text-xs text-slate-600">{job.when}</p>
            <ul class="mt-4 space-y-2 text-sm text-slate-700">
                {job
                    .bullets
                    .iter()
                    .copied()
                    .map(|bullet| view! { <li class="leading-6">"\u{2022} " {bullet}</li> })
                    .collect_view()}
            </ul>
        </Tile>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-6xl px-4 md:px-6 pb-16">
            <Tile>
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-6">
                    <div>
                        <SectionTitle>"Let\u{2019}s work together"</SectionTitle>
                        <p class="mt-2 text-sm text-slate-700">
                            "Have a project or role that could use a MuleSoft architect? I\u{2019}d love to help."
                        </p>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        <a
                            href=PROFILE.mailto_href()
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-slate-900 text-white hover:bg-slate-700"
                        >
                            <i class="extra-email"></i>
                            "Email Me"
                        </a>
                        <a
                            href=PROFILE.tel_href()
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-white/70 border border-white/60 hover:bg-white"
                        >
                            <i class="extra-phone"></i>
                            "Call"
                        </a>
                    </div>
                </div>
            </Tile>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="pb-10">
            <div class="mx-auto max-w-6xl px-4 md:px-6 text-xs text-slate-600 flex flex-col md:flex-row items-center justify-between gap-2">
                <p>
                    {format!(
                        "\u{a9} {} {}. All rights reserved.",
                        copyright_year(),
                        PROFILE.name,
                    )}
                </p>
                <div class="flex gap-4">
                    <a class="hover:underline" href=PROFILE.links.linkedin target="_blank" rel="noreferrer">
                        "LinkedIn"
                    </a>
                    <a class="hover:underline" href=PROFILE.links.github target="_blank" rel="noreferrer">
                        "GitHub"
                    </a>
                    <a class="hover:underline" href=PROFILE.links.resume download="">
                        "Resume"
                    </a>
                </div>
                <p>{format!("Last updated {}", env!("BUILD_DATE"))}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Walk `haystack` asserting each needle appears, in order.
    fn assert_in_order(haystack: &str, needles: &[&str]) {
        let mut pos = 0;
        for needle in needles {
            match haystack[pos..].find(needle) {
                Some(i) => pos += i + needle.len(),
                None => panic!("missing or out of order: {needle:?}"),
            }
        }
    }

    #[test]
    fn hero_renders_identity_and_contact_links() {
        let html = view! { <Hero /> }.to_html();
        for expected in [
            PROFILE.name,
            PROFILE.title,
            PROFILE.location,
            PROFILE.phone,
            PROFILE.email,
            "tel:6032336621",
            "mailto:govardhanreddy.bh@gmail.com",
            PROFILE.links.linkedin,
            PROFILE.links.github,
        ] {
            assert!(html.contains(expected), "hero missing {expected:?}");
        }
    }

    #[test]
    fn skill_list_renders_every_skill_in_order() {
        let html = view! { <SkillList /> }.to_html();
        assert_in_order(&html, &SKILLS);
    }

    #[test]
    fn experience_card_renders_role_company_when_and_bullets_in_order() {
        let job = &EXPERIENCES[0];
        let html = view! { <ExperienceCard job /> }.to_html();
        // text nodes are HTML-escaped, so AT&T comes out as AT&amp;T
        assert!(html.contains("AT&amp;T"));
        let mut expected = vec![job.role, job.when];
        expected.extend_from_slice(job.bullets);
        assert_in_order(&html, &expected);
    }

    #[test]
    fn experience_section_renders_one_card_per_entry_in_order() {
        let html = Owner::new().with(|| view! { <ExperienceSection /> }.to_html());
        // every card carries the h-full tile class exactly once
        assert_eq!(html.matches("h-full").count(), EXPERIENCES.len());
        // roles and time ranges are escape-free, so they can be matched raw
        let ordered: Vec<&str> = EXPERIENCES
            .iter()
            .flat_map(|job| [job.role, job.when])
            .collect();
        assert_in_order(&html, &ordered);
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = view! { <SkillList /> }.to_html();
        let second = view! { <SkillList /> }.to_html();
        assert_eq!(first, second);
        let job = &EXPERIENCES[1];
        let first = view! { <ExperienceCard job /> }.to_html();
        let second = view! { <ExperienceCard job /> }.to_html();
        assert_eq!(first, second);
    }

    #[test]
    fn contact_section_uses_the_derived_link_targets() {
        let html = view! { <ContactSection /> }.to_html();
        assert!(html.contains(&PROFILE.mailto_href()));
        assert!(html.contains(&PROFILE.tel_href()));
    }

    #[test]
    fn footer_carries_the_current_year_and_outbound_links() {
        let html = view! { <Footer /> }.to_html();
        assert!(html.contains(&format!("{} Govardhan Bhimireddy", copyright_year())));
        assert!(html.contains(&format!("Last updated {}", env!("BUILD_DATE"))));
        assert!(html.contains(PROFILE.links.linkedin));
        assert!(html.contains(PROFILE.links.github));
        assert!(html.contains(PROFILE.links.resume));
    }
}
