//! The static resume data behind the page, plus the handful of string
//! derivations the views need. Everything here is plain data so it compiles
//! (and tests) without any leptos feature enabled.

use chrono::{Datelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub links: Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub linkedin: &'static str,
    pub github: &'static str,
    pub resume: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub when: &'static str,
    pub bullets: &'static [&'static str],
}

impl Profile {
    /// Phone number reduced to its digits for use in a `tel:` link. The
    /// displayed number contains non-breaking hyphens (U+2011), so this
    /// filters rather than splitting on '-'.
    pub fn dial_digits(&self) -> String {
        self.phone.chars().filter(char::is_ascii_digit).collect()
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.dial_digits())
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Initials shown in the header and hero badges.
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl Experience {
    /// Stable identity for the experience list. Company alone is not unique
    /// (the same employer can appear for multiple stints), company plus time
    /// range is.
    pub fn display_key(&self) -> String {
        format!("{} {}", self.company, self.when)
    }
}

/// Year for the footer copyright line.
pub fn copyright_year() -> i32 {
    Utc::now().year()
}

pub static PROFILE: Profile = Profile {
    name: "Govardhan Bhimireddy",
    title: "MuleSoft Architect",
    location: "Dallas, TX",
    email: "govardhanreddy.bh@gmail.com",
    phone: "603\u{2011}233\u{2011}6621",
    links: Links {
        linkedin: "https://www.linkedin.com/in/govardhan-bhim",
        github: "https://github.com/goo-bhim",
        resume: "/Govardhan-Bhimireddy-FlowCV-Resume-20250810.pdf",
    },
};

pub static SKILLS: [&str; 14] = [
    "Mule 3/4",
    "DataWeave",
    "RAML",
    "REST/SOAP",
    "OAuth2",
    "Azure DevOps",
    "RTF",
    "SAP",
    "Salesforce",
    "Power BI",
    "Splunk",
    "AKS",
    "MTLS",
    "IdP/SSO",
];

pub static HIGHLIGHTS: [&str; 3] = [
    "8+ years delivering REST/SOAP integrations and API\u{2011}led connectivity with MuleSoft.",
    "MCD & MCA certified; strong CI/CD, security (SSO/OAuth2/MTLS), and observability.",
    "Hands\u{2011}on with Azure, SAP, Salesforce, Splunk, Power BI, and Runtime Fabric.",
];

pub static ABOUT: &str = "I build reliable, secure API platforms and integrations with MuleSoft\u{2014}spanning design, implementation, governance, and operations. I love simplifying complex systems, raising quality bars, and enabling teams with repeatable patterns and clean pipelines.";

pub static EXPERIENCES: [Experience; 3] = [
    Experience {
        role: "Senior Software Engineer",
        company: "AT&T",
        when: "Aug 2024 \u{2013} Present | Dallas, TX",
        bullets: &[
            "Built Mule Exchange reporting dashboards in Power BI for API governance.",
            "Implemented MFA with Entra ID as IdP; enhanced CI/CD for evolving needs.",
            "Added GenAI scoring for Exchange docs; supported DCR onboarding via Azure.",
        ],
    },
    Experience {
        role: "MuleSoft Architect/Consultant",
        company: "CDPH (via Infinite Resource Solutions)",
        when: "Nov 2021 \u{2013} Aug 2024 | Remote",
        bullets: &[
            "Maintained Mule servers; patched Log4j; automated monthly patch scripts.",
            "Set up SAML 2.0 SSO with Azure AD; migrated 4.3 \u{2192} 4.4 (clusters & domains).",
            "Integrated Salesforce \u{2192} Azure Blob pipelines; routed on\u{2011}prem via F5.",
        ],
    },
    Experience {
        role: "Sr MuleSoft Consultant/Developer/Coach",
        company: "Truist Bank (via Infinite)",
        when: "Aug 2020 \u{2013} Oct 2021 | Remote",
        bullets: &[
            "Defined API governance; rationalized redundant REST services (TIBCO).",
            "Demonstrated DataWeave, MUnit, async/sync strategies to federated teams.",
            "Enhanced Mule Metrics Accelerator; created Splunk KPI dashboards.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dial_digits_strips_everything_but_digits() {
        assert_eq!(PROFILE.dial_digits(), "6032336621");
        assert_eq!(PROFILE.tel_href(), "tel:6032336621");
    }

    #[test]
    fn mailto_is_the_literal_email() {
        assert_eq!(
            PROFILE.mailto_href(),
            format!("mailto:{}", "govardhanreddy.bh@gmail.com")
        );
    }

    #[test]
    fn monogram_is_initials() {
        assert_eq!(PROFILE.monogram(), "GB");
    }

    #[test]
    fn profile_fields_are_populated() {
        for field in [
            PROFILE.name,
            PROFILE.title,
            PROFILE.location,
            PROFILE.email,
            PROFILE.phone,
            PROFILE.links.linkedin,
            PROFILE.links.github,
            PROFILE.links.resume,
        ] {
            assert!(!field.is_empty());
        }
    }

    #[test]
    fn skills_are_unique() {
        let set: HashSet<_> = SKILLS.iter().collect();
        assert_eq!(set.len(), SKILLS.len());
    }

    #[test]
    fn experience_keys_are_unique_and_entries_have_bullets() {
        let keys: HashSet<_> = EXPERIENCES.iter().map(Experience::display_key).collect();
        assert_eq!(keys.len(), EXPERIENCES.len());
        for job in &EXPERIENCES {
            assert!(!job.role.is_empty());
            assert!(!job.company.is_empty());
            assert!(!job.when.is_empty());
            assert!(!job.bullets.is_empty());
        }
    }

    #[test]
    fn copyright_year_tracks_the_clock() {
        assert_eq!(copyright_year(), Utc::now().year());
    }
}
