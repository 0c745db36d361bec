//! Declarative page description and the pure renderer that builds it.
//!
//! [`render`] turns static [`PortfolioContent`] plus the outcome of the two
//! asset probes into a [`PageDescription`]: an ordered, styling-free tree of
//! sections that any surface (the HTML template, the JSON API) can display.
//! Missing assets become warning elements; they never fail the render.

use serde::Serialize;

use crate::domain::asset::ImageFormat;
use crate::domain::contact::{ContactFormState, FormStatus};
use crate::domain::content::PortfolioContent;
use crate::domain::repositories::AssetError;

/// Route that serves the profile image bytes.
pub const PROFILE_IMAGE_PATH: &str = "/profile-image";

/// Route that serves the resume download.
pub const RESUME_PATH: &str = "/resume";

/// Route the HTML contact form posts to.
pub const CONTACT_PATH: &str = "/contact";

pub const PORTRAIT_WIDTH: u32 = 160;
pub const PORTRAIT_WARNING: &str = "Profile image not found in assets folder!";
pub const RESUME_WARNING: &str = "Resume file not available.";

/// The whole page, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescription {
    pub title: String,
    pub header: HeaderSection,
    pub about: AboutSection,
    pub skills: SkillsSection,
    pub projects: ProjectsSection,
    pub experience: ExperienceSection,
    pub contact: ContactSection,
    pub form: FormSection,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSection {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub mailto: String,
    pub portrait: Portrait,
    pub resume: ResumeControl,
}

/// Either the profile picture or the warning shown in its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Portrait {
    Image {
        src: String,
        alt: String,
        width: u32,
    },
    Missing {
        warning: String,
    },
}

impl Portrait {
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Image { src, .. } => Some(src),
            Self::Missing { .. } => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Image { .. } => None,
            Self::Missing { warning } => Some(warning),
        }
    }
}

/// Either the download button or the warning shown in its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeControl {
    Download(ResumeLink),
    Missing { warning: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeLink {
    pub href: String,
    pub label: String,
    pub file_name: String,
}

impl ResumeControl {
    pub fn link(&self) -> Option<&ResumeLink> {
        match self {
            Self::Download(link) => Some(link),
            Self::Missing { .. } => None,
        }
    }

    pub fn href(&self) -> Option<&str> {
        self.link().map(|link| link.href.as_str())
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Download(_) => None,
            Self::Missing { warning } => Some(warning),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutSection {
    pub heading: String,
    pub paragraphs: Vec<Paragraph>,
}

/// A run of text spans; spans marked `strong` are emphasised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub strong: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsSection {
    pub heading: String,
    pub categories: Vec<SkillGroup>,
}

/// A subsection header followed by one badge per skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub label: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsSection {
    pub heading: String,
    pub cards: Vec<ProjectCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceSection {
    pub heading: String,
    pub entries: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceItem {
    /// `Role — Organization`
    pub title: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSection {
    pub heading: String,
    pub blurb: String,
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

/// The three-field contact form and the result of the last submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSection {
    pub heading: String,
    pub prompt: String,
    pub action: String,
    pub status: FormStatus,
    pub name: String,
    pub email: String,
    pub message: String,
    pub banner: Option<Banner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerKind {
    Success,
    Error,
}

impl Banner {
    /// CSS class for the banner box.
    pub fn class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "banner banner-success",
            BannerKind::Error => "banner banner-error",
        }
    }
}

/// Builds the page from static content and the asset probe results.
///
/// Deterministic: equal inputs always produce equal descriptions. The contact
/// form section starts `Empty`; see [`PageDescription::with_contact_form`].
pub fn render(
    content: &PortfolioContent,
    portrait: Result<ImageFormat, &AssetError>,
    resume: Result<(), &AssetError>,
) -> PageDescription {
    let profile = &content.profile;

    let portrait = match portrait {
        Ok(_) => Portrait::Image {
            src: PROFILE_IMAGE_PATH.to_string(),
            alt: profile.name.clone(),
            width: PORTRAIT_WIDTH,
        },
        Err(_) => Portrait::Missing {
            warning: PORTRAIT_WARNING.to_string(),
        },
    };

    let resume = match resume {
        Ok(()) => ResumeControl::Download(ResumeLink {
            href: RESUME_PATH.to_string(),
            label: "📄 Download Resume".to_string(),
            file_name: profile.resume.download_name.clone(),
        }),
        Err(_) => ResumeControl::Missing {
            warning: RESUME_WARNING.to_string(),
        },
    };

    PageDescription {
        title: content.page_title.clone(),
        header: HeaderSection {
            name: profile.name.clone(),
            headline: profile.headline.clone(),
            location: profile.location.clone(),
            email: profile.email.clone(),
            mailto: profile.mailto(),
            portrait,
            resume,
        },
        about: AboutSection {
            heading: "👨‍💼 About Me".to_string(),
            paragraphs: content.about.iter().map(|p| parse_emphasis(p)).collect(),
        },
        skills: SkillsSection {
            heading: "🧠 Technical Skills".to_string(),
            categories: content
                .skills
                .iter()
                .map(|c| SkillGroup {
                    label: c.label.clone(),
                    badges: c.skills.clone(),
                })
                .collect(),
        },
        projects: ProjectsSection {
            heading: "🚀 Featured Projects".to_string(),
            cards: content
                .projects
                .iter()
                .map(|p| ProjectCard {
                    title: p.title.clone(),
                    description: p.description.clone(),
                    badges: p.tech.clone(),
                })
                .collect(),
        },
        experience: ExperienceSection {
            heading: "💼 Experience".to_string(),
            entries: content
                .experience
                .iter()
                .map(|e| ExperienceItem {
                    title: format!("{} — {}", e.role, e.organization),
                    period: e.period.clone(),
                    bullets: e.achievements.clone(),
                })
                .collect(),
        },
        contact: ContactSection {
            heading: "📫 Get in Touch".to_string(),
            blurb: content.contact_blurb.clone(),
            links: content
                .links
                .iter()
                .map(|l| LinkItem {
                    label: l.label.clone(),
                    href: l.href.clone(),
                })
                .collect(),
        },
        form: FormSection {
            heading: "💬 Contact Form".to_string(),
            prompt: "Send me a message directly 👇".to_string(),
            action: CONTACT_PATH.to_string(),
            status: FormStatus::Empty,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            banner: None,
        },
        footer: content.footer.clone(),
    }
}

impl PageDescription {
    /// Replaces the form section with a session's form state.
    pub fn with_contact_form(mut self, form: &ContactFormState) -> Self {
        self.form.status = form.status();
        self.form.name = form.name().to_string();
        self.form.email = form.email().to_string();
        self.form.message = form.message().to_string();
        self.form.banner = form.outcome().map(|outcome| Banner {
            kind: if outcome.is_acknowledged() {
                BannerKind::Success
            } else {
                BannerKind::Error
            },
            text: outcome.message().to_string(),
        });
        self
    }

    /// Warning elements currently on the page, in display order.
    pub fn warnings(&self) -> Vec<&str> {
        [self.header.portrait.warning(), self.header.resume.warning()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Splits `**strong**` markers into spans.
///
/// An unmatched trailing `**` is kept as literal text.
pub fn parse_emphasis(text: &str) -> Paragraph {
    let mut spans = Vec::new();
    let mut rest = text;
    let mut strong = false;

    while let Some(pos) = rest.find("**") {
        let closes = strong || rest[pos + 2..].contains("**");
        if !closes {
            break;
        }
        if pos > 0 {
            spans.push(Span {
                text: rest[..pos].to_string(),
                strong,
            });
        }
        strong = !strong;
        rest = &rest[pos + 2..];
    }

    if !rest.is_empty() {
        spans.push(Span {
            text: rest.to_string(),
            strong,
        });
    }

    Paragraph { spans }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SkillCategory;

    fn render_all_present(content: &PortfolioContent) -> PageDescription {
        render(content, Ok(ImageFormat::Jpeg), Ok(()))
    }

    #[test]
    fn test_render_is_deterministic() {
        let content = PortfolioContent::default();
        assert_eq!(render_all_present(&content), render_all_present(&content));

        let missing = AssetError::not_found("profile.jpeg");
        assert_eq!(
            render(&content, Err(&missing), Err(&missing)),
            render(&content, Err(&missing), Err(&missing))
        );
    }

    #[test]
    fn test_render_all_assets_present_has_no_warnings() {
        let page = render_all_present(&PortfolioContent::default());
        assert!(page.warnings().is_empty());
        assert_eq!(page.header.portrait.src(), Some(PROFILE_IMAGE_PATH));
        assert_eq!(page.header.resume.href(), Some(RESUME_PATH));
    }

    #[test]
    fn test_missing_portrait_renders_one_warning() {
        let content = PortfolioContent::default();
        let missing = AssetError::not_found("profile.jpeg");
        let page = render(&content, Err(&missing), Ok(()));

        assert_eq!(page.warnings(), vec![PORTRAIT_WARNING]);
        assert!(page.header.portrait.src().is_none());
        // Everything else is still there.
        assert_eq!(page.header.name, "Harivadan Kilambi");
        assert_eq!(page.skills.categories.len(), 6);
        assert_eq!(page.projects.cards.len(), 3);
        assert_eq!(page.experience.entries.len(), 1);
    }

    #[test]
    fn test_missing_resume_renders_warning_instead_of_control() {
        let content = PortfolioContent::default();
        let missing = AssetError::not_found("HariKilambi_Resume.pdf");
        let page = render(&content, Ok(ImageFormat::Jpeg), Err(&missing));

        assert_eq!(page.warnings(), vec![RESUME_WARNING]);
        assert!(page.header.resume.href().is_none());
    }

    #[test]
    fn test_skill_groups_keep_order() {
        let mut content = PortfolioContent::default();
        content.skills = (1..=6)
            .map(|i| SkillCategory::new(format!("Cat {i}"), (0..i).map(|j| format!("S{i}{j}"))))
            .collect();

        let page = render_all_present(&content);
        let labels: Vec<_> = page.skills.categories.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Cat 1", "Cat 2", "Cat 3", "Cat 4", "Cat 5", "Cat 6"]);

        for (i, group) in page.skills.categories.iter().enumerate() {
            assert_eq!(group.badges.len(), i + 1);
            assert_eq!(group.badges[0], format!("S{}0", i + 1));
        }
    }

    #[test]
    fn test_experience_title_formatting() {
        let page = render_all_present(&PortfolioContent::default());
        let entry = &page.experience.entries[0];
        assert_eq!(entry.title, "AI Engineer Intern — Workcohol (Remote)");
        assert_eq!(entry.period, "Mar 2025 to Jun 2025");
        assert_eq!(entry.bullets.len(), 3);
    }

    #[test]
    fn test_with_contact_form_sets_banner() {
        let content = PortfolioContent::default();
        let mut form = ContactFormState::with_fields("", "a@b.com", "Hi");
        form.submit();

        let page = render_all_present(&content).with_contact_form(&form);
        let banner = page.form.banner.as_ref().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(page.form.status, FormStatus::SubmittedError);
        assert_eq!(page.form.email, "a@b.com");
    }

    #[test]
    fn test_with_contact_form_untouched_has_no_banner() {
        let page = render_all_present(&PortfolioContent::default())
            .with_contact_form(&ContactFormState::new());
        assert!(page.form.banner.is_none());
        assert_eq!(page.form.status, FormStatus::Empty);
    }

    #[test]
    fn test_parse_emphasis() {
        let p = parse_emphasis("I am a **CS** graduate into **AI**.");
        let parts: Vec<_> = p.spans.iter().map(|s| (s.text.as_str(), s.strong)).collect();
        assert_eq!(
            parts,
            [
                ("I am a ", false),
                ("CS", true),
                (" graduate into ", false),
                ("AI", true),
                (".", false)
            ]
        );
    }

    #[test]
    fn test_parse_emphasis_unmatched_marker_is_literal() {
        let p = parse_emphasis("2 ** 3 is eight");
        assert_eq!(p.spans.len(), 1);
        assert_eq!(p.spans[0].text, "2 ** 3 is eight");
        assert!(!p.spans[0].strong);
    }

    #[test]
    fn test_parse_emphasis_plain_text() {
        let p = parse_emphasis("plain");
        assert_eq!(
            p.spans,
            vec![Span {
                text: "plain".to_string(),
                strong: false
            }]
        );
        assert!(parse_emphasis("").spans.is_empty());
    }

    #[test]
    fn test_page_serializes_tagged_variants() {
        let missing = AssetError::not_found("x");
        let page = render(&PortfolioContent::default(), Err(&missing), Ok(()));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["header"]["portrait"]["kind"], "missing");
        assert_eq!(json["header"]["resume"]["kind"], "download");
        assert_eq!(json["form"]["status"], "empty");
    }
}
