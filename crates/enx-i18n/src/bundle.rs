//! Localized content bundles and the shared UI string catalog.
//!
//! Every locale supplies a complete [`ContentBundle`] through the
//! exhaustive match in [`Locale::bundle`]; adding a locale without
//! content is a compile error, so bundle shape cannot drift at runtime.
//! Chrome strings that are only partially translated live in the
//! [`StringCatalog`] built by [`ui_strings`], where the documented
//! default-locale fallback covers the gaps.

use crate::catalog::{LocaleStrings, StringCatalog};
use crate::locale::Locale;

/// One topic/subject entry on the personalized learning dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicEntry {
    /// Subject name in the bundle's locale.
    pub name: &'static str,
    /// Mastery progress in percent (0..=100).
    pub progress: u8,
    /// Mock "AI recommendation" line.
    pub recommendation: &'static str,
    /// Level label (e.g. "Advanced").
    pub level: &'static str,
}

/// A quick-action card: title, description, button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionCard {
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
}

/// The full localized content set for one locale.
///
/// Invariant: every locale's bundle has the same shape, with the same topic
/// count and the same action-card count as the default locale's.
#[derive(Debug, Clone, Copy)]
pub struct ContentBundle {
    /// Teaching page headline.
    pub title: &'static str,
    /// Teaching page lead paragraph.
    pub subtitle: &'static str,
    /// Hub badge above the headline.
    pub badge: &'static str,
    /// Label of the per-topic continue button.
    pub continue_label: &'static str,
    /// Ordered topic entries for the dashboard cards.
    pub topics: &'static [TopicEntry],
    /// Quick-action cards below the dashboard.
    pub actions: &'static [ActionCard],
}

// ---------------------------------------------------------------------------
// English
// ---------------------------------------------------------------------------

static EN: ContentBundle = ContentBundle {
    title: "Personalized Teaching Experience",
    subtitle: "Harness the power of artificial intelligence to create adaptive, engaging, \
               and data-driven learning experiences for every student.",
    badge: "AI-Powered Learning Hub",
    continue_label: "Continue Learning",
    topics: &[
        TopicEntry {
            name: "Mathematics",
            progress: 85,
            recommendation: "Focus on Calculus II",
            level: "Advanced",
        },
        TopicEntry {
            name: "Physics",
            progress: 72,
            recommendation: "Review Thermodynamics",
            level: "Intermediate",
        },
        TopicEntry {
            name: "Chemistry",
            progress: 94,
            recommendation: "Explore Organic Chemistry",
            level: "Expert",
        },
        TopicEntry {
            name: "Biology",
            progress: 68,
            recommendation: "Practice Cell Biology",
            level: "Intermediate",
        },
    ],
    actions: &[
        ActionCard {
            title: "Study Resources",
            description: "Access curated learning materials tailored to your progress",
            button: "Browse Resources",
        },
        ActionCard {
            title: "Study Groups",
            description: "Join collaborative learning sessions with peers",
            button: "Join Group",
        },
        ActionCard {
            title: "Set Goals",
            description: "Define and track your learning objectives",
            button: "Set Goals",
        },
    ],
};

// ---------------------------------------------------------------------------
// Arabic
// ---------------------------------------------------------------------------

static AR: ContentBundle = ContentBundle {
    title: "تجربة تعليمية شخصية",
    subtitle: "استخدم قوة الذكاء الاصطناعي لإنشاء تجارب تعلم تكيفية وجذابة ومدفوعة بالبيانات لكل طالب.",
    badge: "مركز التعلم المدعوم بالذكاء الاصطناعي",
    continue_label: "متابعة التعلم",
    topics: &[
        TopicEntry {
            name: "الرياضيات",
            progress: 85,
            recommendation: "التركيز على التفاضل والتكامل II",
            level: "متقدم",
        },
        TopicEntry {
            name: "الفيزياء",
            progress: 72,
            recommendation: "مراجعة الديناميكا الحرارية",
            level: "متوسط",
        },
        TopicEntry {
            name: "الكيمياء",
            progress: 94,
            recommendation: "استكشاف الكيمياء العضوية",
            level: "خبير",
        },
        TopicEntry {
            name: "الأحياء",
            progress: 68,
            recommendation: "ممارسة بيولوجيا الخلية",
            level: "متوسط",
        },
    ],
    actions: &[
        ActionCard {
            title: "مصادر الدراسة",
            description: "الوصول إلى المواد التعليمية المنسقة وفقاً لتقدمك",
            button: "تصفح المصادر",
        },
        ActionCard {
            title: "مجموعات الدراسة",
            description: "انضم إلى جلسات التعلم التعاونية مع الأقران",
            button: "انضم للمجموعة",
        },
        ActionCard {
            title: "تحديد الأهداف",
            description: "حدد وتتبع أهدافك التعليمية",
            button: "تحديد الأهداف",
        },
    ],
};

// ---------------------------------------------------------------------------
// German
// ---------------------------------------------------------------------------

static DE: ContentBundle = ContentBundle {
    title: "Personalisierte Lehrerfahrung",
    subtitle: "Nutzen Sie die Kraft der künstlichen Intelligenz, um adaptive, ansprechende \
               und datengesteuerte Lernerfahrungen für jeden Schüler zu schaffen.",
    badge: "KI-gestütztes Lernzentrum",
    continue_label: "Lernen fortsetzen",
    topics: &[
        TopicEntry {
            name: "Mathematik",
            progress: 85,
            recommendation: "Fokus auf Analysis II",
            level: "Fortgeschritten",
        },
        TopicEntry {
            name: "Physik",
            progress: 72,
            recommendation: "Thermodynamik wiederholen",
            level: "Mittelstufe",
        },
        TopicEntry {
            name: "Chemie",
            progress: 94,
            recommendation: "Organische Chemie erkunden",
            level: "Experte",
        },
        TopicEntry {
            name: "Biologie",
            progress: 68,
            recommendation: "Zellbiologie üben",
            level: "Mittelstufe",
        },
    ],
    actions: &[
        ActionCard {
            title: "Lernressourcen",
            description: "Zugang zu kuratierten Lernmaterialien, die auf Ihren Fortschritt zugeschnitten sind",
            button: "Ressourcen durchsuchen",
        },
        ActionCard {
            title: "Lerngruppen",
            description: "Nehmen Sie an kollaborativen Lernsitzungen mit Gleichgesinnten teil",
            button: "Gruppe beitreten",
        },
        ActionCard {
            title: "Ziele setzen",
            description: "Definieren und verfolgen Sie Ihre Lernziele",
            button: "Ziele setzen",
        },
    ],
};

impl Locale {
    /// The content bundle for this locale. Exhaustive by construction.
    #[must_use]
    pub fn bundle(self) -> &'static ContentBundle {
        match self {
            Self::En => &EN,
            Self::Ar => &AR,
            Self::De => &DE,
        }
    }
}

// ---------------------------------------------------------------------------
// UI string catalog
// ---------------------------------------------------------------------------

/// Build the shared UI string catalog.
///
/// The default locale carries every key. Arabic and German translate the
/// navigation chrome and the teaching-dashboard labels; everything else
/// reaches them through the catalog's documented fallback.
#[must_use]
pub fn ui_strings() -> StringCatalog {
    let mut catalog = StringCatalog::new();

    let mut en = LocaleStrings::new();
    en.insert("brand.name", "EduAI Nexus");
    en.insert("brand.tagline", "Intelligence in Education");
    en.insert("nav.home", "Home");
    en.insert("nav.teaching", "Teaching");
    en.insert("nav.governance", "Governance");
    en.insert("nav.administration", "Administration");
    en.insert("nav.proposal", "Proposal");
    en.insert("label.progress", "Progress");
    en.insert("label.recommendation", "AI Recommendation");
    en.insert("teaching.tab.dashboard", "Dashboard");
    en.insert("teaching.tab.assessment", "Assessment");
    en.insert("teaching.tab.analytics", "Analytics");
    en.insert("quiz.title", "Smart Quiz System");
    en.insert(
        "quiz.description",
        "Adaptive assessments that adjust difficulty based on your performance",
    );
    en.insert("quiz.progress", "Question {current} of {total}");
    en.insert("quiz.previous", "Previous");
    en.insert("quiz.next", "Next");
    en.insert("quiz.finish", "Finish Quiz");
    en.insert("quiz.completed", "Quiz Completed!");
    en.insert("quiz.analyzing", "AI is analyzing your responses...");
    en.insert("quiz.feedback", "Instant AI Feedback:");
    en.insert("quiz.retake", "Retake Quiz");
    en.insert("chat.title", "Student Support Chatbot");
    en.insert(
        "chat.description",
        "AI-powered assistant for student inquiries and support",
    );
    en.insert("chat.placeholder", "Type your question...");
    en.insert("home.cta.primary", "Start Learning Journey");
    en.insert("home.cta.secondary", "View Implementation Plan");
    en.insert("governance.title", "School Governance Analytics");
    en.insert(
        "governance.subtitle",
        "Data-driven insights for educational leadership",
    );
    en.insert("administration.title", "AI-Powered Administration");
    en.insert(
        "administration.subtitle",
        "Streamlined school management with intelligent automation",
    );
    en.insert("proposal.title", "AI Implementation Proposal");
    en.insert(
        "proposal.subtitle",
        "Affordable AI implementation for schools - Comprehensive cost analysis in JOD \
         with realistic pricing for educational institutions",
    );
    en.insert("notfound.title", "404");
    en.insert("notfound.heading", "Oops! Page not found");
    en.insert("notfound.back", "Return to Home");
    en.insert("error.title", "Something went wrong");
    en.insert(
        "error.body",
        "This section failed to render. The rest of the site is unaffected.",
    );
    catalog.add_locale(Locale::En, en);

    let mut ar = LocaleStrings::new();
    ar.insert("nav.home", "الرئيسية");
    ar.insert("nav.teaching", "التدريس");
    ar.insert("nav.governance", "الحوكمة");
    ar.insert("nav.administration", "الإدارة");
    ar.insert("nav.proposal", "المقترح");
    ar.insert("label.progress", "التقدم");
    ar.insert("label.recommendation", "توصية الذكاء الاصطناعي");
    ar.insert("teaching.tab.dashboard", "لوحة التحكم");
    ar.insert("teaching.tab.assessment", "التقييم");
    ar.insert("teaching.tab.analytics", "التحليلات");
    catalog.add_locale(Locale::Ar, ar);

    let mut de = LocaleStrings::new();
    de.insert("nav.home", "Startseite");
    de.insert("nav.teaching", "Unterricht");
    de.insert("nav.governance", "Schulaufsicht");
    de.insert("nav.administration", "Verwaltung");
    de.insert("nav.proposal", "Kostenplan");
    de.insert("label.progress", "Fortschritt");
    de.insert("label.recommendation", "KI-Empfehlung");
    de.insert("teaching.tab.dashboard", "Übersicht");
    de.insert("teaching.tab.assessment", "Bewertung");
    de.insert("teaching.tab.analytics", "Analysen");
    catalog.add_locale(Locale::De, de);

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_share_one_shape() {
        let reference = Locale::DEFAULT.bundle();
        for &locale in Locale::ALL {
            let bundle = locale.bundle();
            assert_eq!(
                bundle.topics.len(),
                reference.topics.len(),
                "{locale}: topic count must match the default locale"
            );
            assert_eq!(
                bundle.actions.len(),
                reference.actions.len(),
                "{locale}: action count must match the default locale"
            );
        }
    }

    #[test]
    fn topic_metrics_are_locale_invariant() {
        // Translations change names, never the numbers.
        let en = Locale::En.bundle();
        for &locale in Locale::ALL {
            let bundle = locale.bundle();
            for (a, b) in en.topics.iter().zip(bundle.topics.iter()) {
                assert_eq!(a.progress, b.progress);
            }
        }
    }

    #[test]
    fn progress_values_in_range() {
        for &locale in Locale::ALL {
            for topic in locale.bundle().topics {
                assert!(topic.progress <= 100, "{}: {}", locale, topic.name);
            }
        }
    }

    #[test]
    fn bundle_strings_non_empty() {
        for &locale in Locale::ALL {
            let bundle = locale.bundle();
            assert!(!bundle.title.is_empty());
            assert!(!bundle.subtitle.is_empty());
            assert!(!bundle.badge.is_empty());
            assert!(!bundle.continue_label.is_empty());
            for topic in bundle.topics {
                assert!(!topic.name.is_empty());
                assert!(!topic.recommendation.is_empty());
                assert!(!topic.level.is_empty());
            }
            for action in bundle.actions {
                assert!(!action.title.is_empty());
                assert!(!action.description.is_empty());
                assert!(!action.button.is_empty());
            }
        }
    }

    #[test]
    fn ui_catalog_default_locale_is_complete() {
        let catalog = ui_strings();
        let all = catalog.all_keys();
        for key in &all {
            assert!(
                catalog.has_direct(Locale::En, key),
                "default locale must provide {key} directly"
            );
        }
    }

    #[test]
    fn ui_catalog_fallback_covers_every_locale() {
        let catalog = ui_strings();
        let all = catalog.all_keys();
        for &locale in Locale::ALL {
            for key in &all {
                let value = catalog.lookup(locale, key);
                assert!(
                    value.is_some_and(|v| !v.is_empty()),
                    "{locale}/{key} resolved to nothing"
                );
            }
        }
    }

    #[test]
    fn nav_labels_are_translated() {
        let catalog = ui_strings();
        assert_eq!(catalog.lookup(Locale::De, "nav.home"), Some("Startseite"));
        assert!(catalog.has_direct(Locale::Ar, "nav.proposal"));
        // Page titles are not translated and ride the fallback.
        assert!(!catalog.has_direct(Locale::De, "governance.title"));
        assert_eq!(
            catalog.lookup(Locale::De, "governance.title"),
            Some("School Governance Analytics")
        );
    }
}
