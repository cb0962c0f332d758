//! Presentation content catalog
//!
//! The deck ships with built-in VolunteerHub content. A `deck.json` in the
//! data directory replaces it wholesale when present and valid.

use crate::constants::DECK_FILE;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub title: String,
    pub slides: Vec<Slide>,
    pub overview: Overview,
    pub problem_solution: ProblemSolution,
    pub scope: Scope,
    pub wbs: WorkBreakdown,
    pub schedule: Schedule,
    pub team: Team,
    pub risk: RiskRegister,
}

impl Catalog {
    /// Load `deck.json` from `data_dir`, falling back to the built-in deck
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(DECK_FILE);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!("No deck override found, using built-in content");
                return Self::builtin();
            }
        };
        match serde_json::from_str::<Catalog>(&raw) {
            Ok(catalog) if catalog.slides.is_empty() => {
                warn!(path = %path.display(), "Deck override has no slides, using built-in content");
                Self::builtin()
            }
            Ok(catalog) => {
                info!(path = %path.display(), slides = catalog.slides.len(), "Deck override loaded");
                catalog
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to parse deck override, using built-in content");
                Self::builtin()
            }
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn builtin() -> Self {
        Self {
            title: "VolunteerHub".into(),
            slides: vec![
                slide(1, "Project Overview", Icon::Layers, SlideKind::Overview),
                slide(2, "Problem & Solution", Icon::Lightbulb, SlideKind::ProblemSolution),
                slide(3, "Scope Definition", Icon::Target, SlideKind::Scope),
                slide(4, "Work Breakdown", Icon::GitBranch, SlideKind::Wbs),
                slide(5, "Project Schedule", Icon::Calendar, SlideKind::Schedule),
                slide(6, "Project Team", Icon::Users, SlideKind::Team),
                slide(7, "Risk Management", Icon::ShieldAlert, SlideKind::Risk),
            ],
            overview: Overview {
                badge: "Centralized Volunteer Management System".into(),
                headline: "VolunteerHub".into(),
                tagline: "A web-based platform to streamline volunteer registration, scheduling, and reporting for organizations".into(),
                stats: vec![
                    Stat {
                        icon: Icon::DollarSign,
                        label: "Budget".into(),
                        value: StatValue::Counter {
                            from: 0.0,
                            to: 120_000.0,
                            prefix: "RM ".into(),
                            suffix: String::new(),
                        },
                        note: None,
                    },
                    Stat {
                        icon: Icon::CalendarDays,
                        label: "Duration".into(),
                        value: StatValue::Counter {
                            from: 0.0,
                            to: 6.0,
                            prefix: String::new(),
                            suffix: " Months".into(),
                        },
                        note: Some("Jun – Dec 2025".into()),
                    },
                    Stat {
                        icon: Icon::User,
                        label: "Sponsor".into(),
                        value: StatValue::Text { text: "Daniel Lee".into() },
                        note: Some("Business Sponsor".into()),
                    },
                    Stat {
                        icon: Icon::Building,
                        label: "Deadline".into(),
                        value: StatValue::Text { text: "Dec 3, 2025".into() },
                        note: Some("Final delivery".into()),
                    },
                ],
                objective_title: "Project Objective".into(),
                objective: "Develop and deploy a comprehensive volunteer management system that centralizes \
                            volunteer data, automates registration processes, and provides real-time reporting \
                            capabilities to reduce administrative overhead by 30%."
                    .into(),
            },
            problem_solution: ProblemSolution {
                heading: heading("The Challenge & Our Solution", None),
                problems: strings(&[
                    "Fragmented data across multiple spreadsheets",
                    "Manual registration process prone to errors",
                    "No centralized communication channel",
                    "Limited reporting and analytics capabilities",
                    "40% of admin time spent on data entry",
                ]),
                solutions: strings(&[
                    "Unified database for all volunteer information",
                    "Self-service online registration portal",
                    "Automated email notifications & reminders",
                    "Real-time dashboard with analytics",
                    "30% projected efficiency improvement",
                ]),
                impact: vec![
                    metric("30%", "Time Saved"),
                    metric("100%", "Data Centralized"),
                    metric("24/7", "Registration Access"),
                ],
            },
            scope: Scope {
                heading: heading("Project Scope", Some("Clear boundaries for successful delivery")),
                in_scope: vec![
                    scope_item(Icon::FileText, "Admin Dashboard", "Volunteer management, event scheduling, approvals"),
                    scope_item(Icon::Users, "Volunteer Portal", "Self-registration, profile management, history"),
                    scope_item(Icon::BarChart, "Reporting Module", "Analytics, exports, custom reports"),
                    scope_item(Icon::Database, "Central Database", "Secure storage, data backup, audit trails"),
                ],
                out_of_scope: vec![
                    scope_item(Icon::Smartphone, "Mobile Applications", "Native iOS/Android apps"),
                    scope_item(Icon::Bot, "AI-Powered Matching", "ML-based volunteer-event matching"),
                    scope_item(Icon::CreditCard, "Payment Processing", "Donation or payment handling"),
                ],
                footnote: "* May be considered for future phases".into(),
            },
            wbs: WorkBreakdown {
                heading: heading("Work Breakdown Structure", Some("7-Phase delivery approach")),
                phases: vec![
                    phase("1.0", "Initiation", "Charter approval, stakeholder alignment"),
                    phase("2.0", "Planning & Design", "WBS, schedule, solution design, risk plan"),
                    phase("3.0", "Execution", "Development, integration, data preparation"),
                    phase("4.0", "Test & Launch", "UAT, training, go-live, handover"),
                ],
                figure: Figure {
                    src: "charts/wbs.png".into(),
                    alt: "WBS Tree Diagram".into(),
                    fallback_icon: Icon::GitBranch,
                    fallback_text: "WBS Diagram".into(),
                    caption: "Figure 1: Work Breakdown Structure Hierarchy".into(),
                    aspect: 16.0 / 7.0,
                },
            },
            schedule: Schedule {
                heading: heading("Project Schedule", Some("June 2025 – December 2025")),
                milestones: vec![
                    milestone("Jun 2025", "Project Kickoff", MilestoneStatus::Complete),
                    milestone("Jul 2025", "Requirements Finalized", MilestoneStatus::Complete),
                    milestone("Aug 2025", "Design Approval", MilestoneStatus::Current),
                    milestone("Sep 2025", "Development Complete", MilestoneStatus::Upcoming),
                    milestone("Nov 2025", "UAT Complete", MilestoneStatus::Upcoming),
                    milestone("Dec 2025", "Go-Live", MilestoneStatus::Upcoming),
                ],
                figure: Figure {
                    src: "charts/gantt.png".into(),
                    alt: "Project Gantt Chart".into(),
                    fallback_icon: Icon::Calendar,
                    fallback_text: "Gantt Chart".into(),
                    caption: "Figure 2: Project Timeline with Critical Path".into(),
                    aspect: 16.0 / 6.0,
                },
            },
            team: Team {
                heading: heading("Project Team", Some("Dedicated professionals delivering VolunteerHub")),
                members: vec![
                    member("Aaryan Emir", "Project Manager", "AE", "avatars/aaryan.jpeg", "Overall coordination, stakeholder management"),
                    member("Awais Ghaffar", "Business Analyst", "AG", "avatars/awais.png", "Requirements, documentation, UI/UX"),
                    member("Kelvin Kan", "Lead Developer", "KK", "avatars/kevin.jpeg", "Architecture, backend development"),
                    member("Martin Tan", "Developer", "MT", "avatars/martin.jpeg", "Frontend, testing, support"),
                    member("Daniel Lee", "Business Sponsor", "DL", "avatars/daniel.png", "Executive oversight, funding, strategic alignment"),
                ],
                stakeholders: vec![
                    stakeholder("Daniel Lee", "Business Sponsor"),
                    stakeholder("IT Department", "Infrastructure"),
                    stakeholder("Volunteer Coordinators", "End Users"),
                    stakeholder("Volunteers", "Portal Users"),
                ],
            },
            risk: RiskRegister {
                heading: heading("Risk Management", Some("Identified risks and mitigation strategies")),
                risks: vec![
                    RiskItem {
                        id: 1,
                        risk: "Scope Creep".into(),
                        probability: Level::High,
                        impact: Level::High,
                        mitigation: "Formal change control process with 48-hour sign-off windows".into(),
                        tone: RiskTone::Rose,
                    },
                    RiskItem {
                        id: 2,
                        risk: "Technical Complexity".into(),
                        probability: Level::Medium,
                        impact: Level::High,
                        mitigation: "Proof of concept for critical components, regular technical reviews".into(),
                        tone: RiskTone::Amber,
                    },
                    RiskItem {
                        id: 3,
                        risk: "Resource Availability".into(),
                        probability: Level::Medium,
                        impact: Level::Medium,
                        mitigation: "Cross-training team members, documented knowledge base".into(),
                        tone: RiskTone::Neutral,
                    },
                ],
                strategies: vec![
                    Strategy {
                        title: "Weekly Risk Reviews".into(),
                        detail: "Regular assessment in team meetings".into(),
                    },
                    Strategy {
                        title: "Contingency Reserve".into(),
                        detail: "10% budget buffer for unknowns".into(),
                    },
                ],
            },
        }
    }
}

fn slide(id: u32, title: &str, icon: Icon, kind: SlideKind) -> Slide {
    Slide { id, title: title.into(), icon, kind }
}

fn heading(title: &str, subtitle: Option<&str>) -> Heading {
    Heading { title: title.into(), subtitle: subtitle.map(Into::into) }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn metric(value: &str, label: &str) -> ImpactMetric {
    ImpactMetric { value: value.into(), label: label.into() }
}

fn scope_item(icon: Icon, title: &str, desc: &str) -> ScopeItem {
    ScopeItem { icon, title: title.into(), desc: desc.into() }
}

fn phase(phase: &str, name: &str, tasks: &str) -> WbsPhase {
    WbsPhase { phase: phase.into(), name: name.into(), tasks: tasks.into() }
}

fn milestone(date: &str, milestone: &str, status: MilestoneStatus) -> Milestone {
    Milestone { date: date.into(), milestone: milestone.into(), status }
}

fn member(name: &str, role: &str, initials: &str, avatar: &str, responsibilities: &str) -> TeamMember {
    TeamMember {
        name: name.into(),
        role: role.into(),
        initials: initials.into(),
        avatar: avatar.into(),
        responsibilities: responsibilities.into(),
    }
}

fn stakeholder(name: &str, role: &str) -> Stakeholder {
    Stakeholder { name: name.into(), role: role.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_seven_slides_in_order() {
        let catalog = Catalog::builtin();
        let kinds: Vec<SlideKind> = catalog.slides.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SlideKind::Overview,
                SlideKind::ProblemSolution,
                SlideKind::Scope,
                SlideKind::Wbs,
                SlideKind::Schedule,
                SlideKind::Team,
                SlideKind::Risk,
            ]
        );
        assert_eq!(catalog.slide_count(), 7);
    }

    #[test]
    fn test_builtin_has_one_current_milestone() {
        let catalog = Catalog::builtin();
        let current = catalog
            .schedule
            .milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Current)
            .count();
        assert_eq!(current, 1);
    }

    #[test]
    fn test_load_without_override_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Catalog::load(dir.path()), Catalog::builtin());
    }

    #[test]
    fn test_load_override() {
        let dir = tempfile::tempdir().unwrap();
        let mut custom = Catalog::builtin();
        custom.title = "Custom Deck".into();
        custom.slides.truncate(2);
        std::fs::write(dir.path().join(DECK_FILE), serde_json::to_string(&custom).unwrap()).unwrap();

        let loaded = Catalog::load(dir.path());
        assert_eq!(loaded.title, "Custom Deck");
        assert_eq!(loaded.slide_count(), 2);
    }

    #[test]
    fn test_load_rejects_empty_slides() {
        let dir = tempfile::tempdir().unwrap();
        let mut custom = Catalog::builtin();
        custom.slides.clear();
        std::fs::write(dir.path().join(DECK_FILE), serde_json::to_string(&custom).unwrap()).unwrap();

        assert_eq!(Catalog::load(dir.path()).slide_count(), 7);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DECK_FILE), "{ not json").unwrap();
        assert_eq!(Catalog::load(dir.path()), Catalog::builtin());
    }

    #[test]
    fn test_slide_kind_uses_kebab_case_tags() {
        let json = serde_json::to_string(&SlideKind::ProblemSolution).unwrap();
        assert_eq!(json, "\"problem-solution\"");
    }
}
