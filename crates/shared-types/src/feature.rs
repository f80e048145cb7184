use crate::Glyph;

/// Gradient accent painted behind a feature card or detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Orange,
    Green,
    Indigo,
    Yellow,
}

impl Accent {
    /// Value for the `data-accent` attribute; the stylesheet maps it to a gradient.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Green => "green",
            Accent::Indigo => "indigo",
            Accent::Yellow => "yellow",
        }
    }
}

/// A product capability shown on the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Position in [`FEATURES`]; also the tab index.
    pub order: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub glyph: Glyph,
    pub accent: Accent,
}

impl Feature {
    /// DOM id of this feature's navigation tab.
    pub fn tab_id(&self) -> String {
        format!("feature-tab-{}", self.order)
    }

    /// DOM id of the panel this feature's tab controls.
    pub fn section_id(&self) -> String {
        format!("feature-section-{}", self.order)
    }
}

/// The landing page feature catalog, in display order.
pub static FEATURES: &[Feature] = &[
    Feature {
        order: 0,
        title: "Secure Evidence Chain",
        description: "Tamper-proof evidence management with blockchain-verified chain of custody and encrypted storage.",
        details: &[
            "Blockchain-verified chain of custody ensures evidence integrity",
            "Military-grade AES-256 encryption for all stored data",
            "Automated audit logs track every access and modification",
            "Digital signatures prevent tampering and ensure authenticity",
            "Compliant with legal standards for evidence admissibility",
        ],
        glyph: Glyph::Shield,
        accent: Accent::Blue,
    },
    Feature {
        order: 1,
        title: "Real-Time Dispatch",
        description: "Instant incident routing with AI-powered priority assessment and automated resource allocation.",
        details: &[
            "AI algorithms assess incident severity in milliseconds",
            "Automatic routing to nearest available units",
            "Real-time GPS tracking of all field personnel",
            "Dynamic resource reallocation based on priority",
            "Integration with CAD systems for seamless operations",
        ],
        glyph: Glyph::Zap,
        accent: Accent::Purple,
    },
    Feature {
        order: 2,
        title: "Predictive Analytics",
        description: "Machine learning models identify crime patterns, predict hotspots, and optimize patrol routes.",
        details: &[
            "Historical data analysis identifies emerging crime patterns",
            "Heat maps visualize high-risk areas in real-time",
            "Predictive models forecast incident likelihood by location",
            "Optimized patrol routes reduce response times by 40%",
            "Continuous learning improves accuracy over time",
        ],
        glyph: Glyph::Brain,
        accent: Accent::Orange,
    },
    Feature {
        order: 3,
        title: "Zero-Trust Security",
        description: "Multi-factor authentication, role-based access control, and end-to-end encryption by default.",
        details: &[
            "Multi-factor authentication for all user access",
            "Granular role-based permissions control data visibility",
            "End-to-end encryption protects data in transit and at rest",
            "Regular security audits and penetration testing",
            "SOC 2 Type II and ISO 27001 certified infrastructure",
        ],
        glyph: Glyph::Lock,
        accent: Accent::Green,
    },
    Feature {
        order: 4,
        title: "Live Monitoring",
        description: "Real-time dashboards with incident tracking, team status, and automated alert escalation.",
        details: &[
            "Customizable dashboards show critical metrics at a glance",
            "Live incident status updates across all channels",
            "Automated escalation for time-sensitive incidents",
            "Team availability and workload visualization",
            "Mobile-responsive for monitoring on the go",
        ],
        glyph: Glyph::Activity,
        accent: Accent::Indigo,
    },
    Feature {
        order: 5,
        title: "Unified Data Hub",
        description: "Centralized repository integrating CAD, RMS, and third-party systems with full audit trails.",
        details: &[
            "Single source of truth for all incident data",
            "Seamless integration with existing CAD and RMS systems",
            "API-first architecture for easy third-party connections",
            "Complete audit trails for compliance and accountability",
            "Advanced search and filtering across all data sources",
        ],
        glyph: Glyph::Database,
        accent: Accent::Yellow,
    },
];
