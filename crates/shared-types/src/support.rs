/// A phone line shown in the emergency banner on the resources page.
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub hours: &'static str,
    pub description: &'static str,
}

/// An outside organization linked from the resources page.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLink {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub static EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "Cybercrime Helpline",
        phone: "1-800-CYBER-HELP",
        hours: "24/7",
        description: "Immediate assistance for active cybercrime situations",
    },
    EmergencyContact {
        name: "Victim Support Services",
        phone: "1-888-VICTIM-1",
        hours: "Mon-Fri, 9 AM - 6 PM",
        description: "Counseling and support for cybercrime victims",
    },
    EmergencyContact {
        name: "Legal Aid Hotline",
        phone: "1-877-LEGAL-AID",
        hours: "Mon-Fri, 8 AM - 8 PM",
        description: "Free legal consultation for victims",
    },
];

pub static EXTERNAL_LINKS: &[ExternalLink] = &[
    ExternalLink {
        name: "National Cybersecurity Alliance",
        url: "https://staysafeonline.org",
        description: "Educational resources and awareness campaigns",
    },
    ExternalLink {
        name: "FBI Internet Crime Complaint Center",
        url: "https://www.ic3.gov",
        description: "Report cybercrimes to federal authorities",
    },
    ExternalLink {
        name: "Identity Theft Resource Center",
        url: "https://www.idtheftcenter.org",
        description: "Identity theft prevention and recovery",
    },
];
