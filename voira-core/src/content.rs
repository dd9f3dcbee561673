//! Literal copy for the landing page

use crate::section::Section;

/// Product name used across the page
pub const BRAND: &str = "Voira";
pub const TAGLINE: &str = "The new voice era";
pub const HERO_PITCH: &str = "Your expert on the phone. Upload your docs. Call Voira. \
     Get hands-free, step-by-step guidance while you work.";

/// Pictograms used by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Wrench,
    Truck,
    Heart,
    HardHat,
    Car,
    ChefHat,
    Upload,
    Phone,
    MessageSquare,
    CheckCircle,
    Shield,
    FileCheck,
    Play,
    Pause,
    ChevronDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: Section,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "How it Works", section: Section::HowItWorks },
    NavLink { label: "Benefits", section: Section::Benefits },
    NavLink { label: "Demo", section: Section::Demo },
    NavLink { label: "FAQ", section: Section::Faq },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCase {
    pub icon: Icon,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const USE_CASES_INTRO: &str = "Anyone who needs hands-free access to expert knowledge \
     while working. Here are some of our most common use cases:";

pub const USE_CASES: &[UseCase] = &[
    UseCase { icon: Icon::Wrench, title: "Field Technicians", subtitle: "& Maintenance" },
    UseCase { icon: Icon::Truck, title: "Logistics", subtitle: "& Warehousing" },
    UseCase { icon: Icon::Heart, title: "Healthcare", subtitle: "& Clinics" },
    UseCase { icon: Icon::HardHat, title: "Construction", subtitle: "& Trades" },
    UseCase { icon: Icon::Car, title: "Drivers", subtitle: "& Couriers" },
    UseCase { icon: Icon::ChefHat, title: "Kitchens", subtitle: "& F&B Ops" },
];

/// One column of the problem/solution split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pitch {
    pub headline: &'static str,
    pub body: &'static str,
}

pub const PROBLEM: Pitch = Pitch {
    headline: "Work stops when you need to read a manual.",
    body: "Fumbling with paperwork, squinting at screens, or stopping to search through \
           documents kills productivity and increases errors.",
};

pub const SOLUTION: Pitch = Pitch {
    headline: "Call Voira. She cites your SOPs and walks you through.",
    body: "Natural voice conversation with your expert knowledge base. Get precise guidance \
           with citations while keeping your hands free.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: Icon,
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        icon: Icon::Upload,
        step: "1. Ingest",
        title: "Upload PDFs/URLs/MD → private knowledge base",
        description: "Simply upload your documents, SOPs, and manuals to create a secure knowledge base",
    },
    Step {
        icon: Icon::Phone,
        step: "2. Call",
        title: "Phone/WhatsApp, natural voice, barge-in",
        description: "Call Voira anytime through phone or WhatsApp using natural conversation",
    },
    Step {
        icon: Icon::MessageSquare,
        step: "3. Guide",
        title: "Step-by-step with citations, then SMS/Slack checklist",
        description: "Get precise guidance with source citations followed by digital checklists",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit { title: "Hands-free guidance", description: "Works anywhere without screens" },
    Benefit {
        title: "Grounded answers with direct citations",
        description: "Every answer cites your documents",
    },
    Benefit {
        title: "Personal memory of your equipment & process",
        description: "Learns your specific workflows",
    },
    Benefit {
        title: "Works anywhere (no screen)",
        description: "Perfect for field work and busy environments",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Caller,
    Assistant,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::Caller => "You:",
            Speaker::Assistant => "Voira:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptLine {
    pub speaker: Speaker,
    pub text: &'static str,
}

const fn caller(text: &'static str) -> TranscriptLine {
    TranscriptLine { speaker: Speaker::Caller, text }
}

const fn voira(text: &'static str) -> TranscriptLine {
    TranscriptLine { speaker: Speaker::Assistant, text }
}

/// Transcript of the recorded demo call
pub const TRANSCRIPT: &[TranscriptLine] = &[
    caller("I have in front of me a GE GE9X turbine. I need to replace an access panel latch—can you guide me?"),
    voira("Sure—using your GE9X Quick Tasks – Panel Latch. First: engine cool, area clear, PPE on. Good to go?"),
    caller("Good."),
    voira("Open the panel and support it so it doesn't swing down."),
    caller("Done."),
    voira("Remove the old latch and keep the washers in order."),
    caller("Removed."),
    voira("Fit the new latch in the same orientation. Hand-tighten."),
    caller("They're in. What next?"),
    voira("Gently close to check alignment. If it's clean, open and tighten to the spec. Want me to text the spec line?"),
    caller("Yes"),
    voira("Sent. Close the panel and give it a light pull—feel solid?"),
    caller("Solid."),
    voira("Great. I'll log the change and send a short recap with the page I used."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustPillar {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TRUST_PILLARS: &[TrustPillar] = &[
    TrustPillar {
        icon: Icon::Shield,
        title: "Per-Tenant Security",
        description: "Isolated per-user vector store, end-to-end encryption, opt-in memory, \
                      and one-click data deletion.",
    },
    TrustPillar {
        icon: Icon::FileCheck,
        title: "Full Audit Trail",
        description: "Complete transcript and citation tracking for every call. Track usage \
                      and verify guidance accuracy.",
    },
];

pub const INTEGRATIONS_SUMMARY: &str = "Telephony: SIP/VOIP • Output: Slack, SMS, Email";
pub const INTEGRATIONS: &[&str] = &["SIP", "VOIP", "Slack", "SMS", "Email"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What are the offline options?",
        answer: "While Voira requires internet connectivity for the AI processing, we're \
                 developing offline capabilities for critical procedures. Currently, you can \
                 download transcripts and checklists for offline reference.",
    },
    FaqEntry {
        question: "How are documents loaded and updated?",
        answer: "Upload PDFs, URLs, or Markdown files through our web interface. Documents are \
                 processed automatically and updates to your knowledge base are reflected \
                 immediately in conversations.",
    },
    FaqEntry {
        question: "How do citations work?",
        answer: "Every answer includes specific citations from your uploaded documents, \
                 including page numbers and section references. This ensures full \
                 traceability and compliance.",
    },
    FaqEntry {
        question: "What languages and accents are supported?",
        answer: "Voira supports multiple languages and is trained to understand various \
                 accents and technical terminology specific to industrial environments.",
    },
    FaqEntry {
        question: "How does it handle noisy environments?",
        answer: "Voira includes push-to-talk (PTT) functionality and advanced noise \
                 cancellation to work reliably in loud industrial environments.",
    },
    FaqEntry {
        question: "How is my data protected?",
        answer: "Your data is encrypted in transit and at rest, stored in isolated per-tenant \
                 databases, and never used to train our models. You maintain full control \
                 with one-click deletion options.",
    },
];

pub const CTA_HEADLINE: &str = "Upload your docs. Call Voira. Get to work.";
pub const CTA_BODY: &str = "Ready to transform how your team accesses expertise in the field?";

pub const COPYRIGHT: &str = "© 2025 Voira. The new voice era.";
pub const MAKER_NAME: &str = "8882.co";
pub const MAKER_URL: &str = "https://8882.co";
