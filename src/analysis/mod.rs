//! Analysis dispatch: maps a selected category to prompt templates and runs
//! them against the completion backend.

use tracing::{info, warn};

use crate::llm::CompletionBackend;

/// System instruction sent with every completion call.
pub const SYSTEM_INSTRUCTION: &str = "You are a legal expert analyzing contracts.";

/// One prompt template and the display label its result is destined for.
#[derive(Debug, Clone, Copy)]
struct Section {
    label: &'static str,
    instruction: &'static str,
}

static SUMMARY: Section = Section {
    label: "Document Summary",
    instruction: "Provide a concise 3-5 sentence summary of this legal document.",
};

static PARTIES: Section = Section {
    label: "Parties Identified",
    instruction: "List all parties in this contract with their roles.\n\
                  Format as: 1. [Party Name] - [Role]",
};

static KEY_DATES: Section = Section {
    label: "Key Dates",
    instruction: "Extract all important dates with their significance.\n\
                  Format as a table with: Date | Description | Relevant Clause",
};

static RISKS: Section = Section {
    label: "Risk Analysis",
    instruction: "Identify 3-5 potential risks or problematic clauses.\n\
                  For each, include: 1) The relevant text 2) Why it's risky 3) Suggested changes",
};

/// The four sub-analyses of a full analysis, in the order they are issued.
static FULL_SECTIONS: [Section; 4] = [
    Section {
        label: "Summary",
        instruction: "Provide a 3 paragraph summary",
    },
    Section {
        label: "Parties",
        instruction: "List all parties with roles",
    },
    Section {
        label: "Key Dates",
        instruction: "List important dates with significance",
    },
    Section {
        label: "Risks",
        instruction: "Identify top 3 risks with recommendations",
    },
];

/// The analysis modes a user can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisCategory {
    Summary,
    Parties,
    KeyDates,
    RiskAnalysis,
    /// Composite: summary, parties, dates, and risks in one pass.
    Full,
}

impl AnalysisCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisCategory::Summary => "summary",
            AnalysisCategory::Parties => "parties",
            AnalysisCategory::KeyDates => "dates",
            AnalysisCategory::RiskAnalysis => "risks",
            AnalysisCategory::Full => "full",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "summary" => Some(AnalysisCategory::Summary),
            "parties" => Some(AnalysisCategory::Parties),
            "dates" | "key-dates" => Some(AnalysisCategory::KeyDates),
            "risks" | "risk-analysis" => Some(AnalysisCategory::RiskAnalysis),
            "full" => Some(AnalysisCategory::Full),
            _ => None,
        }
    }

    pub fn all() -> &'static [AnalysisCategory] {
        &[
            AnalysisCategory::Summary,
            AnalysisCategory::Parties,
            AnalysisCategory::KeyDates,
            AnalysisCategory::RiskAnalysis,
            AnalysisCategory::Full,
        ]
    }

    /// The prompt sections this category issues, in order.
    fn sections(&self) -> &'static [Section] {
        match self {
            AnalysisCategory::Summary => std::slice::from_ref(&SUMMARY),
            AnalysisCategory::Parties => std::slice::from_ref(&PARTIES),
            AnalysisCategory::KeyDates => std::slice::from_ref(&KEY_DATES),
            AnalysisCategory::RiskAnalysis => std::slice::from_ref(&RISKS),
            AnalysisCategory::Full => &FULL_SECTIONS,
        }
    }
}

impl std::fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One analysis response, tagged with the display label it belongs under.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub label: &'static str,
    pub body: String,
}

/// Runs selected analyses against a completion backend.
pub struct Analyzer {
    backend: Box<dyn CompletionBackend>,
}

impl Analyzer {
    /// Create an analyzer over an explicitly constructed backend.
    pub fn new(backend: Box<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Run the selected analysis over the extracted text.
    ///
    /// Calls are issued strictly sequentially. Backend failures are converted
    /// into `Error: ...` result bodies and rendered like any other result,
    /// so this never fails.
    pub async fn analyze(&self, text: &str, category: AnalysisCategory) -> Vec<AnalysisResult> {
        info!("Running {} analysis", category);
        let mut results = Vec::new();
        for section in category.sections() {
            results.push(self.run_section(section, text).await);
        }
        results
    }

    async fn run_section(&self, section: &Section, text: &str) -> AnalysisResult {
        let user = build_user_content(section.instruction, text);
        let body = match self.backend.complete(SYSTEM_INSTRUCTION, &user).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Completion failed for '{}': {}", section.label, e);
                format!("Error: {}", e)
            }
        };
        AnalysisResult {
            label: section.label,
            body,
        }
    }
}

/// Instruction first, document second, separated by a blank line.
fn build_user_content(instruction: &str, text: &str) -> String {
    format!("{}\n\nDOCUMENT:\n{}", instruction, text)
}
