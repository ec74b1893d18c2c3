use std::sync::OnceLock;

use super::domain::{AnalysisReport, Clause, ClauseId, EntitySet, Explanations, RiskLevel};

/// File name recorded when the sample document path is taken.
pub const SAMPLE_FILE_NAME: &str = "Sample_NDA.pdf";

/// The one report every session is shown, regardless of what was uploaded.
pub fn sample_nda() -> &'static AnalysisReport {
    static REPORT: OnceLock<AnalysisReport> = OnceLock::new();
    REPORT.get_or_init(build_sample_nda)
}

fn build_sample_nda() -> AnalysisReport {
    AnalysisReport {
        doc_type: "Non-Disclosure Agreement (NDA)",
        risk_score: 7.2,
        complexity_before: 22,
        complexity_after: 8,
        complexity_reduction_pct: 73,
        entities: EntitySet {
            parties: vec!["Acme Corporation", "John Smith"],
            dates: vec!["January 1, 2024", "December 31, 2026"],
            monetary: vec!["$50,000", "$10,000 per violation"],
            terms: vec!["Confidential Information", "Trade Secrets"],
        },
        clauses: sample_clauses(),
        red_flags: vec![
            "Confidential information definition is very broad",
            "Non-disclosure period exceeds industry standard",
            "No return/destruction of materials clause specified",
            "Unlimited liability for breaches",
        ],
        green_flags: vec![
            "Clear termination terms",
            "Allows disclosure to employees with need-to-know",
            "Standard governing law provisions",
        ],
    }
}

fn sample_clauses() -> Vec<Clause> {
    vec![
        Clause {
            id: ClauseId(1),
            title: "Definition of Confidential Information",
            original: "The term \"Confidential Information\" shall mean all information, technical data, trade secrets, know-how, research, product plans...",
            explanations: Explanations {
                eli5: "It's like when your friend tells you a secret — this is all the secret stuff the company will share with you.",
                simplified: "Confidential Information means private business information shared by the company.",
                professional: "Confidential Information includes all proprietary data like intellectual property and business strategies.",
            },
            risk: RiskLevel::High,
            risk_reason: "Very broad definition - covers almost any information you learn",
        },
        Clause {
            id: ClauseId(2),
            title: "Non-Disclosure Obligations",
            original: "The Receiving Party agrees to hold and maintain the Confidential Information in strict confidence...",
            explanations: Explanations {
                eli5: "You can't tell anyone the secrets, except teammates who need to know.",
                simplified: "You must keep all confidential info secret and share only if needed for work.",
                professional: "Recipient must maintain confidentiality and limit disclosure to authorized personnel.",
            },
            risk: RiskLevel::Medium,
            risk_reason: "Standard confidentiality clause",
        },
        Clause {
            id: ClauseId(3),
            title: "Term and Duration",
            original: "This Agreement shall commence on the Effective Date and continue for 5 years...",
            explanations: Explanations {
                eli5: "You have to keep the secrets for 5 whole years — a long time!",
                simplified: "This agreement lasts for 5 years from the start date.",
                professional: "The confidentiality obligation extends for five years from the effective date.",
            },
            risk: RiskLevel::High,
            risk_reason: "5 years is longer than industry standard",
        },
        Clause {
            id: ClauseId(4),
            title: "Remedies",
            original: "The Receiving Party acknowledges that disclosure would cause irreparable harm...",
            explanations: Explanations {
                eli5: "If you tell the secrets, the company can make you stop right away.",
                simplified: "If you break this, the company can take you to court immediately.",
                professional: "Breach allows the disclosing party to seek injunctive relief beyond damages.",
            },
            risk: RiskLevel::Medium,
            risk_reason: "Standard legal remedy clause",
        },
    ]
}
