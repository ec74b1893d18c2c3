use crate::analysis::{sample_nda, ExplanationMode, ResultsView, SAMPLE_FILE_NAME};
use crate::chat::{self, ChatMessage, Speaker};
use crate::config::{AnalysisConfig, AppConfig};
use crate::error::AppError;
use crate::session::page::{APP_TAGLINE, APP_TITLE, FOOTER};
use crate::session::{SessionStore, ViewStage};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Pretend to upload this file instead of using the sample NDA.
    #[arg(long)]
    pub(crate) file: Option<String>,
    /// Explanation mode for clause cards (eli5, simplified, professional).
    #[arg(long, value_parser = crate::infra::parse_mode)]
    pub(crate) mode: Option<ExplanationMode>,
    /// Question to put to the assistant; repeat for several. Defaults to the suggested ones.
    #[arg(long = "question")]
    pub(crate) questions: Vec<String>,
    /// Skip the simulated analysis delay.
    #[arg(long)]
    pub(crate) instant: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Explanation mode for clause cards (eli5, simplified, professional).
    #[arg(long, value_parser = crate::infra::parse_mode)]
    pub(crate) mode: Option<ExplanationMode>,
    /// File name to show in the document caption.
    #[arg(long, default_value = SAMPLE_FILE_NAME)]
    pub(crate) file: String,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question text, matched exactly (case-insensitive).
    pub(crate) question: String,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let mode = args.mode.unwrap_or_default();
    let results = ResultsView::render(sample_nda(), Some(args.file.as_str()), mode);
    render_results(&results);
    Ok(())
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    println!("{}", chat::respond(&args.question));
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        file,
        mode,
        questions,
        instant,
    } = args;

    let analysis = if instant {
        AnalysisConfig::instant()
    } else {
        AppConfig::load()?.analysis
    };
    let store = SessionStore::new(analysis);

    println!("{APP_TITLE}");
    println!("{APP_TAGLINE}\n");

    let session_id = store.create().id;
    let session = match file {
        Some(file_name) => {
            println!("Analyzing your document...");
            store.upload(session_id, file_name).await?
        }
        None => {
            println!("Analyzing sample NDA...");
            store.analyze_sample(session_id).await?
        }
    };

    println!(
        "Analysis complete: {}\n",
        session.view.file_name.as_deref().unwrap_or(SAMPLE_FILE_NAME)
    );

    if let Some(mode) = mode {
        store.select_mode(session_id, mode)?;
    }

    let page = store.page(session_id)?;
    if let Some(results) = page.results() {
        render_results(results);
    }

    println!("\nAsk Questions");
    let questions = if questions.is_empty() {
        chat::suggested_questions().map(str::to_string).collect()
    } else {
        questions
    };
    for question in &questions {
        for message in store.ask(session_id, question)? {
            render_message(&message);
        }
    }

    if let Some(first) = store.report().clauses.first() {
        let toast = store.read_aloud(session_id, first.id)?;
        println!("\n[toast] {}", toast.message);
    }

    let back = store.go_back(session_id)?;
    if back.view.stage() == ViewStage::Intake {
        println!("\n← Upload New Document");
    }
    println!("\n{FOOTER}");
    Ok(())
}

fn render_message(message: &ChatMessage) {
    let speaker = match message.speaker {
        Speaker::User => "you",
        Speaker::Assistant => "assistant",
    };
    println!("- {speaker}: {}", message.text);
}

pub(crate) fn render_results(results: &ResultsView) {
    println!("{}", results.doc_type);
    println!("{}", results.document_caption);

    println!();
    for metric in [
        &results.dashboard.risk_score,
        &results.dashboard.complexity,
        &results.dashboard.clauses_analyzed,
    ] {
        match &metric.delta {
            Some(delta) => println!("{}: {} ({})", metric.label, metric.value, delta),
            None => println!("{}: {}", metric.label, metric.value),
        }
    }

    let analysis = &results.clause_analysis;
    println!("\nExplanation mode: {}", analysis.mode_label);

    println!("\nRed Flags Found");
    for flag in &analysis.red_flags {
        println!("- {flag}");
    }

    println!("\nPositive Aspects");
    for flag in &analysis.green_flags {
        println!("- {flag}");
    }

    println!("\nClauses");
    for clause in &analysis.clauses {
        println!("\n{} ({})", clause.title, clause.risk_badge);
        println!("  ⚠️ {}", clause.risk_reason);
        println!("  Original: {}", clause.original);
        println!("  {}: {}", clause.explanation_heading, clause.explanation);
    }

    println!("\nKey Entities");
    for group in &results.entities.groups {
        println!("- {}: {}", group.heading, group.summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_runs_end_to_end_without_delay() {
        let args = DemoArgs {
            instant: true,
            mode: Some(ExplanationMode::Professional),
            ..DemoArgs::default()
        };
        run_demo(args).await.expect("demo completes");
    }

    #[tokio::test]
    async fn demo_rejects_unsupported_upload() {
        let args = DemoArgs {
            file: Some("minutes.odt".to_string()),
            instant: true,
            ..DemoArgs::default()
        };
        let err = run_demo(args).await.expect_err("filtered");
        assert!(err.to_string().contains("minutes.odt"));
    }

    #[test]
    fn report_renders_for_every_mode() {
        for mode in ExplanationMode::ordered() {
            run_report(ReportArgs {
                mode: Some(mode),
                file: SAMPLE_FILE_NAME.to_string(),
            })
            .expect("report renders");
        }
    }
}
