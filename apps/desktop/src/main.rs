use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    config::load_settings,
    display::{ScoreBand, NEUTRAL_COLOR},
    workflow::{
        mentor_match::{empty_state, mentor_cards, results_heading},
        placement::PlacementReport,
        skill_gap::SkillGapReport,
    },
    AdvisoryService, HttpAdvisoryClient, MentorMatchController, PlacementController,
    PlacementMetric, SkillGapController, Workflow, WorkflowController, WorkflowStatus,
};
use shared::domain::{MentorRecord, PlacementPrediction, SkillRecommendation};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "advisor", about = "Career advisor: skill gaps, mentors and placement tiers")]
struct Cli {
    /// Overrides the configured advisory service URL.
    #[arg(long)]
    service_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Checks that the advisory service is up.
    Health,
    /// Lists fields of interest.
    Fields {
        /// Lists mentor fields instead of the general catalog.
        #[arg(long)]
        mentor: bool,
    },
    /// Skill-gap analysis for a field of interest.
    Skills {
        #[arg(long)]
        field: Option<String>,
        /// Comma-separated list of skills you already have.
        #[arg(long, default_value = "")]
        skills: String,
    },
    /// Finds mentors for a field of interest.
    Mentors {
        #[arg(long)]
        field: Option<String>,
        #[arg(long, default_value_t = 3)]
        top_n: i64,
    },
    /// Predicts a placement tier from a student profile.
    Placement(PlacementArgs),
}

#[derive(Args, Debug)]
struct PlacementArgs {
    #[arg(long)]
    field: Option<String>,
    #[arg(long, default_value = "")]
    skills: String,
    #[arg(long)]
    coding: Option<f64>,
    #[arg(long)]
    grades: Option<f64>,
    #[arg(long)]
    major_projects: Option<f64>,
    #[arg(long)]
    mini_projects: Option<f64>,
    #[arg(long)]
    internships: Option<f64>,
    #[arg(long)]
    hackathons: Option<f64>,
    #[arg(long)]
    communication: Option<f64>,
    #[arg(long)]
    certifications: Option<f64>,
    #[arg(long)]
    attendance: Option<f64>,
}

impl PlacementArgs {
    fn metrics(&self) -> [(PlacementMetric, Option<f64>); 9] {
        [
            (PlacementMetric::CodingProfileRating, self.coding),
            (PlacementMetric::Grades, self.grades),
            (PlacementMetric::MajorProjects, self.major_projects),
            (PlacementMetric::MiniProjects, self.mini_projects),
            (PlacementMetric::Internships, self.internships),
            (PlacementMetric::Hackathons, self.hackathons),
            (PlacementMetric::Communication, self.communication),
            (PlacementMetric::Certifications, self.certifications),
            (PlacementMetric::Attendance, self.attendance),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(url) = cli.service_url {
        settings.service_url = url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = HttpAdvisoryClient::new(&settings.service_url)
        .context("failed to configure advisory service client")?;
    tracing::debug!(service_url = %client.base_url(), "advisory client ready");

    match cli.command {
        Command::Health => run_health(&client).await,
        Command::Fields { mentor } => run_fields(&client, mentor).await,
        Command::Skills { field, skills } => run_skills(&client, field, skills).await,
        Command::Mentors { field, top_n } => run_mentors(&client, field, top_n).await,
        Command::Placement(args) => run_placement(&client, args).await,
    }
}

async fn run_health(service: &dyn AdvisoryService) -> Result<()> {
    let health = service
        .check_health()
        .await
        .context("advisory service health check failed")?;
    println!("status: {}", health.status);
    println!("models loaded: {}", health.models_loaded);
    println!("mentor data loaded: {}", health.mentor_data_loaded);
    if !health.is_healthy() {
        bail!("advisory service reports status '{}'", health.status);
    }
    Ok(())
}

async fn run_fields(service: &dyn AdvisoryService, mentor: bool) -> Result<()> {
    let catalog = if mentor {
        service.fetch_mentor_fields().await
    } else {
        service.fetch_general_fields().await
    }
    .context("failed to load fields")?;
    for field in catalog.fields() {
        println!("{field}");
    }
    Ok(())
}

async fn run_skills(
    service: &dyn AdvisoryService,
    field: Option<String>,
    skills: String,
) -> Result<()> {
    let mut controller = SkillGapController::new();
    mount(&mut controller, service, field).await?;
    controller.update_input(|inputs| inputs.skills = skills);
    let field = controller.inputs().field.clone();
    let recommendation = resolve(&mut controller, service).await?;
    print_skill_report(&field, recommendation);
    Ok(())
}

async fn run_mentors(
    service: &dyn AdvisoryService,
    field: Option<String>,
    top_n: i64,
) -> Result<()> {
    let mut controller = MentorMatchController::new();
    mount(&mut controller, service, field).await?;
    controller.update_input(|inputs| inputs.set_top_n(top_n));
    resolve(&mut controller, service).await?;
    if let Some(message) = empty_state(controller.status()) {
        println!("{message}");
    } else if let Some(mentors) = controller.status().result() {
        print_mentors(mentors);
    }
    Ok(())
}

async fn run_placement(service: &dyn AdvisoryService, args: PlacementArgs) -> Result<()> {
    let mut controller = PlacementController::new();
    mount(&mut controller, service, args.field.clone()).await?;
    let mut rejected = Vec::new();
    controller.update_input(|inputs| {
        inputs.skills = args.skills.clone();
        for (metric, value) in args.metrics() {
            if let Some(value) = value {
                if !inputs.set_metric(metric, value) {
                    rejected.push(metric.label());
                }
            }
        }
    });
    if !rejected.is_empty() {
        bail!("not a number: {}", rejected.join(", "));
    }
    let prediction = resolve(&mut controller, service).await?;
    print_placement(prediction);
    Ok(())
}

/// Loads the workflow's catalog and applies an explicit field choice over the default.
async fn mount<W: Workflow>(
    controller: &mut WorkflowController<W>,
    service: &dyn AdvisoryService,
    field: Option<String>,
) -> Result<()> {
    controller.initialize(service).await;
    let load_error = controller.load_error().map(str::to_owned);
    match (field, load_error) {
        (Some(field), load_error) => {
            if let Some(message) = load_error {
                tracing::warn!("{message}; using '{field}' without catalog check");
            } else if !controller.catalog().fields().contains(&field) {
                tracing::warn!("'{field}' is not in the field catalog");
            }
            controller.update_input(|inputs| W::select_field(inputs, &field));
            Ok(())
        }
        (None, Some(message)) => Err(anyhow!(message)),
        (None, None) => Ok(()),
    }
}

async fn resolve<'a, W: Workflow>(
    controller: &'a mut WorkflowController<W>,
    service: &dyn AdvisoryService,
) -> Result<&'a W::Output> {
    if !controller.submit(service).await {
        bail!("no field of interest selected; pass --field");
    }
    match controller.status() {
        WorkflowStatus::Success(output) => Ok(output),
        WorkflowStatus::Failed(message) => Err(anyhow!(message.clone())),
        WorkflowStatus::Idle | WorkflowStatus::Loading => {
            bail!("request did not complete")
        }
    }
}

fn band_tag(band: Option<ScoreBand>) -> String {
    match band {
        Some(band) => format!("[{} {}]", band.label(), band.hex_color()),
        None => format!("[{NEUTRAL_COLOR}]"),
    }
}

fn print_skill_report(field: &str, recommendation: &SkillRecommendation) {
    let report = SkillGapReport::new(recommendation);
    println!(
        "Field match score for {field}: {} {}",
        report.match_label(),
        band_tag(Some(report.match_band()))
    );

    println!("\nSkills you have ({}):", report.skills_have().len());
    match report.have_fallback() {
        Some(message) => println!("  {message}"),
        None => report.skills_have().iter().for_each(|s| println!("  + {s}")),
    }

    println!("\nSkills to learn ({}):", report.skills_to_learn().len());
    match report.learn_fallback() {
        Some(message) => println!("  {message}"),
        None => report.skills_to_learn().iter().for_each(|s| println!("  - {s}")),
    }

    if !report.learning_tips().is_empty() {
        println!("\nLearning tips:");
        report.learning_tips().iter().for_each(|tip| println!("  * {tip}"));
    }
}

fn print_mentors(mentors: &[MentorRecord]) {
    println!("{}", results_heading(mentors.len()));
    for card in mentor_cards(mentors) {
        let record = card.record;
        println!(
            "\n{}. {} ({}) {} {}",
            card.rank,
            record.professor_name,
            record.professor_code,
            card.score_label(),
            band_tag(Some(card.score_band()))
        );
        println!("   Field: {}", record.field_of_expertise);
        println!("   Experience: {}", card.experience_label());
        println!("   Feedback: {}", card.feedback_label());
        println!("   Mentee performance: {}", card.mentee_performance_label());
        println!("   Behavior: {}", card.behavior_label());
        println!("   Contact: {}", record.contact_email);
        if let Ok(link) = card.contact_link() {
            println!("   {link}");
        }
    }
}

fn print_placement(prediction: &PlacementPrediction) {
    let report = PlacementReport::new(prediction);
    println!(
        "Predicted tier: {} {}",
        report.predicted_tier(),
        band_tag(report.tier_band())
    );
    println!("\nConfidence scores:");
    for row in report.confidence_rows() {
        println!("  {:<8} {:>6} {}", row.tier, row.percent, band_tag(Some(row.band)));
    }
    println!("\nImprovement tips:");
    report
        .improvement_tips()
        .iter()
        .for_each(|tip| println!("  * {tip}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_tag_names_band_and_color() {
        assert_eq!(band_tag(Some(ScoreBand::High)), "[high #48bb78]");
        assert_eq!(band_tag(None), "[#718096]");
    }

    #[test]
    fn placement_flags_parse_into_metrics() {
        let cli = Cli::parse_from([
            "advisor",
            "placement",
            "--field",
            "Data Science",
            "--coding",
            "4",
            "--attendance",
            "92.5",
        ]);
        let Command::Placement(args) = cli.command else {
            panic!("expected placement subcommand");
        };
        assert_eq!(args.field.as_deref(), Some("Data Science"));
        let metrics = args.metrics();
        assert_eq!(metrics[0], (PlacementMetric::CodingProfileRating, Some(4.0)));
        assert_eq!(metrics[8], (PlacementMetric::Attendance, Some(92.5)));
        assert!(metrics[1..8].iter().all(|(_, value)| value.is_none()));
    }

    #[test]
    fn mentors_default_to_three() {
        let cli = Cli::parse_from(["advisor", "--service-url", "http://svc:9000", "mentors"]);
        assert_eq!(cli.service_url.as_deref(), Some("http://svc:9000"));
        assert!(matches!(cli.command, Command::Mentors { field: None, top_n: 3 }));
    }
}
